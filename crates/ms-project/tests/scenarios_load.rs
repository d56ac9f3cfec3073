use std::path::PathBuf;

#[test]
fn bundled_scenarios_load() {
    let crate_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let root = crate_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root");

    let scenarios = [
        "scenarios/oem_direct_on_line.yaml",
        "scenarios/oem_soft_start_ramp.yaml",
        "scenarios/conveyor_custom_tables.yaml",
    ];

    for rel in scenarios {
        let path = root.join(rel);
        let result = ms_project::load_scenario(&path);
        assert!(
            result.is_ok(),
            "scenario failed validation: {} => {:?}",
            path.display(),
            result.err()
        );
    }
}
