//! Service-layer runs over the bundled scenarios.

use std::path::PathBuf;

use ms_app::{
    AppError, RunOptions, dense_curve_family, family_csv, load_compiled, run_scenario,
    solve_target, sweep, sweep_csv, trace_csv,
};
use ms_solver::{CurrentRange, MinCurrentStatus};

fn scenario_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    path.push("scenarios");
    path.push(name);
    path
}

#[test]
fn direct_on_line_scenario_runs() {
    let compiled = load_compiled(&scenario_path("oem_direct_on_line.yaml")).unwrap();
    let response = run_scenario(&compiled, &RunOptions::default()).unwrap();

    assert!(response.result.is_running());
    assert!(response.min_current.is_none());
    assert!(response.result.trace.is_empty());
    assert!(matches!(
        trace_csv(&response.result),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn soft_start_scenario_reports_min_current() {
    let compiled = load_compiled(&scenario_path("oem_soft_start_ramp.yaml")).unwrap();
    let options = RunOptions {
        record_every: Some(50),
        ..RunOptions::default()
    };
    let response = run_scenario(&compiled, &options).unwrap();

    assert!(response.result.is_running());
    assert!(response.result.ramp_end_speed_pct.is_some());

    let min = response.min_current.unwrap();
    assert_eq!(min.result.status, MinCurrentStatus::Found);
    assert_eq!(min.result.current_limit_pct, 286.0);
    // 286 % of 190 A
    assert!((min.current_a - 543.4).abs() < 1e-9);

    let csv = trace_csv(&response.result).unwrap();
    assert!(csv.starts_with("time_s,speed_pct"));
    assert_eq!(csv.lines().count(), response.result.trace.len() + 1);
}

#[test]
fn solve_uses_scenario_target() {
    let compiled = load_compiled(&scenario_path("oem_direct_on_line.yaml")).unwrap();
    let response = solve_target(&compiled, None, &RunOptions::default()).unwrap();

    assert_eq!(response.target_time_s, 15.0);
    assert!(response.solution.is_found());
    let achieved = response.solution.achieved_time_s().unwrap();
    assert!(achieved <= 15.0);
    let amps = response.current_a.unwrap();
    assert!((amps - response.solution.current_limit_pct() * 1.9).abs() < 1e-9);
}

#[test]
fn solve_without_target_is_invalid_input() {
    let compiled = load_compiled(&scenario_path("conveyor_custom_tables.yaml")).unwrap();
    assert!(compiled.target_start_time_s.is_none());
    let err = solve_target(&compiled, None, &RunOptions::default()).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let response = solve_target(&compiled, Some(30.0), &RunOptions::default()).unwrap();
    assert_eq!(response.target_time_s, 30.0);
}

#[test]
fn sweep_over_scenario() {
    let compiled = load_compiled(&scenario_path("oem_direct_on_line.yaml")).unwrap();
    let range = CurrentRange::new(300, 500, 100).unwrap();
    let points = sweep(&compiled, &range, &RunOptions::default()).unwrap();
    assert_eq!(points.len(), 3);
    let csv = sweep_csv(&points);
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn dense_family_for_ramped_soft_start() {
    let compiled = load_compiled(&scenario_path("oem_soft_start_ramp.yaml")).unwrap();
    let family = dense_curve_family(&compiled, &RunOptions::default()).unwrap();

    assert_eq!(family.len(), 1001);
    let limited = family.limited.as_ref().unwrap();
    assert_eq!(limited.current_limit_pct[0], 250.0);
    assert_eq!(limited.current_limit_pct[1000], 400.0);

    let csv = family_csv(&family);
    assert_eq!(csv.lines().count(), 1002);
}
