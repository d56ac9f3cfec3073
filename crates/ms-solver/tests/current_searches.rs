//! Searches over the OEM presets with a 110 kW, 4-pole motor.

use ms_core::units::{amps, hz, kg_m2, kw, rpm, s};
use ms_curves::{LoadPreset, MotorPreset, SpeedCurveTable};
use ms_sim::{MotorParameters, SimOptions, SoftStartProfile, StartMode, run_start};
use ms_solver::{
    BisectionConfig, CurrentRange, MinCurrentStatus, TargetTimeSolution, min_starting_current,
    solve_target_time, static_margin, sweep_current_limits,
};

fn motor(withstand_s: f64) -> MotorParameters {
    MotorParameters::new(
        kw(110.0),
        rpm(1480.0),
        4,
        hz(50.0),
        amps(190.0),
        s(withstand_s),
        kg_m2(20.0),
    )
    .unwrap()
}

fn oem_table() -> SpeedCurveTable {
    SpeedCurveTable::from_presets(MotorPreset::Oem, LoadPreset::Oem)
}

fn start_time(table: &SpeedCurveTable, m: &MotorParameters, limit: f64) -> Option<f64> {
    let mode = StartMode::SoftStart(SoftStartProfile::constant(limit).unwrap());
    run_start(table, m, &mode, &SimOptions::default())
        .unwrap()
        .start_time_s()
}

#[test]
fn bisection_hits_target_with_tight_bound() {
    let table = oem_table();
    let m = motor(15.0);
    let target = 15.0;

    let solution = solve_target_time(
        &table,
        &m,
        target,
        &BisectionConfig::default(),
        &SimOptions::default(),
    )
    .unwrap();

    let TargetTimeSolution::Found {
        current_limit_pct,
        achieved_time_s,
        iterations,
    } = solution
    else {
        panic!("expected a solution, got {solution:?}");
    };
    assert!(achieved_time_s <= target);
    assert!(iterations <= 20);
    assert!((370.0..=410.0).contains(&current_limit_pct), "{current_limit_pct}");
    assert_eq!(start_time(&table, &m, current_limit_pct), Some(achieved_time_s));

    let lower = start_time(&table, &m, current_limit_pct - 2.0);
    assert!(lower.is_none_or(|t| t > target), "{lower:?}");
}

#[test]
fn target_faster_than_direct_on_line_has_no_solution() {
    let solution = solve_target_time(
        &oem_table(),
        &motor(15.0),
        3.0,
        &BisectionConfig::default(),
        &SimOptions::default(),
    )
    .unwrap();

    let TargetTimeSolution::NoSolution { fastest_time_s } = solution else {
        panic!("expected no solution, got {solution:?}");
    };
    let fastest = fastest_time_s.unwrap();
    assert!(fastest > 3.0 && fastest < 8.0);
    assert_eq!(solution.current_limit_pct(), 0.0);
}

#[test]
fn thermal_trip_at_full_current_has_no_solution() {
    let solution = solve_target_time(
        &oem_table(),
        &motor(1.0),
        30.0,
        &BisectionConfig::default(),
        &SimOptions::default(),
    )
    .unwrap();
    assert_eq!(
        solution,
        TargetTimeSolution::NoSolution {
            fastest_time_s: None
        }
    );
}

#[test]
fn min_current_for_constant_load_is_set_at_standstill() {
    let table = SpeedCurveTable::from_presets(MotorPreset::Oem, LoadPreset::Constant);
    let result = min_starting_current(&table, &CurrentRange::default()).unwrap();
    assert_eq!(result.status, MinCurrentStatus::Found);
    assert_eq!(result.current_limit_pct, 428.0);
    assert_eq!(result.critical_speed_pct, 0.0);
}

#[test]
fn level_below_minimum_current_is_unsafe() {
    let table = oem_table();
    let result = min_starting_current(&table, &CurrentRange::default()).unwrap();
    assert!(result.is_found());

    let below = static_margin(&table, result.current_limit_pct - 2.0).unwrap();
    assert!(!below.is_safe());
    assert!(below.min_margin_pct > 0.0);
}

#[test]
fn sweep_is_ordered_and_monotonic() {
    let table = oem_table();
    let range = CurrentRange::new(300, 700, 50).unwrap();
    let points = sweep_current_limits(&table, &motor(15.0), &range, &SimOptions::default()).unwrap();

    assert_eq!(points.len(), range.level_count());
    let limits: Vec<f64> = points.iter().map(|p| p.current_limit_pct).collect();
    assert_eq!(limits, vec![300.0, 350.0, 400.0, 450.0, 500.0, 550.0, 600.0, 650.0, 700.0]);
    assert!(points.iter().all(|p| p.is_running()));

    for pair in points.windows(2) {
        assert!(pair[1].start_time_s <= pair[0].start_time_s);
    }
}

#[test]
fn sweep_reports_stalls() {
    let range = CurrentRange::new(200, 220, 10).unwrap();
    let points =
        sweep_current_limits(&oem_table(), &motor(15.0), &range, &SimOptions::default()).unwrap();
    assert!(points.iter().all(|p| !p.is_running()));
    assert!(points.iter().all(|p| p.stall_reason.is_some()));
}
