//! CSV rendering of traces, curve families and sweeps.

use ms_sim::{CurveFamily, SimulationResult};
use ms_solver::SweepPoint;

use crate::error::{AppError, AppResult};

/// Time trace of a run recorded with `record_every`.
pub fn trace_csv(result: &SimulationResult) -> AppResult<String> {
    if result.trace.is_empty() {
        return Err(AppError::InvalidInput(
            "run has no trace; enable recording first".to_string(),
        ));
    }
    let mut csv = String::from(
        "time_s,speed_pct,motor_torque_pct,load_torque_pct,current_pct,thermal_pct\n",
    );
    for p in &result.trace {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            p.time_s, p.speed_pct, p.motor_torque_pct, p.load_torque_pct, p.current_pct, p.thermal_pct
        ));
    }
    Ok(csv)
}

/// One row per speed sample; soft starts add the limited columns.
pub fn family_csv(family: &CurveFamily) -> String {
    let mut csv = String::from("speed_pct,motor_torque_pct,motor_current_pct,load_torque_pct");
    if family.limited.is_some() {
        csv.push_str(",current_limit_pct,limited_torque_pct,limited_current_pct");
    }
    csv.push('\n');

    for i in 0..family.len() {
        csv.push_str(&format!(
            "{},{},{},{}",
            family.speed_pct[i],
            family.motor_torque_pct[i],
            family.motor_current_pct[i],
            family.load_torque_pct[i]
        ));
        if let Some(limited) = &family.limited {
            csv.push_str(&format!(
                ",{},{},{}",
                limited.current_limit_pct[i], limited.torque_pct[i], limited.current_pct[i]
            ));
        }
        csv.push('\n');
    }
    csv
}

/// One row per current limit; failed starts leave the time empty.
pub fn sweep_csv(points: &[SweepPoint]) -> String {
    let mut csv = String::from("current_limit_pct,start_time_s,status,thermal_pct,min_margin_pct\n");
    for p in points {
        let time = p.start_time_s.map(|t| t.to_string()).unwrap_or_default();
        let status = p.stall_reason.map_or("Running", |r| r.label());
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            p.current_limit_pct, time, status, p.thermal_pct, p.min_margin_pct
        ));
    }
    csv
}
