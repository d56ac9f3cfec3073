//! Start time and thermal stress across a range of constant current limits.

use ms_curves::SpeedCurveTable;
use ms_sim::{MotorParameters, SimOptions, SoftStartProfile, StallReason, StartMode, run_start};
use rayon::prelude::*;
use tracing::debug;

use crate::error::SolverResult;
use crate::range::CurrentRange;

/// Summary of one constant-limit start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepPoint {
    pub current_limit_pct: f64,
    /// Start time, `None` if the start failed.
    pub start_time_s: Option<f64>,
    pub stall_reason: Option<StallReason>,
    pub thermal_pct: f64,
    pub min_margin_pct: f64,
}

impl SweepPoint {
    pub fn is_running(&self) -> bool {
        self.start_time_s.is_some()
    }
}

/// Run one start per level of `range`, in parallel.
///
/// Runs share nothing but the read-only inputs. Points come back in
/// ascending current-limit order.
pub fn sweep_current_limits(
    table: &SpeedCurveTable,
    motor: &MotorParameters,
    range: &CurrentRange,
    opts: &SimOptions,
) -> SolverResult<Vec<SweepPoint>> {
    range.validate()?;
    let levels: Vec<u32> = range.levels().collect();
    debug!(levels = levels.len(), "current limit sweep");

    levels
        .par_iter()
        .map(|&level| -> SolverResult<SweepPoint> {
            let limit = f64::from(level);
            let mode = StartMode::SoftStart(SoftStartProfile::constant(limit)?);
            let result = run_start(table, motor, &mode, opts)?;
            Ok(SweepPoint {
                current_limit_pct: limit,
                start_time_s: result.start_time_s(),
                stall_reason: result.stall().map(|s| s.reason),
                thermal_pct: result.thermal.percent_of_withstand,
                min_margin_pct: result.min_margin.margin_pct,
            })
        })
        .collect()
}
