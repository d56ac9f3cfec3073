//! Stall detection.
//!
//! Three causes are checked each step while the rotor is below
//! [`STALL_CHECK_LIMIT_PCT`]:
//! - mechanical: net margin below [`MECHANICAL_STALL_MARGIN_PCT`]
//! - thermal: accumulated stress at or above [`THERMAL_LIMIT_PCT`]
//! - hung start: less than [`HUNG_MIN_PROGRESS_PCT`] of speed gained between
//!   two checkpoints [`HUNG_CHECK_INTERVAL_S`] apart

use crate::result::StallReason;

/// Stall checks apply only below this speed (% synchronous).
pub const STALL_CHECK_LIMIT_PCT: f64 = 90.0;
/// Net margin (% rated torque) below which the rotor is mechanically stalled.
pub const MECHANICAL_STALL_MARGIN_PCT: f64 = -0.5;
/// Thermal stress (% withstand) that ends the start.
pub const THERMAL_LIMIT_PCT: f64 = 100.0;
/// Simulated time between hung-start checkpoints (s).
pub const HUNG_CHECK_INTERVAL_S: f64 = 2.0;
/// Minimum speed gain (percentage points) between checkpoints.
pub const HUNG_MIN_PROGRESS_PCT: f64 = 1.0;

/// Slack for comparing step-aligned times against the checkpoint cadence.
const TIME_EPS: f64 = 1e-9;

/// Hung-start checkpoint: last check time and the speed seen then.
///
/// The checkpoint moves every interval whether or not the check fires. A
/// verdict needs more than one interval of elapsed time, so the checkpoint at
/// exactly one interval only re-arms.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct StallWatchdog {
    pub last_check_time_s: f64,
    pub last_check_speed_pct: f64,
}

impl StallWatchdog {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a checkpoint is due at time `t`.
    pub fn is_due(&self, t: f64) -> bool {
        t - self.last_check_time_s >= HUNG_CHECK_INTERVAL_S - TIME_EPS
    }

    /// Run the hung-start check at time `t`. Returns true if the start is hung.
    pub fn poll(&mut self, t: f64, speed_pct: f64) -> bool {
        if !self.is_due(t) {
            return false;
        }
        let progress = (speed_pct - self.last_check_speed_pct).abs();
        let hung = progress < HUNG_MIN_PROGRESS_PCT && t > HUNG_CHECK_INTERVAL_S + TIME_EPS;
        self.last_check_time_s = t;
        self.last_check_speed_pct = speed_pct;
        hung
    }
}

/// Evaluate all stall causes in priority order: mechanical, thermal, hung.
///
/// The watchdog is polled only when neither of the first two fires.
pub fn detect_stall(
    watchdog: &mut StallWatchdog,
    t: f64,
    speed_pct: f64,
    net_margin_pct: f64,
    thermal_pct: f64,
) -> Option<StallReason> {
    if speed_pct >= STALL_CHECK_LIMIT_PCT {
        return None;
    }
    if net_margin_pct < MECHANICAL_STALL_MARGIN_PCT {
        Some(StallReason::MechanicalStall)
    } else if thermal_pct >= THERMAL_LIMIT_PCT {
        Some(StallReason::ThermalLimit)
    } else if watchdog.poll(t, speed_pct) {
        Some(StallReason::HungStart)
    } else {
        None
    }
}
