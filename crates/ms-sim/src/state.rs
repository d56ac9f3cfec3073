//! Mutable state owned by a single run.

use crate::result::{MarginRecord, StallReason, StallRecord};
use crate::starter::StartState;
use crate::watchdog::{StallWatchdog, detect_stall};

/// Net margin is only tracked below this speed (% synchronous).
pub const MARGIN_TRACK_LIMIT_PCT: f64 = 95.0;

#[derive(Clone, Debug)]
pub(crate) struct SimulationState {
    pub time_s: f64,
    pub speed_pct: f64,
    pub x: StartState,
    pub thermal_pct: f64,
    pub min_margin_pct: f64,
    pub min_margin_speed_pct: f64,
    pub watchdog: StallWatchdog,
    pub ramp_end_speed_pct: Option<f64>,
    pub stall: Option<StallRecord>,
}

impl SimulationState {
    pub fn new(x: StartState) -> Self {
        Self {
            time_s: 0.0,
            speed_pct: 0.0,
            x,
            thermal_pct: 0.0,
            min_margin_pct: f64::INFINITY,
            min_margin_speed_pct: 0.0,
            watchdog: StallWatchdog::new(),
            ramp_end_speed_pct: None,
            stall: None,
        }
    }

    pub fn track_margin(&mut self, net_margin_pct: f64) {
        if self.speed_pct < MARGIN_TRACK_LIMIT_PCT && net_margin_pct < self.min_margin_pct {
            self.min_margin_pct = net_margin_pct;
            self.min_margin_speed_pct = self.speed_pct;
        }
    }

    /// Latch a stall if any cause fires. Returns true once stalled.
    pub fn check_stall(&mut self, net_margin_pct: f64) -> bool {
        if self.stall.is_some() {
            return true;
        }
        if let Some(reason) = detect_stall(
            &mut self.watchdog,
            self.time_s,
            self.speed_pct,
            net_margin_pct,
            self.thermal_pct,
        ) {
            self.latch(reason);
        }
        self.stall.is_some()
    }

    pub fn latch(&mut self, reason: StallReason) {
        self.stall.get_or_insert(StallRecord {
            reason,
            speed_pct: self.speed_pct,
            time_s: self.time_s,
        });
    }

    pub fn min_margin(&self, rated_torque_nm: f64) -> MarginRecord {
        MarginRecord {
            margin_pct: self.min_margin_pct,
            speed_pct: self.min_margin_speed_pct,
            rated_torque_nm,
        }
    }
}
