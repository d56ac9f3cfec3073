//! Immutable outcome of one starting transient.

use std::fmt;

use crate::thermal::ThermalStress;

/// Why a start failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StallReason {
    /// Net accelerating torque went negative.
    MechanicalStall,
    /// I²t reached the locked-rotor withstand rating.
    ThermalLimit,
    /// Speed stopped advancing between watchdog checkpoints.
    HungStart,
    /// Running speed not reached within the time ceiling.
    TimedOut,
}

impl StallReason {
    pub fn label(self) -> &'static str {
        match self {
            StallReason::MechanicalStall => "Mechanical Stall",
            StallReason::ThermalLimit => "Thermal Limit",
            StallReason::HungStart => "Hung Start",
            StallReason::TimedOut => "Timed Out",
        }
    }
}

impl fmt::Display for StallReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where and when a start failed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StallRecord {
    pub reason: StallReason,
    /// Rotor speed at the stall (% synchronous)
    pub speed_pct: f64,
    /// Elapsed time at the stall (s)
    pub time_s: f64,
}

/// Terminal state of the integrator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StartOutcome {
    /// Motor reached running speed.
    Running,
    /// Start failed; timeouts are reported here too.
    Stalled(StallRecord),
}

/// Lowest net torque margin seen below the tracking limit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarginRecord {
    /// Net margin (% rated torque)
    pub margin_pct: f64,
    /// Speed where the minimum occurred (% synchronous)
    pub speed_pct: f64,
    /// Rated torque (N·m) used to express the margin absolutely
    pub rated_torque_nm: f64,
}

impl MarginRecord {
    pub fn margin_nm(&self) -> f64 {
        self.margin_pct * self.rated_torque_nm / 100.0
    }

    pub fn slip(&self) -> f64 {
        1.0 - self.speed_pct / 100.0
    }
}

/// One decimated sample of the run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TracePoint {
    pub time_s: f64,
    pub speed_pct: f64,
    pub motor_torque_pct: f64,
    pub load_torque_pct: f64,
    pub current_pct: f64,
    pub thermal_pct: f64,
}

/// Snapshot produced when a run terminates.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResult {
    pub outcome: StartOutcome,
    /// Simulated time at termination (s)
    pub elapsed_s: f64,
    /// Rotor speed at termination (% synchronous)
    pub final_speed_pct: f64,
    pub thermal: ThermalStress,
    pub min_margin: MarginRecord,
    pub synchronous_speed_rpm: f64,
    pub rated_torque_nm: f64,
    /// Speed when the soft-start ramp completed, if it completed during the run
    pub ramp_end_speed_pct: Option<f64>,
    /// Integration steps taken
    pub steps: usize,
    /// Decimated samples, empty unless requested
    pub trace: Vec<TracePoint>,
}

impl SimulationResult {
    pub fn is_running(&self) -> bool {
        matches!(self.outcome, StartOutcome::Running)
    }

    pub fn is_stalled(&self) -> bool {
        !self.is_running()
    }

    pub fn stall(&self) -> Option<&StallRecord> {
        match &self.outcome {
            StartOutcome::Running => None,
            StartOutcome::Stalled(record) => Some(record),
        }
    }

    /// Start time in seconds, only for successful starts.
    pub fn start_time_s(&self) -> Option<f64> {
        self.is_running().then_some(self.elapsed_s)
    }

    pub fn final_slip(&self) -> f64 {
        1.0 - self.final_speed_pct / 100.0
    }

    /// Short status such as `12.34s` or `STALL (Hung Start)`.
    pub fn status_label(&self) -> String {
        match &self.outcome {
            StartOutcome::Running => format!("{:.2}s", self.elapsed_s),
            StartOutcome::Stalled(record) => format!("STALL ({})", record.reason),
        }
    }
}
