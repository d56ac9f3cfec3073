//! Starting transient simulation for induction motors.
//!
//! Provides:
//! - motor nameplate data and derived ratings
//! - direct-on-line and current-limited soft-start modes
//! - fixed-step integrators (Forward Euler, RK4) over a pluggable model
//! - rotor dynamics, I²t thermal accounting and stall detection
//! - the starting transient runner and its immutable result
//! - curve-family evaluation for plotting
//!
//! Every run owns its state and is a deterministic function of its inputs,
//! so independent runs can execute in parallel.

pub mod error;
pub mod family;
pub mod integrator;
pub mod model;
pub mod motor;
pub mod result;
pub mod rotor;
pub mod sim;
pub mod start_mode;
pub mod starter;
pub mod thermal;
pub mod watchdog;

// Internal modules
mod state;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use family::{CurveFamily, LimitedCurves, curve_family};
pub use integrator::{ForwardEuler, Integrator, RK4};
pub use model::TransientModel;
pub use motor::MotorParameters;
pub use result::{
    MarginRecord, SimulationResult, StallReason, StallRecord, StartOutcome, TracePoint,
};
pub use rotor::Rotor;
pub use sim::{IntegratorType, RUNNING_BAND_PCT, SimOptions, run_start};
pub use start_mode::{SoftStartProfile, StartMode};
pub use starter::{Evaluation, StartModel, StartState};
pub use state::MARGIN_TRACK_LIMIT_PCT;
pub use thermal::{ThermalBasis, ThermalStress};
pub use watchdog::StallWatchdog;
