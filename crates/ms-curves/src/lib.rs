//! ms-curves: speed-indexed motor and load characteristics.
//!
//! Provides:
//! - the standard speed breakpoint grid and dense sampling helpers
//! - piecewise-linear interpolation with flat extrapolation
//! - `SpeedCurveTable` holding full-voltage motor torque/current and load torque
//! - the current-limited torque model used by soft starters
//! - built-in motor and load presets
//!
//! Everything here is a pure function of its inputs.
//!
//! # Example
//!
//! ```
//! use ms_curves::{LoadPreset, MotorPreset, SpeedCurveTable, current_limited};
//!
//! let table = SpeedCurveTable::from_presets(MotorPreset::Oem, LoadPreset::Oem);
//! let point = table.sample(0.0).unwrap();
//! let op = current_limited(&point, 295.0).unwrap();
//! assert!((op.torque_pct - 20.0).abs() < 1e-9);
//! ```

pub mod breakpoints;
pub mod common;
pub mod error;
pub mod interp;
pub mod presets;
pub mod table;
pub mod torque;

// Re-exports
pub use breakpoints::{GRID_LEN, SPEED_BREAKPOINTS, dense_speed_samples, speed_samples};
pub use error::{CurveError, CurveResult};
pub use interp::interpolate;
pub use presets::{LoadPreset, MotorPreset};
pub use table::{CurvePoint, SpeedCurveTable};
pub use torque::{OperatingPoint, current_limited, voltage_ratio};
