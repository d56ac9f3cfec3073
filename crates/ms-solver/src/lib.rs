//! Current-limit searches built on the starting simulator.
//!
//! - the static minimum starting current search
//! - target start time bisection over constant soft-start limits
//! - a parallel sweep of start time against current limit
//!
//! "No feasible level" is a normal result of every search, never an error.

pub mod bisection;
pub mod error;
pub mod min_current;
pub mod range;
pub mod sweep;

pub use bisection::{BisectionConfig, TargetTimeSolution, bisect_current_limit, solve_target_time};
pub use error::{SolverError, SolverResult};
pub use min_current::{
    MinCurrentResult, MinCurrentStatus, SAFETY_MARGIN_PCT, SEARCH_SPEED_LIMIT_PCT, StaticMargin,
    min_starting_current, static_margin,
};
pub use range::{
    CURRENT_LIMIT_MAX_PCT, CURRENT_LIMIT_MIN_PCT, CURRENT_LIMIT_STEP_PCT, CurrentRange,
};
pub use sweep::{SweepPoint, sweep_current_limits};
