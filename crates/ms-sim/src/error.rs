//! Error types for simulation operations.

use ms_curves::CurveError;
use thiserror::Error;

/// Errors encountered during a starting transient.
///
/// A stall or timeout is a normal outcome, not an error; see
/// [`crate::StartOutcome`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },

    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),
}

pub type SimResult<T> = Result<T, SimError>;

impl SimError {
    /// True when the failure comes from malformed curve data.
    pub fn is_malformed_curve(&self) -> bool {
        matches!(self, SimError::Curve(CurveError::MalformedCurve { .. }))
    }
}
