//! Error types for solver operations.

use ms_curves::CurveError;
use ms_sim::SimError;
use thiserror::Error;

/// Errors that can occur while searching for a current limit.
///
/// Failing to find a feasible level is not an error; it is reported through
/// the result types of each search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Simulation error: {0}")]
    Sim(#[from] SimError),

    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),
}

impl SolverError {
    pub fn is_malformed_curve(&self) -> bool {
        match self {
            SolverError::Curve(e) => matches!(e, CurveError::MalformedCurve { .. }),
            SolverError::Sim(e) => e.is_malformed_curve(),
            SolverError::InvalidArg { .. } => false,
        }
    }
}

pub type SolverResult<T> = Result<T, SolverError>;
