//! Error types for curve lookup and torque evaluation.

use thiserror::Error;

/// Errors raised while reading speed-indexed curve data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Breakpoints not strictly increasing, a length mismatch, or a
    /// missing/non-finite table value. Fatal to the run that hit it.
    #[error("Malformed curve: {what} (index={index})")]
    MalformedCurve { what: &'static str, index: usize },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Unknown preset: {name}")]
    UnknownPreset { name: String },
}

pub type CurveResult<T> = Result<T, CurveError>;
