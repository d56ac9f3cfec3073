//! Error types for the ms-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives the CLI a single error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write scenario file: {path}")]
    ScenarioFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Scenario compilation failed: {0}")]
    Compile(String),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ms-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<ms_project::ProjectError> for AppError {
    fn from(err: ms_project::ProjectError) -> Self {
        match err {
            ms_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Scenario(other.to_string()),
        }
    }
}

impl From<ms_solver::SolverError> for AppError {
    fn from(err: ms_solver::SolverError) -> Self {
        AppError::Solver(err.to_string())
    }
}

impl From<ms_sim::SimError> for AppError {
    fn from(err: ms_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<ms_curves::CurveError> for AppError {
    fn from(err: ms_curves::CurveError) -> Self {
        AppError::Compile(err.to_string())
    }
}
