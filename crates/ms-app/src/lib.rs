//! Application service layer for the motor starting simulator.
//!
//! Centralizes what the CLI needs: scenario loading and compilation,
//! transient runs, current-limit searches, sweeps and CSV export.

pub mod error;
pub mod export;
pub mod run_service;
pub mod scenario_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use export::{family_csv, sweep_csv, trace_csv};
pub use run_service::{
    MinCurrentReport, RunOptions, RunResponse, SolveResponse, dense_curve_family, min_current,
    run_scenario, solve_target, sweep,
};
pub use scenario_service::{
    CompiledScenario, ScenarioSummary, compile_scenario, load_compiled, load_scenario,
    save_scenario, summarize, template_yaml, validate_scenario,
};
