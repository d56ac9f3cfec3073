//! Run execution: transient starts, current-limit searches and sweeps.

use std::time::Instant;

use ms_curves::dense_speed_samples;
use ms_sim::sim::{DEFAULT_DT_S, DEFAULT_T_MAX_S};
use ms_sim::{
    CurveFamily, IntegratorType, SimOptions, SimulationResult, StartMode, curve_family, run_start,
};
use ms_solver::{
    BisectionConfig, CurrentRange, MinCurrentResult, SweepPoint, TargetTimeSolution,
    min_starting_current, solve_target_time, sweep_current_limits,
};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::scenario_service::CompiledScenario;

/// Options for running simulations.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub dt_s: f64,
    pub t_max_s: f64,
    pub integrator: IntegratorType,
    /// Keep every N-th step in the result trace.
    pub record_every: Option<usize>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            dt_s: DEFAULT_DT_S,
            t_max_s: DEFAULT_T_MAX_S,
            integrator: IntegratorType::ForwardEuler,
            record_every: None,
        }
    }
}

impl RunOptions {
    pub fn sim_options(&self) -> SimOptions {
        SimOptions {
            dt: self.dt_s,
            t_max: self.t_max_s,
            integrator: self.integrator,
            record_every: self.record_every,
        }
    }
}

/// Minimum starting current with the limit also expressed in amps.
#[derive(Debug, Clone, Copy)]
pub struct MinCurrentReport {
    pub result: MinCurrentResult,
    pub current_a: f64,
}

/// Response from a transient run.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub result: SimulationResult,
    /// Present for soft starts.
    pub min_current: Option<MinCurrentReport>,
    pub wall_time_s: f64,
}

/// Response from the target-time solver.
#[derive(Debug, Clone, Copy)]
pub struct SolveResponse {
    pub target_time_s: f64,
    pub solution: TargetTimeSolution,
    /// Solved limit in amps, when found.
    pub current_a: Option<f64>,
    pub wall_time_s: f64,
}

/// Simulate the scenario's start. Soft starts also get the minimum
/// starting current search.
pub fn run_scenario(compiled: &CompiledScenario, options: &RunOptions) -> AppResult<RunResponse> {
    let started = Instant::now();
    let result = run_start(
        &compiled.table,
        &compiled.motor,
        &compiled.mode,
        &options.sim_options(),
    )?;
    let min_current = match compiled.mode {
        StartMode::SoftStart(_) => Some(min_current(compiled)?),
        StartMode::DirectOnLine => None,
    };
    let wall_time_s = started.elapsed().as_secs_f64();

    info!(
        name = %compiled.name,
        status = %result.status_label(),
        thermal_pct = result.thermal.percent_of_withstand,
        wall_time_s,
        "start simulated"
    );
    Ok(RunResponse {
        result,
        min_current,
        wall_time_s,
    })
}

/// Lowest safe constant current limit for the scenario's curves.
pub fn min_current(compiled: &CompiledScenario) -> AppResult<MinCurrentReport> {
    let result = min_starting_current(&compiled.table, &CurrentRange::default())?;
    let current_a = compiled.motor.pct_to_amps(result.current_limit_pct);
    info!(
        status = ?result.status,
        current_limit_pct = result.current_limit_pct,
        critical_speed_pct = result.critical_speed_pct,
        "minimum starting current"
    );
    Ok(MinCurrentReport { result, current_a })
}

/// Solve for the constant current limit meeting a start time.
///
/// `target_override` wins over the scenario's `target_start_time_s`.
pub fn solve_target(
    compiled: &CompiledScenario,
    target_override: Option<f64>,
    options: &RunOptions,
) -> AppResult<SolveResponse> {
    let target_time_s = target_override
        .or(compiled.target_start_time_s)
        .ok_or_else(|| AppError::InvalidInput("no target start time given".to_string()))?;

    let started = Instant::now();
    let solution = solve_target_time(
        &compiled.table,
        &compiled.motor,
        target_time_s,
        &BisectionConfig::default(),
        &options.sim_options(),
    )?;
    let current_a = solution
        .is_found()
        .then(|| compiled.motor.pct_to_amps(solution.current_limit_pct()));

    Ok(SolveResponse {
        target_time_s,
        solution,
        current_a,
        wall_time_s: started.elapsed().as_secs_f64(),
    })
}

/// Constant-limit starts across `range`.
pub fn sweep(
    compiled: &CompiledScenario,
    range: &CurrentRange,
    options: &RunOptions,
) -> AppResult<Vec<SweepPoint>> {
    let started = Instant::now();
    let points = sweep_current_limits(
        &compiled.table,
        &compiled.motor,
        range,
        &options.sim_options(),
    )?;
    info!(
        levels = points.len(),
        running = points.iter().filter(|p| p.is_running()).count(),
        wall_time_s = started.elapsed().as_secs_f64(),
        "current limit sweep finished"
    );
    Ok(points)
}

/// Dense curve family for plotting.
///
/// A soft start with a ramp is simulated first so the current limit can be
/// mapped onto speed up to the recorded ramp-end speed.
pub fn dense_curve_family(
    compiled: &CompiledScenario,
    options: &RunOptions,
) -> AppResult<CurveFamily> {
    let ramp_end_speed_pct = match compiled.mode.soft_start() {
        Some(profile) if profile.has_ramp() => {
            run_start(
                &compiled.table,
                &compiled.motor,
                &compiled.mode,
                &options.sim_options(),
            )?
            .ramp_end_speed_pct
        }
        _ => None,
    };
    Ok(curve_family(
        &compiled.table,
        &compiled.mode,
        ramp_end_speed_pct,
        &dense_speed_samples(),
    )?)
}
