//! Starting transient runner.

use ms_curves::SpeedCurveTable;
use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::integrator::{ForwardEuler, Integrator, RK4};
use crate::model::TransientModel;
use crate::motor::MotorParameters;
use crate::result::{SimulationResult, StallReason, StartOutcome, TracePoint};
use crate::start_mode::StartMode;
use crate::starter::{Evaluation, StartModel};
use crate::state::SimulationState;
use crate::thermal::ThermalStress;

/// Fixed integration step (s).
pub const DEFAULT_DT_S: f64 = 0.01;
/// Simulated-time ceiling (s); reaching it is reported as a timeout.
pub const DEFAULT_T_MAX_S: f64 = 60.0;
/// Speed (% synchronous) at which the start counts as complete. The band from
/// here to 99 % is not integrated, so entering it ends the run.
pub const RUNNING_BAND_PCT: f64 = 98.5;

const TIME_EPS: f64 = 1e-9;

/// Integrator selection for simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegratorType {
    /// Forward Euler (1st-order, the reference method at 10 ms steps).
    #[default]
    ForwardEuler,
    /// 4th-order Runge-Kutta (4 rhs calls per step).
    RK4,
}

/// Options for starting runs.
#[derive(Clone, Debug, PartialEq)]
pub struct SimOptions {
    /// Fixed time step (seconds)
    pub dt: f64,
    /// Time ceiling (seconds)
    pub t_max: f64,
    /// Integrator type (default: ForwardEuler)
    pub integrator: IntegratorType,
    /// Record every N-th step into the result trace (None: no trace)
    pub record_every: Option<usize>,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT_S,
            t_max: DEFAULT_T_MAX_S,
            integrator: IntegratorType::default(),
            record_every: None,
        }
    }
}

impl SimOptions {
    pub fn validate(&self) -> SimResult<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidArg {
                what: "dt must be positive",
            });
        }
        if !self.t_max.is_finite() || self.t_max < self.dt {
            return Err(SimError::InvalidArg {
                what: "t_max must be at least one step",
            });
        }
        if self.record_every == Some(0) {
            return Err(SimError::InvalidArg {
                what: "record_every must be positive",
            });
        }
        Ok(())
    }

    /// Step ceiling: 6000 with the defaults.
    pub fn max_steps(&self) -> usize {
        (self.t_max / self.dt).round() as usize
    }
}

/// Simulate the start from standstill until running speed, a stall, or the
/// time ceiling.
///
/// Each step looks up the curves at the current speed, applies the starter,
/// tracks the minimum net margin, runs stall detection, and only then
/// integrates speed and thermal stress. A stalled step is not integrated.
///
/// # Errors
/// Fails on invalid options or parameters, and with
/// [`SimError::Curve`] when the table is malformed. Stalls and timeouts are
/// returned as [`StartOutcome::Stalled`].
pub fn run_start(
    table: &SpeedCurveTable,
    motor: &MotorParameters,
    mode: &StartMode,
    opts: &SimOptions,
) -> SimResult<SimulationResult> {
    opts.validate()?;
    motor.validate()?;
    table.validate()?;
    let mode = mode.normalized()?;
    let model = StartModel::new(table, motor, mode)?;

    let rated_torque_nm = motor.rated_torque_nm();
    let ramp_s = mode
        .soft_start()
        .filter(|p| p.has_ramp())
        .map(|p| p.ramp_duration_s);
    let max_steps = opts.max_steps();

    debug!(
        mode = mode.label(),
        synchronous_rpm = motor.synchronous_speed_rpm(),
        rated_torque_nm,
        max_steps,
        "starting transient run"
    );

    let mut state = SimulationState::new(model.initial_state());
    let mut trace = Vec::new();
    let mut step = 0usize;

    loop {
        state.time_s = step as f64 * opts.dt;
        if step >= max_steps {
            state.latch(StallReason::TimedOut);
            break;
        }

        let eval = model.evaluate(state.time_s, state.speed_pct)?;

        if let Some(ramp_s) = ramp_s
            && state.ramp_end_speed_pct.is_none()
            && state.time_s >= ramp_s - TIME_EPS
        {
            state.ramp_end_speed_pct = Some(state.speed_pct);
        }

        state.track_margin(eval.net_margin_pct);

        if let Some(every) = opts.record_every
            && step % every == 0
        {
            trace.push(trace_point(&state, &eval));
        }

        if state.check_stall(eval.net_margin_pct) {
            break;
        }

        state.x = match opts.integrator {
            IntegratorType::ForwardEuler => ForwardEuler.step(&model, state.time_s, &state.x, opts.dt)?,
            IntegratorType::RK4 => RK4.step(&model, state.time_s, &state.x, opts.dt)?,
        };
        state.speed_pct = model.rotor().speed_pct(state.x.omega_rad_s);
        state.thermal_pct = model.thermal().percent_of_withstand(state.x.stress_a2s);
        step += 1;

        if state.speed_pct >= RUNNING_BAND_PCT {
            state.time_s = step as f64 * opts.dt;
            break;
        }
    }

    if opts.record_every.is_some()
        && trace.last().map(|p| p.time_s) != Some(state.time_s)
    {
        let eval = model.evaluate(state.time_s, state.speed_pct)?;
        trace.push(trace_point(&state, &eval));
    }

    let outcome = match state.stall {
        Some(record) => {
            debug!(
                reason = %record.reason,
                speed_pct = record.speed_pct,
                time_s = record.time_s,
                "start failed"
            );
            StartOutcome::Stalled(record)
        }
        None => StartOutcome::Running,
    };

    debug!(
        elapsed_s = state.time_s,
        final_speed_pct = state.speed_pct,
        thermal_pct = state.thermal_pct,
        steps = step,
        "transient run finished"
    );

    Ok(SimulationResult {
        outcome,
        elapsed_s: state.time_s,
        final_speed_pct: state.speed_pct,
        thermal: ThermalStress {
            ampere_squared_seconds: state.x.stress_a2s,
            percent_of_withstand: state.thermal_pct,
        },
        min_margin: state.min_margin(rated_torque_nm),
        synchronous_speed_rpm: motor.synchronous_speed_rpm(),
        rated_torque_nm,
        ramp_end_speed_pct: state.ramp_end_speed_pct,
        steps: step,
        trace,
    })
}

fn trace_point(state: &SimulationState, eval: &Evaluation) -> TracePoint {
    TracePoint {
        time_s: state.time_s,
        speed_pct: state.speed_pct,
        motor_torque_pct: eval.drive.torque_pct,
        load_torque_pct: eval.point.load_torque_pct,
        current_pct: eval.drive.current_pct,
        thermal_pct: state.thermal_pct,
    }
}
