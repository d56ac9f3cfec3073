//! Target start time bisection over constant soft-start current limits.
//!
//! Relies on start time being non-increasing as the current limit rises:
//! a level that stalls or is too slow moves the lower bound up, a level that
//! meets the target moves the upper bound down and becomes the best answer.

use ms_curves::SpeedCurveTable;
use ms_sim::{MotorParameters, SimOptions, SoftStartProfile, StartMode, run_start};
use tracing::{debug, info};

use crate::error::{SolverError, SolverResult};
use crate::range::{CURRENT_LIMIT_STEP_PCT, CurrentRange};

/// Bisection configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BisectionConfig {
    /// Search bracket (the step is ignored)
    pub range: CurrentRange,
    /// Stop once the bracket is this narrow (% rated current)
    pub resolution_pct: u32,
    /// Maximum number of midpoint probes
    pub max_iterations: usize,
}

impl Default for BisectionConfig {
    fn default() -> Self {
        Self {
            range: CurrentRange::default(),
            resolution_pct: CURRENT_LIMIT_STEP_PCT,
            max_iterations: 20,
        }
    }
}

impl BisectionConfig {
    pub fn validate(&self) -> SolverResult<()> {
        self.range.validate()?;
        if self.resolution_pct == 0 {
            return Err(SolverError::InvalidArg {
                what: "bisection resolution must be positive",
            });
        }
        Ok(())
    }
}

/// Outcome of a target-time search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TargetTimeSolution {
    /// Lowest level found that starts within the target.
    Found {
        current_limit_pct: f64,
        achieved_time_s: f64,
        iterations: usize,
    },
    /// Even the top of the range misses the target.
    NoSolution {
        /// Start time at the top of the range, `None` if it stalled.
        fastest_time_s: Option<f64>,
    },
}

impl TargetTimeSolution {
    /// Solved current limit, or 0 when there is no solution.
    pub fn current_limit_pct(&self) -> f64 {
        match self {
            TargetTimeSolution::Found {
                current_limit_pct, ..
            } => *current_limit_pct,
            TargetTimeSolution::NoSolution { .. } => 0.0,
        }
    }

    pub fn achieved_time_s(&self) -> Option<f64> {
        match self {
            TargetTimeSolution::Found {
                achieved_time_s, ..
            } => Some(*achieved_time_s),
            TargetTimeSolution::NoSolution { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, TargetTimeSolution::Found { .. })
    }
}

/// Bisect whole-percent current limits against a probe.
///
/// `probe(level)` returns the start time at that constant limit, or `None`
/// when the start fails. The top of the range is probed first; if it misses
/// the target the search ends with [`TargetTimeSolution::NoSolution`]. When
/// the lower bound is never raised it is probed last so the answer is tight.
pub fn bisect_current_limit<F>(
    target_time_s: f64,
    config: &BisectionConfig,
    mut probe: F,
) -> SolverResult<TargetTimeSolution>
where
    F: FnMut(u32) -> SolverResult<Option<f64>>,
{
    config.validate()?;
    if !target_time_s.is_finite() || target_time_s <= 0.0 {
        return Err(SolverError::InvalidArg {
            what: "target start time must be positive",
        });
    }
    let meets = |time: Option<f64>| time.filter(|&t| t <= target_time_s);

    let mut low = config.range.min_pct;
    let mut high = config.range.max_pct;

    let top = probe(high)?;
    let Some(top_time) = meets(top) else {
        info!(
            target_time_s,
            max_pct = high,
            fastest_time_s = ?top,
            "target start time not reachable"
        );
        return Ok(TargetTimeSolution::NoSolution {
            fastest_time_s: top,
        });
    };

    let mut best = (high, top_time);
    let mut low_raised = false;
    let mut iterations = 0;

    while high - low > config.resolution_pct && iterations < config.max_iterations {
        let mid = low + (high - low) / 2;
        let time = probe(mid)?;
        debug!(iteration = iterations, current_limit_pct = mid, start_time_s = ?time, "bisection probe");
        match meets(time) {
            Some(t) => {
                high = mid;
                best = (mid, t);
            }
            None => {
                low = mid;
                low_raised = true;
            }
        }
        iterations += 1;
    }

    if !low_raised && let Some(t) = meets(probe(low)?) {
        best = (low, t);
    }

    info!(
        target_time_s,
        current_limit_pct = best.0,
        achieved_time_s = best.1,
        iterations,
        "target start time solved"
    );
    Ok(TargetTimeSolution::Found {
        current_limit_pct: f64::from(best.0),
        achieved_time_s: best.1,
        iterations,
    })
}

/// Find the constant soft-start current limit that starts within `target_time_s`.
///
/// Each probe is a full transient run with a zero-length ramp.
///
/// # Errors
/// Fails on invalid parameters or a malformed table. An unreachable target is
/// [`TargetTimeSolution::NoSolution`].
pub fn solve_target_time(
    table: &SpeedCurveTable,
    motor: &MotorParameters,
    target_time_s: f64,
    config: &BisectionConfig,
    opts: &SimOptions,
) -> SolverResult<TargetTimeSolution> {
    bisect_current_limit(target_time_s, config, |level| {
        let mode = StartMode::SoftStart(SoftStartProfile::constant(f64::from(level))?);
        let result = run_start(table, motor, &mode, opts)?;
        Ok(result.start_time_s())
    })
}
