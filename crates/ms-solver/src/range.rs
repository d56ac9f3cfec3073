//! Current-limit search range shared by the searches and the sweep.

use crate::error::{SolverError, SolverResult};

/// Lowest soft-start current limit considered (% rated current).
pub const CURRENT_LIMIT_MIN_PCT: u32 = 200;
/// Highest soft-start current limit considered (% rated current).
pub const CURRENT_LIMIT_MAX_PCT: u32 = 700;
/// Scan step and bisection resolution (% rated current).
pub const CURRENT_LIMIT_STEP_PCT: u32 = 2;

/// Inclusive range of whole-percent current limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentRange {
    pub min_pct: u32,
    pub max_pct: u32,
    pub step_pct: u32,
}

impl Default for CurrentRange {
    fn default() -> Self {
        Self {
            min_pct: CURRENT_LIMIT_MIN_PCT,
            max_pct: CURRENT_LIMIT_MAX_PCT,
            step_pct: CURRENT_LIMIT_STEP_PCT,
        }
    }
}

impl CurrentRange {
    pub fn new(min_pct: u32, max_pct: u32, step_pct: u32) -> SolverResult<Self> {
        let range = Self {
            min_pct,
            max_pct,
            step_pct,
        };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> SolverResult<()> {
        if self.min_pct == 0 {
            return Err(SolverError::InvalidArg {
                what: "current range must start above zero",
            });
        }
        if self.max_pct < self.min_pct {
            return Err(SolverError::InvalidArg {
                what: "current range upper bound below lower bound",
            });
        }
        if self.step_pct == 0 {
            return Err(SolverError::InvalidArg {
                what: "current range step must be positive",
            });
        }
        Ok(())
    }

    /// Levels from `min_pct` upwards in `step_pct` increments, never past `max_pct`.
    pub fn levels(&self) -> impl Iterator<Item = u32> {
        (self.min_pct..=self.max_pct).step_by(self.step_pct as usize)
    }

    pub fn level_count(&self) -> usize {
        ((self.max_pct - self.min_pct) / self.step_pct) as usize + 1
    }
}
