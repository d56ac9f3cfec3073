//! Speed-indexed motor/load curve table.

use crate::breakpoints::SPEED_BREAKPOINTS;
use crate::common::{check_finite, check_strictly_increasing};
use crate::error::{CurveError, CurveResult};
use crate::interp::interpolate;
use crate::presets::{LoadPreset, MotorPreset};

/// Full-voltage curve values at one speed, all in percent of rated values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    pub motor_torque_pct: f64,
    pub motor_current_pct: f64,
    pub load_torque_pct: f64,
}

/// Three parallel curves sharing one set of speed breakpoints.
///
/// Lengths are checked on construction. Breakpoint ordering and value
/// finiteness are checked by [`SpeedCurveTable::validate`], which every
/// simulation entry point runs before touching the data.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeedCurveTable {
    breakpoints: Vec<f64>,
    motor_torque_pct: Vec<f64>,
    motor_current_pct: Vec<f64>,
    load_torque_pct: Vec<f64>,
}

impl SpeedCurveTable {
    /// Build a table over arbitrary breakpoints.
    ///
    /// # Errors
    /// Returns [`CurveError::MalformedCurve`] if the sequences are empty or
    /// their lengths differ.
    pub fn new(
        breakpoints: Vec<f64>,
        motor_torque_pct: Vec<f64>,
        motor_current_pct: Vec<f64>,
        load_torque_pct: Vec<f64>,
    ) -> CurveResult<Self> {
        let n = breakpoints.len();
        if n == 0 {
            return Err(CurveError::MalformedCurve {
                what: "empty breakpoint sequence",
                index: 0,
            });
        }
        for (what, len) in [
            ("motor torque length differs from breakpoints", motor_torque_pct.len()),
            ("motor current length differs from breakpoints", motor_current_pct.len()),
            ("load torque length differs from breakpoints", load_torque_pct.len()),
        ] {
            if len != n {
                return Err(CurveError::MalformedCurve {
                    what,
                    index: len.min(n),
                });
            }
        }

        Ok(Self {
            breakpoints,
            motor_torque_pct,
            motor_current_pct,
            load_torque_pct,
        })
    }

    /// Build a table on the standard 19-point speed grid.
    pub fn on_standard_grid(
        motor_torque_pct: Vec<f64>,
        motor_current_pct: Vec<f64>,
        load_torque_pct: Vec<f64>,
    ) -> CurveResult<Self> {
        Self::new(
            SPEED_BREAKPOINTS.to_vec(),
            motor_torque_pct,
            motor_current_pct,
            load_torque_pct,
        )
    }

    /// Table assembled from built-in presets.
    pub fn from_presets(motor: MotorPreset, load: LoadPreset) -> Self {
        Self {
            breakpoints: SPEED_BREAKPOINTS.to_vec(),
            motor_torque_pct: motor.torque_pct().to_vec(),
            motor_current_pct: motor.current_pct().to_vec(),
            load_torque_pct: load.torque_pct().to_vec(),
        }
    }

    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    pub fn motor_torque_pct(&self) -> &[f64] {
        &self.motor_torque_pct
    }

    pub fn motor_current_pct(&self) -> &[f64] {
        &self.motor_current_pct
    }

    pub fn load_torque_pct(&self) -> &[f64] {
        &self.load_torque_pct
    }

    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// Check breakpoint ordering and that every value is finite.
    pub fn validate(&self) -> CurveResult<()> {
        check_strictly_increasing(&self.breakpoints)?;
        for (i, &b) in self.breakpoints.iter().enumerate() {
            check_finite(b, "speed breakpoint", i)?;
        }
        for (what, values) in [
            ("motor torque", &self.motor_torque_pct),
            ("motor current", &self.motor_current_pct),
            ("load torque", &self.load_torque_pct),
        ] {
            for (i, &v) in values.iter().enumerate() {
                check_finite(v, what, i)?;
            }
        }
        Ok(())
    }

    /// Interpolate all three curves at `speed_pct`.
    pub fn sample(&self, speed_pct: f64) -> CurveResult<CurvePoint> {
        Ok(CurvePoint {
            motor_torque_pct: interpolate(speed_pct, &self.breakpoints, &self.motor_torque_pct)?,
            motor_current_pct: interpolate(speed_pct, &self.breakpoints, &self.motor_current_pct)?,
            load_torque_pct: interpolate(speed_pct, &self.breakpoints, &self.load_torque_pct)?,
        })
    }

    /// Full-voltage current draw at the lowest breakpoint (standstill).
    pub fn locked_rotor_current_pct(&self) -> CurveResult<f64> {
        check_finite(self.motor_current_pct[0], "motor current", 0)
    }

    /// Copy with one full-voltage motor torque entry replaced.
    pub fn with_motor_torque(mut self, index: usize, value: f64) -> CurveResult<Self> {
        let len = self.len();
        let slot = self
            .motor_torque_pct
            .get_mut(index)
            .ok_or(CurveError::MalformedCurve {
                what: "motor torque index out of range",
                index: len,
            })?;
        *slot = value;
        Ok(self)
    }

    /// Copy with one load torque entry replaced.
    pub fn with_load_torque(mut self, index: usize, value: f64) -> CurveResult<Self> {
        let len = self.len();
        let slot = self
            .load_torque_pct
            .get_mut(index)
            .ok_or(CurveError::MalformedCurve {
                what: "load torque index out of range",
                index: len,
            })?;
        *slot = value;
        Ok(self)
    }
}
