//! I²t thermal stress accounting.
//!
//! Stress accumulates as `∫ I(t)² dt` in A²·s. The 100 % reference is the
//! locked-rotor current sustained for the withstand time:
//!
//! ```text
//! stress% = ∫ I² dt / (I_LR² · t_withstand) · 100
//! ```
//!
//! `I_LR` is the full-voltage current at the lowest speed breakpoint of the
//! curve table, for both direct-on-line and soft starts.

use ms_curves::SpeedCurveTable;

use crate::error::{SimError, SimResult};
use crate::motor::MotorParameters;

/// Conversion from current percent to heating and withstand percent.
#[derive(Clone, Debug, PartialEq)]
pub struct ThermalBasis {
    /// Rated current (A), the 100 % current reference
    pub rated_current_a: f64,
    /// Locked-rotor current at full voltage (A)
    pub locked_rotor_current_a: f64,
    /// Locked-rotor withstand time (s)
    pub withstand_s: f64,
}

impl ThermalBasis {
    pub fn new(motor: &MotorParameters, table: &SpeedCurveTable) -> SimResult<Self> {
        let locked_rotor_current_a = motor.pct_to_amps(table.locked_rotor_current_pct()?);
        if locked_rotor_current_a <= 0.0 {
            return Err(SimError::NonPhysical {
                what: "locked-rotor current must be positive",
            });
        }
        Ok(Self {
            rated_current_a: motor.rated_current_a(),
            locked_rotor_current_a,
            withstand_s: motor.locked_rotor_withstand_s(),
        })
    }

    /// Terminal current in amperes for a percent of rated current.
    pub fn current_a(&self, current_pct: f64) -> f64 {
        current_pct * self.rated_current_a / 100.0
    }

    /// Instantaneous heating rate I² (A²), the derivative of the stress integral.
    pub fn heating_rate(&self, current_pct: f64) -> f64 {
        let i = self.current_a(current_pct);
        i * i
    }

    /// Stress capacity at 100 %: `I_LR² · t_withstand` (A²·s).
    pub fn withstand_a2s(&self) -> f64 {
        self.locked_rotor_current_a * self.locked_rotor_current_a * self.withstand_s
    }

    /// Accumulated stress as percent of the withstand capacity.
    pub fn percent_of_withstand(&self, stress_a2s: f64) -> f64 {
        stress_a2s / self.withstand_a2s() * 100.0
    }
}

/// Thermal stress at the end of a run, in both units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThermalStress {
    pub ampere_squared_seconds: f64,
    pub percent_of_withstand: f64,
}
