//! Motor nameplate data and derived ratings.

use ms_core::numeric::ensure_positive;
use ms_core::units::constants::{KW_RPM_TO_NM, SYNC_SPEED_FACTOR};
use ms_core::units::{
    AngularVelocity, Current, Frequency, Inertia, Power, Time, Torque, nm, rpm,
};
use uom::si::angular_velocity::{radian_per_second, revolution_per_minute};
use uom::si::electric_current::ampere;
use uom::si::frequency::hertz;
use uom::si::moment_of_inertia::kilogram_square_meter;
use uom::si::power::kilowatt;
use uom::si::time::second;

use crate::error::{SimError, SimResult};

/// Nameplate and drive-train parameters for one motor/load pair.
#[derive(Clone, Debug, PartialEq)]
pub struct MotorParameters {
    /// Rated shaft power
    pub rated_power: Power,
    /// Rated (full-load) shaft speed
    pub rated_speed: AngularVelocity,
    /// Pole count (even)
    pub poles: u32,
    /// Supply frequency
    pub frequency: Frequency,
    /// Rated (full-load) current
    pub rated_current: Current,
    /// Seconds the motor may sustain locked-rotor current
    pub locked_rotor_withstand: Time,
    /// Combined rotor and load inertia
    pub total_inertia: Inertia,
}

fn positive(value: f64, what: &'static str) -> SimResult<f64> {
    ensure_positive(value, what).map_err(|_| SimError::InvalidArg { what })
}

impl MotorParameters {
    /// Create motor parameters.
    ///
    /// # Errors
    /// Returns [`SimError::InvalidArg`] for non-positive or non-finite values,
    /// an odd or zero pole count, or a rated speed at or above synchronous speed.
    pub fn new(
        rated_power: Power,
        rated_speed: AngularVelocity,
        poles: u32,
        frequency: Frequency,
        rated_current: Current,
        locked_rotor_withstand: Time,
        total_inertia: Inertia,
    ) -> SimResult<Self> {
        let params = Self {
            rated_power,
            rated_speed,
            poles,
            frequency,
            rated_current,
            locked_rotor_withstand,
            total_inertia,
        };
        params.validate()?;
        Ok(params)
    }

    /// Re-check invariants, for values assembled field by field.
    pub fn validate(&self) -> SimResult<()> {
        positive(self.rated_power_kw(), "rated power must be positive")?;
        positive(self.rated_speed_rpm(), "rated speed must be positive")?;
        positive(self.frequency_hz(), "supply frequency must be positive")?;
        positive(self.rated_current_a(), "rated current must be positive")?;
        positive(
            self.locked_rotor_withstand_s(),
            "locked-rotor withstand time must be positive",
        )?;
        positive(self.total_inertia_kg_m2(), "total inertia must be positive")?;
        if self.poles == 0 || self.poles % 2 != 0 {
            return Err(SimError::InvalidArg {
                what: "pole count must be a positive even number",
            });
        }
        if self.rated_speed_rpm() >= self.synchronous_speed_rpm() {
            return Err(SimError::NonPhysical {
                what: "rated speed must be below synchronous speed",
            });
        }
        Ok(())
    }

    pub fn rated_power_kw(&self) -> f64 {
        self.rated_power.get::<kilowatt>()
    }

    pub fn rated_speed_rpm(&self) -> f64 {
        self.rated_speed.get::<revolution_per_minute>()
    }

    pub fn frequency_hz(&self) -> f64 {
        self.frequency.get::<hertz>()
    }

    pub fn rated_current_a(&self) -> f64 {
        self.rated_current.get::<ampere>()
    }

    pub fn locked_rotor_withstand_s(&self) -> f64 {
        self.locked_rotor_withstand.get::<second>()
    }

    pub fn total_inertia_kg_m2(&self) -> f64 {
        self.total_inertia.get::<kilogram_square_meter>()
    }

    /// Full-load torque in N·m: `P[kW] · 9550 / n[rpm]`.
    pub fn rated_torque_nm(&self) -> f64 {
        self.rated_power_kw() * KW_RPM_TO_NM / self.rated_speed_rpm()
    }

    pub fn rated_torque(&self) -> Torque {
        nm(self.rated_torque_nm())
    }

    /// Synchronous speed in rpm: `120 · f / p`.
    pub fn synchronous_speed_rpm(&self) -> f64 {
        SYNC_SPEED_FACTOR * self.frequency_hz() / self.poles as f64
    }

    pub fn synchronous_speed(&self) -> AngularVelocity {
        rpm(self.synchronous_speed_rpm())
    }

    pub fn synchronous_omega_rad_s(&self) -> f64 {
        self.synchronous_speed().get::<radian_per_second>()
    }

    /// Convert a current in percent of rated current to amperes.
    pub fn pct_to_amps(&self, current_pct: f64) -> f64 {
        current_pct * self.rated_current_a() / 100.0
    }
}
