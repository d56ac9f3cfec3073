//! Rotor dynamics for the lumped motor + load inertia.

use ms_core::numeric::pct_to_pu;

use crate::motor::MotorParameters;

/// Rotating mass driven by the net torque margin.
///
/// ```text
/// J · dω/dt = (margin% / 100) · T_rated
/// ```
///
/// Speed percent is measured against synchronous angular speed.
#[derive(Clone, Debug, PartialEq)]
pub struct Rotor {
    /// Moment of inertia (kg·m²)
    pub inertia_kg_m2: f64,
    /// Full-load torque (N·m), the 100 % torque reference
    pub rated_torque_nm: f64,
    /// Synchronous angular speed (rad/s), the 100 % speed reference
    pub synchronous_omega_rad_s: f64,
}

impl Rotor {
    pub fn new(motor: &MotorParameters) -> Self {
        Self {
            inertia_kg_m2: motor.total_inertia_kg_m2(),
            rated_torque_nm: motor.rated_torque_nm(),
            synchronous_omega_rad_s: motor.synchronous_omega_rad_s(),
        }
    }

    /// Angular acceleration (rad/s²) for a net margin in percent of rated torque.
    pub fn angular_acceleration(&self, net_margin_pct: f64) -> f64 {
        pct_to_pu(net_margin_pct) * self.rated_torque_nm / self.inertia_kg_m2
    }

    /// Angular speed (rad/s) as percent of synchronous speed.
    pub fn speed_pct(&self, omega_rad_s: f64) -> f64 {
        omega_rad_s / self.synchronous_omega_rad_s * 100.0
    }

    /// Angular speed (rad/s) for a percent of synchronous speed.
    pub fn omega_rad_s(&self, speed_pct: f64) -> f64 {
        pct_to_pu(speed_pct) * self.synchronous_omega_rad_s
    }
}
