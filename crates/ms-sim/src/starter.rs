//! Motor-start dynamics as a transient model.
//!
//! State is rotor angular speed plus the I²t integral, so both are advanced
//! by the same integrator step.

use ms_curves::{CurvePoint, OperatingPoint, SpeedCurveTable};

use crate::error::SimResult;
use crate::model::TransientModel;
use crate::motor::MotorParameters;
use crate::rotor::Rotor;
use crate::start_mode::StartMode;
use crate::thermal::ThermalBasis;

/// Integrated state of a start.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct StartState {
    /// Rotor angular speed (rad/s)
    pub omega_rad_s: f64,
    /// Accumulated thermal stress (A²·s)
    pub stress_a2s: f64,
}

/// Curve values and the resulting drive at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    /// Full-voltage curve values at the current speed
    pub point: CurvePoint,
    /// Torque/current after the starter's limiting
    pub drive: OperatingPoint,
    /// Drive torque minus load torque (% rated torque)
    pub net_margin_pct: f64,
}

/// One motor, one lumped inertia, one load curve.
#[derive(Clone, Debug)]
pub struct StartModel<'a> {
    table: &'a SpeedCurveTable,
    mode: StartMode,
    rotor: Rotor,
    thermal: ThermalBasis,
}

impl<'a> StartModel<'a> {
    /// `mode` is expected to be normalized already.
    pub fn new(
        table: &'a SpeedCurveTable,
        motor: &MotorParameters,
        mode: StartMode,
    ) -> SimResult<Self> {
        Ok(Self {
            table,
            mode,
            rotor: Rotor::new(motor),
            thermal: ThermalBasis::new(motor, table)?,
        })
    }

    pub fn rotor(&self) -> &Rotor {
        &self.rotor
    }

    pub fn thermal(&self) -> &ThermalBasis {
        &self.thermal
    }

    pub fn mode(&self) -> &StartMode {
        &self.mode
    }

    /// Look up the curves at `speed_pct` and apply the starter at time `t`.
    pub fn evaluate(&self, t: f64, speed_pct: f64) -> SimResult<Evaluation> {
        let point = self.table.sample(speed_pct)?;
        let drive = self.mode.operating_point(&point, t)?;
        Ok(Evaluation {
            point,
            drive,
            net_margin_pct: drive.net_margin_pct(point.load_torque_pct),
        })
    }
}

impl TransientModel for StartModel<'_> {
    type State = StartState;

    fn initial_state(&self) -> StartState {
        StartState::default()
    }

    fn rhs(&self, t: f64, x: &StartState) -> SimResult<StartState> {
        let speed_pct = self.rotor.speed_pct(x.omega_rad_s);
        let eval = self.evaluate(t, speed_pct)?;
        Ok(StartState {
            omega_rad_s: self.rotor.angular_acceleration(eval.net_margin_pct),
            stress_a2s: self.thermal.heating_rate(eval.drive.current_pct),
        })
    }

    fn add(&self, a: &StartState, b: &StartState) -> StartState {
        StartState {
            omega_rad_s: a.omega_rad_s + b.omega_rad_s,
            stress_a2s: a.stress_a2s + b.stress_a2s,
        }
    }

    fn scale(&self, a: &StartState, scale: f64) -> StartState {
        StartState {
            omega_rad_s: a.omega_rad_s * scale,
            stress_a2s: a.stress_a2s * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_core::units::{amps, hz, kg_m2, kw, rpm, s};
    use ms_curves::{LoadPreset, MotorPreset};

    fn motor() -> MotorParameters {
        MotorParameters::new(
            kw(110.0),
            rpm(1480.0),
            4,
            hz(50.0),
            amps(190.0),
            s(15.0),
            kg_m2(20.0),
        )
        .unwrap()
    }

    #[test]
    fn standstill_derivative() {
        let table = SpeedCurveTable::from_presets(MotorPreset::Oem, LoadPreset::Oem);
        let m = motor();
        let model = StartModel::new(&table, &m, StartMode::DirectOnLine).unwrap();
        let dx = model.rhs(0.0, &model.initial_state()).unwrap();

        // (80 - 12)% of rated torque over 20 kg·m²
        let expected = 0.68 * m.rated_torque_nm() / 20.0;
        assert!((dx.omega_rad_s - expected).abs() < 1e-9);
        // 590 % of 190 A, squared
        assert!((dx.stress_a2s - 1121.0_f64.powi(2)).abs() < 1e-6);
    }

    #[test]
    fn nan_table_entry_fails_evaluation() {
        let table = SpeedCurveTable::from_presets(MotorPreset::Oem, LoadPreset::Oem)
            .with_motor_torque(1, f64::NAN)
            .unwrap();
        let m = motor();
        let model = StartModel::new(&table, &m, StartMode::DirectOnLine).unwrap();
        let err = model.evaluate(0.0, 5.0).unwrap_err();
        assert!(err.is_malformed_curve());
    }
}
