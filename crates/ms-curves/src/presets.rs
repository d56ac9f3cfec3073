//! Built-in motor and load curves on the standard speed grid.

use std::fmt;
use std::str::FromStr;

use crate::breakpoints::GRID_LEN;
use crate::error::CurveError;

/// Motor torque/current characteristic presets (full voltage).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotorPreset {
    /// Manufacturer data sheet curve, 80 % locked-rotor torque, 590 % locked-rotor current.
    Oem,
    /// NEMA design C, high starting torque.
    DesignC,
    /// High-slip rotor with a flat torque hump.
    HighSlip,
}

/// Load torque presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoadPreset {
    /// Measured driven-machine curve with breakaway torque.
    Oem,
    /// Fan/pump law, torque rising with the square of speed.
    Centrifugal,
    /// Conveyor-like constant torque.
    Constant,
}

const MOTOR_OEM_TORQUE: [f64; GRID_LEN] = [
    80.0, 80.0, 80.0, 80.0, 80.0, 80.0, 81.0, 89.0, 108.0, 114.0, 121.0, 131.0, 141.0, 152.0,
    166.0, 178.0, 173.0, 125.0, 0.0,
];
const MOTOR_OEM_CURRENT: [f64; GRID_LEN] = [
    590.0, 585.0, 580.0, 577.0, 574.0, 570.0, 565.0, 562.0, 548.0, 540.0, 525.0, 505.0, 480.0,
    450.0, 415.0, 360.0, 255.0, 150.0, 10.0,
];
const MOTOR_DESIGN_C_TORQUE: [f64; GRID_LEN] = [
    250.0, 240.0, 220.0, 205.0, 195.0, 190.0, 192.0, 200.0, 215.0, 230.0, 245.0, 255.0, 260.0,
    250.0, 230.0, 185.0, 120.0, 60.0, 0.0,
];
const MOTOR_DESIGN_C_CURRENT: [f64; GRID_LEN] = [
    550.0, 545.0, 538.0, 530.0, 520.0, 510.0, 500.0, 485.0, 465.0, 455.0, 435.0, 405.0, 370.0,
    320.0, 270.0, 210.0, 140.0, 75.0, 10.0,
];
const MOTOR_HIGH_SLIP_TORQUE: [f64; GRID_LEN] = [
    160.0, 162.0, 165.0, 170.0, 175.0, 185.0, 200.0, 215.0, 230.0, 235.0, 240.0, 245.0, 235.0,
    215.0, 190.0, 150.0, 100.0, 50.0, 0.0,
];
const MOTOR_HIGH_SLIP_CURRENT: [f64; GRID_LEN] = [
    620.0, 610.0, 600.0, 585.0, 570.0, 550.0, 525.0, 500.0, 470.0, 450.0, 420.0, 385.0, 340.0,
    285.0, 220.0, 160.0, 110.0, 65.0, 10.0,
];

const LOAD_OEM: [f64; GRID_LEN] = [
    12.0, 7.0, 6.0, 7.0, 9.0, 12.0, 16.0, 21.0, 27.0, 28.0, 30.0, 31.0, 33.0, 34.0, 36.0, 37.0,
    39.0, 40.0, 42.0,
];
const LOAD_CENTRIFUGAL: [f64; GRID_LEN] = [
    5.0, 6.0, 8.0, 12.0, 17.0, 23.0, 30.0, 38.0, 48.0, 51.0, 54.0, 58.0, 62.0, 67.0, 73.0, 80.0,
    88.0, 95.0, 100.0,
];
const LOAD_CONSTANT: [f64; GRID_LEN] = [40.0; GRID_LEN];

impl MotorPreset {
    pub const ALL: [MotorPreset; 3] = [MotorPreset::Oem, MotorPreset::DesignC, MotorPreset::HighSlip];

    /// Full-voltage torque in percent of rated torque.
    pub fn torque_pct(self) -> &'static [f64; GRID_LEN] {
        match self {
            MotorPreset::Oem => &MOTOR_OEM_TORQUE,
            MotorPreset::DesignC => &MOTOR_DESIGN_C_TORQUE,
            MotorPreset::HighSlip => &MOTOR_HIGH_SLIP_TORQUE,
        }
    }

    /// Full-voltage current in percent of rated current.
    pub fn current_pct(self) -> &'static [f64; GRID_LEN] {
        match self {
            MotorPreset::Oem => &MOTOR_OEM_CURRENT,
            MotorPreset::DesignC => &MOTOR_DESIGN_C_CURRENT,
            MotorPreset::HighSlip => &MOTOR_HIGH_SLIP_CURRENT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MotorPreset::Oem => "oem",
            MotorPreset::DesignC => "design_c",
            MotorPreset::HighSlip => "high_slip",
        }
    }
}

impl LoadPreset {
    pub const ALL: [LoadPreset; 3] = [LoadPreset::Oem, LoadPreset::Centrifugal, LoadPreset::Constant];

    /// Load torque in percent of motor rated torque.
    pub fn torque_pct(self) -> &'static [f64; GRID_LEN] {
        match self {
            LoadPreset::Oem => &LOAD_OEM,
            LoadPreset::Centrifugal => &LOAD_CENTRIFUGAL,
            LoadPreset::Constant => &LOAD_CONSTANT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LoadPreset::Oem => "oem",
            LoadPreset::Centrifugal => "centrifugal",
            LoadPreset::Constant => "constant",
        }
    }
}

impl fmt::Display for MotorPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for LoadPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MotorPreset {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MotorPreset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CurveError::UnknownPreset {
                name: s.to_string(),
            })
    }
}

impl FromStr for LoadPreset {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LoadPreset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CurveError::UnknownPreset {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oem_locked_rotor_values() {
        assert_eq!(MotorPreset::Oem.torque_pct()[0], 80.0);
        assert_eq!(MotorPreset::Oem.current_pct()[0], 590.0);
        assert_eq!(LoadPreset::Oem.torque_pct()[0], 12.0);
    }

    #[test]
    fn motor_torque_falls_to_zero_at_synchronous_speed() {
        for preset in MotorPreset::ALL {
            assert_eq!(preset.torque_pct()[GRID_LEN - 1], 0.0, "{preset}");
        }
    }

    #[test]
    fn names_round_trip() {
        for preset in MotorPreset::ALL {
            assert_eq!(preset.name().parse::<MotorPreset>().unwrap(), preset);
        }
        for preset in LoadPreset::ALL {
            assert_eq!(preset.to_string().parse::<LoadPreset>().unwrap(), preset);
        }
        assert!("DESIGN_C".parse::<MotorPreset>().is_ok());
        assert!(matches!(
            "steam".parse::<LoadPreset>(),
            Err(CurveError::UnknownPreset { .. })
        ));
    }
}
