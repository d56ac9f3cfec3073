//! Scenario file schema.

use serde::{Deserialize, Serialize};

/// One motor driving one load, started one way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub motor: MotorDef,
    pub motor_curve: MotorCurveDef,
    pub load_curve: LoadCurveDef,
    pub start: StartDef,
    /// Start time the bisection solver aims for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_start_time_s: Option<f64>,
}

/// Nameplate data and drive-train inertia.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotorDef {
    pub rated_power_kw: f64,
    pub rated_speed_rpm: f64,
    pub poles: u32,
    pub frequency_hz: f64,
    pub rated_current_a: f64,
    pub locked_rotor_withstand_s: f64,
    pub total_inertia_kg_m2: f64,
}

/// Full-voltage motor torque and current, in percent of rated values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum MotorCurveDef {
    Preset {
        preset: String,
    },
    /// Explicit tables on the standard speed grid.
    Table {
        torque_pct: Vec<f64>,
        current_pct: Vec<f64>,
    },
}

/// Load torque in percent of motor rated torque.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum LoadCurveDef {
    Preset { preset: String },
    Table { torque_pct: Vec<f64> },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum StartDef {
    DirectOnLine,
    SoftStart {
        initial_current_pct: f64,
        final_current_pct: f64,
        #[serde(default)]
        ramp_s: f64,
    },
}

impl Scenario {
    /// Starter scenario: a 110 kW, 4-pole motor on the OEM curves, direct on line.
    pub fn template() -> Self {
        Self {
            version: crate::validate::LATEST_VERSION,
            name: "110 kW pump motor".to_string(),
            motor: MotorDef {
                rated_power_kw: 110.0,
                rated_speed_rpm: 1480.0,
                poles: 4,
                frequency_hz: 50.0,
                rated_current_a: 190.0,
                locked_rotor_withstand_s: 15.0,
                total_inertia_kg_m2: 20.0,
            },
            motor_curve: MotorCurveDef::Preset {
                preset: "oem".to_string(),
            },
            load_curve: LoadCurveDef::Preset {
                preset: "oem".to_string(),
            },
            start: StartDef::DirectOnLine,
            target_start_time_s: Some(15.0),
        }
    }
}
