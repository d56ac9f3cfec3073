//! Scenario validation logic.

use ms_curves::{GRID_LEN, LoadPreset, MotorPreset};

use crate::schema::{LoadCurveDef, MotorCurveDef, MotorDef, Scenario, StartDef};

/// Newest scenario file version this crate reads and writes.
pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Table length: {field} has {actual} points, expected {expected}")]
    TableLength {
        field: String,
        actual: usize,
        expected: usize,
    },

    #[error("Unknown preset: {name} in {field}")]
    UnknownPreset { field: String, name: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version == 0 || scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    validate_motor(&scenario.motor)?;

    match &scenario.motor_curve {
        MotorCurveDef::Preset { preset } => {
            if preset.parse::<MotorPreset>().is_err() {
                return Err(ValidationError::UnknownPreset {
                    field: "motor_curve".to_string(),
                    name: preset.clone(),
                });
            }
        }
        MotorCurveDef::Table {
            torque_pct,
            current_pct,
        } => {
            validate_table("motor_curve torque_pct", torque_pct)?;
            validate_table("motor_curve current_pct", current_pct)?;
        }
    }

    match &scenario.load_curve {
        LoadCurveDef::Preset { preset } => {
            if preset.parse::<LoadPreset>().is_err() {
                return Err(ValidationError::UnknownPreset {
                    field: "load_curve".to_string(),
                    name: preset.clone(),
                });
            }
        }
        LoadCurveDef::Table { torque_pct } => {
            validate_table("load_curve torque_pct", torque_pct)?;
        }
    }

    if let StartDef::SoftStart {
        initial_current_pct,
        final_current_pct,
        ramp_s,
    } = &scenario.start
    {
        validate_positive_finite("start initial_current_pct", *initial_current_pct)?;
        validate_positive_finite("start final_current_pct", *final_current_pct)?;
        validate_non_negative_finite("start ramp_s", *ramp_s)?;
    }

    if let Some(target) = scenario.target_start_time_s {
        validate_positive_finite("target_start_time_s", target)?;
    }

    Ok(())
}

fn validate_motor(motor: &MotorDef) -> Result<(), ValidationError> {
    validate_positive_finite("motor rated_power_kw", motor.rated_power_kw)?;
    validate_positive_finite("motor rated_speed_rpm", motor.rated_speed_rpm)?;
    validate_positive_finite("motor frequency_hz", motor.frequency_hz)?;
    validate_positive_finite("motor rated_current_a", motor.rated_current_a)?;
    validate_positive_finite(
        "motor locked_rotor_withstand_s",
        motor.locked_rotor_withstand_s,
    )?;
    validate_positive_finite("motor total_inertia_kg_m2", motor.total_inertia_kg_m2)?;

    if motor.poles == 0 || motor.poles % 2 != 0 {
        return Err(ValidationError::InvalidValue {
            field: "motor poles".to_string(),
            value: motor.poles.to_string(),
            reason: "must be a positive even number".to_string(),
        });
    }

    let synchronous_rpm = 120.0 * motor.frequency_hz / f64::from(motor.poles);
    if motor.rated_speed_rpm >= synchronous_rpm {
        return Err(ValidationError::InvalidValue {
            field: "motor rated_speed_rpm".to_string(),
            value: motor.rated_speed_rpm.to_string(),
            reason: format!("must be below synchronous speed {synchronous_rpm} rpm"),
        });
    }
    Ok(())
}

fn validate_table(field: &str, values: &[f64]) -> Result<(), ValidationError> {
    if values.len() != GRID_LEN {
        return Err(ValidationError::TableLength {
            field: field.to_string(),
            actual: values.len(),
            expected: GRID_LEN,
        });
    }
    for (i, v) in values.iter().enumerate() {
        validate_non_negative_finite(&format!("{field}[{i}]"), *v)?;
    }
    Ok(())
}

fn validate_positive_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }
    Ok(())
}

fn validate_non_negative_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be non-negative and finite".to_string(),
        });
    }
    Ok(())
}
