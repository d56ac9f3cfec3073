//! Scenario loading, saving, validation, and compilation to engine inputs.

use std::path::Path;

use ms_core::units::{amps, hz, kg_m2, kw, rpm, s};
use ms_curves::{LoadPreset, MotorPreset, SpeedCurveTable};
use ms_project::schema::{LoadCurveDef, MotorCurveDef, MotorDef, Scenario, StartDef};
use ms_sim::{MotorParameters, SoftStartProfile, StartMode};
use tracing::info;

use crate::error::{AppError, AppResult};

/// Engine inputs built from a scenario.
#[derive(Debug, Clone)]
pub struct CompiledScenario {
    pub name: String,
    pub table: SpeedCurveTable,
    pub motor: MotorParameters,
    pub mode: StartMode,
    pub target_start_time_s: Option<f64>,
}

/// Short description of a scenario for listing.
#[derive(Debug, Clone)]
pub struct ScenarioSummary {
    pub name: String,
    pub start_mode: &'static str,
    pub rated_power_kw: f64,
    pub rated_torque_nm: f64,
    pub synchronous_speed_rpm: f64,
    pub locked_rotor_current_a: f64,
}

/// Load a scenario file (YAML or JSON by extension).
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    if !path.exists() {
        return Err(AppError::ScenarioFileRead {
            path: path.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
    }
    let scenario = ms_project::load_scenario(path)?;
    info!(name = %scenario.name, path = %path.display(), "scenario loaded");
    Ok(scenario)
}

/// Save a scenario file (YAML or JSON by extension).
pub fn save_scenario(path: &Path, scenario: &Scenario) -> AppResult<()> {
    ms_project::save_scenario(path, scenario).map_err(|e| match e {
        ms_project::ProjectError::Io(source) => AppError::ScenarioFileWrite {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })
}

pub fn validate_scenario(scenario: &Scenario) -> AppResult<()> {
    ms_project::validate_scenario(scenario).map_err(|e| AppError::Validation(e.to_string()))
}

/// Scenario template rendered as YAML.
pub fn template_yaml() -> AppResult<String> {
    Ok(ms_project::to_yaml_string(&Scenario::template())?)
}

/// Validate and convert a scenario into engine inputs.
pub fn compile_scenario(scenario: &Scenario) -> AppResult<CompiledScenario> {
    validate_scenario(scenario)?;
    let compiled = CompiledScenario {
        name: scenario.name.clone(),
        table: build_table(&scenario.motor_curve, &scenario.load_curve)?,
        motor: build_motor(&scenario.motor)?,
        mode: build_start_mode(&scenario.start)?,
        target_start_time_s: scenario.target_start_time_s,
    };
    info!(
        name = %compiled.name,
        mode = compiled.mode.label(),
        "scenario compiled"
    );
    Ok(compiled)
}

/// Load and compile in one step.
pub fn load_compiled(path: &Path) -> AppResult<CompiledScenario> {
    compile_scenario(&load_scenario(path)?)
}

pub fn summarize(compiled: &CompiledScenario) -> AppResult<ScenarioSummary> {
    let lr_pct = compiled.table.locked_rotor_current_pct()?;
    Ok(ScenarioSummary {
        name: compiled.name.clone(),
        start_mode: compiled.mode.label(),
        rated_power_kw: compiled.motor.rated_power_kw(),
        rated_torque_nm: compiled.motor.rated_torque_nm(),
        synchronous_speed_rpm: compiled.motor.synchronous_speed_rpm(),
        locked_rotor_current_a: compiled.motor.pct_to_amps(lr_pct),
    })
}

pub fn build_table(motor: &MotorCurveDef, load: &LoadCurveDef) -> AppResult<SpeedCurveTable> {
    let (torque, current) = match motor {
        MotorCurveDef::Preset { preset } => {
            let preset: MotorPreset = preset.parse()?;
            (preset.torque_pct().to_vec(), preset.current_pct().to_vec())
        }
        MotorCurveDef::Table {
            torque_pct,
            current_pct,
        } => (torque_pct.clone(), current_pct.clone()),
    };
    let load = match load {
        LoadCurveDef::Preset { preset } => preset.parse::<LoadPreset>()?.torque_pct().to_vec(),
        LoadCurveDef::Table { torque_pct } => torque_pct.clone(),
    };
    Ok(SpeedCurveTable::on_standard_grid(torque, current, load)?)
}

pub fn build_motor(def: &MotorDef) -> AppResult<MotorParameters> {
    MotorParameters::new(
        kw(def.rated_power_kw),
        rpm(def.rated_speed_rpm),
        def.poles,
        hz(def.frequency_hz),
        amps(def.rated_current_a),
        s(def.locked_rotor_withstand_s),
        kg_m2(def.total_inertia_kg_m2),
    )
    .map_err(|e| AppError::Compile(e.to_string()))
}

pub fn build_start_mode(def: &StartDef) -> AppResult<StartMode> {
    match def {
        StartDef::DirectOnLine => Ok(StartMode::DirectOnLine),
        StartDef::SoftStart {
            initial_current_pct,
            final_current_pct,
            ramp_s,
        } => {
            let profile = SoftStartProfile::new(*initial_current_pct, *final_current_pct, *ramp_s)
                .map_err(|e| AppError::Compile(e.to_string()))?;
            Ok(StartMode::SoftStart(profile))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_compiles() {
        let compiled = compile_scenario(&Scenario::template()).unwrap();
        assert_eq!(compiled.mode, StartMode::DirectOnLine);
        assert_eq!(compiled.table.len(), ms_curves::GRID_LEN);
        assert_eq!(compiled.target_start_time_s, Some(15.0));
    }

    #[test]
    fn summary_reports_derived_ratings() {
        let compiled = compile_scenario(&Scenario::template()).unwrap();
        let summary = summarize(&compiled).unwrap();
        assert_eq!(summary.start_mode, "DOL");
        assert!((summary.synchronous_speed_rpm - 1500.0).abs() < 1e-9);
        assert!((summary.rated_torque_nm - 110.0 * 9550.0 / 1480.0).abs() < 1e-9);
        // 590 % of 190 A
        assert!((summary.locked_rotor_current_a - 1121.0).abs() < 1e-9);
    }

    #[test]
    fn soft_start_def_becomes_profile() {
        let mode = build_start_mode(&StartDef::SoftStart {
            initial_current_pct: 250.0,
            final_current_pct: 400.0,
            ramp_s: 3.0,
        })
        .unwrap();
        let profile = mode.soft_start().unwrap();
        assert_eq!(profile.initial_current_limit_pct, 250.0);
        assert_eq!(profile.final_current_limit_pct, 400.0);
        assert_eq!(profile.ramp_duration_s, 3.0);
    }

    #[test]
    fn invalid_scenario_does_not_compile() {
        let mut scenario = Scenario::template();
        scenario.motor.poles = 0;
        assert!(matches!(
            compile_scenario(&scenario),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn missing_file_reported_with_path() {
        let err = load_scenario(Path::new("/nonexistent/motor.yaml")).unwrap_err();
        assert!(matches!(err, AppError::ScenarioFileRead { .. }));
    }
}
