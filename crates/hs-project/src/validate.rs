//! Scenario validation logic.

use crate::schema::{PipeDef, PumpDef, RunDef, Scenario, TankDef};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version == 0 || scenario.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    validate_pump(&scenario.pump)?;
    validate_pipe(&scenario.pipe)?;
    validate_tank(&scenario.tank)?;
    validate_run(&scenario.run)?;
    Ok(())
}

fn validate_pump(pump: &PumpDef) -> Result<(), ValidationError> {
    non_negative("pump.flow_rate_m3s", pump.flow_rate_m3s)?;
    non_negative("pump.head_m", pump.head_m)?;
    Ok(())
}

fn validate_pipe(pipe: &PipeDef) -> Result<(), ValidationError> {
    positive("pipe.length_m", pipe.length_m)?;
    positive("pipe.diameter_m", pipe.diameter_m)?;
    non_negative("pipe.roughness", pipe.roughness)?;
    positive("pipe.density_kg_m3", pipe.density_kg_m3)?;
    Ok(())
}

fn validate_tank(tank: &TankDef) -> Result<(), ValidationError> {
    positive("tank.height_m", tank.height_m)?;
    positive("tank.radius_m", tank.radius_m)?;
    non_negative("tank.initial_level_m", tank.initial_level_m)?;
    if tank.initial_level_m > tank.height_m {
        return Err(invalid(
            "tank.initial_level_m",
            tank.initial_level_m,
            "must not exceed tank.height_m",
        ));
    }
    Ok(())
}

fn validate_run(run: &RunDef) -> Result<(), ValidationError> {
    non_negative("run.duration_s", run.duration_s)?;
    positive("run.time_step_s", run.time_step_s)?;
    Ok(())
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(invalid(field, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(invalid(field, value, "must be positive"));
    }
    Ok(())
}

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(invalid(field, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(invalid(field, value, "must not be negative"));
    }
    Ok(())
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
