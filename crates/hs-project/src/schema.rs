//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub pump: PumpDef,
    pub pipe: PipeDef,
    pub tank: TankDef,
    #[serde(default)]
    pub run: RunDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PumpDef {
    pub flow_rate_m3s: f64,
    pub head_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipeDef {
    pub length_m: f64,
    pub diameter_m: f64,
    #[serde(default)]
    pub roughness: f64,
    /// Density of the conveyed liquid
    pub density_kg_m3: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TankDef {
    pub height_m: f64,
    pub radius_m: f64,
    #[serde(default)]
    pub initial_level_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunDef {
    pub duration_s: f64,
    pub time_step_s: f64,
    /// Pace output at wall-clock speed
    #[serde(default)]
    pub realtime: bool,
}

impl Default for RunDef {
    fn default() -> Self {
        Self {
            duration_s: 60.0,
            time_step_s: 1.0,
            realtime: false,
        }
    }
}

/// Reference tank-filling setup: 10 L/s pump, 50 m of 10 cm steel pipe,
/// 5 m tall tank of 1 m radius, one minute at 1 s steps.
impl Default for Scenario {
    fn default() -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: "Tank filling".to_string(),
            pump: PumpDef {
                flow_rate_m3s: 0.01,
                head_m: 10.0,
            },
            pipe: PipeDef {
                length_m: 50.0,
                diameter_m: 0.1,
                roughness: 0.015,
                density_kg_m3: 1000.0,
            },
            tank: TankDef {
                height_m: 5.0,
                radius_m: 1.0,
                initial_level_m: 0.0,
            },
            run: RunDef::default(),
        }
    }
}
