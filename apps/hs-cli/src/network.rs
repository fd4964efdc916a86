//! Turn a validated scenario into simulation inputs.

use crate::error::CliResult;
use hs_components::{Pipe, Pump, Tank};
use hs_core::units::{kgpm3, m, m3ps};
use hs_project::{Scenario, validate_scenario};
use hs_sim::SimOptions;

/// Everything `run_sim` needs, built from one scenario.
#[derive(Debug)]
pub struct Network {
    pub pump: Pump,
    pub pipe: Pipe,
    pub tank: Tank,
    pub opts: SimOptions,
}

pub fn build(scenario: &Scenario) -> CliResult<Network> {
    validate_scenario(scenario).map_err(hs_project::ProjectError::from)?;

    let pump = Pump::new(m3ps(scenario.pump.flow_rate_m3s), m(scenario.pump.head_m))?;
    let pipe = Pipe::new(
        m(scenario.pipe.length_m),
        m(scenario.pipe.diameter_m),
        scenario.pipe.roughness,
        kgpm3(scenario.pipe.density_kg_m3),
    )?;
    let tank = Tank::with_initial_level(
        m(scenario.tank.height_m),
        m(scenario.tank.radius_m),
        m(scenario.tank.initial_level_m),
    )?;
    let opts = SimOptions {
        dt: scenario.run.time_step_s,
        duration: scenario.run.duration_s,
    };
    opts.validate()?;

    Ok(Network {
        pump,
        pipe,
        tank,
        opts,
    })
}
