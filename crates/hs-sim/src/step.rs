//! Single-tick state update for the pump-pipe-tank network.

use crate::error::{SimError, SimResult};
use hs_components::{FillOutcome, Pipe, Pump, Tank};
use hs_core::numeric::ensure_positive;
use hs_core::units::{Length, Power, Time, Velocity, VolumeRate};
use std::fmt;

/// Condition reported for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    /// Tank level rose normally.
    Nominal,
    /// Pump head is below the pipe friction loss; the tank was not filled.
    PumpInsufficient,
    /// Tank is at its rim; level clamped to height.
    Overflow,
}

impl StepStatus {
    /// Operator-facing message, `None` for nominal ticks.
    pub fn message(self) -> Option<&'static str> {
        match self {
            StepStatus::Nominal => None,
            StepStatus::PumpInsufficient => {
                Some("Pump cannot overcome the head loss. No flow occurs.")
            }
            StepStatus::Overflow => Some("Tank is full! Overflow occurs."),
        }
    }

    /// Short machine-readable label.
    pub fn label(self) -> &'static str {
        match self {
            StepStatus::Nominal => "nominal",
            StepStatus::PumpInsufficient => "pump_insufficient",
            StepStatus::Overflow => "overflow",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// State of the network right after one update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepOutcome {
    pub water_level: Length,
    pub flow_rate: VolumeRate,
    pub pump_power: Power,
    pub pipe_velocity: Velocity,
    pub head_loss: Length,
    pub status: StepStatus,
}

/// Advance the network by one time step.
///
/// 1. Head loss in the pipe at the pump's flow rate.
/// 2. If the pump head is below that loss the tank is left as is and the tick
///    is reported as [`StepStatus::PumpInsufficient`].
/// 3. Otherwise the full pump flow enters the tank (losses are not subtracted
///    from flow) and the level is clamped at the rim.
/// 4. Pump power is recomputed on every tick, including insufficient ones, so
///    it reads as if the pump were running.
pub fn update_tank(
    tank: &mut Tank,
    pump: &mut Pump,
    pipe: &Pipe,
    time_step: Time,
) -> SimResult<StepOutcome> {
    ensure_positive(time_step.value, "time step must be positive")
        .map_err(|_| SimError::InvalidArg {
            what: "time step must be positive",
        })?;

    let loss = pipe.head_loss(pump.flow_rate())?;

    let status = if pump.head() < loss.head {
        StepStatus::PumpInsufficient
    } else {
        match tank.fill(pump.flow_rate(), time_step)? {
            FillOutcome::Filled => StepStatus::Nominal,
            FillOutcome::Overflowed => StepStatus::Overflow,
        }
    };

    let pump_power = pump.refresh_power(pipe);

    Ok(StepOutcome {
        water_level: tank.water_level(),
        flow_rate: pump.flow_rate(),
        pump_power,
        pipe_velocity: loss.velocity,
        head_loss: loss.head,
        status,
    })
}
