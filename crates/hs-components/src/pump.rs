//! Pump component model.

use crate::common::check_non_negative;
use crate::error::ComponentResult;
use crate::pipe::Pipe;
use hs_core::constants::G_MPS2;
use hs_core::units::{Length, Power, VolumeRate, w};

/// Constant-flow pump.
///
/// Delivers a fixed volumetric flow at a fixed head. There is no performance
/// curve: flow does not drop as the head required by the pipe rises.
///
/// ## Power
///
/// ```text
/// P = ρ g Q H
/// ```
///
/// `ρ` is the fluid density carried by the connected pipe. The stored
/// `power` is derived state; it only changes through [`Pump::refresh_power`].
#[derive(Clone, Debug)]
pub struct Pump {
    flow_rate: VolumeRate,
    head: Length,
    power: Power,
}

impl Pump {
    /// Create a new pump with zero recorded power.
    ///
    /// # Arguments
    /// * `flow_rate` - Delivered volumetric flow (0 means idle)
    /// * `head` - Head the pump can develop
    ///
    /// # Errors
    /// Returns error if either value is negative or non-finite.
    pub fn new(flow_rate: VolumeRate, head: Length) -> ComponentResult<Self> {
        check_non_negative(flow_rate.value, "pump flow rate cannot be negative")?;
        check_non_negative(head.value, "pump head cannot be negative")?;

        Ok(Self {
            flow_rate,
            head,
            power: w(0.0),
        })
    }

    pub fn flow_rate(&self) -> VolumeRate {
        self.flow_rate
    }

    pub fn head(&self) -> Length {
        self.head
    }

    /// Power recorded by the last [`Pump::refresh_power`].
    pub fn power(&self) -> Power {
        self.power
    }

    /// Hydraulic power delivering `flow_rate` at `head` into `pipe`.
    pub fn hydraulic_power(&self, pipe: &Pipe) -> Power {
        w(pipe.density().value * G_MPS2 * self.flow_rate.value * self.head.value)
    }

    /// Recompute and store the hydraulic power.
    pub fn refresh_power(&mut self, pipe: &Pipe) -> Power {
        self.power = self.hydraulic_power(pipe);
        self.power
    }
}
