//! Open cylindrical tank filled from the top.

use crate::common::{check_finite, check_non_negative, check_positive, circle_area};
use crate::error::{ComponentError, ComponentResult};
use hs_core::units::{Area, Length, Time, VolumeRate, m};

/// How a fill step ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillOutcome {
    /// Level rose and is still below the rim.
    Filled,
    /// Level reached the rim and was clamped there.
    Overflowed,
}

/// Vertical cylindrical tank.
///
/// Invariant: `0 <= water_level <= height` after construction and after every
/// [`Tank::fill`].
#[derive(Clone, Debug)]
pub struct Tank {
    height: Length,
    radius: Length,
    water_level: Length,
}

impl Tank {
    /// Create an empty tank.
    pub fn new(height: Length, radius: Length) -> ComponentResult<Self> {
        Self::with_initial_level(height, radius, m(0.0))
    }

    /// Create a tank holding `water_level` of water.
    ///
    /// # Errors
    /// Returns error if height or radius is non-positive, or the level lies
    /// outside `[0, height]`.
    pub fn with_initial_level(
        height: Length,
        radius: Length,
        water_level: Length,
    ) -> ComponentResult<Self> {
        check_positive(height.value, "tank height must be positive")?;
        check_positive(radius.value, "tank radius must be positive")?;
        check_non_negative(water_level.value, "initial water level cannot be negative")?;
        if water_level > height {
            return Err(ComponentError::InvalidArg {
                what: "initial water level exceeds tank height",
            });
        }

        Ok(Self {
            height,
            radius,
            water_level,
        })
    }

    pub fn height(&self) -> Length {
        self.height
    }

    pub fn radius(&self) -> Length {
        self.radius
    }

    pub fn water_level(&self) -> Length {
        self.water_level
    }

    pub fn is_full(&self) -> bool {
        self.water_level >= self.height
    }

    /// Horizontal cross-section.
    pub fn cross_section(&self) -> Area {
        use uom::si::area::square_meter;
        Area::new::<square_meter>(circle_area(self.radius.value))
    }

    /// Integrate `inflow` over `dt` and clamp the level at the rim.
    ///
    /// The level rises by `Q / A · dt`. Reaching or passing the rim clamps the
    /// level to `height` and reports [`FillOutcome::Overflowed`], so a full tank
    /// keeps reporting overflow on every later step.
    ///
    /// # Errors
    /// `InvalidArg` for negative inflow or a non-positive time step.
    pub fn fill(&mut self, inflow: VolumeRate, dt: Time) -> ComponentResult<FillOutcome> {
        check_non_negative(inflow.value, "tank inflow cannot be negative")?;
        check_positive(dt.value, "time step must be positive")?;

        let rise = inflow.value / self.cross_section().value * dt.value;
        check_finite(rise, "level rise")?;

        let level = self.water_level.value + rise;
        if level >= self.height.value {
            self.water_level = self.height;
            Ok(FillOutcome::Overflowed)
        } else {
            self.water_level = m(level);
            Ok(FillOutcome::Filled)
        }
    }
}
