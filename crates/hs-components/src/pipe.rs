//! Pipe component with friction using Darcy-Weisbach correlation.

use crate::common::{check_finite, check_non_negative, check_positive, circle_area};
use crate::error::{ComponentError, ComponentResult};
use crate::friction::friction_factor;
use hs_core::constants::{G_MPS2, MU_WATER_PA_S};
use hs_core::units::{Area, Density, Length, Velocity, VolumeRate, m, mps};

/// Result of a head-loss evaluation.
///
/// The pipe itself holds no flow state; velocity and Reynolds number for a
/// given flow are returned here so callers can record them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadLoss {
    /// Friction head loss as an equivalent fluid column
    pub head: Length,
    /// Mean velocity in the pipe
    pub velocity: Velocity,
    /// Reynolds number (0 for zero flow)
    pub reynolds: f64,
}

impl HeadLoss {
    /// Head loss of an idle pipe.
    pub fn zero() -> Self {
        Self {
            head: m(0.0),
            velocity: mps(0.0),
            reynolds: 0.0,
        }
    }
}

/// Straight pipe carrying an incompressible fluid.
///
/// Friction losses use the Darcy-Weisbach equation with a two-regime friction
/// factor and a fixed viscosity of [`MU_WATER_PA_S`].
#[derive(Debug, Clone)]
pub struct Pipe {
    length: Length,
    diameter: Length,
    roughness: f64,
    density: Density,
}

impl Pipe {
    /// Create a new pipe.
    ///
    /// # Arguments
    /// * `length` - Pipe length
    /// * `diameter` - Pipe inner diameter
    /// * `roughness` - Surface roughness (dimensionless). Stored only; no
    ///   formula in this model reads it.
    /// * `density` - Density of the conveyed liquid, not of the pipe wall
    ///
    /// # Errors
    /// Returns error if geometry or density is non-positive, or roughness is
    /// negative.
    pub fn new(
        length: Length,
        diameter: Length,
        roughness: f64,
        density: Density,
    ) -> ComponentResult<Self> {
        check_positive(length.value, "pipe length must be positive")?;
        check_positive(diameter.value, "pipe diameter must be positive")?;
        check_non_negative(roughness, "pipe roughness cannot be negative")?;
        check_positive(density.value, "fluid density must be positive")?;

        Ok(Self {
            length,
            diameter,
            roughness,
            density,
        })
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn diameter(&self) -> Length {
        self.diameter
    }

    pub fn roughness(&self) -> f64 {
        self.roughness
    }

    /// Density of the fluid in the pipe.
    pub fn density(&self) -> Density {
        self.density
    }

    /// Internal flow area.
    pub fn flow_area(&self) -> Area {
        use uom::si::area::square_meter;
        Area::new::<square_meter>(circle_area(self.diameter.value / 2.0))
    }

    /// Compute friction head loss for a volumetric flow rate.
    ///
    /// ```text
    /// v  = Q / (π (D/2)²)
    /// Re = ρ v D / μ
    /// hL = f(Re) · (L/D) · v² / (2 g)
    /// ```
    ///
    /// Zero flow is a legitimate idle state and returns [`HeadLoss::zero`]
    /// without consulting the friction model.
    ///
    /// # Errors
    /// `InvalidArg` for negative or non-finite flow.
    pub fn head_loss(&self, flow_rate: VolumeRate) -> ComponentResult<HeadLoss> {
        let q = flow_rate.value;
        check_finite(q, "flow rate")?;
        if q < 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "flow rate cannot be negative",
            });
        }
        if q == 0.0 {
            return Ok(HeadLoss::zero());
        }

        let d = self.diameter.value;
        let velocity = q / self.flow_area().value;
        let reynolds = self.density.value * velocity * d / MU_WATER_PA_S;

        check_finite(reynolds, "Reynolds number")?;

        let f = friction_factor(reynolds)?;
        let head = f * (self.length.value / d) * velocity.powi(2) / (2.0 * G_MPS2);

        check_finite(head, "head loss")?;

        Ok(HeadLoss {
            head: m(head),
            velocity: mps(velocity),
            reynolds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::friction::TURBULENT_FRICTION_FACTOR;
    use hs_core::units::{kgpm3, m3ps};

    fn reference_pipe() -> Pipe {
        Pipe::new(m(50.0), m(0.1), 0.015, kgpm3(1000.0)).unwrap()
    }

    #[test]
    fn pipe_zero_flow_has_zero_loss() {
        let loss = reference_pipe().head_loss(m3ps(0.0)).unwrap();
        assert_eq!(loss, HeadLoss::zero());
        assert_eq!(loss.head.value, 0.0);
    }

    #[test]
    fn pipe_reference_flow_is_turbulent() {
        let loss = reference_pipe().head_loss(m3ps(0.01)).unwrap();

        let v = 0.01 / (std::f64::consts::PI * 0.05 * 0.05);
        assert!((loss.velocity.value - v).abs() < 1e-12);
        assert!((loss.reynolds - 1000.0 * v * 0.1 / 0.001).abs() < 1e-6);

        let expected = TURBULENT_FRICTION_FACTOR * 500.0 * v * v / (2.0 * 9.81);
        assert!((loss.head.value - expected).abs() < 1e-12);
        assert!(loss.head.value > 0.8 && loss.head.value < 0.85);
    }

    #[test]
    fn pipe_laminar_flow_uses_64_over_re() {
        let pipe = reference_pipe();
        let loss = pipe.head_loss(m3ps(1.0e-6)).unwrap();
        assert!(loss.reynolds < 2000.0);

        let v = loss.velocity.value;
        let expected = (64.0 / loss.reynolds) * 500.0 * v * v / (2.0 * 9.81);
        assert!((loss.head.value - expected).abs() < 1e-15);
    }

    #[test]
    fn pipe_negative_flow_rejected() {
        assert!(matches!(
            reference_pipe().head_loss(m3ps(-0.01)),
            Err(ComponentError::InvalidArg { .. })
        ));
    }

    #[test]
    fn pipe_invalid_geometry_rejected() {
        assert!(Pipe::new(m(0.0), m(0.1), 0.0, kgpm3(1000.0)).is_err());
        assert!(Pipe::new(m(50.0), m(0.0), 0.0, kgpm3(1000.0)).is_err());
        assert!(Pipe::new(m(50.0), m(0.1), -0.1, kgpm3(1000.0)).is_err());
        assert!(Pipe::new(m(50.0), m(0.1), 0.0, kgpm3(0.0)).is_err());
        assert!(Pipe::new(m(f64::NAN), m(0.1), 0.0, kgpm3(1000.0)).is_err());
    }

    #[test]
    fn pipe_roughness_does_not_affect_loss() {
        let smooth = Pipe::new(m(50.0), m(0.1), 0.0, kgpm3(1000.0)).unwrap();
        let rough = Pipe::new(m(50.0), m(0.1), 0.5, kgpm3(1000.0)).unwrap();
        assert_eq!(
            smooth.head_loss(m3ps(0.01)).unwrap(),
            rough.head_loss(m3ps(0.01)).unwrap()
        );
    }

    #[test]
    fn pipe_longer_means_more_loss() {
        let short = Pipe::new(m(5.0), m(0.1), 0.0, kgpm3(1000.0)).unwrap();
        let long = Pipe::new(m(20.0), m(0.1), 0.0, kgpm3(1000.0)).unwrap();

        let q = m3ps(0.01);
        assert!(long.head_loss(q).unwrap().head > short.head_loss(q).unwrap().head);
    }
}
