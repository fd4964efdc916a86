//! Two-regime Darcy friction factor.
//!
//! Laminar flow uses the analytic `64 / Re`. Everything at or above the
//! laminar limit uses a fixed factor of 0.02, a typical turbulent value
//! standing in for a Colebrook-White correlation. The fixed factor ignores
//! pipe roughness and Reynolds number.

use crate::common::check_finite;
use crate::error::{ComponentError, ComponentResult};

/// Reynolds number below which flow is treated as laminar.
pub const LAMINAR_LIMIT: f64 = 2000.0;

/// Friction factor used for all non-laminar flow.
pub const TURBULENT_FRICTION_FACTOR: f64 = 0.02;

/// Flow regime selected by [`friction_factor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

/// Classify a Reynolds number.
pub fn flow_regime(reynolds: f64) -> FlowRegime {
    if reynolds < LAMINAR_LIMIT {
        FlowRegime::Laminar
    } else {
        FlowRegime::Turbulent
    }
}

/// Darcy friction factor for the given Reynolds number.
///
/// # Errors
/// `NonPhysical` if `reynolds` is not finite or not strictly positive. Zero
/// flow must be handled by the caller before getting here.
pub fn friction_factor(reynolds: f64) -> ComponentResult<f64> {
    check_finite(reynolds, "reynolds number")?;
    if reynolds <= 0.0 {
        return Err(ComponentError::NonPhysical {
            what: "reynolds number must be positive",
        });
    }

    Ok(match flow_regime(reynolds) {
        FlowRegime::Laminar => 64.0 / reynolds,
        FlowRegime::Turbulent => TURBULENT_FRICTION_FACTOR,
    })
}
