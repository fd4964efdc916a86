//! Common utilities for component calculations.

use crate::error::{ComponentError, ComponentResult};
use hs_core::numeric::{ensure_finite, ensure_non_negative, ensure_positive};

/// Ensure a value is finite, returning ComponentError if not.
pub fn check_finite(value: f64, what: &'static str) -> ComponentResult<()> {
    ensure_finite(value, what).map_err(|_| ComponentError::NonPhysical { what })?;
    Ok(())
}

/// Validate a configuration value that must be finite and > 0.
pub fn check_positive(value: f64, what: &'static str) -> ComponentResult<f64> {
    ensure_positive(value, what).map_err(|_| ComponentError::InvalidArg { what })
}

/// Validate a configuration value that must be finite and >= 0.
pub fn check_non_negative(value: f64, what: &'static str) -> ComponentResult<f64> {
    ensure_non_negative(value, what).map_err(|_| ComponentError::InvalidArg { what })
}

/// Area of a circle of the given radius (m²).
pub fn circle_area(radius: f64) -> f64 {
    std::f64::consts::PI * radius.powi(2)
}
