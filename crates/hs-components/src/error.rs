//! Error types for component operations.

use hs_core::error::HsError;
use thiserror::Error;

/// Errors that can occur during component construction or calculations.
///
/// `InvalidArg` covers rejected configuration (zero diameter, negative head).
/// `NonPhysical` covers values produced mid-calculation that a formula is not
/// defined for, such as a zero Reynolds number reaching the friction model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<HsError> for ComponentError {
    fn from(e: HsError) -> Self {
        match e {
            HsError::NonFinite { what, .. } => ComponentError::NonPhysical { what },
            HsError::InvalidArg { what } => ComponentError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ComponentError::NonPhysical {
            what: "reynolds number",
        };
        assert!(err.to_string().contains("reynolds number"));
    }

    #[test]
    fn error_conversion() {
        let core_err = HsError::InvalidArg { what: "test" };
        let comp_err: ComponentError = core_err.into();
        assert!(matches!(comp_err, ComponentError::InvalidArg { .. }));
    }
}
