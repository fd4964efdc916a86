//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered during transient simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },

    #[error("Component error: {0}")]
    Component(#[from] hs_components::ComponentError),
}

pub type SimResult<T> = Result<T, SimError>;

impl From<hs_core::error::HsError> for SimError {
    fn from(e: hs_core::error::HsError) -> Self {
        match e {
            hs_core::HsError::InvalidArg { what } => SimError::InvalidArg { what },
            hs_core::HsError::NonFinite { what, .. } => SimError::NonPhysical { what },
        }
    }
}
