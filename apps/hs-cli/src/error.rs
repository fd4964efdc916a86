//! Error types for the command line front end.

use std::path::PathBuf;

/// Wraps errors from the backend crates so `main` can report any of them.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Scenario error: {0}")]
    Project(#[from] hs_project::ProjectError),

    #[error("Invalid network: {0}")]
    Component(#[from] hs_components::ComponentError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] hs_sim::SimError),

    #[error("Refusing to overwrite existing file: {path}")]
    FileExists { path: PathBuf },

    #[error("Invalid real-time pacing: {0}")]
    Pacing(#[from] std::time::TryFromFloatSecsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
