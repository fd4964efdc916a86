//! Fixed-step transient simulation of the pump-pipe-tank network.
//!
//! Provides:
//! - Single-tick state update (head loss, feasibility check, level integration)
//! - Lazy fixed-step driver yielding one record per tick
//! - Run summaries over recorded ticks

pub mod error;
pub mod sim;
pub mod step;
pub mod summary;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use sim::{SimOptions, SimRecord, SimRun, StepRecord, run_sim};
pub use step::{StepOutcome, StepStatus, update_tank};
pub use summary::RunSummary;
