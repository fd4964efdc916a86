//! hs-components: component library for the pump-pipe-tank network.
//!
//! Provides models for the three flow elements:
//! - Pipes with Darcy-Weisbach friction losses
//! - Constant-flow pumps with hydraulic power
//! - Open cylindrical tanks that integrate inflow into a water level
//!
//! All formulas are closed-form. There is no iterative friction solve and no
//! network balancing.
//!
//! # Example
//!
//! ```
//! use hs_components::{Pipe, Pump};
//! use hs_core::units::{kgpm3, m, m3ps};
//!
//! let pipe = Pipe::new(m(50.0), m(0.1), 0.015, kgpm3(1000.0)).unwrap();
//! let pump = Pump::new(m3ps(0.01), m(10.0)).unwrap();
//!
//! let loss = pipe.head_loss(pump.flow_rate()).unwrap();
//! assert!(loss.head < pump.head());
//! println!("Head loss: {:.3} m", loss.head.value);
//! ```

pub mod common;
pub mod error;
pub mod friction;
pub mod pipe;
pub mod pump;
pub mod tank;

// Re-exports
pub use error::{ComponentError, ComponentResult};
pub use friction::{FlowRegime, flow_regime, friction_factor};
pub use pipe::{HeadLoss, Pipe};
pub use pump::Pump;
pub use tank::{FillOutcome, Tank};
