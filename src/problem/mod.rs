//! Layout problem types.
//!
//! A single choice among continuous, grid, and predetermined-location
//! layouts. The choice narrows the constraint catalog.

mod config;
mod registry;
mod types;

pub use config::{ContinuousConfig, GridConfig, PredeterminedConfig};
pub use registry::ProblemRegistry;
pub use types::{ProblemConfigRef, ProblemConfigs, ProblemKind};
