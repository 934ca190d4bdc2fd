//! Optimization objectives.
//!
//! The user checks one or more objectives. Their count decides which
//! algorithms apply, Hoisting unlocks the crane-radius constraint, and
//! Construction Cost forces the predetermined-locations layout.
//!
//! # Key Types
//!
//! - [`ObjectiveKind`]: the closed objective key set
//! - [`ObjectiveRegistry`]: checklist state with live record references
//! - [`ObjectiveConfigs`]: one record per objective
//! - [`ObjectiveConfigRef`]: a typed, shared reference to one record

mod config;
mod registry;
mod types;

pub use config::{
    ConstructionCostConfig, CranePlacement, HoistingConfig, RiskConfig, SafetyConfig,
    SafetyHazardConfig, TransportCostConfig,
};
pub use registry::{ObjectiveEntry, ObjectiveRegistry};
pub use types::{ObjectiveConfigRef, ObjectiveConfigs, ObjectiveKind};
