//! Layout constraints.
//!
//! Constraints are soft: each adds `alpha * violation^power` to every
//! objective value. Which ones may be checked depends on the problem type
//! and the selected objectives.
//!
//! # Key Types
//!
//! - [`ConstraintKind`]: the closed constraint key set
//! - [`ConstraintRegistry`]: checklist state with the cross-registry filter
//! - [`InclusiveZoneConfig`] / [`InclusiveZone`]: zone rows addressable by id

mod config;
mod registry;
mod types;

pub use config::{
    CoverInCraneRadiusConfig, InclusiveZone, InclusiveZoneConfig, OutOfBoundConfig,
    OverlapConfig, SizeConfig,
};
pub use registry::{ConstraintEntry, ConstraintRegistry};
pub use types::{ConstraintConfigRef, ConstraintConfigs, ConstraintKind};
