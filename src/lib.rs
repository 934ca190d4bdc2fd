//! Selection and configuration core for construction-layout optimization.
//!
//! A layout job is described by four choices, each backed by typed
//! configuration records:
//!
//! - **Objectives** (checklist): risk, hoisting, safety, safety hazard,
//!   transport cost, construction cost.
//! - **Problem** (one of): continuous, grid, or predetermined-location
//!   layout.
//! - **Algorithm** (one of): single-objective GA, AHA, GWO or
//!   multi-objective MOAHA, oMOAHA, MOPSO, NSGA-II.
//! - **Constraints** (checklist): out of boundary, overlap, cover in crane
//!   radius, inclusive zone, size.
//!
//! Choices depend on each other in a fixed order. The objective count picks
//! the algorithm arity, Construction Cost forces the predetermined layout,
//! the predetermined layout admits only the size constraint, and the crane
//! radius constraint needs the hoisting objective. Valid subsets are
//! recomputed on every read and never clear an earlier choice.
//!
//! # Architecture
//!
//! - [`store`]: one shared record per key, handed out as [`store::ConfigHandle`]
//! - [`objective`], [`problem`], [`algorithm`], [`constraint`]: per-category
//!   keys, records, and registries
//! - [`setup`]: the aggregate a UI drives, producing a [`job::JobRequest`]
//! - [`wizard`]: position in the six-step setup flow

pub mod algorithm;
pub mod constraint;
pub mod entity;
pub mod error;
pub mod job;
pub mod logging;
pub mod objective;
pub mod problem;
pub mod selection;
pub mod setup;
pub mod store;
pub mod wizard;
