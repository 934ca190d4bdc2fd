//! Optimization algorithms.
//!
//! Single-objective algorithms (GA, AHA, GWO) apply when exactly one
//! objective is selected; multi-objective ones (MOAHA, oMOAHA, MOPSO,
//! NSGA-II) when two or more are.
//!
//! # Key Types
//!
//! - [`AlgorithmKind`]: the closed algorithm key set, with [`Arity`] and [`Family`]
//! - [`AlgorithmRegistry`]: single-choice state
//! - [`AlgorithmConfigs`] / [`AlgorithmConfigRef`]: typed record dispatch
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Mirjalili, Mirjalili & Lewis (2014), "Grey Wolf Optimizer"
//! - Zhao, Wang & Mirjalili (2022), "Artificial hummingbird algorithm"
//! - Coello, Pulido & Lechuga (2004), "Handling multiple objectives with particle swarm optimization"
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

mod config;
mod registry;
mod types;

pub use config::{
    AhaConfig, GaConfig, GwoConfig, MoahaConfig, MopsoConfig, NsgaIiConfig, OMoahaConfig,
};
pub use registry::{required_arity, valid_algorithms, AlgorithmRegistry};
pub use types::{AlgorithmConfigRef, AlgorithmConfigs, AlgorithmKind, Arity, Family};
