//! Algorithm keys and the algorithm dispatch map.

use super::config::{
    AhaConfig, GaConfig, GwoConfig, MoahaConfig, MopsoConfig, NsgaIiConfig, OMoahaConfig,
};
use crate::error::{ConfigError, SetupError};
use crate::selection::{Category, CategoryKey};
use crate::store::ConfigHandle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many objectives an algorithm optimizes at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly one objective.
    Single,
    /// Two or more objectives, producing a Pareto front.
    Multi,
}

/// Broad algorithm family, mirroring how records size their search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Evolutionary: chromosomes over generations.
    Biology,
    /// Swarm: agents over iterations.
    Swarm,
}

/// The closed set of optimization algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmKind {
    #[serde(rename = "GA")]
    Ga,
    #[serde(rename = "AHA")]
    Aha,
    #[serde(rename = "GWO")]
    Gwo,
    #[serde(rename = "MOAHA")]
    Moaha,
    #[serde(rename = "oMOAHA")]
    OMoaha,
    #[serde(rename = "MOPSO")]
    Mopso,
    #[serde(rename = "NSGA-II")]
    NsgaIi,
}

impl AlgorithmKind {
    pub fn arity(self) -> Arity {
        match self {
            AlgorithmKind::Ga | AlgorithmKind::Aha | AlgorithmKind::Gwo => Arity::Single,
            AlgorithmKind::Moaha
            | AlgorithmKind::OMoaha
            | AlgorithmKind::Mopso
            | AlgorithmKind::NsgaIi => Arity::Multi,
        }
    }

    pub fn family(self) -> Family {
        match self {
            AlgorithmKind::Ga | AlgorithmKind::NsgaIi => Family::Biology,
            AlgorithmKind::Aha
            | AlgorithmKind::Gwo
            | AlgorithmKind::Moaha
            | AlgorithmKind::OMoaha
            | AlgorithmKind::Mopso => Family::Swarm,
        }
    }
}

impl CategoryKey for AlgorithmKind {
    const CATEGORY: Category = Category::Algorithm;

    fn all() -> &'static [Self] {
        &[
            AlgorithmKind::Ga,
            AlgorithmKind::Aha,
            AlgorithmKind::Gwo,
            AlgorithmKind::Moaha,
            AlgorithmKind::OMoaha,
            AlgorithmKind::Mopso,
            AlgorithmKind::NsgaIi,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            AlgorithmKind::Ga => "GA",
            AlgorithmKind::Aha => "AHA",
            AlgorithmKind::Gwo => "GWO",
            AlgorithmKind::Moaha => "MOAHA",
            AlgorithmKind::OMoaha => "oMOAHA",
            AlgorithmKind::Mopso => "MOPSO",
            AlgorithmKind::NsgaIi => "NSGA-II",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AlgorithmKind::Ga => "Genetic Algorithm",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKind {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| SetupError::unknown_key(Self::CATEGORY, s))
    }
}

/// A shared reference to one algorithm's configuration record.
#[derive(Debug, Clone)]
pub enum AlgorithmConfigRef {
    Ga(ConfigHandle<GaConfig>),
    Aha(ConfigHandle<AhaConfig>),
    Gwo(ConfigHandle<GwoConfig>),
    Moaha(ConfigHandle<MoahaConfig>),
    OMoaha(ConfigHandle<OMoahaConfig>),
    Mopso(ConfigHandle<MopsoConfig>),
    NsgaIi(ConfigHandle<NsgaIiConfig>),
}

impl AlgorithmConfigRef {
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            AlgorithmConfigRef::Ga(_) => AlgorithmKind::Ga,
            AlgorithmConfigRef::Aha(_) => AlgorithmKind::Aha,
            AlgorithmConfigRef::Gwo(_) => AlgorithmKind::Gwo,
            AlgorithmConfigRef::Moaha(_) => AlgorithmKind::Moaha,
            AlgorithmConfigRef::OMoaha(_) => AlgorithmKind::OMoaha,
            AlgorithmConfigRef::Mopso(_) => AlgorithmKind::Mopso,
            AlgorithmConfigRef::NsgaIi(_) => AlgorithmKind::NsgaIi,
        }
    }

    pub fn same_record(&self, other: &Self) -> bool {
        match (self, other) {
            (AlgorithmConfigRef::Ga(a), AlgorithmConfigRef::Ga(b)) => a.ptr_eq(b),
            (AlgorithmConfigRef::Aha(a), AlgorithmConfigRef::Aha(b)) => a.ptr_eq(b),
            (AlgorithmConfigRef::Gwo(a), AlgorithmConfigRef::Gwo(b)) => a.ptr_eq(b),
            (AlgorithmConfigRef::Moaha(a), AlgorithmConfigRef::Moaha(b)) => a.ptr_eq(b),
            (AlgorithmConfigRef::OMoaha(a), AlgorithmConfigRef::OMoaha(b)) => a.ptr_eq(b),
            (AlgorithmConfigRef::Mopso(a), AlgorithmConfigRef::Mopso(b)) => a.ptr_eq(b),
            (AlgorithmConfigRef::NsgaIi(a), AlgorithmConfigRef::NsgaIi(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Whether the record is being written right now.
    pub fn in_use(&self) -> bool {
        match self {
            AlgorithmConfigRef::Ga(h) => h.is_in_use(),
            AlgorithmConfigRef::Aha(h) => h.is_in_use(),
            AlgorithmConfigRef::Gwo(h) => h.is_in_use(),
            AlgorithmConfigRef::Moaha(h) => h.is_in_use(),
            AlgorithmConfigRef::OMoaha(h) => h.is_in_use(),
            AlgorithmConfigRef::Mopso(h) => h.is_in_use(),
            AlgorithmConfigRef::NsgaIi(h) => h.is_in_use(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            AlgorithmConfigRef::Ga(h) => h.borrow().validate(),
            AlgorithmConfigRef::Aha(h) => h.borrow().validate(),
            AlgorithmConfigRef::Gwo(h) => h.borrow().validate(),
            AlgorithmConfigRef::Moaha(h) => h.borrow().validate(),
            AlgorithmConfigRef::OMoaha(h) => h.borrow().validate(),
            AlgorithmConfigRef::Mopso(h) => h.borrow().validate(),
            AlgorithmConfigRef::NsgaIi(h) => h.borrow().validate(),
        }
    }

    pub fn to_payload(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            AlgorithmConfigRef::Ga(h) => h.to_payload(),
            AlgorithmConfigRef::Aha(h) => h.to_payload(),
            AlgorithmConfigRef::Gwo(h) => h.to_payload(),
            AlgorithmConfigRef::Moaha(h) => h.to_payload(),
            AlgorithmConfigRef::OMoaha(h) => h.to_payload(),
            AlgorithmConfigRef::Mopso(h) => h.to_payload(),
            AlgorithmConfigRef::NsgaIi(h) => h.to_payload(),
        }
    }
}

/// One configuration record per [`AlgorithmKind`].
#[derive(Debug, Clone, Default)]
pub struct AlgorithmConfigs {
    ga: ConfigHandle<GaConfig>,
    aha: ConfigHandle<AhaConfig>,
    gwo: ConfigHandle<GwoConfig>,
    moaha: ConfigHandle<MoahaConfig>,
    omoaha: ConfigHandle<OMoahaConfig>,
    mopso: ConfigHandle<MopsoConfig>,
    nsgaii: ConfigHandle<NsgaIiConfig>,
}

impl AlgorithmConfigs {
    pub fn get(&self, kind: AlgorithmKind) -> AlgorithmConfigRef {
        match kind {
            AlgorithmKind::Ga => AlgorithmConfigRef::Ga(self.ga.clone()),
            AlgorithmKind::Aha => AlgorithmConfigRef::Aha(self.aha.clone()),
            AlgorithmKind::Gwo => AlgorithmConfigRef::Gwo(self.gwo.clone()),
            AlgorithmKind::Moaha => AlgorithmConfigRef::Moaha(self.moaha.clone()),
            AlgorithmKind::OMoaha => AlgorithmConfigRef::OMoaha(self.omoaha.clone()),
            AlgorithmKind::Mopso => AlgorithmConfigRef::Mopso(self.mopso.clone()),
            AlgorithmKind::NsgaIi => AlgorithmConfigRef::NsgaIi(self.nsgaii.clone()),
        }
    }

    pub fn ga(&self) -> &ConfigHandle<GaConfig> {
        &self.ga
    }

    pub fn aha(&self) -> &ConfigHandle<AhaConfig> {
        &self.aha
    }

    pub fn gwo(&self) -> &ConfigHandle<GwoConfig> {
        &self.gwo
    }

    pub fn moaha(&self) -> &ConfigHandle<MoahaConfig> {
        &self.moaha
    }

    pub fn omoaha(&self) -> &ConfigHandle<OMoahaConfig> {
        &self.omoaha
    }

    pub fn mopso(&self) -> &ConfigHandle<MopsoConfig> {
        &self.mopso
    }

    pub fn nsgaii(&self) -> &ConfigHandle<NsgaIiConfig> {
        &self.nsgaii
    }
}
