//! Objective keys and the objective dispatch map.

use super::config::{
    ConstructionCostConfig, HoistingConfig, RiskConfig, SafetyConfig, SafetyHazardConfig,
    TransportCostConfig,
};
use crate::error::{ConfigError, SetupError};
use crate::selection::{Category, CategoryKey};
use crate::store::ConfigHandle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of optimization objectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectiveKind {
    #[serde(rename = "Risk Objective")]
    Risk,
    #[serde(rename = "Hoisting Objective")]
    Hoisting,
    #[serde(rename = "Safety Objective")]
    Safety,
    #[serde(rename = "Safety Hazard Objective")]
    SafetyHazard,
    #[serde(rename = "Transport Cost Objective")]
    TransportCost,
    #[serde(rename = "Construction Cost Objective")]
    ConstructionCost,
}

impl ObjectiveKind {
    /// One-line explanation shown next to the checkbox.
    pub fn description(self) -> &'static str {
        match self {
            ObjectiveKind::Risk => "What is Risk Objective and How to calculate it?",
            ObjectiveKind::Hoisting => "What is Hoisting and How to calculate it?",
            ObjectiveKind::Safety => "What is Safety Objective and How to calculate it?",
            ObjectiveKind::SafetyHazard => {
                "What is Safety Hazard Objective and How to calculate it?"
            }
            ObjectiveKind::TransportCost => {
                "What is Transport Cost Objective and How to calculate it?"
            }
            ObjectiveKind::ConstructionCost => {
                "What is Construction Cost Objective and How to calculate it?"
            }
        }
    }
}

impl CategoryKey for ObjectiveKind {
    const CATEGORY: Category = Category::Objective;

    fn all() -> &'static [Self] {
        &[
            ObjectiveKind::Risk,
            ObjectiveKind::Hoisting,
            ObjectiveKind::Safety,
            ObjectiveKind::SafetyHazard,
            ObjectiveKind::TransportCost,
            ObjectiveKind::ConstructionCost,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            ObjectiveKind::Risk => "Risk Objective",
            ObjectiveKind::Hoisting => "Hoisting Objective",
            ObjectiveKind::Safety => "Safety Objective",
            ObjectiveKind::SafetyHazard => "Safety Hazard Objective",
            ObjectiveKind::TransportCost => "Transport Cost Objective",
            ObjectiveKind::ConstructionCost => "Construction Cost Objective",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ObjectiveKind::Risk => "Risk",
            ObjectiveKind::Hoisting => "Hoisting",
            ObjectiveKind::Safety => "Safety",
            ObjectiveKind::SafetyHazard => "Safety Hazard",
            ObjectiveKind::TransportCost => "Transport Cost",
            ObjectiveKind::ConstructionCost => "Construction Cost",
        }
    }
}

impl fmt::Display for ObjectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectiveKind {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| SetupError::unknown_key(Self::CATEGORY, s))
    }
}

/// A shared reference to one objective's configuration record.
///
/// Matching on the variant recovers the record's concrete type.
#[derive(Debug, Clone)]
pub enum ObjectiveConfigRef {
    Risk(ConfigHandle<RiskConfig>),
    Hoisting(ConfigHandle<HoistingConfig>),
    Safety(ConfigHandle<SafetyConfig>),
    SafetyHazard(ConfigHandle<SafetyHazardConfig>),
    TransportCost(ConfigHandle<TransportCostConfig>),
    ConstructionCost(ConfigHandle<ConstructionCostConfig>),
}

impl ObjectiveConfigRef {
    pub fn kind(&self) -> ObjectiveKind {
        match self {
            ObjectiveConfigRef::Risk(_) => ObjectiveKind::Risk,
            ObjectiveConfigRef::Hoisting(_) => ObjectiveKind::Hoisting,
            ObjectiveConfigRef::Safety(_) => ObjectiveKind::Safety,
            ObjectiveConfigRef::SafetyHazard(_) => ObjectiveKind::SafetyHazard,
            ObjectiveConfigRef::TransportCost(_) => ObjectiveKind::TransportCost,
            ObjectiveConfigRef::ConstructionCost(_) => ObjectiveKind::ConstructionCost,
        }
    }

    /// Whether both references point at the same record.
    pub fn same_record(&self, other: &Self) -> bool {
        match (self, other) {
            (ObjectiveConfigRef::Risk(a), ObjectiveConfigRef::Risk(b)) => a.ptr_eq(b),
            (ObjectiveConfigRef::Hoisting(a), ObjectiveConfigRef::Hoisting(b)) => a.ptr_eq(b),
            (ObjectiveConfigRef::Safety(a), ObjectiveConfigRef::Safety(b)) => a.ptr_eq(b),
            (ObjectiveConfigRef::SafetyHazard(a), ObjectiveConfigRef::SafetyHazard(b)) => {
                a.ptr_eq(b)
            }
            (ObjectiveConfigRef::TransportCost(a), ObjectiveConfigRef::TransportCost(b)) => {
                a.ptr_eq(b)
            }
            (ObjectiveConfigRef::ConstructionCost(a), ObjectiveConfigRef::ConstructionCost(b)) => {
                a.ptr_eq(b)
            }
            _ => false,
        }
    }

    /// Whether the record is being written right now.
    pub fn in_use(&self) -> bool {
        match self {
            ObjectiveConfigRef::Risk(h) => h.is_in_use(),
            ObjectiveConfigRef::Hoisting(h) => h.is_in_use(),
            ObjectiveConfigRef::Safety(h) => h.is_in_use(),
            ObjectiveConfigRef::SafetyHazard(h) => h.is_in_use(),
            ObjectiveConfigRef::TransportCost(h) => h.is_in_use(),
            ObjectiveConfigRef::ConstructionCost(h) => h.is_in_use(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            ObjectiveConfigRef::Risk(h) => h.borrow().validate(),
            ObjectiveConfigRef::Hoisting(h) => h.borrow().validate(),
            ObjectiveConfigRef::Safety(h) => h.borrow().validate(),
            ObjectiveConfigRef::SafetyHazard(h) => h.borrow().validate(),
            ObjectiveConfigRef::TransportCost(h) => h.borrow().validate(),
            ObjectiveConfigRef::ConstructionCost(h) => h.borrow().validate(),
        }
    }

    /// Renders the record as it is now.
    pub fn to_payload(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            ObjectiveConfigRef::Risk(h) => h.to_payload(),
            ObjectiveConfigRef::Hoisting(h) => h.to_payload(),
            ObjectiveConfigRef::Safety(h) => h.to_payload(),
            ObjectiveConfigRef::SafetyHazard(h) => h.to_payload(),
            ObjectiveConfigRef::TransportCost(h) => h.to_payload(),
            ObjectiveConfigRef::ConstructionCost(h) => h.to_payload(),
        }
    }
}

/// One configuration record per [`ObjectiveKind`].
#[derive(Debug, Clone, Default)]
pub struct ObjectiveConfigs {
    risk: ConfigHandle<RiskConfig>,
    hoisting: ConfigHandle<HoistingConfig>,
    safety: ConfigHandle<SafetyConfig>,
    safety_hazard: ConfigHandle<SafetyHazardConfig>,
    transport_cost: ConfigHandle<TransportCostConfig>,
    construction_cost: ConfigHandle<ConstructionCostConfig>,
}

impl ObjectiveConfigs {
    /// Returns the live record for `kind`.
    pub fn get(&self, kind: ObjectiveKind) -> ObjectiveConfigRef {
        match kind {
            ObjectiveKind::Risk => ObjectiveConfigRef::Risk(self.risk.clone()),
            ObjectiveKind::Hoisting => ObjectiveConfigRef::Hoisting(self.hoisting.clone()),
            ObjectiveKind::Safety => ObjectiveConfigRef::Safety(self.safety.clone()),
            ObjectiveKind::SafetyHazard => {
                ObjectiveConfigRef::SafetyHazard(self.safety_hazard.clone())
            }
            ObjectiveKind::TransportCost => {
                ObjectiveConfigRef::TransportCost(self.transport_cost.clone())
            }
            ObjectiveKind::ConstructionCost => {
                ObjectiveConfigRef::ConstructionCost(self.construction_cost.clone())
            }
        }
    }

    pub fn risk(&self) -> &ConfigHandle<RiskConfig> {
        &self.risk
    }

    pub fn hoisting(&self) -> &ConfigHandle<HoistingConfig> {
        &self.hoisting
    }

    pub fn safety(&self) -> &ConfigHandle<SafetyConfig> {
        &self.safety
    }

    pub fn safety_hazard(&self) -> &ConfigHandle<SafetyHazardConfig> {
        &self.safety_hazard
    }

    pub fn transport_cost(&self) -> &ConfigHandle<TransportCostConfig> {
        &self.transport_cost
    }

    pub fn construction_cost(&self) -> &ConfigHandle<ConstructionCostConfig> {
        &self.construction_cost
    }
}
