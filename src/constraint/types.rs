//! Constraint keys and the constraint dispatch map.

use super::config::{
    CoverInCraneRadiusConfig, InclusiveZoneConfig, OutOfBoundConfig, OverlapConfig, SizeConfig,
};
use crate::error::{ConfigError, SetupError};
use crate::selection::{Category, CategoryKey};
use crate::store::ConfigHandle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of layout constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintKind {
    OutOfBound,
    Overlap,
    CoverInCraneRadius,
    InclusiveZone,
    Size,
}

impl CategoryKey for ConstraintKind {
    const CATEGORY: Category = Category::Constraint;

    fn all() -> &'static [Self] {
        &[
            ConstraintKind::OutOfBound,
            ConstraintKind::Overlap,
            ConstraintKind::CoverInCraneRadius,
            ConstraintKind::InclusiveZone,
            ConstraintKind::Size,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            ConstraintKind::OutOfBound => "OutOfBound",
            ConstraintKind::Overlap => "Overlap",
            ConstraintKind::CoverInCraneRadius => "CoverInCraneRadius",
            ConstraintKind::InclusiveZone => "InclusiveZone",
            ConstraintKind::Size => "Size",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ConstraintKind::OutOfBound => "Out of boundary",
            ConstraintKind::Overlap => "Overlap",
            ConstraintKind::CoverInCraneRadius => "Cover in crane radius",
            ConstraintKind::InclusiveZone => "Inclusive zone",
            ConstraintKind::Size => "Size",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConstraintKind {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| SetupError::unknown_key(Self::CATEGORY, s))
    }
}

/// A shared reference to one constraint's configuration record.
#[derive(Debug, Clone)]
pub enum ConstraintConfigRef {
    OutOfBound(ConfigHandle<OutOfBoundConfig>),
    Overlap(ConfigHandle<OverlapConfig>),
    CoverInCraneRadius(ConfigHandle<CoverInCraneRadiusConfig>),
    InclusiveZone(ConfigHandle<InclusiveZoneConfig>),
    Size(ConfigHandle<SizeConfig>),
}

impl ConstraintConfigRef {
    pub fn kind(&self) -> ConstraintKind {
        match self {
            ConstraintConfigRef::OutOfBound(_) => ConstraintKind::OutOfBound,
            ConstraintConfigRef::Overlap(_) => ConstraintKind::Overlap,
            ConstraintConfigRef::CoverInCraneRadius(_) => ConstraintKind::CoverInCraneRadius,
            ConstraintConfigRef::InclusiveZone(_) => ConstraintKind::InclusiveZone,
            ConstraintConfigRef::Size(_) => ConstraintKind::Size,
        }
    }

    pub fn same_record(&self, other: &Self) -> bool {
        match (self, other) {
            (ConstraintConfigRef::OutOfBound(a), ConstraintConfigRef::OutOfBound(b)) => {
                a.ptr_eq(b)
            }
            (ConstraintConfigRef::Overlap(a), ConstraintConfigRef::Overlap(b)) => a.ptr_eq(b),
            (
                ConstraintConfigRef::CoverInCraneRadius(a),
                ConstraintConfigRef::CoverInCraneRadius(b),
            ) => a.ptr_eq(b),
            (ConstraintConfigRef::InclusiveZone(a), ConstraintConfigRef::InclusiveZone(b)) => {
                a.ptr_eq(b)
            }
            (ConstraintConfigRef::Size(a), ConstraintConfigRef::Size(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Whether the record is being written right now.
    pub fn in_use(&self) -> bool {
        match self {
            ConstraintConfigRef::OutOfBound(h) => h.is_in_use(),
            ConstraintConfigRef::Overlap(h) => h.is_in_use(),
            ConstraintConfigRef::CoverInCraneRadius(h) => h.is_in_use(),
            ConstraintConfigRef::InclusiveZone(h) => h.is_in_use(),
            ConstraintConfigRef::Size(h) => h.is_in_use(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            ConstraintConfigRef::OutOfBound(h) => h.borrow().validate(),
            ConstraintConfigRef::Overlap(h) => h.borrow().validate(),
            ConstraintConfigRef::CoverInCraneRadius(h) => h.borrow().validate(),
            ConstraintConfigRef::InclusiveZone(h) => h.borrow().validate(),
            ConstraintConfigRef::Size(h) => h.borrow().validate(),
        }
    }

    pub fn to_payload(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            ConstraintConfigRef::OutOfBound(h) => h.to_payload(),
            ConstraintConfigRef::Overlap(h) => h.to_payload(),
            ConstraintConfigRef::CoverInCraneRadius(h) => h.to_payload(),
            ConstraintConfigRef::InclusiveZone(h) => h.to_payload(),
            ConstraintConfigRef::Size(h) => h.to_payload(),
        }
    }
}

/// One configuration record per [`ConstraintKind`].
#[derive(Debug, Clone, Default)]
pub struct ConstraintConfigs {
    out_of_bound: ConfigHandle<OutOfBoundConfig>,
    overlap: ConfigHandle<OverlapConfig>,
    cover_in_crane_radius: ConfigHandle<CoverInCraneRadiusConfig>,
    inclusive_zone: ConfigHandle<InclusiveZoneConfig>,
    size: ConfigHandle<SizeConfig>,
}

impl ConstraintConfigs {
    pub fn get(&self, kind: ConstraintKind) -> ConstraintConfigRef {
        match kind {
            ConstraintKind::OutOfBound => {
                ConstraintConfigRef::OutOfBound(self.out_of_bound.clone())
            }
            ConstraintKind::Overlap => ConstraintConfigRef::Overlap(self.overlap.clone()),
            ConstraintKind::CoverInCraneRadius => {
                ConstraintConfigRef::CoverInCraneRadius(self.cover_in_crane_radius.clone())
            }
            ConstraintKind::InclusiveZone => {
                ConstraintConfigRef::InclusiveZone(self.inclusive_zone.clone())
            }
            ConstraintKind::Size => ConstraintConfigRef::Size(self.size.clone()),
        }
    }

    pub fn out_of_bound(&self) -> &ConfigHandle<OutOfBoundConfig> {
        &self.out_of_bound
    }

    pub fn overlap(&self) -> &ConfigHandle<OverlapConfig> {
        &self.overlap
    }

    pub fn cover_in_crane_radius(&self) -> &ConfigHandle<CoverInCraneRadiusConfig> {
        &self.cover_in_crane_radius
    }

    pub fn inclusive_zone(&self) -> &ConfigHandle<InclusiveZoneConfig> {
        &self.inclusive_zone
    }

    pub fn size(&self) -> &ConfigHandle<SizeConfig> {
        &self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_equal_variant_names() {
        for &kind in ConstraintKind::all() {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(ConstraintKind::OutOfBound.label(), "Out of boundary");
        assert_eq!(ConstraintKind::CoverInCraneRadius.label(), "Cover in crane radius");
    }

    #[test]
    fn test_dispatch() {
        let configs = ConstraintConfigs::default();
        for &kind in ConstraintKind::all() {
            assert_eq!(configs.get(kind).kind(), kind);
        }
        assert!(matches!(
            "Overlap".parse::<ConstraintKind>(),
            Ok(ConstraintKind::Overlap)
        ));
    }
}
