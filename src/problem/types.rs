//! Problem keys and the problem dispatch map.

use super::config::{ContinuousConfig, GridConfig, PredeterminedConfig};
use crate::error::{ConfigError, SetupError};
use crate::selection::{Category, CategoryKey};
use crate::store::ConfigHandle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of layout problem types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProblemKind {
    #[serde(rename = "Continuous Construction Layout")]
    Continuous,
    #[serde(rename = "Grid Construction Layout")]
    Grid,
    #[serde(rename = "Predetermined Construction Layout")]
    Predetermined,
}

impl CategoryKey for ProblemKind {
    const CATEGORY: Category = Category::Problem;

    fn all() -> &'static [Self] {
        &[
            ProblemKind::Continuous,
            ProblemKind::Grid,
            ProblemKind::Predetermined,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            ProblemKind::Continuous => "Continuous Construction Layout",
            ProblemKind::Grid => "Grid Construction Layout",
            ProblemKind::Predetermined => "Predetermined Construction Layout",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ProblemKind::Continuous => "Continuous",
            ProblemKind::Grid => "Grid",
            ProblemKind::Predetermined => "Predetermined Locations",
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProblemKind {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| SetupError::unknown_key(Self::CATEGORY, s))
    }
}

/// A shared reference to one problem type's configuration record.
#[derive(Debug, Clone)]
pub enum ProblemConfigRef {
    Continuous(ConfigHandle<ContinuousConfig>),
    Grid(ConfigHandle<GridConfig>),
    Predetermined(ConfigHandle<PredeterminedConfig>),
}

impl ProblemConfigRef {
    pub fn kind(&self) -> ProblemKind {
        match self {
            ProblemConfigRef::Continuous(_) => ProblemKind::Continuous,
            ProblemConfigRef::Grid(_) => ProblemKind::Grid,
            ProblemConfigRef::Predetermined(_) => ProblemKind::Predetermined,
        }
    }

    pub fn same_record(&self, other: &Self) -> bool {
        match (self, other) {
            (ProblemConfigRef::Continuous(a), ProblemConfigRef::Continuous(b)) => a.ptr_eq(b),
            (ProblemConfigRef::Grid(a), ProblemConfigRef::Grid(b)) => a.ptr_eq(b),
            (ProblemConfigRef::Predetermined(a), ProblemConfigRef::Predetermined(b)) => {
                a.ptr_eq(b)
            }
            _ => false,
        }
    }

    /// Whether the record is being written right now.
    pub fn in_use(&self) -> bool {
        match self {
            ProblemConfigRef::Continuous(h) => h.is_in_use(),
            ProblemConfigRef::Grid(h) => h.is_in_use(),
            ProblemConfigRef::Predetermined(h) => h.is_in_use(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            ProblemConfigRef::Continuous(h) => h.borrow().validate(),
            ProblemConfigRef::Grid(h) => h.borrow().validate(),
            ProblemConfigRef::Predetermined(h) => h.borrow().validate(),
        }
    }

    pub fn to_payload(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            ProblemConfigRef::Continuous(h) => h.to_payload(),
            ProblemConfigRef::Grid(h) => h.to_payload(),
            ProblemConfigRef::Predetermined(h) => h.to_payload(),
        }
    }
}

/// One configuration record per [`ProblemKind`].
#[derive(Debug, Clone, Default)]
pub struct ProblemConfigs {
    continuous: ConfigHandle<ContinuousConfig>,
    grid: ConfigHandle<GridConfig>,
    predetermined: ConfigHandle<PredeterminedConfig>,
}

impl ProblemConfigs {
    pub fn get(&self, kind: ProblemKind) -> ProblemConfigRef {
        match kind {
            ProblemKind::Continuous => ProblemConfigRef::Continuous(self.continuous.clone()),
            ProblemKind::Grid => ProblemConfigRef::Grid(self.grid.clone()),
            ProblemKind::Predetermined => {
                ProblemConfigRef::Predetermined(self.predetermined.clone())
            }
        }
    }

    pub fn continuous(&self) -> &ConfigHandle<ContinuousConfig> {
        &self.continuous
    }

    pub fn grid(&self) -> &ConfigHandle<GridConfig> {
        &self.grid
    }

    pub fn predetermined(&self) -> &ConfigHandle<PredeterminedConfig> {
        &self.predetermined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        for &kind in ProblemKind::all() {
            assert_eq!(kind.as_str().parse::<ProblemKind>().ok(), Some(kind));
        }
        assert!("Grid".parse::<ProblemKind>().is_err());
    }

    #[test]
    fn test_get_matches_kind() {
        let configs = ProblemConfigs::default();
        for &kind in ProblemKind::all() {
            assert_eq!(configs.get(kind).kind(), kind);
        }
    }

    #[test]
    fn test_payload_reflects_edits() {
        let configs = ProblemConfigs::default();
        let grid = configs.get(ProblemKind::Grid);
        configs.grid().update(|g| g.grid_size = 4);
        let payload = grid.to_payload().unwrap();
        assert_eq!(payload["gridSize"], 4);
    }
}
