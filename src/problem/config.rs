//! Problem layout configuration records.

use crate::entity::check_positive;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Site layout with facilities placed at continuous coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContinuousConfig {
    /// Site length in metres.
    pub layout_length: f64,
    /// Site width in metres.
    pub layout_width: f64,
    pub facilities_file_path: String,
    pub phases_file_path: String,
}

impl Default for ContinuousConfig {
    fn default() -> Self {
        Self {
            layout_length: 120.0,
            layout_width: 95.0,
            facilities_file_path: String::new(),
            phases_file_path: String::new(),
        }
    }
}

impl ContinuousConfig {
    pub fn with_dimensions(mut self, length: f64, width: f64) -> Self {
        self.layout_length = length;
        self.layout_width = width;
        self
    }

    pub fn with_facilities_file(mut self, path: impl Into<String>) -> Self {
        self.facilities_file_path = path.into();
        self
    }

    pub fn with_phases_file(mut self, path: impl Into<String>) -> Self {
        self.phases_file_path = path.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("layoutLength", self.layout_length)?;
        check_positive("layoutWidth", self.layout_width)
    }
}

/// Site layout discretised into square cells of `grid_size` metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    pub layout_length: f64,
    pub layout_width: f64,
    pub facilities_file_path: String,
    pub phases_file_path: String,
    pub grid_size: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            layout_length: 120.0,
            layout_width: 95.0,
            facilities_file_path: String::new(),
            phases_file_path: String::new(),
            grid_size: 1,
        }
    }
}

impl GridConfig {
    pub fn with_dimensions(mut self, length: f64, width: f64) -> Self {
        self.layout_length = length;
        self.layout_width = width;
        self
    }

    pub fn with_grid_size(mut self, size: u32) -> Self {
        self.grid_size = size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("layoutLength", self.layout_length)?;
        check_positive("layoutWidth", self.layout_width)?;
        if self.grid_size == 0 {
            return Err(ConfigError::out_of_range("gridSize", "must be at least 1"));
        }
        Ok(())
    }
}

/// Layout where facilities are assigned to a fixed set of candidate
/// locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PredeterminedConfig {
    pub facilities_file_path: String,
    /// Candidate locations (spreadsheet).
    #[serde(rename = "predeterminedLoc")]
    pub predetermined_locations_file_path: String,
    pub phases_file_path: String,
}

impl PredeterminedConfig {
    pub fn with_locations_file(mut self, path: impl Into<String>) -> Self {
        self.predetermined_locations_file_path = path.into();
        self
    }

    /// Nothing numeric to check; file paths are opaque.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = ContinuousConfig::default();
        assert!((c.layout_length - 120.0).abs() < 1e-10);
        assert!((c.layout_width - 95.0).abs() < 1e-10);
        assert!(c.validate().is_ok());

        let g = GridConfig::default();
        assert_eq!(g.grid_size, 1);
        assert!(g.validate().is_ok());

        assert!(PredeterminedConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let c = ContinuousConfig::default().with_dimensions(0.0, 95.0);
        assert!(c.validate().is_err());
        let g = GridConfig::default().with_dimensions(120.0, -1.0);
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_grid_size() {
        let g = GridConfig::default().with_grid_size(0);
        assert_eq!(
            g.validate(),
            Err(ConfigError::out_of_range("gridSize", "must be at least 1"))
        );
    }

    #[test]
    fn test_wire_names() {
        let v = serde_json::to_value(GridConfig::default().with_grid_size(2)).unwrap();
        assert_eq!(v["layoutLength"], 120.0);
        assert_eq!(v["gridSize"], 2);
        assert!(v.get("facilitiesFilePath").is_some());

        let v = serde_json::to_value(PredeterminedConfig::default().with_locations_file("/a.xlsx"))
            .unwrap();
        assert_eq!(v["predeterminedLoc"], "/a.xlsx");
    }

    #[test]
    fn test_paths_are_not_validated() {
        let c = ContinuousConfig::default()
            .with_facilities_file("not a real path")
            .with_phases_file("");
        assert!(c.validate().is_ok());
    }
}
