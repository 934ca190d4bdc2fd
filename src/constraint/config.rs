//! Constraint configuration records.
//!
//! Every constraint is enforced as a penalty `alpha * violation^power`
//! added to each objective value.

use crate::entity::{check_penalty, check_symbol, check_symbol_list, new_entity_id};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

const DEFAULT_ALPHA: f64 = 20_000.0;
const DEFAULT_POWER: f64 = 1.0;

fn check_power(value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(
            "PowerDifferencePenalty",
            format!("must be at least 1, got {value}"),
        ))
    }
}

/// Facilities must stay inside the site boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OutOfBoundConfig {
    pub alpha_out_of_boundary_penalty: f64,
    pub power_difference_penalty: f64,
}

impl Default for OutOfBoundConfig {
    fn default() -> Self {
        Self {
            alpha_out_of_boundary_penalty: DEFAULT_ALPHA,
            power_difference_penalty: DEFAULT_POWER,
        }
    }
}

impl OutOfBoundConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha_out_of_boundary_penalty = alpha;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_penalty("AlphaOutOfBoundaryPenalty", self.alpha_out_of_boundary_penalty)?;
        check_power(self.power_difference_penalty)
    }
}

/// Facilities active in the same phase must not overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OverlapConfig {
    #[serde(rename = "AlphaOverLapPenalty")]
    pub alpha_overlap_penalty: f64,
    pub power_difference_penalty: f64,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            alpha_overlap_penalty: DEFAULT_ALPHA,
            power_difference_penalty: DEFAULT_POWER,
        }
    }
}

impl OverlapConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha_overlap_penalty = alpha;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_penalty("AlphaOverLapPenalty", self.alpha_overlap_penalty)?;
        check_power(self.power_difference_penalty)
    }
}

/// Buildings served by a crane must lie within its radius.
///
/// Reads the crane placements of the hoisting objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CoverInCraneRadiusConfig {
    pub alpha_cover_in_crane_radius_penalty: f64,
    pub power_difference_penalty: f64,
}

impl Default for CoverInCraneRadiusConfig {
    fn default() -> Self {
        Self {
            alpha_cover_in_crane_radius_penalty: DEFAULT_ALPHA,
            power_difference_penalty: DEFAULT_POWER,
        }
    }
}

impl CoverInCraneRadiusConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha_cover_in_crane_radius_penalty = alpha;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_penalty(
            "AlphaCoverInCraneRadiusPenalty",
            self.alpha_cover_in_crane_radius_penalty,
        )?;
        check_power(self.power_difference_penalty)
    }
}

/// A facility that must stay within `size` metres of a set of buildings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InclusiveZone {
    pub id: String,
    /// Facility symbol, e.g. `TF13`.
    pub name: String,
    /// Whitespace-separated facility symbols.
    pub building_names: String,
    pub size: f64,
}

impl InclusiveZone {
    /// Creates a zone with a freshly generated id.
    pub fn new(name: impl Into<String>, building_names: impl Into<String>, size: f64) -> Self {
        Self {
            id: new_entity_id(&mut rand::rng()),
            name: name.into(),
            building_names: building_names.into(),
            size,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_symbol("zone name", &self.name)?;
        check_symbol_list("zone building names", &self.building_names)?;
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(ConfigError::invalid_entity(
                &self.id,
                format!("zone size must be positive, got {}", self.size),
            ));
        }
        Ok(())
    }
}

/// Listed facilities must stay close to their zone buildings.
///
/// # Examples
///
/// ```
/// use u_conslay::constraint::{InclusiveZone, InclusiveZoneConfig};
///
/// let mut config = InclusiveZoneConfig::default();
/// config.add_zone(InclusiveZone::new("TF13", "TF7", 20.0));
/// config.add_zone(InclusiveZone::new("TF13", "TF1 TF2", 15.0));
/// assert_eq!(config.zones.len(), 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InclusiveZoneConfig {
    pub alpha_inclusive_zone_penalty: f64,
    pub power_difference_penalty: f64,
    pub zones: Vec<InclusiveZone>,
}

impl Default for InclusiveZoneConfig {
    fn default() -> Self {
        Self {
            alpha_inclusive_zone_penalty: DEFAULT_ALPHA,
            power_difference_penalty: DEFAULT_POWER,
            zones: Vec::new(),
        }
    }
}

impl InclusiveZoneConfig {
    /// Appends a zone and returns its id.
    pub fn add_zone(&mut self, zone: InclusiveZone) -> String {
        let id = zone.id.clone();
        self.zones.push(zone);
        id
    }

    pub fn remove_zone(&mut self, id: &str) -> Option<InclusiveZone> {
        let idx = self.zones.iter().position(|z| z.id == id)?;
        Some(self.zones.remove(idx))
    }

    pub fn zone_mut(&mut self, id: &str) -> Option<&mut InclusiveZone> {
        self.zones.iter_mut().find(|z| z.id == id)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_penalty("AlphaInclusiveZonePenalty", self.alpha_inclusive_zone_penalty)?;
        check_power(self.power_difference_penalty)?;
        self.zones.iter().try_for_each(InclusiveZone::validate)
    }
}

/// Large facilities must not be assigned to small predetermined locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SizeConfig {
    pub alpha_size_penalty: f64,
    pub power_difference_penalty: f64,
    pub small_locations: Vec<String>,
    pub large_facilities: Vec<String>,
}

impl Default for SizeConfig {
    fn default() -> Self {
        Self {
            alpha_size_penalty: DEFAULT_ALPHA,
            power_difference_penalty: DEFAULT_POWER,
            small_locations: Vec::new(),
            large_facilities: Vec::new(),
        }
    }
}

impl SizeConfig {
    pub fn with_small_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.small_locations = locations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_large_facilities<I, S>(mut self, facilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.large_facilities = facilities.into_iter().map(Into::into).collect();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_penalty("AlphaSizePenalty", self.alpha_size_penalty)?;
        check_power(self.power_difference_penalty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let out_of_bound = OutOfBoundConfig::default();
        assert!((out_of_bound.alpha_out_of_boundary_penalty - 20_000.0).abs() < 1e-10);
        assert!((OverlapConfig::default().power_difference_penalty - 1.0).abs() < 1e-10);
        assert!(OutOfBoundConfig::default().validate().is_ok());
        assert!(OverlapConfig::default().validate().is_ok());
        assert!(CoverInCraneRadiusConfig::default().validate().is_ok());
        assert!(InclusiveZoneConfig::default().validate().is_ok());
        assert!(SizeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_power_below_one_rejected() {
        let mut config = OverlapConfig::default();
        config.power_difference_penalty = 0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_alpha_rejected() {
        assert!(OutOfBoundConfig::default().with_alpha(-5.0).validate().is_err());
        assert!(CoverInCraneRadiusConfig::default()
            .with_alpha(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_zone_lifecycle() {
        let mut config = InclusiveZoneConfig::default();
        let id = config.add_zone(InclusiveZone::new("TF13", "TF7", 20.0));
        if let Some(zone) = config.zone_mut(&id) {
            zone.size = 25.0;
        }
        assert!((config.zones[0].size - 25.0).abs() < 1e-10);
        assert!(config.remove_zone(&id).is_some());
        assert!(config.zones.is_empty());
    }

    #[test]
    fn test_zone_validation() {
        let mut config = InclusiveZoneConfig::default();
        config.add_zone(InclusiveZone::new("TF13", "TF7 gate", 20.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSymbol { .. })
        ));

        let mut config = InclusiveZoneConfig::default();
        config.add_zone(InclusiveZone::new("TF13", "TF7", -1.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEntity { .. })
        ));
    }

    #[test]
    fn test_wire_names() {
        let v = serde_json::to_value(OverlapConfig::default()).unwrap();
        assert_eq!(v["AlphaOverLapPenalty"], 20_000.0);
        assert_eq!(v["PowerDifferencePenalty"], 1.0);

        let mut zones = InclusiveZoneConfig::default();
        zones.add_zone(InclusiveZone::new("TF13", "TF1 TF2", 15.0));
        let v = serde_json::to_value(&zones).unwrap();
        assert_eq!(v["Zones"][0]["BuildingNames"], "TF1 TF2");
        assert_eq!(v["Zones"][0]["Size"], 15.0);

        let size = SizeConfig::default()
            .with_small_locations(["L1", "L2"])
            .with_large_facilities(vec!["TF3".to_string()]);
        let v = serde_json::to_value(&size).unwrap();
        assert_eq!(v["SmallLocations"][1], "L2");
        assert_eq!(v["LargeFacilities"][0], "TF3");
    }
}
