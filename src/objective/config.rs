//! Objective configuration records.
//!
//! One record type per [`ObjectiveKind`](super::ObjectiveKind). Matrix file
//! paths are supplied by a file picker and kept as opaque strings.

use crate::entity::{check_penalty, check_positive, check_symbol, check_symbol_list, new_entity_id};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Parameters of the risk objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Hazard interaction matrix (spreadsheet).
    #[serde(rename = "hazardInteractionMatrixFilePath")]
    pub hazard_interaction_matrix_file_path: String,

    /// Distance decay applied to hazard interaction.
    #[serde(rename = "Delta")]
    pub delta: f64,

    #[serde(rename = "AlphaRiskPenalty")]
    pub alpha_risk_penalty: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            hazard_interaction_matrix_file_path: String::new(),
            delta: 0.01,
            alpha_risk_penalty: 100.0,
        }
    }
}

impl RiskConfig {
    pub fn with_matrix_file(mut self, path: impl Into<String>) -> Self {
        self.hazard_interaction_matrix_file_path = path.into();
        self
    }

    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    pub fn with_alpha_penalty(mut self, alpha: f64) -> Self {
        self.alpha_risk_penalty = alpha;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.delta.is_finite() || self.delta < 0.0 {
            return Err(ConfigError::out_of_range(
                "Delta",
                format!("must be finite and non-negative, got {}", self.delta),
            ));
        }
        check_penalty("AlphaRiskPenalty", self.alpha_risk_penalty)
    }
}

/// A tower crane placed at a facility, serving a set of buildings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CranePlacement {
    /// Opaque row id, stable across edits.
    pub id: String,
    /// Facility symbol the crane stands on, e.g. `TF14`.
    pub name: String,
    /// Whitespace-separated facility symbols served by the crane.
    pub building_names: String,
    /// Working radius in metres.
    pub radius: f64,
    pub hoisting_time_file_path: String,
}

impl CranePlacement {
    /// Creates a placement with a freshly generated id.
    pub fn new(name: impl Into<String>, building_names: impl Into<String>, radius: f64) -> Self {
        Self {
            id: new_entity_id(&mut rand::rng()),
            name: name.into(),
            building_names: building_names.into(),
            radius,
            hoisting_time_file_path: String::new(),
        }
    }

    pub fn with_hoisting_time_file(mut self, path: impl Into<String>) -> Self {
        self.hoisting_time_file_path = path.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_symbol("crane name", &self.name)?;
        check_symbol_list("crane building names", &self.building_names)?;
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::invalid_entity(
                &self.id,
                format!("crane radius must be positive, got {}", self.radius),
            ));
        }
        Ok(())
    }
}

/// Parameters of the hoisting-time objective.
///
/// `vuvg`, `vlvg`, `vag` and `vwg` are the hook's hoisting, lowering,
/// slewing and trolleying velocities; `zm` is the hook height above the
/// top floor.
///
/// # Examples
///
/// ```
/// use u_conslay::objective::{CranePlacement, HoistingConfig};
///
/// let mut config = HoistingConfig::default().with_number_of_floors(12);
/// let id = config.add_crane(CranePlacement::new("TF14", "TF4 TF5", 40.0));
/// assert_eq!(config.crane_locations.len(), 1);
/// assert!(config.remove_crane(&id).is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct HoistingConfig {
    pub crane_locations: Vec<CranePlacement>,
    pub number_of_floors: u32,
    /// Storey height in metres.
    pub floor_height: f64,
    #[serde(rename = "ZM")]
    pub zm: f64,
    pub vuvg: f64,
    pub vlvg: f64,
    pub vag: f64,
    pub vwg: f64,
    pub alpha_hoisting_penalty: f64,
    pub alpha_hoisting: f64,
    pub beta_hoisting: f64,
    pub n_hoisting: f64,
}

impl Default for HoistingConfig {
    fn default() -> Self {
        Self {
            crane_locations: Vec::new(),
            number_of_floors: 10,
            floor_height: 3.2,
            zm: 2.0,
            vuvg: 37.5,
            vlvg: 37.5 / 2.0,
            vag: 50.0,
            vwg: 0.5,
            alpha_hoisting_penalty: 1.0,
            alpha_hoisting: 0.25,
            beta_hoisting: 1.0,
            n_hoisting: 1.0,
        }
    }
}

impl HoistingConfig {
    pub fn with_number_of_floors(mut self, n: u32) -> Self {
        self.number_of_floors = n;
        self
    }

    pub fn with_floor_height(mut self, h: f64) -> Self {
        self.floor_height = h;
        self
    }

    pub fn with_alpha_penalty(mut self, alpha: f64) -> Self {
        self.alpha_hoisting_penalty = alpha;
        self
    }

    /// Appends a crane and returns its id.
    pub fn add_crane(&mut self, crane: CranePlacement) -> String {
        let id = crane.id.clone();
        self.crane_locations.push(crane);
        id
    }

    /// Removes the crane with the given id.
    pub fn remove_crane(&mut self, id: &str) -> Option<CranePlacement> {
        let idx = self.crane_locations.iter().position(|c| c.id == id)?;
        Some(self.crane_locations.remove(idx))
    }

    pub fn crane_mut(&mut self, id: &str) -> Option<&mut CranePlacement> {
        self.crane_locations.iter_mut().find(|c| c.id == id)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.number_of_floors == 0 {
            return Err(ConfigError::out_of_range(
                "NumberOfFloors",
                "must be at least 1",
            ));
        }
        check_positive("FloorHeight", self.floor_height)?;
        for (field, v) in [
            ("Vuvg", self.vuvg),
            ("Vlvg", self.vlvg),
            ("Vag", self.vag),
            ("Vwg", self.vwg),
        ] {
            check_positive(field, v)?;
        }
        check_penalty("AlphaHoistingPenalty", self.alpha_hoisting_penalty)?;
        self.crane_locations
            .iter()
            .try_for_each(CranePlacement::validate)
    }
}

/// Parameters of the safety-proximity objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyConfig {
    #[serde(rename = "safetyProximityMatrixFilePath")]
    pub safety_proximity_matrix_file_path: String,
    #[serde(rename = "AlphaSafetyPenalty")]
    pub alpha_safety_penalty: f64,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            safety_proximity_matrix_file_path: String::new(),
            alpha_safety_penalty: 100.0,
        }
    }
}

impl SafetyConfig {
    pub fn with_matrix_file(mut self, path: impl Into<String>) -> Self {
        self.safety_proximity_matrix_file_path = path.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_penalty("AlphaSafetyPenalty", self.alpha_safety_penalty)
    }
}

/// Parameters of the safety-and-environment hazard objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SafetyHazardConfig {
    #[serde(rename = "SEMatrixFilePath")]
    pub se_matrix_file_path: String,
    pub alpha_safety_hazard_penalty: f64,
}

impl Default for SafetyHazardConfig {
    fn default() -> Self {
        Self {
            se_matrix_file_path: String::new(),
            alpha_safety_hazard_penalty: 100.0,
        }
    }
}

impl SafetyHazardConfig {
    pub fn with_matrix_file(mut self, path: impl Into<String>) -> Self {
        self.se_matrix_file_path = path.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_penalty("AlphaSafetyHazardPenalty", self.alpha_safety_hazard_penalty)
    }
}

/// Parameters of the transport-cost objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TransportCostConfig {
    pub interaction_matrix_file_path: String,
    #[serde(rename = "AlphaTCPenalty")]
    pub alpha_tc_penalty: f64,
}

impl Default for TransportCostConfig {
    fn default() -> Self {
        Self {
            interaction_matrix_file_path: String::new(),
            alpha_tc_penalty: 100.0,
        }
    }
}

impl TransportCostConfig {
    pub fn with_matrix_file(mut self, path: impl Into<String>) -> Self {
        self.interaction_matrix_file_path = path.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_penalty("AlphaTCPenalty", self.alpha_tc_penalty)
    }
}

/// Parameters of the construction-cost objective.
///
/// With `general_qap` set, the backend treats the layout as a general
/// quadratic assignment problem over the frequency and distance matrices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ConstructionCostConfig {
    pub frequency_matrix_file_path: String,
    pub distance_matrix_file_path: String,
    #[serde(rename = "AlphaCCPenalty")]
    pub alpha_cc_penalty: f64,
    #[serde(rename = "GeneralQAP")]
    pub general_qap: bool,
}

impl Default for ConstructionCostConfig {
    fn default() -> Self {
        Self {
            frequency_matrix_file_path: String::new(),
            distance_matrix_file_path: String::new(),
            alpha_cc_penalty: 100.0,
            general_qap: false,
        }
    }
}

impl ConstructionCostConfig {
    pub fn with_general_qap(mut self, general: bool) -> Self {
        self.general_qap = general;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_penalty("AlphaCCPenalty", self.alpha_cc_penalty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hoisting_defaults() {
        let config = HoistingConfig::default();
        assert_eq!(config.number_of_floors, 10);
        assert!((config.floor_height - 3.2).abs() < 1e-10);
        assert!((config.vlvg - 18.75).abs() < 1e-10);
        assert!(config.crane_locations.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_all_defaults_validate() {
        assert!(RiskConfig::default().validate().is_ok());
        assert!(SafetyConfig::default().validate().is_ok());
        assert!(SafetyHazardConfig::default().validate().is_ok());
        assert!(TransportCostConfig::default().validate().is_ok());
        assert!(ConstructionCostConfig::default().validate().is_ok());
    }

    #[test]
    fn test_crane_add_edit_remove() {
        let mut config = HoistingConfig::default();
        let a = config.add_crane(CranePlacement::new("TF14", "TF4 TF5 TF8", 40.0));
        let b = config.add_crane(CranePlacement::new("TF15", "TF9", 35.0));
        assert_ne!(a, b);

        if let Some(crane) = config.crane_mut(&b) {
            crane.radius = 50.0;
        }
        assert!((config.crane_locations[1].radius - 50.0).abs() < 1e-10);

        let removed = config.remove_crane(&a);
        assert_eq!(removed.map(|c| c.name), Some("TF14".to_string()));
        assert_eq!(config.crane_locations.len(), 1);
        assert!(config.remove_crane("missing").is_none());
    }

    #[test]
    fn test_hoisting_rejects_bad_crane_symbol() {
        let mut config = HoistingConfig::default();
        config.add_crane(CranePlacement::new("Crane A", "TF1", 40.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSymbol { .. })
        ));
    }

    #[test]
    fn test_hoisting_rejects_zero_radius() {
        let mut config = HoistingConfig::default();
        config.add_crane(CranePlacement::new("TF1", "TF2", 0.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEntity { .. })
        ));
    }

    #[test]
    fn test_hoisting_rejects_zero_floors() {
        let config = HoistingConfig::default().with_number_of_floors(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_risk_rejects_negative_penalty() {
        let config = RiskConfig::default().with_alpha_penalty(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_hoisting_wire_names() {
        let mut config = HoistingConfig::default();
        config.add_crane(
            CranePlacement::new("TF14", "TF4", 40.0).with_hoisting_time_file("/data/f1.xlsx"),
        );
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["NumberOfFloors"], 10);
        assert_eq!(value["ZM"], 2.0);
        assert_eq!(value["NHoisting"], 1.0);
        assert_eq!(value["CraneLocations"][0]["Name"], "TF14");
        assert_eq!(
            value["CraneLocations"][0]["HoistingTimeFilePath"],
            "/data/f1.xlsx"
        );
    }

    #[test]
    fn test_objective_wire_names() {
        let risk = serde_json::to_value(RiskConfig::default()).unwrap();
        assert!(risk.get("hazardInteractionMatrixFilePath").is_some());
        assert_eq!(risk["AlphaRiskPenalty"], 100.0);

        let se = serde_json::to_value(SafetyHazardConfig::default()).unwrap();
        assert!(se.get("SEMatrixFilePath").is_some());

        let cc = serde_json::to_value(ConstructionCostConfig::default()).unwrap();
        assert_eq!(cc["GeneralQAP"], false);
        assert_eq!(cc["AlphaCCPenalty"], 100.0);

        let tc = serde_json::to_value(TransportCostConfig::default()).unwrap();
        assert_eq!(tc["AlphaTCPenalty"], 100.0);
    }

    #[test]
    fn test_partial_payload_fills_defaults() {
        let config: HoistingConfig =
            serde_json::from_str(r#"{"NumberOfFloors": 4}"#).unwrap();
        assert_eq!(config.number_of_floors, 4);
        assert!((config.vag - 50.0).abs() < 1e-10);
    }
}
