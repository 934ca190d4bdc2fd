//! Helpers for nested entities (crane placements, inclusive zones).

use crate::error::ConfigError;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

static FACILITY_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)tf\d+$").expect("facility symbol pattern is valid"));

/// Generates an opaque id for a newly created entity row.
pub fn new_entity_id<R: Rng>(rng: &mut R) -> String {
    format!("{:016x}", rng.random::<u64>())
}

/// Whether `s` is a facility symbol such as `TF7` or `tf12`.
pub fn is_facility_symbol(s: &str) -> bool {
    FACILITY_SYMBOL.is_match(s)
}

/// Splits a whitespace-separated list of facility symbols.
///
/// ```
/// use u_conslay::entity::split_symbols;
///
/// assert_eq!(split_symbols("TF1  TF2 TF8"), vec!["TF1", "TF2", "TF8"]);
/// assert!(split_symbols("   ").is_empty());
/// ```
pub fn split_symbols(list: &str) -> Vec<&str> {
    list.split_whitespace().collect()
}

/// Checks a single symbol.
pub(crate) fn check_symbol(field: &'static str, symbol: &str) -> Result<(), ConfigError> {
    if is_facility_symbol(symbol) {
        Ok(())
    } else {
        Err(ConfigError::invalid_symbol(field, symbol))
    }
}

/// Checks every symbol of a whitespace-separated list. An empty list passes.
pub(crate) fn check_symbol_list(field: &'static str, list: &str) -> Result<(), ConfigError> {
    split_symbols(list)
        .into_iter()
        .try_for_each(|s| check_symbol(field, s))
}

/// Checks that a penalty weight is finite and non-negative.
pub(crate) fn check_penalty(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(
            field,
            format!("must be finite and non-negative, got {value}"),
        ))
    }
}

/// Checks that a value is finite and strictly positive.
pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(
            field,
            format!("must be positive, got {value}"),
        ))
    }
}

/// Checks that a rate lies in `[0, 1]`.
pub(crate) fn check_rate(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(
            field,
            format!("must be within [0, 1], got {value}"),
        ))
    }
}
