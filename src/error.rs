//! Error types.
//!
//! Registry operations are infallible. Errors only arise when a
//! configuration record is validated, when a wire name is parsed, or when
//! the current selections are assembled into a [`JobRequest`](crate::job::JobRequest).

use crate::selection::Category;
use thiserror::Error;

/// Result type for job assembly and key parsing.
pub type Result<T> = std::result::Result<T, SetupError>;

/// A configuration record failed validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A numeric parameter lies outside its accepted range.
    #[error("{field} out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },

    /// A facility or crane symbol is not of the form `TF<number>`.
    #[error("invalid symbol {value:?} in {field}: expected TF<number>")]
    InvalidSymbol { field: &'static str, value: String },

    /// A nested entity (crane placement, zone) is malformed.
    #[error("invalid entity {id}: {reason}")]
    InvalidEntity { id: String, reason: String },
}

impl ConfigError {
    /// Create an out-of-range error.
    pub fn out_of_range(field: &'static str, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            field,
            reason: reason.into(),
        }
    }

    /// Create an invalid symbol error.
    pub fn invalid_symbol(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidSymbol {
            field,
            value: value.into(),
        }
    }

    /// Create an invalid entity error.
    pub fn invalid_entity(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEntity {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while assembling a job from the current selections.
#[derive(Error, Debug)]
pub enum SetupError {
    /// Text did not match any wire name of the category.
    #[error("unknown {category} key: {value:?}")]
    UnknownKey { category: Category, value: String },

    /// No problem layout has been selected.
    #[error("no problem layout selected")]
    MissingProblem,

    /// No algorithm has been selected.
    #[error("no algorithm selected")]
    MissingAlgorithm,

    /// The objective selection is empty.
    #[error("no objective selected")]
    NoObjectives,

    /// A selection made earlier is no longer in its category's valid subset.
    #[error("{category} selection {key:?} is no longer valid")]
    StaleSelection { category: Category, key: String },

    /// A record was being written while the job was assembled, e.g. when
    /// `build_job` runs inside a `ConfigHandle::update` closure.
    #[error("{key} configuration is being edited")]
    RecordInUse { key: String },

    /// A selected item's configuration record failed validation.
    #[error("invalid {key} configuration: {source}")]
    Config {
        key: String,
        #[source]
        source: ConfigError,
    },

    /// A record could not be rendered as a payload.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SetupError {
    /// Create an unknown-key error.
    pub fn unknown_key(category: Category, value: impl Into<String>) -> Self {
        Self::UnknownKey {
            category,
            value: value.into(),
        }
    }

    /// Create a stale-selection error.
    pub fn stale(category: Category, key: impl Into<String>) -> Self {
        Self::StaleSelection {
            category,
            key: key.into(),
        }
    }

    /// Create a record-in-use error.
    pub fn record_in_use(key: impl Into<String>) -> Self {
        Self::RecordInUse { key: key.into() }
    }

    /// Wrap a record validation failure with the key it belongs to.
    pub fn config(key: impl Into<String>, source: ConfigError) -> Self {
        Self::Config {
            key: key.into(),
            source,
        }
    }
}
