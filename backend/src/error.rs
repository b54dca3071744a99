//! Error types for dataset loading and series derivation.
//!
//! Every failure in the derivation pipeline is fail-fast: one error is
//! surfaced for the whole batch and no partial result is produced.

use serde::{Deserialize, Serialize};

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Error type for the dashboard core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    /// A duration string did not match `HH:MM:SS`.
    #[error("Malformed duration '{value}': expected HH:MM:SS")]
    MalformedDuration { value: String },

    /// A required numeric column held a non-numeric (or negative) value, or a
    /// count whose running total overflows.
    #[error("Malformed numeric field '{column}' at row {row}: '{value}'")]
    MalformedNumericField {
        row: usize,
        column: String,
        value: String,
    },

    /// No usable rows were left after parsing.
    #[error("Dataset contains no episodes")]
    EmptySeries,

    /// The data source could not be read at all.
    #[error("Failed to load dataset from {source_name}: {message}")]
    DatasetLoad {
        source_name: String,
        message: String,
    },

    /// Invalid configuration or preference file.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DashboardError {
    pub fn malformed_duration(value: impl Into<String>) -> Self {
        Self::MalformedDuration {
            value: value.into(),
        }
    }

    pub fn malformed_numeric(
        row: usize,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::MalformedNumericField {
            row,
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn dataset_load(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::DatasetLoad {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Stable error code for programmatic handling by the rendering layer.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedDuration { .. } => "MALFORMED_DURATION",
            Self::MalformedNumericField { .. } => "MALFORMED_NUMERIC_FIELD",
            Self::EmptySeries => "EMPTY_SERIES",
            Self::DatasetLoad { .. } => "DATASET_LOAD",
            Self::Configuration { .. } => "CONFIGURATION",
        }
    }
}

/// Serializable error body handed to the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardFailure {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl From<&DashboardError> for DashboardFailure {
    fn from(err: &DashboardError) -> Self {
        Self {
            code: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}
