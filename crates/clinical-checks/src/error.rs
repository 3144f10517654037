//! Error types for the dataset checks.
//!
//! Every check either passes or fails with exactly one [`CheckError`].
//! Data-quality failures (missing columns, wrong dtypes, unknown labels,
//! out-of-range values, distribution drift) are distinguished from usage
//! errors (bad configuration) and polars failures through
//! [`CheckError::is_data_failure`].
//!
//! Errors are serializable as `{ code, message }` so a report can carry
//! them without losing the stable error code.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::schema::TypeClass;

/// The error type returned by every check.
#[derive(Error, Debug)]
pub enum CheckError {
    /// A required column is absent from the table.
    #[error("Column '{0}' not found in dataset")]
    MissingColumn(String),

    /// A column's dtype does not satisfy its classifier.
    #[error("Column '{column}' failed type check: expected {expected}, found {actual}")]
    TypeMismatch {
        column: String,
        expected: TypeClass,
        actual: String,
    },

    /// The label column holds a value outside the known label set.
    #[error("Column '{column}' contains unknown label {value}")]
    UnknownLabel { column: String, value: String },

    /// A non-missing value lies outside the configured inclusive bounds.
    #[error(
        "Column '{column}' failed the range check. Should be between {min} and {max}, \
         instead min={observed_min} and max={observed_max}"
    )]
    RangeViolation {
        column: String,
        min: f64,
        max: f64,
        observed_min: f64,
        observed_max: f64,
    },

    /// The two samples of a column are unlikely to share a distribution.
    #[error(
        "Column '{column}' failed the two-sample KS test: p-value {p_value:.3e} \
         is not above the corrected threshold {threshold:.3e} (D = {statistic:.4})"
    )]
    DistributionMismatch {
        column: String,
        statistic: f64,
        p_value: f64,
        threshold: f64,
    },

    /// A column has no non-missing values to test.
    #[error("No valid values found in column '{0}'")]
    EmptySample(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl CheckError {
    /// Get a stable error code for the failure kind.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingColumn(_) => "MISSING_COLUMN",
            Self::TypeMismatch { .. } => "TYPE_MISMATCH",
            Self::UnknownLabel { .. } => "UNKNOWN_LABEL",
            Self::RangeViolation { .. } => "RANGE_VIOLATION",
            Self::DistributionMismatch { .. } => "DISTRIBUTION_MISMATCH",
            Self::EmptySample(_) => "EMPTY_SAMPLE",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Polars(_) => "POLARS_ERROR",
        }
    }

    /// Whether this error describes a problem with the data itself rather
    /// than with how the check was invoked.
    pub fn is_data_failure(&self) -> bool {
        !matches!(self, Self::InvalidConfig(_) | Self::Polars(_))
    }

    /// The column this error is about, if any.
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::MissingColumn(column) | Self::EmptySample(column) => Some(column),
            Self::TypeMismatch { column, .. }
            | Self::UnknownLabel { column, .. }
            | Self::RangeViolation { column, .. }
            | Self::DistributionMismatch { column, .. } => Some(column),
            Self::InvalidConfig(_) | Self::Polars(_) => None,
        }
    }
}

impl From<ConfigValidationError> for CheckError {
    fn from(err: ConfigValidationError) -> Self {
        CheckError::InvalidConfig(err.to_string())
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for CheckError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("CheckError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for check operations.
pub type Result<T> = std::result::Result<T, CheckError>;
