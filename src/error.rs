//! Error types for SPC Oxide
//!
//! Three layers of failure, all built on thiserror:
//! - [`Rejection`]: a proposed window edit was refused; the input reverts.
//! - [`StatsError`]: one statistic could not be computed; it shows as undefined.
//! - [`SpcError`]: setting up a session failed (config, data loading).

use crate::state::BoundField;
use thiserror::Error;

/// Why a proposed window edit was refused
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    /// Input is empty or does not parse as the field's numeric type
    #[error("'{raw}' is not a valid number for {field}")]
    NotANumber { field: BoundField, raw: String },

    /// Input equals the field's current value
    #[error("{field} is already {value}")]
    NoChange { field: BoundField, value: f64 },

    /// Input would invert the paired bound on the same axis
    #[error("{field} cannot be set to {value}: {opposing} is {opposing_value}")]
    OutOfOrder {
        field: BoundField,
        value: f64,
        opposing: BoundField,
        opposing_value: f64,
    },

    /// Partition selection does not describe a block range of the series
    #[error("Invalid partition selection: blocks {first}..={last} of {partitions}")]
    InvalidPartition {
        partitions: usize,
        first: usize,
        last: usize,
    },
}

impl Rejection {
    /// The bound field whose input should be reverted, if any
    pub fn field(&self) -> Option<BoundField> {
        match self {
            Rejection::NotANumber { field, .. }
            | Rejection::NoChange { field, .. }
            | Rejection::OutOfOrder { field, .. } => Some(*field),
            Rejection::InvalidPartition { .. } => None,
        }
    }
}

/// Why a single statistic could not be computed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Window holds too few samples for the statistic
    #[error("Insufficient data: {operation} requires at least {required} points, but got {actual}")]
    InsufficientData {
        operation: &'static str,
        required: usize,
        actual: usize,
    },

    /// Window has zero spread where a division by it is required
    #[error("Division by zero: {operation} is undefined for a zero-variance window")]
    DivisionByZero { operation: &'static str },
}

/// Main error type for SPC Oxide operations
#[derive(Error, Debug)]
pub enum SpcError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unsupported file format
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },

    /// Column not found in data
    #[error("Column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// No usable samples after cleaning
    #[error("Dataset is empty or has no usable rows")]
    EmptyDataset,

    /// Statistic failure surfaced outside the table
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// Edit rejection surfaced outside an input widget
    #[error(transparent)]
    Rejected(#[from] Rejection),
}

/// Result type alias for SPC Oxide operations
pub type Result<T> = std::result::Result<T, SpcError>;

/// UI-friendly error message formatting
impl SpcError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            SpcError::FileIo(e) => format!("File error: {}", e),
            SpcError::Polars(e) => format!("Data error: {}", e),
            SpcError::Json(e) => format!("JSON error: {}", e),
            SpcError::Config(msg) => format!("Config error: {}", msg),
            SpcError::UnsupportedFormat { extension } => {
                format!("Unsupported file format: '.{}'", extension)
            }
            SpcError::ColumnNotFound { column } => format!("Column '{}' not found", column),
            SpcError::EmptyDataset => "Dataset is empty".to_string(),
            SpcError::Stats(StatsError::InsufficientData {
                operation,
                required,
                actual,
            }) => format!(
                "{} requires {} points, but only {} available",
                operation, required, actual
            ),
            SpcError::Stats(StatsError::DivisionByZero { operation }) => {
                format!("{} is undefined for constant data", operation)
            }
            SpcError::Rejected(rejection) => rejection.to_string(),
        }
    }

    /// Get a short title for the error (for status lines)
    pub fn title(&self) -> &'static str {
        match self {
            SpcError::FileIo(_) => "File Error",
            SpcError::Polars(_) => "Data Error",
            SpcError::Json(_) => "JSON Error",
            SpcError::Config(_) => "Configuration Error",
            SpcError::UnsupportedFormat { .. } => "Unsupported Format",
            SpcError::ColumnNotFound { .. } => "Column Not Found",
            SpcError::EmptyDataset => "Empty Dataset",
            SpcError::Stats(_) => "Statistics Error",
            SpcError::Rejected(_) => "Input Rejected",
        }
    }
}
