//! Error types for stock analysis.

use thiserror::Error;

/// Top-level analysis error.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Malformed input rejected at a call boundary.
///
/// Every indicator and series constructor fails fast with one of these
/// instead of producing NaNs outside the documented warm-up region.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Price series is empty")]
    EmptySeries,

    #[error("Invalid parameter {name}: {value} (must be greater than 0)")]
    InvalidParameter { name: &'static str, value: usize },

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Invalid price at index {index}: {value}")]
    InvalidPrice { index: usize, value: f64 },

    #[error("Timestamp at index {index} is earlier than its predecessor")]
    NonMonotonicTimestamps { index: usize },

    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Data source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No data available: {0}")]
    NoDataAvailable(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid price data: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type alias for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
