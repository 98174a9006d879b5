//! Error types for chart operations.

use thiserror::Error;

/// Result type for chart operations.
pub type ChartResult<T> = Result<T, ChartError>;

/// Errors that can occur while configuring or rendering a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Render target missing or unusable. Nothing was drawn.
    #[error("Invalid surface '{selector}': {reason}")]
    InvalidSurface { selector: String, reason: String },

    /// Negative or non-finite magnitude. Nothing was drawn.
    #[error("Invalid dataset: value at index {index} is {value} (must be finite and non-negative)")]
    InvalidDataset { index: usize, value: f64 },

    #[error("Invalid chart configuration: {what}")]
    InvalidConfig { what: String },

    #[error("Data file error at line {line}: {reason}")]
    DataFile { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
