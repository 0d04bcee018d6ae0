//! Error types for the starling_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for starling_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument was outside the range an operation accepts
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric input was NaN or infinite, or evaluated to an undefined value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No preset with the given name
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Reject NaN and infinite values with an `InvalidInput` naming the offending quantity.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidInput(format!("{} must be finite, got {}", name, value)))
    }
}
