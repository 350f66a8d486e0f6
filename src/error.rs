//! Error types for the device generator.

use thiserror::Error;

/// Generation-related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Port overflow: start port {start} + index {index} exceeds {max}", max = u16::MAX)]
    PortOverflow { start: u16, index: usize },
}

/// Top-level errors surfaced by the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Generation failed: {0}")]
    GenerationFailed(#[from] GenerationError),

    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    #[error("Invalid output format: {0} (must be 'json' or 'table')")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::SerializationFailed(err.to_string())
    }
}
