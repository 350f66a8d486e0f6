//! Configuration System
//!
//! Layered configuration: built-in defaults, a global user file, workspace
//! files, then `DEVGEN__*` environment variables. With none of those present
//! the loaded value equals [`DevgenConfig::default`].

use crate::emit::OutputFormat;
use crate::logging::{self, LoggingConfig};
use crate::model::GenerationConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::environment::ENV_PREFIX;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DevgenConfig {
    /// Generation parameters
    #[serde(default)]
    pub generator: GenerationConfig,

    /// Document output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Document format: json, table
    #[serde(default = "default_output_format")]
    pub format: String,
}

fn default_output_format() -> String {
    OutputFormat::default().to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Generator(String),
    Output(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Generator(msg) => write!(f, "Generator: {}", msg),
            ValidationError::Output(msg) => write!(f, "Output: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl DevgenConfig {
    /// Validate the entire configuration.
    ///
    /// Range bounds are not checked against each other; generation never reads the ends.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.generator.device_type.trim().is_empty() {
            errors.push(ValidationError::Generator(
                "device_type cannot be empty".to_string(),
            ));
        }

        if let Err(e) = self.output.format.parse::<OutputFormat>() {
            errors.push(ValidationError::Output(e.to_string()));
        }

        if let Err(e) = logging::validate_format(&self.logging.format) {
            errors.push(ValidationError::Logging(e));
        }
        if let Err(e) = logging::validate_output(&self.logging.output) {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
