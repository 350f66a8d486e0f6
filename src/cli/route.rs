//! CLI route: single route table and run context. Dispatches to the generator and emitter.

use crate::cli::parse::{Commands, GenerateArgs};
use crate::config::{ConfigLoader, DevgenConfig};
use crate::emit::{self, OutputFormat};
use crate::error::ApiError;
use crate::generator::{Clock, DeviceGenerator, SystemClock};
use crate::model::GenerationConfig;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Runtime context for CLI execution: the loaded configuration and the clock.
pub struct RunContext {
    config: DevgenConfig,
    clock: Arc<dyn Clock>,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Self::from_config(config)
    }

    /// Create run context from an already loaded configuration.
    pub fn from_config(config: DevgenConfig) -> Result<Self, ApiError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(Self {
            config,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the timestamp source used for generated records.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Run `command` (default: generate) and write its document to `out`.
    pub fn execute<W: Write>(&self, command: Option<&Commands>, out: &mut W) -> Result<(), ApiError> {
        match command {
            None => self.handle_generate(&GenerateArgs::default(), out),
            Some(Commands::Generate(args)) => self.handle_generate(args, out),
            Some(Commands::Config) => self.handle_config(out),
        }
    }

    /// Effective generator configuration after applying per-run overrides.
    pub fn generation_config(&self, args: &GenerateArgs) -> GenerationConfig {
        let mut config = self.config.generator.clone();
        if let Some(count) = args.count {
            config.num_devices = count;
        }
        if let Some(ref device_type) = args.device_type {
            config.device_type = device_type.clone();
        }
        if let Some(ref start) = args.ip_start {
            config.ip_range.start = start.clone();
        }
        if let Some(ref end) = args.ip_end {
            config.ip_range.end = end.clone();
        }
        if let Some(start) = args.port_start {
            config.port_range.start = start;
        }
        if let Some(end) = args.port_end {
            config.port_range.end = end;
        }
        if args.normalize_ip {
            config.normalize_separator = true;
        }
        config
    }

    fn handle_generate<W: Write>(&self, args: &GenerateArgs, out: &mut W) -> Result<(), ApiError> {
        let format: OutputFormat = args
            .format
            .as_deref()
            .unwrap_or(self.config.output.format.as_str())
            .parse()?;
        let config = self.generation_config(args);
        debug!(?config, %format, "Resolved generation request");

        let generator = DeviceGenerator::new(config).with_clock(Arc::clone(&self.clock));
        let devices = generator.generate_devices()?;
        info!(count = devices.len(), "Generated devices");

        emit::emit(&devices, format, out)
    }

    fn handle_config<W: Write>(&self, out: &mut W) -> Result<(), ApiError> {
        let text = self
            .config
            .to_toml()
            .map_err(|e| ApiError::SerializationFailed(e.to_string()))?;
        write!(out, "{}", text)?;
        Ok(())
    }
}
