//! devgen CLI Binary
//!
//! Generates synthetic IoT device records and prints them to stdout. On failure
//! stdout carries a single error line instead of the document and the process
//! exits with status 1.

use clap::Parser;
use devgen::cli::{Cli, RunContext};
use devgen::config::ConfigLoader;
use devgen::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args and config file
    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        println!("{}", devgen::cli::map_error(&e));
        process::exit(1);
    }

    info!("devgen starting");

    let context = match RunContext::new(cli.workspace.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            println!("{}", devgen::cli::map_error(&e));
            process::exit(1);
        }
    };

    let result = context.execute(cli.command.as_ref(), &mut std::io::stdout().lock());
    match result {
        Ok(()) => info!("Command completed successfully"),
        Err(e) => {
            error!("Command failed: {}", e);
            println!("{}", devgen::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and config file.
/// Logging stays off unless --verbose is set; flags override the config file.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    if !cli.verbose {
        let mut config = LoggingConfig::default();
        config.level = "off".to_string();
        return config;
    }

    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load(&cli.workspace)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
