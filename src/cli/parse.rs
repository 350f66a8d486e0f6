//! CLI parse: clap types for devgen. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// devgen - synthetic IoT device record generator
#[derive(Parser, Debug)]
#[command(name = "devgen")]
#[command(about = "Generate synthetic IoT device records as JSON")]
#[command(version)]
pub struct Cli {
    /// Defaults to `generate` with no overrides
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workspace root directory (searched for config/config.toml)
    #[arg(long, default_value = ".", global = true)]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable logging to stderr (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate device records and print them
    Generate(GenerateArgs),
    /// Print the effective configuration as TOML
    Config,
}

/// Per-run overrides for the loaded generator configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Number of devices to generate
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Device kind (sensor, actuator, ...)
    #[arg(short = 't', long)]
    pub device_type: Option<String>,

    /// Address base each index is appended to
    #[arg(long)]
    pub ip_start: Option<String>,

    /// Address range end (recorded, not enforced)
    #[arg(long)]
    pub ip_end: Option<String>,

    /// First port
    #[arg(long)]
    pub port_start: Option<u16>,

    /// Port range end (recorded, not enforced)
    #[arg(long)]
    pub port_end: Option<u16>,

    /// Do not double a trailing `.` on the address base
    #[arg(long)]
    pub normalize_ip: bool,

    /// Output format (json or table)
    #[arg(short, long)]
    pub format: Option<String>,
}
