//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
/// Later sources override these key by key; tables are merged, not replaced.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("generator.device_type", "sensor")?
        .set_default("generator.num_devices", 5)?
        .set_default("generator.ip_range.start", "192.168.1.")?
        .set_default("generator.ip_range.end", "192.168.1.")?
        .set_default("generator.port_range.start", 8080)?
        .set_default("generator.port_range.end", 8089)?
        .set_default("generator.normalize_separator", false)?
        .set_default("output.format", "json")
}
