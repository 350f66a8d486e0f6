//! Environment source: DEVGEN__SECTION__KEY, e.g. DEVGEN__GENERATOR__NUM_DEVICES=10
//!
//! Values stay strings until deserialization, so numeric-looking text fields
//! such as an address base of `10.0` are kept verbatim.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "DEVGEN";

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__"),
    )
}
