//! ConfigLoader: assembles the layered sources into a [`DevgenConfig`].

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::DevgenConfig;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

/// Loads configuration from defaults, files and environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (highest last): defaults, global file, workspace files, environment.
    pub fn load(workspace_root: &Path) -> Result<DevgenConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Load configuration from a single file on top of the defaults.
    pub fn load_from_file(path: &Path) -> Result<DevgenConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    /// Global config file location, if one can be resolved.
    pub fn xdg_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
