//! Configuration System
//!
//! Layered runtime configuration for ambient concerns (logging). The working
//! directory layout is fixed and deliberately not part of the configuration.
//!
//! Precedence (lowest to highest): built-in defaults, `soundmap.toml` in the
//! working root, an explicit `--config` file, `SOUNDMAP_*` environment variables.

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod merge;
mod sources;

pub use sources::workspace_file::{workspace_config_path, CONFIG_FILE_NAME};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoundmapConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SoundmapConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging.validate()
    }
}

/// Loads [`SoundmapConfig`] from the layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, `<root>/soundmap.toml` and the environment.
    pub fn load(root: &Path) -> Result<SoundmapConfig, ConfigError> {
        let builder = merge::builder_with_defaults()?;
        let builder = sources::workspace_file::add_to_builder(builder, root)?;
        let builder = sources::environment::add_to_builder(builder);
        Self::finish(builder)
    }

    /// Like [`ConfigLoader::load`], with the given file (required) layered
    /// over `<root>/soundmap.toml`.
    pub fn load_from_file(root: &Path, path: &Path) -> Result<SoundmapConfig, ConfigError> {
        let builder = merge::builder_with_defaults()?;
        let builder = sources::workspace_file::add_to_builder(builder, root)?;
        let builder = sources::workspace_file::add_explicit_to_builder(builder, path)?;
        let builder = sources::environment::add_to_builder(builder);
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<SoundmapConfig, ConfigError> {
        let config: SoundmapConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
