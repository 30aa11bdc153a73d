//! CLI route: run context built from the working root and the loaded config.

use crate::config::{ConfigLoader, SoundmapConfig};
use crate::error::{ConfigError, PipelineError};
use crate::logging::LoggingConfig;
use crate::pipeline::{self, Layout, RunSummary};
use crate::report::Reporter;
use std::path::{Path, PathBuf};

use crate::cli::parse::Cli;

/// Runtime context for one CLI invocation.
pub struct RunContext {
    root: PathBuf,
    config: SoundmapConfig,
}

impl RunContext {
    /// Load configuration for `root`, or from `config_path` when given.
    pub fn new(root: PathBuf, config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(&root, path)?,
            None => ConfigLoader::load(&root)?,
        };
        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &SoundmapConfig {
        &self.config
    }

    /// Logging configuration with CLI flags applied over the loaded config.
    ///
    /// Precedence: explicit flags > --verbose/--quiet > config file > defaults.
    pub fn logging_config(&self, cli: &Cli) -> LoggingConfig {
        let mut config = self.config.logging.clone();

        if cli.quiet {
            config.enabled = false;
        }
        if cli.verbose {
            config.level = "info".to_string();
            if config.output == "file" {
                config.output = "file+stderr".to_string();
            }
        }
        if let Some(ref level) = cli.log_level {
            config.level = level.clone();
        }
        if let Some(ref format) = cli.log_format {
            config.format = format.clone();
        }
        if let Some(ref file) = cli.log_file {
            config.file = file.clone();
        }

        config
    }

    /// Run the pipeline over the fixed layout under the working root.
    pub fn execute(&self, reporter: &mut dyn Reporter) -> Result<RunSummary, PipelineError> {
        pipeline::run(&Layout::at(&self.root), reporter)
    }
}
