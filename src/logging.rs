//! Logging System
//!
//! Structured logging with the `tracing` crate. By default only error-level
//! events are persisted, appended to `errors.log` in the working directory;
//! info and warning events flow through the same channel but fall below the
//! threshold unless the level is raised.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

/// Environment filter override, e.g. `SOUNDMAP_LOG=soundmap=debug`
pub const LOG_ENV: &str = "SOUNDMAP_LOG";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Disable to emit nothing at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: file, stderr, file+stderr
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path, relative to the working directory unless absolute
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "error".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "file".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("errors.log")
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: default_log_file(),
            modules: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_format(&self.format)?;
        parse_output_destinations(&self.output)?;
        Ok(())
    }

    /// Log file resolved against `root` when relative
    pub fn file_under(&self, root: &Path) -> PathBuf {
        if self.file.is_absolute() {
            self.file.clone()
        } else {
            root.join(&self.file)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn parse_format(format: &str) -> Result<Format, ConfigError> {
    match format {
        "text" => Ok(Format::Text),
        "json" => Ok(Format::Json),
        other => Err(ConfigError::Invalid(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}

/// Output destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OutputDestinations {
    stderr: bool,
    file: bool,
}

fn parse_output_destinations(output: &str) -> Result<OutputDestinations, ConfigError> {
    match output {
        "file" => Ok(OutputDestinations {
            stderr: false,
            file: true,
        }),
        "stderr" => Ok(OutputDestinations {
            stderr: true,
            file: false,
        }),
        "file+stderr" => Ok(OutputDestinations {
            stderr: true,
            file: true,
        }),
        other => Err(ConfigError::Invalid(format!(
            "Invalid log output: {} (must be 'file', 'stderr', or 'file+stderr')",
            other
        ))),
    }
}

/// Initialize the global subscriber. Call once, from the binary only.
///
/// The log file is resolved against `root` and opened in append mode.
pub fn init_logging(config: Option<&LoggingConfig>, root: &Path) -> Result<(), ConfigError> {
    let default_config = LoggingConfig::default();
    let config = config.unwrap_or(&default_config);

    if !config.enabled {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = parse_format(&config.format)?;
    let output = parse_output_destinations(&config.output)?;

    let mut layers: Vec<BoxedLayer> = Vec::new();
    if output.file {
        let writer = open_log_file(&config.file_under(root))?;
        layers.push(build_layer(format, false, Mutex::new(writer)));
    }
    if output.stderr {
        layers.push(build_layer(format, true, std::io::stderr));
    }

    Registry::default()
        .with(filter)
        .with(layers)
        .try_init()
        .map_err(|e| ConfigError::Invalid(format!("Logging already initialized: {}", e)))
}

type FilteredRegistry = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<FilteredRegistry> + Send + Sync>;

fn build_layer<W>(format: Format, ansi: bool, writer: W) -> BoxedLayer
where
    W: for<'w> fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_target(true)
        .with_timer(ChronoUtc::rfc_3339())
        .with_writer(writer);
    match format {
        Format::Json => layer.json().boxed(),
        Format::Text => layer.with_ansi(ansi).boxed(),
    }
}

fn open_log_file(path: &Path) -> Result<File, ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Invalid(format!("Failed to create log directory: {}", e))
        })?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ConfigError::Invalid(format!("Failed to open log file {:?}: {}", path, e)))
}

/// Build the filter from `SOUNDMAP_LOG`, falling back to the configured levels.
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }

    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::try_new(&config.level)
        .map_err(|e| ConfigError::Invalid(format!("Invalid log level {:?}: {}", config.level, e)))?;

    for (module, module_level) in &config.modules {
        let directive = format!("{}={}", module, module_level);
        filter = filter.add_directive(
            directive
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("Invalid log directive: {}", e)))?,
        );
    }

    Ok(filter)
}
