//! Error types for the soundmap asset-resolution pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Manifest loading errors. Always fatal for a run.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Manifest entry {logical_path:?} has no hash")]
    MissingHash { logical_path: String },
}

/// Staging setup errors (per-file copy errors are recorded, not raised).
#[derive(Debug, Error)]
pub enum StageError {
    #[error("Source tree not found: {0:?}")]
    SourceNotFound(PathBuf),

    #[error("Failed to create staging directory {path:?}: {source}")]
    CreateStaging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),
}

/// A single failed copy, carried inside stage and resolve outcomes.
#[derive(Debug, Error)]
#[error("Error copying {source_path:?} to {destination_path:?}: {cause}")]
pub struct CopyError {
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
    pub cause: std::io::Error,
}

/// Best-effort cleanup failure. Stored in the cleanup report, never propagated.
#[derive(Debug, Error)]
#[error("Error deleting {path:?}: {source}")]
pub struct CleanupError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Configuration and logging setup errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that terminate a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Stage(#[from] StageError),

    #[error("Failed to prepare directory {path:?}: {source}")]
    Setup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
