//! CLI parse: clap types for soundmap. No behavior; definitions only.
//!
//! Only ambient switches are exposed. The directory layout is fixed.

use clap::Parser;
use std::path::PathBuf;

/// soundmap - resolve the hashed asset store into a readable sounds/ tree
#[derive(Parser, Debug)]
#[command(name = "soundmap")]
#[command(about = "Resolve Minecraft's hashed asset store into a readable sounds/ tree")]
pub struct Cli {
    /// Configuration file path (overrides ./soundmap.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log info-level events and mirror them to stderr
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
