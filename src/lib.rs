//! soundmap: resolve Minecraft's hashed asset store into readable sound files.
//!
//! The asset index (`objects.json`) maps logical resource paths to content
//! hashes. The pipeline stages every hashed blob into one flat folder, copies
//! each `minecraft/sounds/` record's blob to its readable path under
//! `sounds/`, and removes the staging folder afterwards.

pub mod cleanup;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod pipeline;
pub mod report;
pub mod resolve;
pub mod stage;

pub use manifest::{AssetRecord, Manifest, SOUNDS_NAMESPACE};
pub use pipeline::{run, Layout, RunSummary};
pub use report::{ConsoleReporter, MemoryReporter, Reporter};
