//! Asset resolver: copies staged blobs to their namespace-relative destinations.
//!
//! Each [`AssetRecord`] yields exactly one [`ResolveOutcome`]. A missing blob or
//! a failed copy is reported and recorded, and the batch moves on to the next
//! record. The staging directory is only read; all writes land under the
//! destination root. A relative path or hash that would leave its root (`..`,
//! an absolute path, or an empty path) is rejected as that record's copy
//! failure.

use crate::error::CopyError;
use crate::manifest::AssetRecord;
use crate::report::{Diagnostic, DiagnosticKind, Phase, Progress, Reporter};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Result of resolving one record
#[derive(Debug)]
pub enum ResolveOutcome {
    Copied {
        logical_path: String,
        destination_path: PathBuf,
        bytes: u64,
    },
    SourceBlobMissing {
        logical_path: String,
        source_path: PathBuf,
    },
    CopyFailure {
        logical_path: String,
        error: CopyError,
    },
}

impl ResolveOutcome {
    pub fn logical_path(&self) -> &str {
        match self {
            ResolveOutcome::Copied { logical_path, .. }
            | ResolveOutcome::SourceBlobMissing { logical_path, .. }
            | ResolveOutcome::CopyFailure { logical_path, .. } => logical_path,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResolveOutcome::Copied { .. })
    }
}

/// Outcomes of one resolution pass, in record order
#[derive(Debug, Default)]
pub struct ResolveReport {
    pub outcomes: Vec<ResolveOutcome>,
}

impl ResolveReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn missing(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ResolveOutcome::SourceBlobMissing { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ResolveOutcome::CopyFailure { .. }))
            .count()
    }

    /// Every outcome that is not a successful copy
    pub fn failures(&self) -> impl Iterator<Item = &ResolveOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}

/// Copy each record's staged blob (`staging_dir/<hash>`) to
/// `destination_root/<logical path without namespace>`.
pub fn resolve(
    records: &[AssetRecord],
    namespace: &str,
    staging_dir: &Path,
    destination_root: &Path,
    reporter: &mut dyn Reporter,
) -> ResolveReport {
    let total = records.len();
    reporter.status(&format!("Processing {} sound assets:", total));

    let mut report = ResolveReport {
        outcomes: Vec::with_capacity(total),
    };

    for (index, record) in records.iter().enumerate() {
        let outcome = resolve_one(record, namespace, staging_dir, destination_root);

        match &outcome {
            ResolveOutcome::Copied {
                destination_path, ..
            } => {
                reporter.diagnostic(Diagnostic::info(
                    DiagnosticKind::Resolved,
                    format!("File copied: {}", destination_path.display()),
                ));
                reporter.progress(Progress {
                    phase: Phase::Resolve,
                    current: index + 1,
                    total,
                    detail: destination_path.display().to_string(),
                });
            }
            ResolveOutcome::SourceBlobMissing {
                logical_path,
                source_path,
            } => {
                reporter.diagnostic(Diagnostic::error(
                    DiagnosticKind::SourceBlobMissing,
                    format!(
                        "Source file not found: {} (for asset with path: {})",
                        source_path.display(),
                        logical_path
                    ),
                ));
            }
            ResolveOutcome::CopyFailure { error, .. } => {
                reporter.diagnostic(Diagnostic::error(
                    DiagnosticKind::CopyFailure,
                    error.to_string(),
                ));
            }
        }

        report.outcomes.push(outcome);
    }

    report
}

fn resolve_one(
    record: &AssetRecord,
    namespace: &str,
    staging_dir: &Path,
    destination_root: &Path,
) -> ResolveOutcome {
    let relative_path = record.relative_path(namespace);
    let (source_path, destination_path) = match (
        confined_join(staging_dir, &record.content_hash),
        confined_join(destination_root, relative_path),
    ) {
        (Ok(source_path), Ok(destination_path)) => (source_path, destination_path),
        (source, destination) => {
            return ResolveOutcome::CopyFailure {
                logical_path: record.logical_path.clone(),
                error: CopyError {
                    source_path: source.unwrap_or_else(|p| p),
                    destination_path: destination.unwrap_or_else(|p| p),
                    cause: io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!(
                            "hash {:?} or path {:?} escapes its root directory",
                            record.content_hash, relative_path
                        ),
                    ),
                },
            };
        }
    };

    if !source_path.is_file() {
        return ResolveOutcome::SourceBlobMissing {
            logical_path: record.logical_path.clone(),
            source_path,
        };
    }

    match copy_blob(&source_path, &destination_path) {
        Ok(bytes) => ResolveOutcome::Copied {
            logical_path: record.logical_path.clone(),
            destination_path,
            bytes,
        },
        Err(cause) => ResolveOutcome::CopyFailure {
            logical_path: record.logical_path.clone(),
            error: CopyError {
                source_path,
                destination_path,
                cause,
            },
        },
    }
}

/// `root.join(relative)` when `relative` is non-empty and made only of plain
/// name components; otherwise the unconfined join as `Err`.
fn confined_join(root: &Path, relative: &str) -> Result<PathBuf, PathBuf> {
    let relative = Path::new(relative);
    let mut components = relative.components().peekable();
    let plain = components.peek().is_some()
        && components.all(|component| matches!(component, Component::Normal(_)));
    if plain {
        Ok(root.join(relative))
    } else {
        Err(root.join(relative))
    }
}

fn copy_blob(source_path: &Path, destination_path: &Path) -> std::io::Result<u64> {
    if let Some(parent) = destination_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(source_path, destination_path)
}
