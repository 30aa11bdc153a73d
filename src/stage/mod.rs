//! Blob stager: flattens a nested object store into one staging directory.
//!
//! Every regular file under the source root is copied to `staging/<basename>`.
//! An existing staging entry is never overwritten; the first file in walk
//! order wins and later same-named files are reported as collisions.
//! A missing source root stages nothing: blobs already in staging still
//! resolve.

pub mod walker;

pub use walker::{SourceFile, Walker, WalkerConfig};

use crate::error::{CopyError, StageError};
use crate::report::{Diagnostic, DiagnosticKind, Phase, Progress, Reporter};
use std::fs;
use std::path::{Path, PathBuf};

/// A source file skipped because its basename was already staged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub source_path: PathBuf,
    pub staged_path: PathBuf,
}

/// Outcome of one staging pass
#[derive(Debug, Default)]
pub struct StageReport {
    /// Regular files found under the source root
    pub total: usize,
    /// Files actually copied (collisions and failures not counted)
    pub copied: usize,
    pub collisions: Vec<Collision>,
    pub failures: Vec<CopyError>,
}

impl StageReport {
    pub fn skipped(&self) -> usize {
        self.collisions.len()
    }
}

/// Copy every file under `source_root` into the flat `staging_dir`.
pub fn stage(
    source_root: &Path,
    staging_dir: &Path,
    reporter: &mut dyn Reporter,
) -> Result<StageReport, StageError> {
    stage_with(&Walker::new(source_root), staging_dir, reporter)
}

/// Like [`stage`], with a caller-configured walker.
pub fn stage_with(
    walker: &Walker,
    staging_dir: &Path,
    reporter: &mut dyn Reporter,
) -> Result<StageReport, StageError> {
    let files = if walker.root().exists() {
        walker.walk()?
    } else {
        reporter.diagnostic(Diagnostic::warn(
            DiagnosticKind::SourceMissing,
            format!(
                "Source folder not found: {} (nothing staged)",
                walker.root().display()
            ),
        ));
        Vec::new()
    };

    fs::create_dir_all(staging_dir).map_err(|source| StageError::CreateStaging {
        path: staging_dir.to_path_buf(),
        source,
    })?;

    let mut report = StageReport {
        total: files.len(),
        ..StageReport::default()
    };

    for file in files {
        let Some(name) = file.file_name() else {
            continue;
        };
        let staged_path = staging_dir.join(name);

        if staged_path.exists() {
            reporter.diagnostic(Diagnostic::warn(
                DiagnosticKind::FileCollision,
                format!(
                    "Target file already exists: {} (skipping {})",
                    staged_path.display(),
                    file.path.display()
                ),
            ));
            report.collisions.push(Collision {
                source_path: file.path,
                staged_path,
            });
            continue;
        }

        match fs::copy(&file.path, &staged_path) {
            Ok(_) => {
                report.copied += 1;
                reporter.diagnostic(Diagnostic::info(
                    DiagnosticKind::Staged,
                    format!("File copied: {}", staged_path.display()),
                ));
                reporter.progress(Progress {
                    phase: Phase::Stage,
                    current: report.copied,
                    total: report.total,
                    detail: staged_path.display().to_string(),
                });
            }
            Err(cause) => {
                let error = CopyError {
                    source_path: file.path,
                    destination_path: staged_path,
                    cause,
                };
                reporter.diagnostic(Diagnostic::error(
                    DiagnosticKind::CopyFailure,
                    error.to_string(),
                ));
                report.failures.push(error);
            }
        }
    }

    Ok(report)
}
