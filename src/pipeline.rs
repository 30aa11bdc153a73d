//! The fixed teardown-then-rebuild run:
//! clear destination → stage → parse manifest → resolve → remove staging.

use crate::cleanup::{self, CleanupReport};
use crate::error::PipelineError;
use crate::manifest::{self, SOUNDS_NAMESPACE};
use crate::report::Reporter;
use crate::resolve::{self, ResolveReport};
use crate::stage::{self, StageReport};
use std::fs;
use std::path::{Path, PathBuf};

/// Working directory layout. Names are fixed; only the root moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Nested object store to stage (read-only)
    pub source: PathBuf,
    /// Flat staging directory, removed at the end of a run
    pub staging: PathBuf,
    /// Output tree, cleared at the start of a run
    pub destination: PathBuf,
    pub manifest: PathBuf,
    pub namespace: String,
}

impl Layout {
    /// `org/`, `files/`, `sounds/` and `objects.json` under `root`.
    pub fn at(root: &Path) -> Self {
        Self {
            source: root.join("org"),
            staging: root.join("files"),
            destination: root.join("sounds"),
            manifest: manifest::default_manifest_path(root),
            namespace: SOUNDS_NAMESPACE.to_string(),
        }
    }
}

impl Default for Layout {
    /// Relative to the current working directory
    fn default() -> Self {
        Self::at(Path::new(""))
    }
}

/// Everything a run did, phase by phase
#[derive(Debug)]
pub struct RunSummary {
    pub cleanup_destination: CleanupReport,
    pub stage: StageReport,
    /// Manifest records matched under the namespace
    pub records: usize,
    pub resolve: ResolveReport,
    pub cleanup_staging: CleanupReport,
}

impl RunSummary {
    /// True when no per-file operation failed or was skipped
    pub fn is_clean(&self) -> bool {
        self.cleanup_destination.is_complete()
            && self.stage.collisions.is_empty()
            && self.stage.failures.is_empty()
            && self.resolve.failures().next().is_none()
            && self.cleanup_staging.is_complete()
    }
}

/// Run the whole pipeline against `layout`.
///
/// Per-file problems are reported and recorded in the summary; only manifest
/// and setup errors are returned as `Err`.
pub fn run(layout: &Layout, reporter: &mut dyn Reporter) -> Result<RunSummary, PipelineError> {
    let cleanup_destination = cleanup::clear_tree(&layout.destination, reporter);
    reporter.status(&format!(
        "All files and folders in '{}' have been deleted.",
        layout.destination.display()
    ));

    for dir in [&layout.destination, &layout.staging] {
        fs::create_dir_all(dir).map_err(|source| PipelineError::Setup {
            path: dir.clone(),
            source,
        })?;
    }

    let stage = stage::stage(&layout.source, &layout.staging, reporter)?;
    reporter.status(&format!(
        "Copied {} of {} files from '{}' to '{}'.",
        stage.copied,
        stage.total,
        layout.source.display(),
        layout.staging.display()
    ));

    let records = manifest::parse(&layout.manifest, &layout.namespace)?;
    let resolve = resolve::resolve(
        &records,
        &layout.namespace,
        &layout.staging,
        &layout.destination,
        reporter,
    );

    // Staging is flat: empty it, then drop the directory.
    let mut cleanup_staging = cleanup::clear_files(&layout.staging, reporter);
    if cleanup_staging.is_complete() {
        let removed = cleanup::remove_tree(&layout.staging, reporter);
        cleanup_staging.dirs_removed += removed.dirs_removed;
        cleanup_staging.error = removed.error;
    }
    reporter.status(&format!(
        "Staging folder '{}' removed; {} of {} sound assets resolved.",
        layout.staging.display(),
        resolve.succeeded(),
        records.len()
    ));

    Ok(RunSummary {
        cleanup_destination,
        stage,
        records: records.len(),
        resolve,
        cleanup_staging,
    })
}
