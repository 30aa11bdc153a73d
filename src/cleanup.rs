//! Best-effort teardown of working directories.
//!
//! None of these operations return `Err`. The first failure is reported,
//! stored in the [`CleanupReport`], and the operation stops; whatever was
//! already deleted stays deleted.

use crate::error::CleanupError;
use crate::report::{Diagnostic, DiagnosticKind, Reporter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct CleanupReport {
    pub files_removed: usize,
    pub dirs_removed: usize,
    pub error: Option<CleanupError>,
}

impl CleanupReport {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Delete everything under `path`, leaving `path` itself present and empty.
///
/// Files at each level go first, then subdirectories. A missing `path` is a no-op.
pub fn clear_tree(path: &Path, reporter: &mut dyn Reporter) -> CleanupReport {
    let mut report = CleanupReport::default();
    if !path.exists() {
        return report;
    }
    if let Err(error) = clear_tree_inner(path, reporter, &mut report) {
        fail(path, error, reporter, &mut report);
    } else {
        reporter.diagnostic(Diagnostic::info(
            DiagnosticKind::Deleted,
            format!(
                "All files and folders in {} have been deleted.",
                path.display()
            ),
        ));
    }
    report
}

fn clear_tree_inner(
    path: &Path,
    reporter: &mut dyn Reporter,
    report: &mut CleanupReport,
) -> Result<(), CleanupError> {
    let (files, dirs) = list_entries(path)?;

    for file in files {
        fs::remove_file(&file).map_err(|source| CleanupError {
            path: file.clone(),
            source,
        })?;
        report.files_removed += 1;
        reporter.diagnostic(Diagnostic::info(
            DiagnosticKind::Deleted,
            format!("File deleted: {}", file.display()),
        ));
    }

    for dir in dirs {
        fs::remove_dir_all(&dir).map_err(|source| CleanupError {
            path: dir.clone(),
            source,
        })?;
        report.dirs_removed += 1;
        reporter.diagnostic(Diagnostic::info(
            DiagnosticKind::Deleted,
            format!("Folder deleted: {}", dir.display()),
        ));
    }

    Ok(())
}

/// Delete only the regular files directly inside `path`; subdirectories are kept.
pub fn clear_files(path: &Path, reporter: &mut dyn Reporter) -> CleanupReport {
    let mut report = CleanupReport::default();
    if !path.exists() {
        return report;
    }

    let result = list_entries(path).and_then(|(files, _)| {
        for file in files {
            fs::remove_file(&file).map_err(|source| CleanupError {
                path: file.clone(),
                source,
            })?;
            report.files_removed += 1;
            reporter.diagnostic(Diagnostic::info(
                DiagnosticKind::Deleted,
                format!("File deleted: {}", file.display()),
            ));
        }
        Ok(())
    });

    match result {
        Ok(()) => reporter.diagnostic(Diagnostic::info(
            DiagnosticKind::Deleted,
            format!("All files in {} have been deleted.", path.display()),
        )),
        Err(error) => fail(path, error, reporter, &mut report),
    }
    report
}

/// Delete `path` and everything beneath it.
pub fn remove_tree(path: &Path, reporter: &mut dyn Reporter) -> CleanupReport {
    let mut report = CleanupReport::default();
    match fs::remove_dir_all(path) {
        Ok(()) => {
            report.dirs_removed = 1;
            reporter.diagnostic(Diagnostic::info(
                DiagnosticKind::Deleted,
                format!("Folder deleted: {}", path.display()),
            ));
        }
        Err(source) => fail(
            path,
            CleanupError {
                path: path.to_path_buf(),
                source,
            },
            reporter,
            &mut report,
        ),
    }
    report
}

type Entries = (Vec<PathBuf>, Vec<PathBuf>);

/// Direct children of `path`, split into (non-directories, directories).
fn list_entries(path: &Path) -> Result<Entries, CleanupError> {
    let to_error = |source: io::Error| CleanupError {
        path: path.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    let mut dirs = Vec::new();
    for entry in fs::read_dir(path).map_err(to_error)? {
        let entry = entry.map_err(to_error)?;
        // file_type() does not follow symlinks, so a link to a directory is removed as a file.
        if entry.file_type().map_err(to_error)?.is_dir() {
            dirs.push(entry.path());
        } else {
            files.push(entry.path());
        }
    }
    files.sort();
    dirs.sort();
    Ok((files, dirs))
}

fn fail(
    root: &Path,
    error: CleanupError,
    reporter: &mut dyn Reporter,
    report: &mut CleanupReport,
) {
    reporter.diagnostic(Diagnostic::error(
        DiagnosticKind::CleanupFailure,
        format!("Error cleaning {}: {}", root.display(), error),
    ));
    report.error = Some(error);
}
