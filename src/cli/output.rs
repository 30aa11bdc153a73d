//! CLI output: error mapping from pipeline errors to stable CLI surface.

use crate::error::{ManifestError, PipelineError};

/// Map a fatal pipeline error to a one-line message with a hint where one helps.
pub fn map_error(e: &PipelineError) -> String {
    match e {
        PipelineError::Manifest(ManifestError::Io { path, .. }) => format!(
            "{}\nHint: copy the asset index to {} before running.",
            e,
            path.display()
        ),
        _ => e.to_string(),
    }
}
