//! Presentation: end-of-run summary rendered with comfy-table and styled headings.

use crate::pipeline::RunSummary;
use crate::resolve::ResolveOutcome;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Human-readable summary of a finished run.
pub fn format_run_summary(summary: &RunSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Run Summary")));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Phase", "Done", "Skipped", "Failed"]);
    table.add_row(vec![
        "Clear destination".to_string(),
        (summary.cleanup_destination.files_removed + summary.cleanup_destination.dirs_removed)
            .to_string(),
        "-".to_string(),
        failure_count(summary.cleanup_destination.is_complete()),
    ]);
    table.add_row(vec![
        "Stage blobs".to_string(),
        format!("{}/{}", summary.stage.copied, summary.stage.total),
        summary.stage.skipped().to_string(),
        summary.stage.failures.len().to_string(),
    ]);
    table.add_row(vec![
        "Resolve sounds".to_string(),
        format!("{}/{}", summary.resolve.succeeded(), summary.records),
        summary.resolve.missing().to_string(),
        summary.resolve.failed().to_string(),
    ]);
    table.add_row(vec![
        "Remove staging".to_string(),
        (summary.cleanup_staging.files_removed + summary.cleanup_staging.dirs_removed)
            .to_string(),
        "-".to_string(),
        failure_count(summary.cleanup_staging.is_complete()),
    ]);
    out.push_str(&format!("{}\n", table));

    let failures: Vec<_> = summary.resolve.failures().collect();
    if !failures.is_empty() {
        out.push_str(&format!(
            "\n{}\n",
            format_section_heading(&format!("Unresolved ({})", failures.len()))
        ));
        for outcome in failures {
            let reason = match outcome {
                ResolveOutcome::SourceBlobMissing { source_path, .. } => {
                    format!("missing {}", source_path.display())
                }
                ResolveOutcome::CopyFailure { error, .. } => error.cause.to_string(),
                ResolveOutcome::Copied { .. } => continue,
            };
            out.push_str(&format!("  - {}: {}\n", outcome.logical_path(), reason));
        }
        out.push_str("See the log file for details.\n");
    }

    out
}

/// Cleanup stops at its first error, so a pass fails at most once.
fn failure_count(complete: bool) -> String {
    usize::from(!complete).to_string()
}
