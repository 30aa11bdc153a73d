//! Staging: basename collisions, walk order, and progress reporting

use soundmap::report::{DiagnosticKind, Level, MemoryReporter, Phase};
use soundmap::stage::stage;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_collision_first_in_path_order_wins() {
    let temp_dir = TempDir::new().unwrap();
    let org = temp_dir.path().join("org");
    let files = temp_dir.path().join("files");
    // Created in reverse order so filesystem creation order cannot decide.
    for dir in ["zz", "mm", "aa"] {
        fs::create_dir_all(org.join(dir)).unwrap();
        fs::write(org.join(dir).join("dup"), dir).unwrap();
    }

    let mut reporter = MemoryReporter::new();
    let report = stage(&org, &files, &mut reporter).unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.copied, 1);
    assert_eq!(report.skipped(), 2);
    assert_eq!(fs::read_to_string(files.join("dup")).unwrap(), "aa");
    assert!(report.collisions[0].source_path.ends_with("mm/dup"));
    assert!(report.collisions[1].source_path.ends_with("zz/dup"));

    let collisions: Vec<_> = reporter.of_kind(DiagnosticKind::FileCollision).collect();
    assert_eq!(collisions.len(), 2);
    assert!(collisions.iter().all(|d| d.level == Level::Warn));
}

#[test]
fn test_progress_counts_only_copied_files() {
    let temp_dir = TempDir::new().unwrap();
    let org = temp_dir.path().join("org");
    let files = temp_dir.path().join("files");
    fs::create_dir_all(org.join("a")).unwrap();
    fs::create_dir_all(org.join("b")).unwrap();
    fs::write(org.join("a").join("one"), "1").unwrap();
    fs::write(org.join("a").join("two"), "2").unwrap();
    fs::write(org.join("b").join("one"), "1").unwrap();

    let mut reporter = MemoryReporter::new();
    let report = stage(&org, &files, &mut reporter).unwrap();

    assert_eq!(report.copied, 2);
    let ticks: Vec<_> = reporter
        .progress
        .iter()
        .filter(|p| p.phase == Phase::Stage)
        .map(|p| (p.current, p.total))
        .collect();
    assert_eq!(ticks, vec![(1, 3), (2, 3)]);
}

#[test]
fn test_staging_directory_is_created() {
    let temp_dir = TempDir::new().unwrap();
    let org = temp_dir.path().join("org");
    let files = temp_dir.path().join("nested").join("files");
    fs::create_dir_all(&org).unwrap();

    let mut reporter = MemoryReporter::new();
    let report = stage(&org, &files, &mut reporter).unwrap();

    assert_eq!(report.total, 0);
    assert!(files.is_dir());
}
