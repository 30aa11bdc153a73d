//! Cleanup operations: idempotence and best-effort behavior

use soundmap::cleanup::{clear_files, clear_tree, remove_tree};
use soundmap::report::{Level, MemoryReporter};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_clear_tree_twice_leaves_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let sounds = temp_dir.path().join("sounds");
    fs::create_dir_all(sounds.join("a/b/c")).unwrap();
    fs::write(sounds.join("a/b/c/deep.ogg"), "d").unwrap();
    fs::write(sounds.join("root.ogg"), "r").unwrap();

    let mut reporter = MemoryReporter::new();
    let first = clear_tree(&sounds, &mut reporter);
    let second = clear_tree(&sounds, &mut reporter);

    assert!(first.is_complete());
    assert!(second.is_complete());
    assert!(sounds.is_dir());
    assert_eq!(fs::read_dir(&sounds).unwrap().count(), 0);
    assert_eq!(reporter.at_level(Level::Error).count(), 0);
}

#[test]
fn test_staging_teardown_sequence() {
    let temp_dir = TempDir::new().unwrap();
    let files = temp_dir.path().join("files");
    fs::create_dir_all(&files).unwrap();
    for name in ["aa", "bb", "cc"] {
        fs::write(files.join(name), name).unwrap();
    }

    let mut reporter = MemoryReporter::new();
    let cleared = clear_files(&files, &mut reporter);
    assert_eq!(cleared.files_removed, 3);
    assert_eq!(fs::read_dir(&files).unwrap().count(), 0);

    let removed = remove_tree(&files, &mut reporter);
    assert!(removed.is_complete());
    assert!(!files.exists());
}

#[test]
fn test_remove_tree_twice_reports_second_failure() {
    let temp_dir = TempDir::new().unwrap();
    let files = temp_dir.path().join("files");
    fs::create_dir_all(&files).unwrap();

    let mut reporter = MemoryReporter::new();
    assert!(remove_tree(&files, &mut reporter).is_complete());
    let second = remove_tree(&files, &mut reporter);

    assert!(!second.is_complete());
    assert_eq!(reporter.at_level(Level::Error).count(), 1);
}
