//! Resolution totality and per-record failure isolation

use soundmap::manifest::{self, SOUNDS_NAMESPACE};
use soundmap::report::MemoryReporter;
use soundmap::resolve::{resolve, ResolveOutcome};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_blob_does_not_affect_following_record() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let files = root.join("files");
    fs::create_dir_all(&files).unwrap();
    fs::write(files.join("present"), b"ok").unwrap();
    fs::write(
        root.join("objects.json"),
        r#"{"objects": {
            "minecraft/sounds/first.ogg": {"hash": "absent", "size": 1},
            "minecraft/sounds/second.ogg": {"hash": "present", "size": 2}
        }}"#,
    )
    .unwrap();

    let records = manifest::parse(&root.join("objects.json"), SOUNDS_NAMESPACE).unwrap();
    let mut reporter = MemoryReporter::new();
    let report = resolve(
        &records,
        SOUNDS_NAMESPACE,
        &files,
        &root.join("sounds"),
        &mut reporter,
    );

    assert_eq!(report.outcomes.len(), 2);
    assert!(matches!(
        report.outcomes[0],
        ResolveOutcome::SourceBlobMissing { .. }
    ));
    assert!(report.outcomes[1].is_success());
    assert_eq!(fs::read(root.join("sounds/second.ogg")).unwrap(), b"ok");
}

#[test]
fn test_resolve_leaves_staging_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let files = root.join("files");
    fs::create_dir_all(&files).unwrap();
    fs::write(files.join("h1"), b"one").unwrap();
    fs::write(files.join("h2"), b"two").unwrap();

    let records = vec![
        soundmap::AssetRecord {
            logical_path: "minecraft/sounds/a/one.ogg".to_string(),
            content_hash: "h1".to_string(),
        },
        soundmap::AssetRecord {
            logical_path: "minecraft/sounds/b/two.ogg".to_string(),
            content_hash: "h2".to_string(),
        },
    ];
    let mut reporter = MemoryReporter::new();
    let report = resolve(
        &records,
        SOUNDS_NAMESPACE,
        &files,
        &root.join("sounds"),
        &mut reporter,
    );

    assert_eq!(report.succeeded(), 2);
    let mut staged: Vec<_> = fs::read_dir(&files)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    staged.sort();
    assert_eq!(staged, vec!["h1", "h2"]);
    assert_eq!(fs::read(files.join("h1")).unwrap(), b"one");
}

#[test]
fn test_same_blob_resolves_to_several_paths() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let files = root.join("files");
    fs::create_dir_all(&files).unwrap();
    fs::write(files.join("shared"), b"same").unwrap();

    let records: Vec<_> = ["minecraft/sounds/x/1.ogg", "minecraft/sounds/y/2.ogg"]
        .iter()
        .map(|p| soundmap::AssetRecord {
            logical_path: p.to_string(),
            content_hash: "shared".to_string(),
        })
        .collect();
    let mut reporter = MemoryReporter::new();
    let report = resolve(
        &records,
        SOUNDS_NAMESPACE,
        &files,
        &root.join("sounds"),
        &mut reporter,
    );

    assert_eq!(report.succeeded(), 2);
    assert_eq!(fs::read(root.join("sounds/x/1.ogg")).unwrap(), b"same");
    assert_eq!(fs::read(root.join("sounds/y/2.ogg")).unwrap(), b"same");
}
