//! Integration tests for the default error-only log file.
//!
//! Verifies that runs append error-level entries to `errors.log` in the
//! working directory, and that info-level events stay out of it by default.

use super::test_utils::Workspace;
use std::fs;
use std::process::Command;

fn run(ws: &Workspace, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_soundmap"))
        .current_dir(ws.root())
        .env_remove("SOUNDMAP_LOG")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_missing_blob_is_logged_to_errors_log() {
    let ws = Workspace::new();
    ws.write_manifest(&[("minecraft/sounds/ambient/cave.ogg", "abc123")]);

    let output = run(&ws, &[]);
    assert!(output.status.success());

    let log = fs::read_to_string(ws.path("errors.log")).unwrap();
    assert!(log.contains("ERROR"), "log={}", log);
    assert!(log.contains("minecraft/sounds/ambient/cave.ogg"));
    assert!(log.contains("abc123"));
    assert!(!log.contains("soundmap starting"), "info must stay below threshold");
}

#[test]
fn test_log_file_is_appended_across_runs() {
    let ws = Workspace::new();
    ws.write_manifest(&[("minecraft/sounds/a.ogg", "nothere")]);

    assert!(run(&ws, &[]).status.success());
    assert!(run(&ws, &[]).status.success());

    let log = fs::read_to_string(ws.path("errors.log")).unwrap();
    let entries = log.lines().filter(|l| l.contains("nothere")).count();
    assert_eq!(entries, 2, "log={}", log);
}

#[test]
fn test_verbose_mirrors_to_stderr() {
    let ws = Workspace::new();
    ws.add_object("abc123", b"x");
    ws.write_manifest(&[("minecraft/sounds/a.ogg", "abc123")]);

    let output = run(&ws, &["--verbose"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("soundmap starting"), "stderr={}", stderr);
    let log = fs::read_to_string(ws.path("errors.log")).unwrap();
    assert!(log.contains("soundmap starting"));
}

#[test]
fn test_quiet_writes_no_log_file() {
    let ws = Workspace::new();
    ws.write_manifest(&[("minecraft/sounds/a.ogg", "nothere")]);

    let output = run(&ws, &["--quiet"]);
    assert!(output.status.success());
    assert!(!ws.path("errors.log").exists());
}
