//! Shared fixture for integration tests
//!
//! Builds a throwaway working root with the fixed layout: `org/` (nested
//! object store), `objects.json`, and optionally pre-existing `sounds/` content.

use soundmap::Layout;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("org")).unwrap();
        Self { temp_dir }
    }

    /// A root with no `org/`; blobs are placed straight into `files/`.
    pub fn without_source() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn layout(&self) -> Layout {
        Layout::at(self.root())
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Place a blob in the object store under `org/<first two chars>/<hash>`.
    pub fn add_object(&self, hash: &str, content: &[u8]) {
        let bucket = self.path("org").join(&hash[..hash.len().min(2)]);
        fs::create_dir_all(&bucket).unwrap();
        fs::write(bucket.join(hash), content).unwrap();
    }

    /// Write an arbitrary file relative to the root, creating parents.
    pub fn write(&self, relative: &str, content: &[u8]) {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Write `objects.json` from (logical path, hash) pairs.
    pub fn write_manifest(&self, entries: &[(&str, &str)]) {
        let objects: serde_json::Map<String, serde_json::Value> = entries
            .iter()
            .map(|(path, hash)| {
                (
                    path.to_string(),
                    serde_json::json!({ "hash": hash, "size": 1 }),
                )
            })
            .collect();
        let doc = serde_json::json!({ "objects": objects });
        fs::write(self.path("objects.json"), doc.to_string()).unwrap();
    }
}
