//! Manifest loader: parses the asset index (`objects.json`) into [`AssetRecord`]s.
//!
//! The index maps logical resource paths to content hashes. Only entries under
//! a namespace prefix (e.g. `minecraft/sounds/`) are turned into records, in
//! the order they appear in the document.

use crate::error::ManifestError;
use serde::Deserialize;
use serde_json::Map;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Namespace the pipeline extracts by default
pub const SOUNDS_NAMESPACE: &str = "minecraft/sounds/";

/// One manifest entry resolved to its content hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    pub logical_path: String,
    pub content_hash: String,
}

impl AssetRecord {
    /// Logical path with `namespace` stripped; the full path if it does not match.
    pub fn relative_path(&self, namespace: &str) -> &str {
        self.logical_path
            .strip_prefix(namespace)
            .unwrap_or(&self.logical_path)
    }
}

/// Value side of an `objects` entry. Fields other than `hash` and `size` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

/// Parsed asset index. Keys keep document order.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub objects: Map<String, serde_json::Value>,
}

impl Manifest {
    /// Read a manifest from a file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let file = File::open(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ManifestError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Records whose logical path starts with `namespace`.
    ///
    /// A matched entry without a `hash` is fatal; unmatched entries are never inspected.
    pub fn records(&self, namespace: &str) -> Result<Vec<AssetRecord>, ManifestError> {
        let mut records = Vec::new();
        for (key, value) in &self.objects {
            if !key.starts_with(namespace) {
                continue;
            }
            let entry: ManifestEntry = serde_json::from_value(value.clone())?;
            let content_hash = entry.hash.ok_or_else(|| ManifestError::MissingHash {
                logical_path: key.clone(),
            })?;
            records.push(AssetRecord {
                logical_path: key.clone(),
                content_hash,
            });
        }
        Ok(records)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Load `manifest_path` and return the records under `namespace_prefix`.
pub fn parse(manifest_path: &Path, namespace_prefix: &str) -> Result<Vec<AssetRecord>, ManifestError> {
    let manifest = Manifest::load(manifest_path)?;
    let records = manifest.records(namespace_prefix)?;
    tracing::debug!(
        manifest = %manifest_path.display(),
        entries = manifest.len(),
        matched = records.len(),
        namespace = namespace_prefix,
        "Manifest parsed"
    );
    Ok(records)
}

/// Default manifest location relative to a working root
pub fn default_manifest_path(root: &Path) -> PathBuf {
    root.join("objects.json")
}
