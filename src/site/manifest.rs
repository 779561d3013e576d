//! Item manifest for handing generated items to the cleaner.
//!
//! A build pipeline running in another process describes what it is about
//! to write as a JSON manifest. The cleaner only reads it.
//!
//! # Manifest Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "items": [
//!     { "kind": "page", "url": "/about/" },
//!     { "kind": "page", "url": "/feed.xml", "output_ext": ".xml" },
//!     { "kind": "static_file", "path": "images/logo.png" },
//!     { "kind": "resource", "output_path": "/srv/site/output/sitemap.xml" }
//!   ]
//! }
//! ```

use crate::site::GeneratedItem;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Current manifest format version.
const MANIFEST_VERSION: u32 = 1;

/// Conventional manifest filename.
pub const MANIFEST_FILENAME: &str = ".sitesweep-items.json";

/// Error during manifest operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ManifestError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Version mismatch
    #[error("Manifest version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// Every item the next build will produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemManifest {
    /// Manifest format version
    pub version: u32,
    /// Generated items, in pipeline order
    #[serde(default)]
    pub items: Vec<GeneratedItem>,
}

impl Default for ItemManifest {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemManifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self { version: MANIFEST_VERSION, items: Vec::new() }
    }

    /// Create a manifest from a list of items.
    pub fn from_items(items: Vec<GeneratedItem>) -> Self {
        Self { version: MANIFEST_VERSION, items }
    }

    /// Load a manifest from a file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let manifest: ItemManifest = serde_json::from_reader(reader)?;

        if manifest.version != MANIFEST_VERSION {
            return Err(ManifestError::VersionMismatch {
                expected: MANIFEST_VERSION,
                found: manifest.version,
            });
        }

        Ok(manifest)
    }

    /// Save the manifest to a file.
    pub fn save(&self, path: &Path) -> Result<(), ManifestError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;

        Ok(())
    }

    /// Add an item.
    pub fn push(&mut self, item: GeneratedItem) {
        self.items.push(item);
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the manifest lists no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
