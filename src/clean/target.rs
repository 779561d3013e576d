//! Paths the next build will write, and the directories they need.

use super::CleanError;
use crate::path::{parent_dirs, DestinationRoot};
use crate::site::ResolveOutput;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output files of the next build plus the closure of their parent dirs.
///
/// Computed fresh for each cleanup and dropped with it.
#[derive(Debug, Clone, Default)]
pub struct TargetPaths {
    files: BTreeSet<PathBuf>,
    dirs: BTreeSet<PathBuf>,
}

impl TargetPaths {
    /// Resolve every item under `root`.
    ///
    /// An item resolving to the root itself or outside it fails with
    /// [`CleanError::OutsideRoot`].
    pub fn compute<T: ResolveOutput>(root: &DestinationRoot, items: &[T]) -> Result<Self, CleanError> {
        let mut files = BTreeSet::new();
        for item in items {
            let path = item.output_path(root);
            if !root.contains(&path) {
                return Err(CleanError::OutsideRoot(path));
            }
            files.insert(path);
        }

        let mut dirs = BTreeSet::new();
        for file in &files {
            for dir in parent_dirs(file, root.as_path()) {
                // Ancestors above an already-seen dir are already in the set
                if !dirs.insert(dir) {
                    break;
                }
            }
        }

        debug!(files = files.len(), dirs = dirs.len(), "computed target paths");
        Ok(Self { files, dirs })
    }

    /// Files the next build writes.
    pub fn files(&self) -> &BTreeSet<PathBuf> {
        &self.files
    }

    /// Directories the next build needs.
    pub fn dirs(&self) -> &BTreeSet<PathBuf> {
        &self.dirs
    }

    /// Check whether the next build needs `path`, as a file or a directory.
    pub fn needs(&self, path: &Path) -> bool {
        self.files.contains(path) || self.dirs.contains(path)
    }
}
