//! Enumerate what the destination tree holds right now.

use super::{CleanError, KeepRules};
use crate::path::{is_self_or_parent_ref, DestinationRoot};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

/// Every file and directory under `root`, at every depth, minus kept paths.
///
/// Dotfiles are included. Symlinks are listed but never followed, so a
/// symlinked directory is one entry, not a subtree. Kept subtrees are not
/// descended into; ancestors of keep paths are descended but not listed.
///
/// A missing root yields an empty set. Any other read failure aborts with
/// [`CleanError::Traversal`] so nothing is deleted on partial information.
pub fn existing_paths(root: &DestinationRoot, keep: &KeepRules) -> Result<BTreeSet<PathBuf>, CleanError> {
    let mut paths = BTreeSet::new();

    match fs::symlink_metadata(root.as_path()) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(root = root.as_str(), "destination does not exist yet");
            return Ok(paths);
        }
        _ => {}
    }

    let walker = WalkDir::new(root.as_path())
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !keep.is_kept(entry.path()));

    for entry in walker {
        let entry = entry.map_err(|source| CleanError::Traversal {
            path: source.path().map(|p| p.to_path_buf()).unwrap_or_else(|| root.as_path().to_path_buf()),
            source,
        })?;
        let path = entry.path();
        if is_self_or_parent_ref(path) || keep.is_keep_dir(path) {
            continue;
        }
        paths.insert(path.to_path_buf());
    }

    debug!(count = paths.len(), "enumerated existing paths");
    Ok(paths)
}
