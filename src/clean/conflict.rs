//! Detect paths that are files today but must become directories.
//!
//! Only the file-to-directory direction is handled. A directory sitting where
//! the next build writes a file is not replaced: its contents are obsolete and
//! get deleted, but the empty directory itself stays because the path is
//! needed, so the build's write to that path will fail.

use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::debug;

/// Members of `target_dirs` that currently exist as regular files.
///
/// Symlinks are followed, so a link pointing at a file counts as a file.
/// Must run before anything is deleted since it reads live state.
pub fn replaced_paths(target_dirs: &BTreeSet<PathBuf>) -> BTreeSet<PathBuf> {
    let replaced: BTreeSet<PathBuf> = target_dirs.iter().filter(|dir| dir.is_file()).cloned().collect();

    for path in &replaced {
        debug!(path = %path.display(), "file occupies a required directory");
    }
    replaced
}
