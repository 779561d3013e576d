//! Best-effort deletion of obsolete paths.

use super::CleanError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of removing a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The path existed and is gone now
    Removed,
    /// Nothing was there to remove
    AlreadyGone,
}

/// Paths handled by [`remove_all`], split by outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalLog {
    /// Paths that were deleted
    pub removed: Vec<PathBuf>,
    /// Paths that had vanished before their turn
    pub already_gone: Vec<PathBuf>,
}

/// Remove one path, recursing into real directories.
///
/// Symlinks are unlinked, never followed. A path that does not exist, or
/// disappears mid-removal, is [`Removal::AlreadyGone`]. Any other failure is
/// a [`CleanError::Deletion`].
pub fn remove_path(path: &Path) -> Result<Removal, CleanError> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Removal::AlreadyGone),
        Err(source) => return Err(CleanError::Deletion { path: path.to_path_buf(), source }),
    };

    let result = if metadata.is_dir() { fs::remove_dir_all(path) } else { fs::remove_file(path) };

    match result {
        Ok(()) => Ok(Removal::Removed),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Removal::AlreadyGone),
        Err(source) => Err(CleanError::Deletion { path: path.to_path_buf(), source }),
    }
}

/// Remove every path in order, stopping at the first failure.
pub fn remove_all<'a, I>(paths: I) -> Result<RemovalLog, CleanError>
where
    I: IntoIterator<Item = &'a PathBuf>,
{
    let mut log = RemovalLog::default();

    for path in paths {
        match remove_path(path)? {
            Removal::Removed => {
                info!(path = %path.display(), "removed");
                log.removed.push(path.clone());
            }
            Removal::AlreadyGone => {
                debug!(path = %path.display(), "already gone");
                log.already_gone.push(path.clone());
            }
        }
    }

    Ok(log)
}
