//! Error types for cleanup

use crate::path::PathError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal error from a cleanup invocation.
///
/// `Config`, `Pattern`, `OutsideRoot` and `Traversal` are raised before the
/// destination is touched. `Deletion` stops the run at the first path that
/// could not be removed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CleanError {
    /// A keep path or the destination root is unusable
    #[error("invalid path '{fragment}': {source}")]
    Config {
        fragment: String,
        #[source]
        source: PathError,
    },
    /// The keep matcher could not be compiled
    #[error("failed to build keep matcher: {0}")]
    Pattern(#[from] regex::Error),
    /// A path to delete, or a generated output, is not strictly under the root
    #[error("refusing to touch '{}': not inside the destination root", .0.display())]
    OutsideRoot(PathBuf),
    /// The destination tree could not be read
    #[error("failed to read '{}': {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    /// An obsolete path could not be removed
    #[error("failed to remove '{}': {source}", path.display())]
    Deletion {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CleanError {
    /// Path the error is about, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            CleanError::OutsideRoot(path)
            | CleanError::Traversal { path, .. }
            | CleanError::Deletion { path, .. } => Some(path),
            CleanError::Config { .. } | CleanError::Pattern(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_error_display() {
        let err = CleanError::Config {
            fragment: "../up".to_string(),
            source: PathError::EscapesRoot("../up".to_string()),
        };
        assert_eq!(err.to_string(), "invalid path '../up': '../up' escapes the destination root");
        assert!(err.path().is_none());
    }

    #[test]
    fn test_deletion_error_reports_path() {
        let err = CleanError::Deletion {
            path: PathBuf::from("/out/locked"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to remove '/out/locked': denied");
        assert_eq!(err.path(), Some(std::path::Path::new("/out/locked")));
    }

    #[test]
    fn test_outside_root_display() {
        let err = CleanError::OutsideRoot(PathBuf::from("/etc/passwd"));
        assert!(err.to_string().contains("/etc/passwd"));
    }
}
