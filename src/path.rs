//! Path utilities for the destination tree
//!
//! Every path the cleaner touches is an absolute, lexically normalized path
//! under a [`DestinationRoot`]. Nothing here resolves symlinks: the old tree
//! and the new tree are compared by their textual layout only.

use std::env;
use std::path::{is_separator, Component, Path, PathBuf};
use thiserror::Error;

/// Error type for path resolution failures
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PathError {
    /// Fragment is empty or only separators
    #[error("empty path fragment")]
    Empty,
    /// Fragment normalizes to the destination root itself
    #[error("'{0}' names the destination root itself")]
    NamesRoot(String),
    /// Fragment climbs above the destination root
    #[error("'{0}' escapes the destination root")]
    EscapesRoot(String),
    /// Path cannot be represented as UTF-8
    #[error("path is not valid UTF-8: {}", .0.display())]
    NotUtf8(PathBuf),
    /// Working directory lookup failed while absolutizing a relative root
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

/// Absolute, normalized directory that a build writes into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DestinationRoot {
    path: PathBuf,
    text: String,
}

impl DestinationRoot {
    /// Create a destination root.
    ///
    /// Relative paths are resolved against the current working directory,
    /// then normalized lexically.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, PathError> {
        let path = path.as_ref();
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            env::current_dir().map_err(PathError::CurrentDir)?.join(path)
        };
        let path = normalize(&absolute);
        let text = path.to_str().ok_or_else(|| PathError::NotUtf8(path.clone()))?.to_string();
        Ok(Self { path, text })
    }

    /// The root as a path.
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// The root as UTF-8 text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Check whether `path` lies strictly beneath the root.
    pub fn contains(&self, path: &Path) -> bool {
        path != self.path && path.starts_with(&self.path)
    }

    /// Resolve a caller-supplied fragment to an absolute path under the root.
    ///
    /// Absolute fragments already under the root are taken as they are. Any
    /// other absolute fragment loses its leading separator and is treated as
    /// relative to the root.
    pub fn resolve(&self, fragment: &str) -> Result<PathBuf, PathError> {
        let candidate = Path::new(fragment);
        if candidate.is_absolute() {
            let normalized = normalize(candidate);
            if normalized == self.path {
                return Err(PathError::NamesRoot(fragment.to_string()));
            }
            if normalized.starts_with(&self.path) {
                return Ok(normalized);
            }
        }
        Ok(self.path.join(normalize_relative(fragment)?))
    }

    /// Join a path that may be relative or absolute and normalize the result.
    ///
    /// Unlike [`resolve`](Self::resolve) this never fails; containment is
    /// checked by the caller.
    pub fn join(&self, path: &Path) -> PathBuf {
        normalize(&self.path.join(path))
    }
}

impl AsRef<Path> for DestinationRoot {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Normalize a path lexically.
///
/// Drops `.` components and folds `..` into its parent. A `..` directly under
/// the filesystem root is discarded, matching how the OS resolves `/..`.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Normalize a fragment that must stay below some root.
///
/// Leading separators are ignored. Fails if the fragment is empty, names the
/// root itself, or climbs above it.
pub fn normalize_relative(fragment: &str) -> Result<PathBuf, PathError> {
    let trimmed = fragment.trim_start_matches(is_separator);
    if trimmed.is_empty() {
        return Err(if fragment.is_empty() {
            PathError::Empty
        } else {
            PathError::NamesRoot(fragment.to_string())
        });
    }

    let mut out = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            Component::ParentDir => {
                if !out.pop() {
                    return Err(PathError::EscapesRoot(fragment.to_string()));
                }
            }
        }
    }

    if out.as_os_str().is_empty() {
        return Err(PathError::NamesRoot(fragment.to_string()));
    }
    Ok(out)
}

/// Every ancestor directory of `path` below `root`, nearest first.
///
/// Walks upward one parent at a time rather than recursing, so arbitrarily
/// deep trees cost no stack. `root` itself is never included, and a path
/// outside `root` has no ancestors under it.
pub fn parent_dirs(path: &Path, root: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    let mut current = path.parent();

    while let Some(dir) = current {
        if dir == root || !dir.starts_with(root) {
            break;
        }
        dirs.push(dir.to_path_buf());
        current = dir.parent();
    }

    dirs
}

/// Escape `text` so it matches itself literally inside a regex.
pub fn quote_literal(text: &str) -> String {
    regex::escape(text)
}

/// Check whether the path text ends in a `.` or `..` segment.
///
/// Dot-inclusive directory listings can surface these self and parent
/// references; they are never real entries.
pub fn is_self_or_parent_ref(path: &Path) -> bool {
    let bytes = path.as_os_str().as_encoded_bytes();
    [&b".."[..], &b"."[..]].iter().any(|tail| {
        bytes.len() > tail.len()
            && bytes.ends_with(tail)
            && is_separator(bytes[bytes.len() - tail.len() - 1] as char)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_cur_dir() {
        assert_eq!(normalize(Path::new("/out/./a/./b")), PathBuf::from("/out/a/b"));
    }

    #[test]
    fn test_normalize_folds_parent_dir() {
        assert_eq!(normalize(Path::new("/out/a/../b")), PathBuf::from("/out/b"));
        assert_eq!(normalize(Path::new("/../out")), PathBuf::from("/out"));
    }

    #[test]
    fn test_normalize_relative_keeps_leading_parent() {
        assert_eq!(normalize(Path::new("../a")), PathBuf::from("../a"));
        assert_eq!(normalize(Path::new("../../a")), PathBuf::from("../../a"));
    }

    #[test]
    fn test_normalize_relative_fragment() {
        assert_eq!(normalize_relative(".git").expect("should normalize"), PathBuf::from(".git"));
        assert_eq!(normalize_relative("/assets/./vendor/").expect("should normalize"), PathBuf::from("assets/vendor"));
        assert_eq!(normalize_relative("a/b/../c").expect("should normalize"), PathBuf::from("a/c"));
    }

    #[test]
    fn test_normalize_relative_rejects_escape() {
        assert!(matches!(normalize_relative("../secrets"), Err(PathError::EscapesRoot(_))));
        assert!(matches!(normalize_relative("a/../../b"), Err(PathError::EscapesRoot(_))));
    }

    #[test]
    fn test_normalize_relative_rejects_empty_and_root() {
        assert!(matches!(normalize_relative(""), Err(PathError::Empty)));
        assert!(matches!(normalize_relative("/"), Err(PathError::NamesRoot(_))));
        assert!(matches!(normalize_relative("a/.."), Err(PathError::NamesRoot(_))));
        assert!(matches!(normalize_relative("."), Err(PathError::NamesRoot(_))));
    }

    #[test]
    fn test_parent_dirs_nearest_first() {
        let dirs = parent_dirs(Path::new("/out/blog/2024/post/index.html"), Path::new("/out"));
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/out/blog/2024/post"),
                PathBuf::from("/out/blog/2024"),
                PathBuf::from("/out/blog"),
            ]
        );
    }

    #[test]
    fn test_parent_dirs_top_level_file() {
        assert!(parent_dirs(Path::new("/out/index.html"), Path::new("/out")).is_empty());
    }

    #[test]
    fn test_parent_dirs_outside_root() {
        assert!(parent_dirs(Path::new("/elsewhere/a/b.html"), Path::new("/out")).is_empty());
    }

    #[test]
    fn test_parent_dirs_deep_nesting() {
        let mut path = PathBuf::from("/out");
        for i in 0..5000 {
            path.push(format!("d{}", i));
        }
        path.push("leaf.html");

        assert_eq!(parent_dirs(&path, Path::new("/out")).len(), 5000);
    }

    #[test]
    fn test_quote_literal_escapes_metacharacters() {
        assert_eq!(quote_literal(".git"), r"\.git");
        assert_eq!(quote_literal("a+b(c)"), r"a\+b\(c\)");
    }

    #[test]
    fn test_is_self_or_parent_ref() {
        assert!(is_self_or_parent_ref(Path::new("/out/.")));
        assert!(is_self_or_parent_ref(Path::new("/out/sub/..")));
        assert!(!is_self_or_parent_ref(Path::new("/out/.git")));
        assert!(!is_self_or_parent_ref(Path::new("/out/a..")));
        assert!(!is_self_or_parent_ref(Path::new("/out/a.")));
        assert!(!is_self_or_parent_ref(Path::new("/out/...")));
    }

    #[test]
    fn test_destination_root_normalizes() {
        let root = DestinationRoot::new("/site/./output/../output").expect("should create destination root");
        assert_eq!(root.as_path(), Path::new("/site/output"));
        assert_eq!(root.as_str(), "/site/output");
    }

    #[test]
    fn test_destination_root_relative_is_absolutized() {
        let root = DestinationRoot::new("output").expect("should create destination root");
        assert!(root.as_path().is_absolute());
        assert!(root.as_path().ends_with("output"));
    }

    #[test]
    fn test_destination_root_resolve_relative() {
        let root = DestinationRoot::new("/out").expect("should create destination root");
        assert_eq!(root.resolve(".git").expect("should resolve under root"), PathBuf::from("/out/.git"));
        assert_eq!(root.resolve("/assets/vendor").expect("should resolve under root"), PathBuf::from("/out/assets/vendor"));
    }

    #[test]
    fn test_destination_root_resolve_absolute_under_root() {
        let root = DestinationRoot::new("/out").expect("should create destination root");
        assert_eq!(root.resolve("/out/.git").expect("should resolve under root"), PathBuf::from("/out/.git"));
        assert!(matches!(root.resolve("/out"), Err(PathError::NamesRoot(_))));
    }

    #[test]
    fn test_destination_root_contains() {
        let root = DestinationRoot::new("/out").expect("should create destination root");
        assert!(root.contains(Path::new("/out/a")));
        assert!(!root.contains(Path::new("/out")));
        assert!(!root.contains(Path::new("/outside/a")));
        assert!(!root.contains(Path::new("/output/a")));
    }
}
