//! Keep rules: paths under the destination that cleanup never deletes.
//!
//! A keep path protects itself and everything nested under it. Its ancestor
//! directories are protected too, since deleting them would take the kept
//! path along.

use super::CleanError;
use crate::path::{parent_dirs, quote_literal, DestinationRoot, PathError};
use regex::bytes::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};
use tracing::debug;

/// Resolved keep paths for one destination root.
#[derive(Debug, Clone)]
pub struct KeepRules {
    /// Absolute keep paths, deduplicated
    paths: Vec<PathBuf>,
    /// Ancestors of every keep path, excluding the root
    dirs: BTreeSet<PathBuf>,
    /// Anchored prefix matcher; `None` when nothing is kept
    matcher: Option<Regex>,
}

impl KeepRules {
    /// Resolve keep fragments against `root`.
    ///
    /// Fails with [`CleanError::Config`] if a fragment is empty, names the
    /// root itself, or climbs out of it.
    pub fn resolve<S: AsRef<str>>(root: &DestinationRoot, fragments: &[S]) -> Result<Self, CleanError> {
        let mut paths: Vec<PathBuf> = Vec::with_capacity(fragments.len());
        let mut alternatives = Vec::with_capacity(fragments.len());

        for fragment in fragments {
            let fragment = fragment.as_ref();
            let path = root
                .resolve(fragment)
                .map_err(|source| CleanError::Config { fragment: fragment.to_string(), source })?;
            if paths.contains(&path) {
                continue;
            }
            let text = path.to_str().ok_or_else(|| CleanError::Config {
                fragment: fragment.to_string(),
                source: PathError::NotUtf8(path.clone()),
            })?;
            alternatives.push(quote_literal(text));
            paths.push(path);
        }

        let dirs: BTreeSet<PathBuf> =
            paths.iter().flat_map(|path| parent_dirs(path, root.as_path())).collect();

        let matcher = if alternatives.is_empty() {
            None
        } else {
            let pattern = format!(
                "^(?:{})(?:{}|$)",
                alternatives.join("|"),
                quote_literal(MAIN_SEPARATOR_STR)
            );
            Some(Regex::new(&pattern)?)
        };

        debug!(keep = paths.len(), keep_dirs = dirs.len(), "resolved keep rules");
        Ok(Self { paths, dirs, matcher })
    }

    /// Rules that keep nothing.
    pub fn none() -> Self {
        Self { paths: Vec::new(), dirs: BTreeSet::new(), matcher: None }
    }

    /// Check whether `path` is a keep path or nested under one.
    pub fn is_kept(&self, path: &Path) -> bool {
        match &self.matcher {
            Some(matcher) => matcher.is_match(path.as_os_str().as_encoded_bytes()),
            None => false,
        }
    }

    /// Check whether `path` is an ancestor directory of a keep path.
    pub fn is_keep_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    /// Check whether cleanup must leave `path` alone.
    pub fn protects(&self, path: &Path) -> bool {
        self.is_kept(path) || self.is_keep_dir(path)
    }

    /// Absolute keep paths.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Ancestor directories of the keep paths.
    pub fn dirs(&self) -> &BTreeSet<PathBuf> {
        &self.dirs
    }

    /// Check whether no path is kept.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
