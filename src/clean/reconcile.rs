//! Reconcile the destination tree against the next build's outputs.

use super::conflict::replaced_paths;
use super::existing::existing_paths;
use super::remove::remove_all;
use super::{CleanError, CleanResult, KeepRules, TargetPaths};
use crate::hooks::{HookDispatcher, CLEAN, ON_OBSOLETE};
use crate::path::{normalize, DestinationRoot};
use crate::site::{ResolveOutput, SiteContext};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Computes and removes obsolete paths under one destination root.
#[derive(Debug, Clone)]
pub struct Cleaner {
    root: DestinationRoot,
    keep: KeepRules,
    dry_run: bool,
}

impl Cleaner {
    /// Create a cleaner for `dest`.
    ///
    /// Keep paths are validated here, before any I/O.
    pub fn new<S: AsRef<str>>(dest: impl AsRef<Path>, keep_paths: &[S]) -> Result<Self, CleanError> {
        let dest = dest.as_ref();
        let root = DestinationRoot::new(dest).map_err(|source| CleanError::Config {
            fragment: dest.display().to_string(),
            source,
        })?;
        let keep = KeepRules::resolve(&root, keep_paths)?;
        Ok(Self { root, keep, dry_run: false })
    }

    /// Create a cleaner from a site context's destination and keep list.
    pub fn from_context(ctx: &SiteContext) -> Result<Self, CleanError> {
        Ok(Self::new(ctx.dest_dir(), ctx.keep_files())?.with_dry_run(ctx.is_dry_run()))
    }

    /// Report obsolete paths without deleting them.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The destination root.
    pub fn root(&self) -> &DestinationRoot {
        &self.root
    }

    /// The resolved keep rules.
    pub fn keep(&self) -> &KeepRules {
        &self.keep
    }

    /// Whether deletion is skipped.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Compute the obsolete set for `items` without deleting anything.
    ///
    /// `(existing - files - dirs) + (replaced - kept)`, sorted so parents precede
    /// children, then handed to `("clean", "on_obsolete")` listeners. Entries
    /// left by the listeners are normalized and must lie strictly under the
    /// root, or the whole call fails with [`CleanError::OutsideRoot`].
    pub fn obsolete_paths<T, H>(&self, items: &[T], hooks: &H) -> Result<Vec<PathBuf>, CleanError>
    where
        T: ResolveOutput,
        H: HookDispatcher + ?Sized,
    {
        let targets = TargetPaths::compute(&self.root, items)?;
        let existing = existing_paths(&self.root, &self.keep)?;
        let replaced = replaced_paths(targets.dirs());

        let mut obsolete: BTreeSet<PathBuf> =
            existing.into_iter().filter(|path| !targets.needs(path)).collect();
        // A kept file blocking a required directory stays; the build fails on it instead
        obsolete.extend(replaced.into_iter().filter(|path| !self.keep.protects(path)));
        drop(targets);

        let mut obsolete: Vec<PathBuf> = obsolete.into_iter().collect();
        debug!(count = obsolete.len(), "obsolete before hooks");

        hooks.trigger(CLEAN, ON_OBSOLETE, &mut obsolete);

        for path in obsolete.iter_mut() {
            *path = normalize(path);
            if !self.root.contains(path) {
                return Err(CleanError::OutsideRoot(path.clone()));
            }
        }

        Ok(obsolete)
    }

    /// Compute the obsolete set and delete it.
    ///
    /// Deletion runs parents first and stops at the first path that cannot be
    /// removed. In dry-run mode nothing is deleted.
    pub fn cleanup<T, H>(&self, items: &[T], hooks: &H) -> Result<CleanResult, CleanError>
    where
        T: ResolveOutput,
        H: HookDispatcher + ?Sized,
    {
        let start = Instant::now();
        let obsolete = self.obsolete_paths(items, hooks)?;

        let mut result = CleanResult { dry_run: self.dry_run, ..CleanResult::new() };

        if self.dry_run {
            info!(count = obsolete.len(), "dry run, nothing removed");
        } else {
            let mut ordered: Vec<&PathBuf> = obsolete.iter().collect();
            ordered.sort();
            ordered.dedup();
            let log = remove_all(ordered)?;
            result.removed = log.removed;
            result.already_gone = log.already_gone;
            info!(
                removed = result.removed.len(),
                already_gone = result.already_gone.len(),
                root = self.root.as_str(),
                "cleanup finished"
            );
        }

        result.obsolete = obsolete;
        Ok(result.with_duration(start.elapsed()))
    }
}

/// Remove everything under `dest` that the next build will not produce.
///
/// One-shot form of [`Cleaner::cleanup`]: keep paths are passed in rather
/// than read from configuration.
pub fn cleanup<T, S, H>(
    dest: impl AsRef<Path>,
    items: &[T],
    keep_paths: &[S],
    hooks: &H,
) -> Result<CleanResult, CleanError>
where
    T: ResolveOutput,
    S: AsRef<str>,
    H: HookDispatcher + ?Sized,
{
    Cleaner::new(dest, keep_paths)?.cleanup(items, hooks)
}
