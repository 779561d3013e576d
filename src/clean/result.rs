//! Cleanup result types.

use std::path::PathBuf;
use std::time::Duration;

/// Outcome of one cleanup invocation.
#[derive(Debug, Clone, Default)]
pub struct CleanResult {
    /// Final obsolete set, after hook listeners ran
    pub obsolete: Vec<PathBuf>,
    /// Paths actually deleted
    pub removed: Vec<PathBuf>,
    /// Obsolete paths that no longer existed when their turn came
    pub already_gone: Vec<PathBuf>,
    /// Whether deletion was skipped
    pub dry_run: bool,
    /// Total cleanup duration
    pub duration: Duration,
}

impl CleanResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Number of paths deleted.
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    /// Check whether the destination had nothing obsolete.
    pub fn is_clean(&self) -> bool {
        self.obsolete.is_empty()
    }

    /// Format a summary of the cleanup.
    pub fn summary(&self) -> String {
        if self.dry_run {
            return format!(
                "Dry run: {} obsolete path(s) would be removed in {:?}",
                self.obsolete.len(),
                self.duration
            );
        }
        if self.is_clean() {
            return format!("Clean: nothing to remove in {:?}", self.duration);
        }

        let mut line = format!(
            "Cleaned: {} removed ({} obsolete) in {:?}",
            self.removed_count(),
            self.obsolete.len(),
            self.duration
        );
        if !self.already_gone.is_empty() {
            line.push_str(&format!(", {} already gone", self.already_gone.len()));
        }
        line
    }
}
