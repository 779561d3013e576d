//! Site context containing configuration and state for a cleanup run.

use crate::config::SiteConfig;
use std::path::{Path, PathBuf};

/// Site context containing configuration and paths for a cleanup.
///
/// The context resolves the configured destination against the project root
/// and carries the run-level switches the CLI collects.
#[derive(Debug, Clone)]
pub struct SiteContext {
    /// The loaded configuration
    config: SiteConfig,
    /// Project root directory (where sitesweep.toml is located)
    project_root: PathBuf,
    /// Report obsolete paths without deleting them
    dry_run: bool,
    /// Whether to run in verbose mode
    verbose: bool,
}

impl SiteContext {
    /// Create a new site context.
    pub fn new(config: SiteConfig, project_root: PathBuf) -> Self {
        Self { config, project_root, dry_run: false, verbose: false }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Get the project root directory.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the destination directory (resolved against the project root).
    pub fn dest_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.site.dest)
    }

    /// Paths under the destination that cleanup must keep.
    pub fn keep_files(&self) -> &[String] {
        &self.config.clean.keep_files
    }

    /// Whether dry-run mode is enabled.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Whether verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Set dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set verbose mode.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Resolve a path relative to the project root.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        crate::config::resolve_path(&self.project_root, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;

    #[test]
    fn test_site_context_new() {
        let root = PathBuf::from("/project");
        let ctx = SiteContext::new(default_config(), root.clone());

        assert_eq!(ctx.project_root(), &root);
        assert!(!ctx.is_dry_run());
        assert!(!ctx.is_verbose());
    }

    #[test]
    fn test_site_context_switches() {
        let ctx = SiteContext::new(default_config(), PathBuf::from("/project"))
            .with_dry_run(true)
            .with_verbose(true);

        assert!(ctx.is_dry_run());
        assert!(ctx.is_verbose());
    }

    #[test]
    fn test_site_context_dest_dir_relative() {
        let ctx = SiteContext::new(default_config(), PathBuf::from("/project"));
        assert_eq!(ctx.dest_dir(), PathBuf::from("/project/output"));
    }

    #[test]
    fn test_site_context_dest_dir_absolute() {
        let mut config = default_config();
        config.site.dest = PathBuf::from("/srv/www");
        let ctx = SiteContext::new(config, PathBuf::from("/project"));

        assert_eq!(ctx.dest_dir(), PathBuf::from("/srv/www"));
    }

    #[test]
    fn test_site_context_keep_files() {
        let ctx = SiteContext::new(default_config(), PathBuf::from("/project"));
        assert_eq!(ctx.keep_files(), &[".git".to_string(), ".svn".to_string()][..]);
    }
}
