//! Configuration loading and discovery for `sitesweep.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{CleanConfig, SiteConfig, SiteSection};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file name.
pub const CONFIG_FILENAME: &str = "sitesweep.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse sitesweep.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override destination directory
    pub dest: Option<PathBuf>,
    /// Extra keep paths, appended to the configured ones
    pub keep: Vec<String>,
}

/// Find sitesweep.toml by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_config_from)
}

/// Find sitesweep.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a sitesweep.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns a default
/// configuration.
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(default_config()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<SiteConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: SiteConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Create a default configuration when no sitesweep.toml is found.
///
/// The site name is taken from the current directory name.
pub fn default_config() -> SiteConfig {
    let site_name = env::current_dir()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "unnamed".to_string());

    SiteConfig {
        site: SiteSection { name: site_name, dest: PathBuf::from("output") },
        clean: CleanConfig::default(),
    }
}

/// Merge CLI overrides into a configuration.
///
/// A destination given on the command line replaces the configured one;
/// keep paths are appended so configured entries stay protected.
pub fn merge_cli_overrides(config: &mut SiteConfig, overrides: &CliOverrides) {
    if let Some(ref dest) = overrides.dest {
        config.site.dest = dest.clone();
    }

    for keep in &overrides.keep {
        if !config.clean.keep_files.contains(keep) {
            config.clean.keep_files.push(keep.clone());
        }
    }
}

/// Get the project root directory from a config file path.
///
/// Returns the parent directory of the sitesweep.toml file.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent()
}

/// Resolve a path relative to the project root.
///
/// If the path is absolute, returns it unchanged.
/// If relative, joins it with the project root.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
