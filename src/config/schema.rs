//! Configuration schema types for `sitesweep.toml`
//!
//! Defines the structure and validation rules for site configuration.

use crate::path::{normalize_relative, PathError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Site metadata section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    /// Site name (required)
    pub name: String,
    /// Build destination directory
    #[serde(default = "default_dest")]
    pub dest: PathBuf,
}

fn default_dest() -> PathBuf {
    PathBuf::from("output")
}

/// Cleanup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Paths under the destination that cleanup must never delete
    #[serde(default = "default_keep_files")]
    pub keep_files: Vec<String>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self { keep_files: default_keep_files() }
    }
}

/// Version-control metadata is kept unless the config says otherwise.
pub fn default_keep_files() -> Vec<String> {
    vec![".git".to_string(), ".svn".to_string()]
}

/// Complete sitesweep.toml configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site metadata (required)
    pub site: SiteSection,
    /// Cleanup settings
    #[serde(default)]
    pub clean: CleanConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "clean.keep_files[2]")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sitesweep.toml: '{}' {}", self.field, self.message)
    }
}

impl SiteConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.site.name.is_empty() {
            errors.push(ConfigValidationError {
                field: "site.name".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        if self.site.dest.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "site.dest".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        for (i, keep) in self.clean.keep_files.iter().enumerate() {
            // Absolute entries can only be checked against a concrete root
            if Path::new(keep).is_absolute() {
                continue;
            }
            let message = match normalize_relative(keep) {
                Ok(_) => continue,
                Err(PathError::Empty) => "must be a non-empty path".to_string(),
                Err(PathError::NamesRoot(_)) => {
                    "must name a path inside the destination, not the destination itself"
                        .to_string()
                }
                Err(PathError::EscapesRoot(_)) => {
                    "must not climb above the destination with '..'".to_string()
                }
                Err(e) => e.to_string(),
            };
            errors.push(ConfigValidationError {
                field: format!("clean.keep_files[{}]", i),
                message,
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
