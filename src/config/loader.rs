//! Configuration loader
//!
//! Loading pipeline for project files:
//! 1. Read the YAML file
//! 2. Parse into the typed schema
//! 3. Validate
//! 4. Surface warnings to the caller

use std::path::Path;

use crate::config::schema::ProjectConfig;
use crate::config::validation::Validator;
use crate::error::ConfigError;

// ============================================================================
// Public API
// ============================================================================

/// Result of loading a configuration file.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded and validated configuration.
    pub config: ProjectConfig,

    /// Warnings encountered during loading.
    pub warnings: Vec<LoadWarning>,
}

/// Warning during configuration loading.
#[derive(Debug, Clone)]
pub struct LoadWarning {
    /// Warning message.
    pub message: String,

    /// Location where the warning occurred.
    pub location: Option<String>,
}

/// Configuration loader.
///
/// Handles the full pipeline from YAML file to validated `ProjectConfig`.
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Creates a new loader.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Loads and validates a project configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if the path does not exist,
    /// [`ConfigError::ParseError`] on malformed YAML, and
    /// [`ConfigError::ValidationError`] when semantic validation fails.
    pub fn load(&self, path: &Path) -> Result<LoadResult, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }

        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config: ProjectConfig =
            serde_yaml::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let result = Validator::new().validate(&config);
        if result.has_errors() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                errors: result.errors,
            });
        }

        let warnings = result
            .warnings
            .into_iter()
            .map(|issue| LoadWarning {
                message: issue.message,
                location: Some(issue.path),
            })
            .collect();

        Ok(LoadResult { config, warnings })
    }
}

// ============================================================================
// Tests
// ============================================================================
