//! Error types for `roomforge`
//!
//! A single error hierarchy covering configuration, rendering, fetching,
//! and renaming, with a stable exit-code mapping for the CLI.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `roomforge` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Fetch error (download failed, response too large)
    pub const FETCH_ERROR: i32 = 4;

    /// Render error (bad palette, invalid dimensions)
    pub const RENDER_ERROR: i32 = 5;

    /// Rename error (missing project root, rename collision)
    pub const RENAME_ERROR: i32 = 6;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `roomforge` operations.
///
/// Aggregates all domain-specific errors and provides a unified
/// interface for error handling and exit-code mapping.
#[derive(Debug, Error)]
pub enum RoomforgeError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Asset download error
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Image rendering error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Project rename error
    #[error(transparent)]
    Rename(#[from] RenameError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl RoomforgeError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Json(_) | Self::Yaml(_) => ExitCode::CONFIG_ERROR,
            Self::Fetch(_) => ExitCode::FETCH_ERROR,
            Self::Render(_) => ExitCode::RENDER_ERROR,
            Self::Rename(_) => ExitCode::RENAME_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Error message from the parser
        message: String,
    },

    /// Configuration validation failed
    #[error("validation failed for {path}")]
    ValidationError {
        /// Path to the configuration file
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Referenced configuration file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Required section is missing from configuration
    #[error("missing required section '{section}' in {path}")]
    MissingSection {
        /// Name of the missing section
        section: String,
        /// Path to the configuration file
        path: PathBuf,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found during configuration validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Path to the problematic field (e.g., "styles[2].code")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - prevents the configuration from being used
    Error,
    /// Warning - potential issue that does not prevent loading
    Warning,
}

// ============================================================================
// Fetch Errors
// ============================================================================

/// Asset download errors.
///
/// These are caught per source during a fetch run; a single failing
/// download is logged and skipped, the run continues.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure (DNS, connect, read)
    #[error("network error: {0}")]
    Network(String),

    /// Server returned a non-success status
    #[error("HTTP status {status} for {url}")]
    HttpStatus {
        /// Status code returned by the server
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Response body exceeds the configured size limit
    #[error("response too large: {size} bytes (limit: {limit})")]
    TooLarge {
        /// Actual response size in bytes
        size: usize,
        /// Configured size limit in bytes
        limit: usize,
    },

    /// Not enough downloaded tiles to assemble collages
    #[error("not enough tiles for collages: need 4, have {have}")]
    NotEnoughTiles {
        /// Number of tiles actually available
        have: usize,
    },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Image rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Hex color string could not be parsed
    #[error("invalid color '{0}': expected #RRGGBB")]
    InvalidColor(String),

    /// Palette has too few entries for the requested selection
    #[error("palette too small: need {need} colors, have {have}")]
    PaletteTooSmall {
        /// Number of colors required
        need: usize,
        /// Number of colors available
        have: usize,
    },

    /// Pixel buffer does not match the declared dimensions
    #[error("pixel buffer size {got} does not match {width}x{height}")]
    InvalidDimensions {
        /// Declared image width
        width: u32,
        /// Declared image height
        height: u32,
        /// Actual pixel count supplied
        got: usize,
    },

    /// Asset label is empty
    #[error("empty label")]
    EmptyLabel,
}

// ============================================================================
// Rename Errors
// ============================================================================

/// Project rename errors.
#[derive(Debug, Error)]
pub enum RenameError {
    /// Project root directory does not exist
    #[error("project root not found: {path}")]
    MissingRoot {
        /// The missing directory
        path: PathBuf,
    },

    /// Renaming a file would overwrite an existing one
    #[error("rename collision: {to} already exists")]
    Collision {
        /// The target path that already exists
        to: PathBuf,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `roomforge` operations.
pub type Result<T> = std::result::Result<T, RoomforgeError>;

// ============================================================================
// Tests
// ============================================================================
