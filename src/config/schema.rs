//! Configuration schema types
//!
//! Defines the per-project YAML configuration consumed by the `assets`
//! and `rename` commands. One file describes everything a cloned app
//! template needs: identity, color palette, style list, stock photo
//! sources, fetch options, and the rename plan used when the template
//! was cloned from another project.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Top-Level Configuration
// ============================================================================

/// Root configuration for a `roomforge` project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProjectConfig {
    /// Project identity (required)
    pub project: ProjectMeta,

    /// Bounded color palette used for deterministic tile selection
    #[serde(default)]
    pub palette: Vec<String>,

    /// Design styles to generate moodboards and tiles for
    #[serde(default)]
    pub styles: Vec<StyleSpec>,

    /// Example scene cards for the home carousel
    #[serde(default)]
    pub examples: ExamplesSpec,

    /// Onboarding guide cards
    #[serde(default)]
    pub onboarding: Vec<CardSpec>,

    /// Empty-state illustration cards
    #[serde(default)]
    pub illustrations: Vec<CardSpec>,

    /// Stock photo sources for the fetch command
    #[serde(default)]
    pub sources: Vec<SourceSpec>,

    /// Download options
    #[serde(default)]
    pub fetch: FetchOptions,

    /// Rename plan used when re-badging a cloned template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rename: Option<RenamePlan>,
}

// ============================================================================
// Project Identity
// ============================================================================

/// Project identification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProjectMeta {
    /// Display name, e.g. "Meeting Room AI" (required)
    pub name: String,

    /// Snake-case identifier used in generated file names, e.g. "meeting_room_ai"
    pub slug: String,

    /// Asset directory, relative to the config file
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

// ============================================================================
// Generated Asset Specs
// ============================================================================

/// A single design style.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StyleSpec {
    /// File-safe code, e.g. "modern_minimal"
    pub code: String,

    /// Display label rendered onto the moodboard, e.g. "Modern Minimal"
    pub label: String,

    /// Explicit tile colors; when absent, four colors are picked from the
    /// palette using the label-derived seed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

/// Example scene card configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExamplesSpec {
    /// Number of example cards to generate
    #[serde(default = "default_example_count")]
    pub count: usize,

    /// Optional titles; missing entries fall back to "Example N"
    #[serde(default)]
    pub titles: Vec<String>,
}

impl Default for ExamplesSpec {
    fn default() -> Self {
        Self {
            count: default_example_count(),
            titles: Vec::new(),
        }
    }
}

fn default_example_count() -> usize {
    5
}

/// A labeled single-color card (onboarding step or empty-state illustration).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CardSpec {
    /// File-safe code, e.g. "empty_history"
    pub code: String,

    /// Display label, e.g. "No History Yet"
    pub label: String,

    /// Explicit fill color; when absent, one is picked from the palette
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

// ============================================================================
// Fetch Configuration
// ============================================================================

/// A stock photo source with attribution metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SourceSpec {
    /// Base image URL without sizing query parameters
    pub url: String,

    /// Photographer name for the manifest
    pub author: String,

    /// Photographer profile URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// License note recorded in the manifest
    #[serde(default = "default_license")]
    pub license: String,
}

fn default_license() -> String {
    "Unsplash License".to_string()
}

/// Download options for the fetch command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FetchOptions {
    /// Width for full-size example downloads
    #[serde(default = "default_width")]
    pub width: u32,

    /// Width for collage thumbnails
    #[serde(default = "default_thumb_width")]
    pub thumb_width: u32,

    /// JPEG quality parameter
    #[serde(default = "default_quality")]
    pub quality: u8,

    /// Number of SVG collages to assemble from downloaded thumbnails;
    /// 0 means one per configured style
    #[serde(default)]
    pub collages: usize,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum accepted response body size in bytes
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            width: default_width(),
            thumb_width: default_thumb_width(),
            quality: default_quality(),
            collages: 0,
            timeout_secs: default_timeout_secs(),
            max_bytes: default_max_bytes(),
        }
    }
}

fn default_width() -> u32 {
    1200
}

fn default_thumb_width() -> u32 {
    300
}

fn default_quality() -> u8 {
    80
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_bytes() -> usize {
    20 * 1024 * 1024
}

// ============================================================================
// Rename Plan
// ============================================================================

/// Rename plan applied to a cloned template tree.
///
/// Token replacements are applied in declaration order, so specific
/// identifiers ("ShoeResultStorage") must precede generic prefixes
/// ("Shoe") in the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RenamePlan {
    /// Ordered search → replacement token map
    pub tokens: IndexMap<String, String>,

    /// File extensions (without dot) whose contents are rewritten
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Explicit file renames, relative to the project root
    #[serde(default)]
    pub file_renames: IndexMap<String, String>,

    /// Also rename files whose names contain a token
    #[serde(default = "default_true")]
    pub rename_files: bool,
}

fn default_extensions() -> Vec<String> {
    ["dart", "yaml", "xml", "plist", "json", "md"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

const fn default_true() -> bool {
    true
}

// ============================================================================
// Tests
// ============================================================================
