//! Configuration validation
//!
//! Schema and semantic validation for `roomforge` project files.
//! Validation collects ALL issues (doesn't stop at the first) to provide
//! comprehensive feedback to users.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::schema::{CardSpec, ProjectConfig, RenamePlan};
use crate::error::{Severity, ValidationIssue};

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("slug regex"));

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_]*$").expect("code regex"));

static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex regex"));

// ============================================================================
// Public API
// ============================================================================

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent loading).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Configuration validator.
///
/// Performs schema and semantic validation on a `ProjectConfig`.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a configuration and returns the result.
    pub fn validate(&mut self, config: &ProjectConfig) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_project(config);
        self.validate_palette(config);
        self.validate_styles(config);
        self.validate_cards("onboarding", &config.onboarding);
        self.validate_cards("illustrations", &config.illustrations);
        self.validate_sources(config);
        self.validate_fetch(config);
        if let Some(ref plan) = config.rename {
            self.validate_rename(plan);
        }

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ------------------------------------------------------------------
    // Sections
    // ------------------------------------------------------------------

    fn validate_project(&mut self, config: &ProjectConfig) {
        if config.project.name.trim().is_empty() {
            self.error("project.name", "project name is empty");
        }
        if !SLUG_RE.is_match(&config.project.slug) {
            self.error(
                "project.slug",
                "slug must match [a-z][a-z0-9_]* (e.g. meeting_room_ai)",
            );
        }
        if config.project.assets_dir.trim().is_empty() {
            self.error("project.assets_dir", "assets directory is empty");
        }
    }

    fn validate_palette(&mut self, config: &ProjectConfig) {
        for (i, color) in config.palette.iter().enumerate() {
            if !HEX_RE.is_match(color) {
                self.error(&format!("palette[{i}]"), "expected #RRGGBB hex color");
            }
        }

        // Only `assets generate` draws from the palette; a download-only
        // project may omit it entirely. Generate rejects a short palette
        // at run time, so at load time this is just a heads-up.
        let draws_from_palette = config.styles.iter().any(|s| s.colors.is_none())
            || config
                .onboarding
                .iter()
                .chain(&config.illustrations)
                .any(|c| c.color.is_none());

        if draws_from_palette && config.palette.len() < 4 {
            self.warning(
                "palette",
                "fewer than 4 palette colors; `assets generate` needs at least 4",
            );
        }
    }

    fn validate_styles(&mut self, config: &ProjectConfig) {
        let mut seen = HashSet::new();
        for (i, style) in config.styles.iter().enumerate() {
            if !CODE_RE.is_match(&style.code) {
                self.error(
                    &format!("styles[{i}].code"),
                    "code must be a snake_case identifier",
                );
            }
            if style.label.trim().is_empty() {
                self.error(&format!("styles[{i}].label"), "label is empty");
            }
            if !seen.insert(style.code.clone()) {
                self.error(
                    &format!("styles[{i}].code"),
                    &format!("duplicate style code '{}'", style.code),
                );
            }
            if let Some(ref colors) = style.colors {
                if colors.len() != 4 {
                    self.error(
                        &format!("styles[{i}].colors"),
                        "explicit style colors must list exactly 4 entries",
                    );
                }
                for (j, color) in colors.iter().enumerate() {
                    if !HEX_RE.is_match(color) {
                        self.error(
                            &format!("styles[{i}].colors[{j}]"),
                            "expected #RRGGBB hex color",
                        );
                    }
                }
            }
        }
    }

    fn validate_cards(&mut self, section: &str, cards: &[CardSpec]) {
        let mut seen = HashSet::new();
        for (i, card) in cards.iter().enumerate() {
            if !CODE_RE.is_match(&card.code) {
                self.error(
                    &format!("{section}[{i}].code"),
                    "code must be a snake_case identifier",
                );
            }
            if card.label.trim().is_empty() {
                self.error(&format!("{section}[{i}].label"), "label is empty");
            }
            if !seen.insert(card.code.clone()) {
                self.error(
                    &format!("{section}[{i}].code"),
                    &format!("duplicate card code '{}'", card.code),
                );
            }
            if let Some(ref color) = card.color {
                if !HEX_RE.is_match(color) {
                    self.error(
                        &format!("{section}[{i}].color"),
                        "expected #RRGGBB hex color",
                    );
                }
            }
        }
    }

    fn validate_sources(&mut self, config: &ProjectConfig) {
        for (i, source) in config.sources.iter().enumerate() {
            if source.url.starts_with("http://") {
                self.warning(
                    &format!("sources[{i}].url"),
                    "insecure http:// source URL",
                );
            } else if !source.url.starts_with("https://") {
                self.error(
                    &format!("sources[{i}].url"),
                    "source URL must start with https://",
                );
            }
            if source.author.trim().is_empty() {
                self.warning(
                    &format!("sources[{i}].author"),
                    "missing author attribution",
                );
            }
        }
    }

    fn validate_fetch(&mut self, config: &ProjectConfig) {
        let fetch = &config.fetch;
        if fetch.quality == 0 || fetch.quality > 100 {
            self.error("fetch.quality", "quality must be between 1 and 100");
        }
        if fetch.width == 0 {
            self.error("fetch.width", "width must be greater than 0");
        }
        if fetch.thumb_width == 0 {
            self.error("fetch.thumb_width", "thumb_width must be greater than 0");
        }
    }

    fn validate_rename(&mut self, plan: &RenamePlan) {
        if plan.tokens.is_empty() {
            self.error("rename.tokens", "rename plan has no tokens");
        }
        for (i, (from, to)) in plan.tokens.iter().enumerate() {
            if from.is_empty() {
                self.error(&format!("rename.tokens[{i}]"), "empty search token");
                continue;
            }
            if from == to {
                self.warning(
                    &format!("rename.tokens[{i}]"),
                    &format!("token '{from}' replaces itself"),
                );
            } else if to.contains(from.as_str()) {
                // Re-running the plan would keep rewriting the same files.
                self.error(
                    &format!("rename.tokens[{i}]"),
                    &format!("replacement for '{from}' still contains the search token; the plan would not be idempotent"),
                );
            }
        }
        if plan.extensions.is_empty() {
            self.warning("rename.extensions", "no extensions listed; file contents will not be rewritten");
        }
        for (i, ext) in plan.extensions.iter().enumerate() {
            if ext.starts_with('.') {
                self.warning(
                    &format!("rename.extensions[{i}]"),
                    "extension should not include the leading dot",
                );
            }
        }
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    fn warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> ProjectConfig {
        serde_yaml::from_str(
            r##"
project:
  name: Meeting Room AI
  slug: meeting_room_ai
palette: ["#0A0D14", "#D0A85C", "#2DBA8A", "#D14B4B"]
"##,
        )
        .unwrap()
    }

    #[test]
    fn minimal_config_is_valid() {
        let result = Validator::new().validate(&minimal());
        assert!(result.is_valid(), "{:?}", result.errors);
    }

    #[test]
    fn bad_slug_is_error() {
        let mut config = minimal();
        config.project.slug = "Meeting Room".to_string();
        let result = Validator::new().validate(&config);
        assert!(result.has_errors());
        assert!(result.errors[0].path.contains("slug"));
    }

    #[test]
    fn bad_hex_color_is_error() {
        let mut config = minimal();
        config.palette[0] = "red".to_string();
        let result = Validator::new().validate(&config);
        assert!(result.has_errors());
    }

    #[test]
    fn short_palette_is_warning_when_styles_draw_from_it() {
        let mut config = minimal();
        config.palette.truncate(2);
        let style: crate::config::schema::StyleSpec =
            serde_yaml::from_str("code: japandi_calm\nlabel: Japandi Calm").unwrap();
        config.styles.push(style);
        let result = Validator::new().validate(&config);
        assert!(result.is_valid(), "{:?}", result.errors);
        assert!(result.warnings.iter().any(|w| w.path == "palette"));
    }

    #[test]
    fn download_only_config_without_palette_is_valid() {
        // A project that only runs `assets fetch` never touches the palette
        // and must load cleanly without one.
        let config: ProjectConfig = serde_yaml::from_str(
            r"
project:
  name: Guest Room AI
  slug: guest_room_ai
styles:
  - code: dark_academia
    label: Dark Academia Study
sources:
  - url: https://images.unsplash.com/photo-1
    author: Clay Banks
",
        )
        .unwrap();
        let result = Validator::new().validate(&config);
        assert!(result.is_valid(), "{:?}", result.errors);
    }

    #[test]
    fn duplicate_style_codes_are_error() {
        let mut config = minimal();
        let style: crate::config::schema::StyleSpec =
            serde_yaml::from_str("code: japandi_calm\nlabel: Japandi Calm").unwrap();
        config.styles.push(style.clone());
        config.styles.push(style);
        let result = Validator::new().validate(&config);
        assert!(result.has_errors());
        assert!(result.errors[0].message.contains("duplicate"));
    }

    #[test]
    fn http_source_is_warning() {
        let mut config = minimal();
        config.sources = serde_yaml::from_str(
            "- url: http://images.unsplash.com/photo-1\n  author: Clay Banks",
        )
        .unwrap();
        let result = Validator::new().validate(&config);
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn non_url_source_is_error() {
        let mut config = minimal();
        config.sources =
            serde_yaml::from_str("- url: images.unsplash.com/photo-1\n  author: Clay Banks")
                .unwrap();
        let result = Validator::new().validate(&config);
        assert!(result.has_errors());
    }

    #[test]
    fn non_idempotent_token_is_error() {
        let mut config = minimal();
        config.rename = serde_yaml::from_str(
            r"
tokens:
  shoe: shoe_room
",
        )
        .unwrap();
        let result = Validator::new().validate(&config);
        assert!(result.has_errors());
        assert!(result.errors[0].message.contains("idempotent"));
    }

    #[test]
    fn empty_token_map_is_error() {
        let mut config = minimal();
        config.rename = serde_yaml::from_str("tokens: {}").unwrap();
        let result = Validator::new().validate(&config);
        assert!(result.has_errors());
    }

    #[test]
    fn self_replacement_is_warning() {
        let mut config = minimal();
        config.rename = serde_yaml::from_str(
            r"
tokens:
  guest_: guest_
",
        )
        .unwrap();
        let result = Validator::new().validate(&config);
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn zero_quality_is_error() {
        let mut config = minimal();
        config.fetch.quality = 0;
        let result = Validator::new().validate(&config);
        assert!(result.has_errors());
    }
}
