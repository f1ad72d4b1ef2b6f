//! Asset source manifest.
//!
//! Every generate or fetch run writes an `ASSET_SOURCES.md` Markdown
//! table next to the assets it produced, with exactly one row per
//! successfully written or downloaded file.

use std::path::Path;

use serde::Serialize;

/// Default manifest file name, written into the assets directory.
pub const MANIFEST_FILENAME: &str = "ASSET_SOURCES.md";

/// Asset category recorded in the manifest and mapped to an output
/// subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    /// Style moodboard collages
    StyleMoodboard,
    /// Style selector tiles
    StyleTile,
    /// Home carousel example scenes
    Example,
    /// Onboarding guide cards
    Onboarding,
    /// Empty-state illustrations
    Illustration,
}

impl AssetCategory {
    /// Output subdirectory for this category.
    #[must_use]
    pub const fn dir(self) -> &'static str {
        match self {
            Self::StyleMoodboard => "style_moodboards",
            Self::StyleTile => "style_tiles",
            Self::Example => "examples",
            Self::Onboarding => "onboarding",
            Self::Illustration => "illustrations",
        }
    }

    /// Human-readable category name for the manifest table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StyleMoodboard => "Moodboard",
            Self::StyleTile => "Style Tile",
            Self::Example => "Example/Inspiration",
            Self::Onboarding => "Onboarding",
            Self::Illustration => "Illustration",
        }
    }
}

/// One manifest row.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
    /// Asset file name (no directory)
    pub filename: String,
    /// Asset category
    pub category: AssetCategory,
    /// Where the asset came from (URL or "Generated in-project")
    pub source: String,
    /// Attribution, optionally a Markdown link
    pub author: String,
    /// License note
    pub license: String,
}

impl ManifestEntry {
    /// Creates an entry for a procedurally generated asset.
    #[must_use]
    pub fn generated(filename: String, category: AssetCategory) -> Self {
        Self {
            filename,
            category,
            source: "Generated in-project".to_string(),
            author: "roomforge".to_string(),
            license: "CC0".to_string(),
        }
    }

    /// Creates an entry for a downloaded asset.
    #[must_use]
    pub fn downloaded(
        filename: String,
        category: AssetCategory,
        url: &str,
        author: &str,
        profile: Option<&str>,
        license: &str,
    ) -> Self {
        let author = match profile {
            Some(profile) => format!("[{author}]({profile})"),
            None => author.to_string(),
        };
        Self {
            filename,
            category,
            source: url.to_string(),
            author,
            license: license.to_string(),
        }
    }
}

/// An asset source manifest under construction.
#[derive(Debug, Default)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Creates an empty manifest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row. Call once per successfully written asset.
    pub fn push(&mut self, entry: ManifestEntry) {
        self.entries.push(entry);
    }

    /// Number of recorded rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no rows were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the manifest as a Markdown table with the given run date.
    #[must_use]
    pub fn render(&self, date: &str) -> String {
        let mut out = String::from("# Asset Sources\n\n");
        out.push_str("| Filename | Category | Source | Author | License | Date |\n");
        out.push_str("|---|---|---|---|---|---|\n");
        for entry in &self.entries {
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                escape_cell(&entry.filename),
                entry.category.label(),
                escape_cell(&entry.source),
                entry.author,
                escape_cell(&entry.license),
                date,
            ));
        }
        out
    }

    /// Writes the manifest to `path`, dated today (UTC).
    ///
    /// # Errors
    ///
    /// Returns any underlying I/O error.
    pub fn write(&self, path: &Path) -> std::io::Result<()> {
        let date = chrono::Utc::now().format("%Y-%m-%d").to_string();
        std::fs::write(path, self.render(&date))
    }
}

/// Escapes pipe characters so a cell cannot break the table layout.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

// ============================================================================
// Tests
// ============================================================================
