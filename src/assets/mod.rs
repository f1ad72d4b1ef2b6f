//! Batch asset generation.
//!
//! Expands a project configuration into a plan of placeholder assets
//! (style moodboards, style tiles, example scenes, onboarding cards,
//! empty-state illustrations), renders each one deterministically, and
//! records a manifest row per written file. A failed item is logged and
//! skipped; the batch continues.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::schema::ProjectConfig;
use crate::error::{RenderError, Result};
use crate::manifest::{AssetCategory, Manifest, ManifestEntry, MANIFEST_FILENAME};
use crate::render::palette::{self, Rgb, label_seed, pick_colors};
use crate::render::{bmp, svg};

/// Output image format for generated assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Inline-XML SVG documents
    Svg,
    /// Uncompressed 24-bit BMP images
    Bmp,
}

impl ImageFormat {
    /// File extension (without dot).
    #[must_use]
    pub const fn ext(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Bmp => "bmp",
        }
    }
}

/// Summary of a generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Paths written (or that would be written on a dry run).
    pub written: Vec<PathBuf>,
    /// Items that failed and were skipped.
    pub skipped: usize,
    /// Manifest location, when one was written.
    pub manifest_path: Option<PathBuf>,
}

/// Dimensions of moodboard and tile images.
const BOARD_SIZE: u32 = 400;

/// Portrait card dimensions for examples, onboarding, and illustrations.
const CARD_WIDTH: u32 = 400;
const CARD_HEIGHT: u32 = 600;

/// What a planned asset renders as.
#[derive(Debug)]
enum Visual {
    /// 2x2 moodboard tiles
    Board([Rgb; 4]),
    /// Single-fill labeled card
    Card(Rgb),
}

/// One asset scheduled for rendering.
#[derive(Debug)]
struct PlannedAsset {
    category: AssetCategory,
    filename: String,
    label: String,
    visual: Visual,
}

/// Generates all placeholder assets described by `config` into `out_dir`.
///
/// Rendering is deterministic: the same config, format, and seed produce
/// byte-identical files. With `dry_run` set, nothing is written and the
/// report lists the paths that would have been produced.
///
/// # Errors
///
/// Returns a render error for unusable palettes or labels, and an I/O
/// error if the output directories cannot be created. Failures on
/// individual files are logged and counted as skipped instead.
pub fn generate(
    config: &ProjectConfig,
    out_dir: &Path,
    format: ImageFormat,
    seed: u64,
    dry_run: bool,
) -> Result<GenerateReport> {
    let palette = palette::parse_palette(&config.palette)?;
    if draws_from_palette(config) && palette.len() < 4 {
        return Err(RenderError::PaletteTooSmall {
            need: 4,
            have: palette.len(),
        }
        .into());
    }
    let plan = build_plan(config, &palette, format, seed)?;

    if !dry_run {
        std::fs::create_dir_all(out_dir)?;
        for category in plan.iter().map(|a| a.category) {
            std::fs::create_dir_all(out_dir.join(category.dir()))?;
        }
    }

    let mut report = GenerateReport::default();
    let mut manifest = Manifest::new();

    for asset in &plan {
        let path = out_dir.join(asset.category.dir()).join(&asset.filename);

        let bytes = match render_asset(asset, &palette, format, seed) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping asset");
                report.skipped += 1;
                continue;
            }
        };

        if dry_run {
            info!(file = %path.display(), "would write");
        } else if let Err(e) = std::fs::write(&path, &bytes) {
            warn!(file = %path.display(), error = %e, "write failed, skipping");
            report.skipped += 1;
            continue;
        } else {
            info!(file = %path.display(), bytes = bytes.len(), "generated");
        }

        manifest.push(ManifestEntry::generated(
            asset.filename.clone(),
            asset.category,
        ));
        report.written.push(path);
    }

    if !dry_run && !manifest.is_empty() {
        let manifest_path = out_dir.join(MANIFEST_FILENAME);
        manifest.write(&manifest_path)?;
        report.manifest_path = Some(manifest_path);
    }

    Ok(report)
}

/// Whether any planned asset picks its colors from the shared palette.
/// Explicitly-colored styles and cards don't; examples always do.
fn draws_from_palette(config: &ProjectConfig) -> bool {
    config.styles.iter().any(|s| s.colors.is_none())
        || config.examples.count > 0
        || config
            .onboarding
            .iter()
            .chain(&config.illustrations)
            .any(|c| c.color.is_none())
}

/// Expands the configuration into the full list of assets to render.
fn build_plan(
    config: &ProjectConfig,
    palette: &[Rgb],
    format: ImageFormat,
    seed: u64,
) -> Result<Vec<PlannedAsset>> {
    let ext = format.ext();
    let mut plan = Vec::new();

    for style in &config.styles {
        let board = style_colors(style.colors.as_deref(), palette, &style.label, seed)?;
        plan.push(PlannedAsset {
            category: AssetCategory::StyleMoodboard,
            filename: format!("{}.{ext}", style.code),
            label: style.label.clone(),
            visual: Visual::Board(board),
        });

        // Tiles get their own deterministic selection so the picker and
        // the detail moodboard don't look identical.
        let tile = style_colors(
            style.colors.as_deref(),
            palette,
            &style.label,
            seed.wrapping_add(1),
        )?;
        plan.push(PlannedAsset {
            category: AssetCategory::StyleTile,
            filename: format!("{}.{ext}", style.code),
            label: style.label.clone(),
            visual: Visual::Board(tile),
        });
    }

    for i in 1..=config.examples.count {
        let label = config
            .examples
            .titles
            .get(i - 1)
            .cloned()
            .unwrap_or_else(|| format!("Example {i}"));
        let color = pick_colors(palette, &label, 1, seed)?[0];
        plan.push(PlannedAsset {
            category: AssetCategory::Example,
            filename: format!("example_{i}.{ext}"),
            label,
            visual: Visual::Card(color),
        });
    }

    for card in &config.onboarding {
        plan.push(card_asset(card, AssetCategory::Onboarding, palette, ext, seed)?);
    }
    for card in &config.illustrations {
        plan.push(card_asset(card, AssetCategory::Illustration, palette, ext, seed)?);
    }

    Ok(plan)
}

/// Resolves the four tile colors for a style: explicit config colors if
/// present, otherwise a label-seeded pick from the palette.
fn style_colors(
    explicit: Option<&[String]>,
    palette: &[Rgb],
    label: &str,
    seed: u64,
) -> Result<[Rgb; 4]> {
    let colors = match explicit {
        Some(hex) => hex
            .iter()
            .map(|c| Rgb::parse_hex(c))
            .collect::<std::result::Result<Vec<_>, _>>()?,
        None => pick_colors(palette, label, 4, seed)?,
    };
    colors
        .try_into()
        .map_err(|v: Vec<Rgb>| RenderError::PaletteTooSmall { need: 4, have: v.len() }.into())
}

fn card_asset(
    card: &crate::config::schema::CardSpec,
    category: AssetCategory,
    palette: &[Rgb],
    ext: &str,
    seed: u64,
) -> Result<PlannedAsset> {
    let color = match card.color {
        Some(ref hex) => Rgb::parse_hex(hex)?,
        None => pick_colors(palette, &card.label, 1, seed)?[0],
    };
    Ok(PlannedAsset {
        category,
        filename: format!("{}.{ext}", card.code),
        label: card.label.clone(),
        visual: Visual::Card(color),
    })
}

/// Renders a planned asset to bytes in the requested format.
fn render_asset(
    asset: &PlannedAsset,
    palette: &[Rgb],
    format: ImageFormat,
    seed: u64,
) -> std::result::Result<Vec<u8>, RenderError> {
    match format {
        ImageFormat::Svg => Ok(match &asset.visual {
            Visual::Board(colors) => svg::moodboard(&asset.label, colors).into_bytes(),
            Visual::Card(color) => {
                svg::card(&asset.label, *color, CARD_WIDTH, CARD_HEIGHT).into_bytes()
            }
        }),
        ImageFormat::Bmp => {
            let pattern_seed = label_seed(&asset.label).wrapping_add(seed);
            let colors: Vec<Rgb> = match &asset.visual {
                Visual::Board(colors) => colors.to_vec(),
                _ => palette.to_vec(),
            };
            let pixels = bmp::quadrant_pattern(pattern_seed, &colors, BOARD_SIZE, BOARD_SIZE)?;
            bmp::encode(BOARD_SIZE, BOARD_SIZE, &pixels)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProjectConfig {
        serde_yaml::from_str(
            r##"
project:
  name: Study Class AI
  slug: study_class_ai
palette: ["#0A0D14", "#0F1422", "#151C2E", "#1B2440", "#D0A85C", "#2DBA8A"]
styles:
  - code: dark_academia
    label: Dark Academia Study
  - code: japandi_calm
    label: Japandi Calm
    colors: ["#D7CCC8", "#8D6E63", "#FAFAFA", "#212121"]
examples:
  count: 2
onboarding:
  - code: onboard_good
    label: Good Photo
illustrations:
  - code: empty_history
    label: No History Yet
    color: "#263332"
"##,
        )
        .unwrap()
    }

    #[test]
    fn generates_expected_file_set() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate(&config(), dir.path(), ImageFormat::Svg, 0, false).unwrap();

        // 2 styles x (moodboard + tile) + 2 examples + 1 onboarding + 1 illustration
        assert_eq!(report.written.len(), 8);
        assert_eq!(report.skipped, 0);

        for path in &report.written {
            assert!(path.starts_with(dir.path()), "{path:?} escapes out dir");
            assert_eq!(path.extension().unwrap(), "svg");
            assert!(path.exists());
        }

        assert!(dir.path().join("style_moodboards/dark_academia.svg").exists());
        assert!(dir.path().join("style_tiles/japandi_calm.svg").exists());
        assert!(dir.path().join("examples/example_1.svg").exists());
        assert!(dir.path().join("onboarding/onboard_good.svg").exists());
        assert!(dir.path().join("illustrations/empty_history.svg").exists());
    }

    #[test]
    fn generation_is_byte_deterministic() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        generate(&config(), dir_a.path(), ImageFormat::Svg, 0, false).unwrap();
        generate(&config(), dir_b.path(), ImageFormat::Svg, 0, false).unwrap();

        let rel = "style_moodboards/dark_academia.svg";
        let a = std::fs::read(dir_a.path().join(rel)).unwrap();
        let b = std::fs::read(dir_b.path().join(rel)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn seed_changes_picked_colors() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        generate(&config(), dir_a.path(), ImageFormat::Svg, 0, false).unwrap();
        generate(&config(), dir_b.path(), ImageFormat::Svg, 99, false).unwrap();

        let rel = "style_moodboards/dark_academia.svg";
        let a = std::fs::read(dir_a.path().join(rel)).unwrap();
        let b = std::fs::read(dir_b.path().join(rel)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn explicit_style_colors_ignore_seed() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        generate(&config(), dir_a.path(), ImageFormat::Svg, 0, false).unwrap();
        generate(&config(), dir_b.path(), ImageFormat::Svg, 99, false).unwrap();

        let rel = "style_moodboards/japandi_calm.svg";
        let a = std::fs::read(dir_a.path().join(rel)).unwrap();
        let b = std::fs::read(dir_b.path().join(rel)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn manifest_has_one_row_per_written_asset() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate(&config(), dir.path(), ImageFormat::Svg, 0, false).unwrap();

        let manifest = std::fs::read_to_string(report.manifest_path.unwrap()).unwrap();
        let rows = manifest
            .lines()
            .filter(|l| l.starts_with('|') && !l.starts_with("|---") && !l.contains("Filename"))
            .count();
        assert_eq!(rows, report.written.len());
    }

    #[test]
    fn bmp_format_writes_bmp_extension_and_magic() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate(&config(), dir.path(), ImageFormat::Bmp, 0, false).unwrap();

        for path in &report.written {
            assert_eq!(path.extension().unwrap(), "bmp");
            let bytes = std::fs::read(path).unwrap();
            assert_eq!(&bytes[0..2], b"BM");
        }
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate(&config(), dir.path(), ImageFormat::Svg, 0, true).unwrap();

        assert_eq!(report.written.len(), 8);
        assert!(report.manifest_path.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn short_palette_is_rejected_at_generate_time() {
        let mut config = config();
        config.palette.truncate(2);
        let dir = tempfile::tempdir().unwrap();
        let err = generate(&config, dir.path(), ImageFormat::Svg, 0, false).unwrap_err();
        assert!(matches!(
            err,
            crate::error::RoomforgeError::Render(RenderError::PaletteTooSmall { need: 4, .. })
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn tile_and_moodboard_differ_for_picked_styles() {
        let dir = tempfile::tempdir().unwrap();
        generate(&config(), dir.path(), ImageFormat::Svg, 0, false).unwrap();

        let board =
            std::fs::read(dir.path().join("style_moodboards/dark_academia.svg")).unwrap();
        let tile = std::fs::read(dir.path().join("style_tiles/dark_academia.svg")).unwrap();
        assert_ne!(board, tile);
    }
}
