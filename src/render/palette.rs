//! Palette handling and deterministic color selection.
//!
//! Color picks are seeded from the asset label (sum of character code
//! points) so a given label always maps to the same tile colors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::RenderError;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Parses a `#RRGGBB` hex color string.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidColor`] if the string is not a
    /// 6-digit hex color with a leading `#`.
    pub fn parse_hex(s: &str) -> Result<Self, RenderError> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| RenderError::InvalidColor(s.to_string()))?;
        if hex.len() != 6 {
            return Err(RenderError::InvalidColor(s.to_string()));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| RenderError::InvalidColor(s.to_string()))
        };
        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }

    /// Formats this color as `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Derives a numeric seed from an asset label.
///
/// The seed is the sum of the label's character code points, so the
/// same label always yields the same seed regardless of platform.
#[must_use]
pub fn label_seed(label: &str) -> u64 {
    label.chars().map(|c| u64::from(u32::from(c))).sum()
}

/// Deterministically picks `count` colors from a bounded palette.
///
/// The RNG is seeded from the label plus a caller-supplied offset.
/// Picks are independent draws, so repeats are possible (a small palette
/// is expected to repeat across a 2x2 moodboard).
///
/// # Errors
///
/// Returns [`RenderError::EmptyLabel`] for an empty label and
/// [`RenderError::PaletteTooSmall`] for an empty palette.
pub fn pick_colors(
    palette: &[Rgb],
    label: &str,
    count: usize,
    seed_offset: u64,
) -> Result<Vec<Rgb>, RenderError> {
    if label.is_empty() {
        return Err(RenderError::EmptyLabel);
    }
    if palette.is_empty() {
        return Err(RenderError::PaletteTooSmall {
            need: 1,
            have: 0,
        });
    }

    let mut rng = StdRng::seed_from_u64(label_seed(label).wrapping_add(seed_offset));
    Ok((0..count)
        .map(|_| palette[rng.random_range(0..palette.len())])
        .collect())
}

/// Parses a list of hex color strings into a palette.
///
/// # Errors
///
/// Returns [`RenderError::InvalidColor`] on the first malformed entry.
pub fn parse_palette(colors: &[String]) -> Result<Vec<Rgb>, RenderError> {
    colors.iter().map(|c| Rgb::parse_hex(c)).collect()
}

// ============================================================================
// Tests
// ============================================================================
