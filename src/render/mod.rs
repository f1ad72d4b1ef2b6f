//! Placeholder image synthesis
//!
//! Deterministic rendering of placeholder assets: SVG moodboards, cards,
//! and collages, plus a raw 24-bit BMP encoder. All randomness is driven
//! by a seed derived from the asset label, so the same label always
//! produces byte-identical output.

pub mod bmp;
pub mod palette;
pub mod svg;

pub use palette::{Rgb, label_seed, pick_colors};
