//! Raw 24-bit BMP encoding and pattern synthesis.
//!
//! Encodes uncompressed BI_RGB bitmaps: 14-byte file header, 40-byte
//! BITMAPINFOHEADER, bottom-up BGR rows padded to 4-byte boundaries.
//! Output always carries a `.bmp` extension; earlier tooling wrote BMP
//! content under a `.jpg` name and relied on consumers sniffing magic
//! bytes, which this crate deliberately does not do.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::RenderError;
use crate::render::palette::Rgb;

/// Byte offset of the pixel array: file header (14) + DIB header (40).
pub const PIXEL_DATA_OFFSET: u32 = 54;

/// Print resolution recorded in the DIB header (72 DPI in pixels/meter).
const PPM: u32 = 2835;

/// Encodes pixels (top-down, row-major) as an uncompressed 24-bit BMP.
///
/// # Errors
///
/// Returns [`RenderError::InvalidDimensions`] if `pixels.len()` does not
/// equal `width * height`.
pub fn encode(width: u32, height: u32, pixels: &[Rgb]) -> Result<Vec<u8>, RenderError> {
    let expected = width as usize * height as usize;
    if pixels.len() != expected {
        return Err(RenderError::InvalidDimensions {
            width,
            height,
            got: pixels.len(),
        });
    }

    let row_bytes = width as usize * 3;
    let padding = (4 - row_bytes % 4) % 4;
    let image_size = (row_bytes + padding) * height as usize;
    let file_size = PIXEL_DATA_OFFSET as usize + image_size;

    let mut out = Vec::with_capacity(file_size);

    // Bitmap file header
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&u32::try_from(file_size).unwrap_or(u32::MAX).to_le_bytes());
    out.extend_from_slice(&[0, 0, 0, 0]); // reserved
    out.extend_from_slice(&PIXEL_DATA_OFFSET.to_le_bytes());

    // BITMAPINFOHEADER
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    out.extend_from_slice(&u32::try_from(image_size).unwrap_or(u32::MAX).to_le_bytes());
    out.extend_from_slice(&PPM.to_le_bytes());
    out.extend_from_slice(&PPM.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors

    // Pixel data: bottom-up rows, BGR order
    for row in (0..height as usize).rev() {
        let start = row * width as usize;
        for &Rgb { r, g, b } in &pixels[start..start + width as usize] {
            out.push(b);
            out.push(g);
            out.push(r);
        }
        out.resize(out.len() + padding, 0);
    }

    Ok(out)
}

/// Generates a seeded four-quadrant pattern: three solid regions and a
/// noisy fourth, echoing the geometric placeholder look of the style
/// source images.
///
/// # Errors
///
/// Returns [`RenderError::PaletteTooSmall`] if fewer than 2 colors are
/// supplied.
pub fn quadrant_pattern(
    seed: u64,
    colors: &[Rgb],
    width: u32,
    height: u32,
) -> Result<Vec<Rgb>, RenderError> {
    if colors.len() < 2 {
        return Err(RenderError::PaletteTooSmall {
            need: 2,
            have: colors.len(),
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let bg = colors[rng.random_range(0..colors.len())];
    let c1 = colors[rng.random_range(0..colors.len())];
    let c2 = colors[rng.random_range(0..colors.len())];

    let half_w = width / 2;
    let half_h = height / 2;

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let pixel = match (x < half_w, y < half_h) {
                (true, true) => bg,
                (false, false) => c1,
                (true, false) => c2,
                // Top-right quadrant: seeded noise between bg and c1
                (false, true) => {
                    if rng.random_bool(0.5) {
                        bg
                    } else {
                        c1
                    }
                }
            };
            pixels.push(pixel);
        }
    }

    Ok(pixels)
}

// ============================================================================
// Tests
// ============================================================================
