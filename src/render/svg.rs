//! SVG document synthesis.
//!
//! Emits the three placeholder document shapes used by the app templates:
//! 2x2 moodboards with decorative shapes and a caption bar, single-color
//! labeled cards, and 2x2 photo collages with base64-embedded JPEG tiles.
//! Documents are plain text templates; byte output depends only on the
//! inputs.

use crate::render::palette::Rgb;

/// Escapes text for inclusion in SVG element content or attributes.
#[must_use]
pub fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders a 400x400 moodboard: four colored tiles, decorative shapes,
/// and a dark caption bar with the style label.
#[must_use]
pub fn moodboard(label: &str, colors: &[Rgb; 4]) -> String {
    let [c1, c2, c3, c4] = colors.map(Rgb::to_hex);
    let title = xml_escape(label);
    format!(
        r#"<svg width="400" height="400" xmlns="http://www.w3.org/2000/svg">
  <!-- Top Left -->
  <rect x="0" y="0" width="200" height="200" fill="{c1}" />
  <circle cx="100" cy="100" r="40" fill="rgba(255,255,255,0.1)" />

  <!-- Top Right -->
  <rect x="200" y="0" width="200" height="200" fill="{c2}" />
  <rect x="250" y="50" width="100" height="100" fill="rgba(255,255,255,0.1)" />

  <!-- Bottom Left -->
  <rect x="0" y="200" width="200" height="200" fill="{c3}" />
  <path d="M50 350 L100 250 L150 350 Z" fill="rgba(255,255,255,0.1)" />

  <!-- Bottom Right -->
  <rect x="200" y="200" width="200" height="200" fill="{c4}" />
  <circle cx="300" cy="300" r="50" fill="rgba(0,0,0,0.1)" />

  <!-- Overlay Text -->
  <rect x="0" y="340" width="400" height="60" fill="rgba(0,0,0,0.6)" />
  <text x="200" y="375" dominant-baseline="middle" text-anchor="middle" font-family="Arial" font-weight="bold" font-size="20" fill="white">{title}</text>
</svg>
"#
    )
}

/// Renders a single-color card with overlay circles and a centered label.
///
/// Used for example scenes (portrait 400x600), onboarding steps, and
/// empty-state illustrations.
#[must_use]
pub fn card(label: &str, color: Rgb, width: u32, height: u32) -> String {
    let fill = color.to_hex();
    let title = xml_escape(label);
    let cx = width / 2;
    let cy1 = height * 3 / 8;
    let r1 = width / 4;
    let cy2 = height / 2;
    let r2 = width * 3 / 8;
    format!(
        r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
  <rect width="{width}" height="{height}" fill="{fill}" />
  <circle cx="{cx}" cy="{cy1}" r="{r1}" fill="rgba(255,255,255,0.2)" />
  <circle cx="{cx}" cy="{cy2}" r="{r2}" fill="rgba(0,0,0,0.1)" />
  <text x="50%" y="80%" dominant-baseline="middle" text-anchor="middle" font-family="Arial" font-size="24" fill="white">{title}</text>
</svg>
"#
    )
}

/// Renders a 600x600 2x2 photo collage from base64-encoded JPEG tiles.
///
/// Tiles are clipped to their quadrant and framed with light divider
/// lines, matching the moodboard look of the app templates.
#[must_use]
pub fn collage(tiles: &[String; 4]) -> String {
    format!(
        r##"<svg width="600" height="600" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
  <defs>
    <clipPath id="c1"><rect x="0" y="0" width="300" height="300" rx="0" /></clipPath>
    <clipPath id="c2"><rect x="300" y="0" width="300" height="300" rx="0" /></clipPath>
    <clipPath id="c3"><rect x="0" y="300" width="300" height="300" rx="0" /></clipPath>
    <clipPath id="c4"><rect x="300" y="300" width="300" height="300" rx="0" /></clipPath>
  </defs>

  <image x="0" y="0" width="300" height="300" preserveAspectRatio="xMidYMid slice" clip-path="url(#c1)" xlink:href="data:image/jpeg;base64,{t1}" />
  <image x="300" y="0" width="300" height="300" preserveAspectRatio="xMidYMid slice" clip-path="url(#c2)" xlink:href="data:image/jpeg;base64,{t2}" />
  <image x="0" y="300" width="300" height="300" preserveAspectRatio="xMidYMid slice" clip-path="url(#c3)" xlink:href="data:image/jpeg;base64,{t3}" />
  <image x="300" y="300" width="300" height="300" preserveAspectRatio="xMidYMid slice" clip-path="url(#c4)" xlink:href="data:image/jpeg;base64,{t4}" />

  <rect x="0" y="0" width="600" height="600" fill="none" stroke="#FAF7F2" stroke-width="4" />
  <line x1="300" y1="0" x2="300" y2="600" stroke="#FAF7F2" stroke-width="4" />
  <line x1="0" y1="300" x2="600" y2="300" stroke="#FAF7F2" stroke-width="4" />
</svg>
"##,
        t1 = tiles[0],
        t2 = tiles[1],
        t3 = tiles[2],
        t4 = tiles[3],
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> [Rgb; 4] {
        [
            Rgb::parse_hex("#0A0D14").unwrap(),
            Rgb::parse_hex("#D0A85C").unwrap(),
            Rgb::parse_hex("#2DBA8A").unwrap(),
            Rgb::parse_hex("#D14B4B").unwrap(),
        ]
    }

    #[test]
    fn moodboard_contains_all_tile_colors() {
        let svg = moodboard("Dark Academia Study", &colors());
        for hex in ["#0A0D14", "#D0A85C", "#2DBA8A", "#D14B4B"] {
            assert!(svg.contains(hex), "missing {hex}");
        }
        assert!(svg.contains("Dark Academia Study"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn moodboard_is_deterministic() {
        let a = moodboard("Japandi Calm", &colors());
        let b = moodboard("Japandi Calm", &colors());
        assert_eq!(a, b);
    }

    #[test]
    fn card_escapes_label() {
        let svg = card(
            "Bits & <Pieces>",
            Rgb::parse_hex("#263332").unwrap(),
            400,
            600,
        );
        assert!(svg.contains("Bits &amp; &lt;Pieces&gt;"));
        assert!(!svg.contains("Bits & <Pieces>"));
    }

    #[test]
    fn card_uses_requested_dimensions() {
        let svg = card("Example 1", Rgb::parse_hex("#101A18").unwrap(), 400, 600);
        assert!(svg.contains(r#"<svg width="400" height="600""#));
    }

    #[test]
    fn collage_embeds_all_tiles() {
        let tiles = [
            "AAAA".to_string(),
            "BBBB".to_string(),
            "CCCC".to_string(),
            "DDDD".to_string(),
        ];
        let svg = collage(&tiles);
        for tile in &tiles {
            assert!(svg.contains(&format!("base64,{tile}")));
        }
        assert_eq!(svg.matches("<clipPath").count(), 4);
        assert_eq!(svg.matches("<image").count(), 4);
    }

    #[test]
    fn xml_escape_handles_all_specials() {
        assert_eq!(xml_escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&apos;");
        assert_eq!(xml_escape("plain"), "plain");
    }
}
