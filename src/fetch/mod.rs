//! Stock photo fetching.
//!
//! Downloads configured source images into the template's asset tree,
//! assembles SVG moodboard collages from the downloaded thumbnails, and
//! records everything in the asset source manifest. A failing download
//! is logged and skipped; the run continues and may produce a partial
//! manifest.

use std::path::{Path, PathBuf};
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::config::schema::ProjectConfig;
use crate::error::{FetchError, Result};
use crate::manifest::{AssetCategory, Manifest, ManifestEntry, MANIFEST_FILENAME};
use crate::render::svg;

/// User-Agent sent with download requests; some image CDNs reject
/// requests without a browser-like identity.
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/91.0.4472.124 Safari/537.36";

/// Summary of a fetch run.
#[derive(Debug, Default)]
pub struct FetchReport {
    /// Files successfully downloaded (examples and thumbnails).
    pub downloaded: usize,
    /// Sources that failed and were skipped.
    pub skipped: usize,
    /// Collages assembled from downloaded thumbnails.
    pub collages: usize,
    /// Placeholder copies made for onboarding and illustrations.
    pub copied: usize,
    /// Manifest location, when one was written.
    pub manifest_path: Option<PathBuf>,
}

/// Creates the HTTP client used for downloads.
///
/// TLS verification stays on; the per-request timeout comes from the
/// project's fetch options.
///
/// # Panics
///
/// Panics if the client cannot be built (should never happen).
#[must_use]
pub fn client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .expect("failed to build HTTP client")
}

/// Builds a sized image URL from a base source URL.
///
/// Appends the JPEG format, quality, width, and fit parameters the image
/// CDNs expect.
#[must_use]
pub fn image_url(base: &str, width: u32, quality: u8) -> String {
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{base}{sep}fm=jpg&q={quality}&w={width}&fit=max")
}

/// Downloads a single image, enforcing the response size limit.
///
/// # Errors
///
/// Returns [`FetchError::Network`] on connection or read failures,
/// [`FetchError::HttpStatus`] on non-2xx responses, and
/// [`FetchError::TooLarge`] when the body exceeds `max_bytes`.
pub async fn download(
    client: &reqwest::Client,
    url: &str,
    max_bytes: usize,
) -> std::result::Result<Vec<u8>, FetchError> {
    debug!(url, "downloading");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if bytes.len() > max_bytes {
        return Err(FetchError::TooLarge {
            size: bytes.len(),
            limit: max_bytes,
        });
    }

    Ok(bytes.to_vec())
}

/// Fetches all configured sources into `out_dir` and assembles collages.
///
/// Per-source failures are logged and skipped. The manifest gets exactly
/// one row per file actually produced, so a run with failures yields a
/// partial manifest rather than an error.
///
/// # Errors
///
/// Returns an I/O error if the output directories or files cannot be
/// created. Network failures never abort the run.
pub async fn fetch_all(
    config: &ProjectConfig,
    out_dir: &Path,
    width_override: Option<u32>,
    skip_collages: bool,
) -> Result<FetchReport> {
    let fetch = &config.fetch;
    let width = width_override.unwrap_or(fetch.width);
    let slug = &config.project.slug;

    for dir in [
        AssetCategory::Example.dir(),
        AssetCategory::StyleTile.dir(),
        AssetCategory::StyleMoodboard.dir(),
        AssetCategory::Onboarding.dir(),
        AssetCategory::Illustration.dir(),
    ] {
        tokio::fs::create_dir_all(out_dir.join(dir)).await?;
    }

    let http = client(Duration::from_secs(fetch.timeout_secs));
    let mut report = FetchReport::default();
    let mut manifest = Manifest::new();

    // Downloaded example paths (for onboarding/illustration reuse) and
    // base64 thumbnails (for collages).
    let mut example_paths: Vec<PathBuf> = Vec::new();
    let mut tiles: Vec<String> = Vec::new();

    for (i, source) in config.sources.iter().enumerate() {
        let n = i + 1;
        let filename = format!("{slug}_example_{n}.jpg");
        let dest = out_dir.join(AssetCategory::Example.dir()).join(&filename);

        let url = image_url(&source.url, width, fetch.quality);
        match download(&http, &url, fetch.max_bytes).await {
            Ok(bytes) => {
                tokio::fs::write(&dest, &bytes).await?;
                info!(file = %dest.display(), bytes = bytes.len(), "downloaded");
                manifest.push(ManifestEntry::downloaded(
                    filename,
                    AssetCategory::Example,
                    &source.url,
                    &source.author,
                    source.profile.as_deref(),
                    &source.license,
                ));
                example_paths.push(dest);
                report.downloaded += 1;
            }
            Err(e) => {
                warn!(url = %source.url, error = %e, "download failed, skipping source");
                report.skipped += 1;
                continue;
            }
        }

        // Small thumbnail for collage embedding.
        let thumb_name = format!("thumb_{n}.jpg");
        let thumb_dest = out_dir
            .join(AssetCategory::StyleTile.dir())
            .join(&thumb_name);
        let thumb_url = image_url(&source.url, fetch.thumb_width, fetch.quality);
        match download(&http, &thumb_url, fetch.max_bytes).await {
            Ok(bytes) => {
                tokio::fs::write(&thumb_dest, &bytes).await?;
                tiles.push(BASE64.encode(&bytes));
                manifest.push(ManifestEntry::downloaded(
                    thumb_name,
                    AssetCategory::StyleTile,
                    &source.url,
                    &source.author,
                    source.profile.as_deref(),
                    &source.license,
                ));
                report.downloaded += 1;
            }
            Err(e) => {
                warn!(url = %source.url, error = %e, "thumbnail download failed");
            }
        }
    }

    let collage_count = if skip_collages {
        0
    } else if fetch.collages > 0 {
        fetch.collages
    } else {
        config.styles.len()
    };

    if collage_count > 0 {
        if tiles.len() >= 4 {
            report.collages =
                write_collages(&tiles, collage_count, out_dir, &mut manifest).await?;
        } else {
            warn!(
                error = %FetchError::NotEnoughTiles { have: tiles.len() },
                "skipping collages"
            );
        }
    }

    report.copied = copy_placeholders(&example_paths, out_dir, &mut manifest).await?;

    if !manifest.is_empty() {
        let manifest_path = out_dir.join(MANIFEST_FILENAME);
        manifest.write(&manifest_path)?;
        report.manifest_path = Some(manifest_path);
    }

    Ok(report)
}

/// Assembles `count` collages from base64 thumbnails. Tile choice is
/// seeded by the collage index so reruns over the same downloads emit
/// identical files.
async fn write_collages(
    tiles: &[String],
    count: usize,
    out_dir: &Path,
    manifest: &mut Manifest,
) -> Result<usize> {
    let mut written = 0;
    for i in 1..=count {
        let picks = pick_tile_indices(tiles.len(), i as u64);
        let selection: [String; 4] = [
            tiles[picks[0]].clone(),
            tiles[picks[1]].clone(),
            tiles[picks[2]].clone(),
            tiles[picks[3]].clone(),
        ];

        let filename = format!("style_{i}_moodboard.svg");
        let dest = out_dir
            .join(AssetCategory::StyleMoodboard.dir())
            .join(&filename);
        tokio::fs::write(&dest, svg::collage(&selection)).await?;
        info!(file = %dest.display(), "assembled collage");

        manifest.push(ManifestEntry {
            filename,
            category: AssetCategory::StyleMoodboard,
            source: "Generated from project assets".to_string(),
            author: "Various".to_string(),
            license: "Unsplash License (Derivative)".to_string(),
        });
        written += 1;
    }
    Ok(written)
}

/// Picks 4 distinct tile indices for a collage, seeded by its index.
fn pick_tile_indices(available: usize, seed: u64) -> [usize; 4] {
    let mut indices: Vec<usize> = (0..available).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);
    [indices[0], indices[1], indices[2], indices[3]]
}

/// Reuses the first downloaded examples as onboarding and empty-state
/// placeholders, the way the app templates expect photographic fills.
async fn copy_placeholders(
    examples: &[PathBuf],
    out_dir: &Path,
    manifest: &mut Manifest,
) -> Result<usize> {
    let mut copied = 0;
    for (i, src) in examples.iter().take(4).enumerate() {
        let n = i + 1;

        let onboard_name = format!("onboard_{n}.jpg");
        let onboard_dest = out_dir
            .join(AssetCategory::Onboarding.dir())
            .join(&onboard_name);
        tokio::fs::copy(src, &onboard_dest).await?;
        manifest.push(ManifestEntry {
            filename: onboard_name,
            category: AssetCategory::Onboarding,
            source: "Copied from project examples".to_string(),
            author: "Various".to_string(),
            license: "Unsplash License".to_string(),
        });
        copied += 1;

        let empty_name = format!("empty_{n}.jpg");
        let empty_dest = out_dir
            .join(AssetCategory::Illustration.dir())
            .join(&empty_name);
        tokio::fs::copy(src, &empty_dest).await?;
        manifest.push(ManifestEntry {
            filename: empty_name,
            category: AssetCategory::Illustration,
            source: "Copied from project examples".to_string(),
            author: "Various".to_string(),
            license: "Unsplash License".to_string(),
        });
        copied += 1;
    }
    Ok(copied)
}

// ============================================================================
// Tests
// ============================================================================
