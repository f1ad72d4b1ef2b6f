//! Asset command handlers.
//!
//! Implements `assets generate` and `assets fetch`.

use std::path::PathBuf;

use crate::cli::args::{FetchArgs, GenerateArgs};
use crate::config::loader::{ConfigLoader, LoadResult};
use crate::error::RoomforgeError;
use crate::{assets, fetch};

/// Procedurally generate placeholder assets from the project palette.
///
/// # Errors
///
/// Returns a config error if the configuration cannot be loaded, a
/// render error for unusable palettes, or an I/O error if the output
/// tree cannot be created.
#[allow(clippy::unused_async)] // generation is CPU-bound and fully synchronous
pub async fn generate(args: &GenerateArgs) -> Result<(), RoomforgeError> {
    let loaded = load_config(&args.config)?;
    let out_dir = resolve_out_dir(args.out.as_ref(), &args.config, &loaded);

    tracing::info!(
        out = %out_dir.display(),
        format = ?args.format,
        seed = args.seed,
        dry_run = args.dry_run,
        "generating placeholder assets"
    );

    let report = assets::generate(
        &loaded.config,
        &out_dir,
        args.format.into(),
        args.seed,
        args.dry_run,
    )?;

    if args.dry_run {
        println!("dry run: would write {} assets", report.written.len());
    } else {
        println!(
            "wrote {} assets ({} skipped) to {}",
            report.written.len(),
            report.skipped,
            out_dir.display()
        );
    }

    Ok(())
}

/// Download stock source photos and assemble collages.
///
/// # Errors
///
/// Returns a config error if the configuration cannot be loaded, or an
/// I/O error if the output tree cannot be created. Individual download
/// failures are logged and skipped.
pub async fn fetch(args: &FetchArgs) -> Result<(), RoomforgeError> {
    let loaded = load_config(&args.config)?;
    let out_dir = resolve_out_dir(args.out.as_ref(), &args.config, &loaded);

    tracing::info!(
        out = %out_dir.display(),
        sources = loaded.config.sources.len(),
        "fetching source photos"
    );

    let report = fetch::fetch_all(&loaded.config, &out_dir, args.width, args.skip_collages).await?;

    println!(
        "downloaded {} files ({} sources skipped), {} collages, {} placeholder copies",
        report.downloaded, report.skipped, report.collages, report.copied
    );

    Ok(())
}

/// Loads the project configuration and surfaces loader warnings.
fn load_config(path: &std::path::Path) -> Result<LoadResult, RoomforgeError> {
    tracing::info!(config = %path.display(), "loading configuration");
    let result = ConfigLoader::new().load(path)?;

    for warning in &result.warnings {
        tracing::warn!(
            location = warning.location.as_deref().unwrap_or("<unknown>"),
            "{}",
            warning.message
        );
    }

    Ok(result)
}

/// Resolves the output directory: an explicit `--out` wins, otherwise
/// the configured assets dir next to the config file.
fn resolve_out_dir(
    out: Option<&PathBuf>,
    config_path: &std::path::Path,
    loaded: &LoadResult,
) -> PathBuf {
    out.cloned().unwrap_or_else(|| {
        config_path
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(&loaded.config.project.assets_dir)
    })
}
