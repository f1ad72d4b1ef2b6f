//! Rename command handler.
//!
//! Loads the rename plan from the project configuration and applies it
//! to a cloned template tree.

use crate::cli::args::{OutputFormat, RenameArgs};
use crate::config::loader::ConfigLoader;
use crate::error::{ConfigError, RoomforgeError};
use crate::rename;

/// Apply the configured rename plan to a project tree.
///
/// # Errors
///
/// Returns a config error if the configuration cannot be loaded or has
/// no `rename` section, and a rename error if the project root is
/// missing or a file rename would collide.
#[allow(clippy::unused_async)] // tree rewriting is synchronous file I/O
pub async fn run(args: &RenameArgs) -> Result<(), RoomforgeError> {
    tracing::info!(config = %args.config.display(), "loading configuration");
    let loaded = ConfigLoader::new().load(&args.config)?;

    let Some(plan) = loaded.config.rename.as_ref() else {
        return Err(ConfigError::MissingSection {
            section: "rename".to_string(),
            path: args.config.clone(),
        }
        .into());
    };

    tracing::info!(
        project = %args.project.display(),
        tokens = plan.tokens.len(),
        dry_run = args.dry_run,
        "applying rename plan"
    );

    let outcome = rename::apply(plan, &args.project, args.dry_run)?;

    match args.format {
        OutputFormat::Human => {
            let prefix = if outcome.dry_run { "would change" } else { "changed" };
            println!(
                "{prefix}: {} files updated, {} files renamed, {} explicit renames",
                outcome.files_updated, outcome.files_renamed, outcome.explicit_renames
            );
            if outcome.is_noop() {
                println!("nothing to do (plan already applied?)");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}
