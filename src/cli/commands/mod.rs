//! CLI command dispatch and handlers.
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod assets;
pub mod completions;
pub mod rename;
pub mod validate;
pub mod version;

use crate::cli::args::{AssetsSubcommand, Cli, Commands};
use crate::error::RoomforgeError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli) -> Result<(), RoomforgeError> {
    match cli.command {
        Commands::Assets(cmd) => match cmd.subcommand {
            AssetsSubcommand::Generate(args) => assets::generate(&args).await,
            AssetsSubcommand::Fetch(args) => assets::fetch(&args).await,
        },
        Commands::Rename(args) => rename::run(&args).await,
        Commands::Validate(args) => validate::run(&args).await,
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}
