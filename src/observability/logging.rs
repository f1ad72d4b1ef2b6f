//! Logging setup.
//!
//! All diagnostics go to stderr through `tracing`, keeping stdout free
//! for command output (completion scripts, JSON summaries). Repeated
//! `-v` flags raise the level; `ROOMFORGE_LOG_LEVEL` accepts a full
//! filter directive and wins over the flags.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Compact human-readable lines, ANSI when the terminal supports it.
    #[default]
    Human,
    /// Newline-delimited JSON.
    Json,
}

/// Default filter directive for a `-v` count. Quiet runs skip logging
/// entirely, so level 0 still surfaces warnings.
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global tracing subscriber.
///
/// Calls `try_init()` and ignores the error, so a second call (common in
/// tests) is a no-op rather than a panic. Module targets only show up
/// from `-vv`, where they start being useful for pinpointing a failure.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let filter = EnvFilter::try_from_env("ROOMFORGE_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let show_target = verbosity >= 2;

    let use_ansi = match color {
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    match format {
        LogFormat::Human => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(use_ansi)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
