//! CLI argument definitions.
//!
//! All Clap derive structs for `roomforge` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::assets::ImageFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Asset pipeline for room-design app templates.
#[derive(Parser, Debug)]
#[command(name = "roomforge", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "ROOMFORGE_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate or fetch the template's placeholder assets.
    Assets(AssetsCommand),

    /// Apply a rename plan to a cloned template project.
    Rename(RenameArgs),

    /// Validate project configuration files without producing assets.
    Validate(ValidateArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Assets Command
// ============================================================================

/// Asset pipeline commands.
#[derive(Args, Debug)]
pub struct AssetsCommand {
    /// Assets subcommand.
    #[command(subcommand)]
    pub subcommand: AssetsSubcommand,
}

/// Assets subcommands.
#[derive(Subcommand, Debug)]
pub enum AssetsSubcommand {
    /// Procedurally generate placeholder images from the palette.
    Generate(GenerateArgs),

    /// Download stock source photos and assemble collages.
    Fetch(FetchArgs),
}

/// Arguments for `assets generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the project YAML configuration file.
    #[arg(short, long, env = "ROOMFORGE_CONFIG")]
    pub config: PathBuf,

    /// Output directory (defaults to the configured assets dir, resolved
    /// next to the config file).
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Image format to emit.
    #[arg(long, default_value = "svg")]
    pub format: ImageFormatArg,

    /// Seed offset mixed into every per-label seed.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Plan the run without writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `assets fetch`.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Path to the project YAML configuration file.
    #[arg(short, long, env = "ROOMFORGE_CONFIG")]
    pub config: PathBuf,

    /// Output directory (defaults to the configured assets dir, resolved
    /// next to the config file).
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Override the configured download width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Skip collage assembly after downloading.
    #[arg(long)]
    pub skip_collages: bool,
}

// ============================================================================
// Rename Command
// ============================================================================

/// Arguments for `rename`.
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Path to the project YAML configuration file.
    #[arg(short, long, env = "ROOMFORGE_CONFIG")]
    pub config: PathBuf,

    /// Root of the cloned template project to rewrite.
    #[arg(short, long)]
    pub project: PathBuf,

    /// Report what would change without touching any file.
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for the run summary.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Validate Command
// ============================================================================

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Configuration files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Enable strict validation (warnings become errors).
    #[arg(long)]
    pub strict: bool,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Image format flag for `assets generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ImageFormatArg {
    /// Scalable vector placeholders.
    #[default]
    Svg,
    /// Raw 24-bit bitmaps.
    Bmp,
}

impl From<ImageFormatArg> for ImageFormat {
    fn from(arg: ImageFormatArg) -> Self {
        match arg {
            ImageFormatArg::Svg => Self::Svg,
            ImageFormatArg::Bmp => Self::Bmp,
        }
    }
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
