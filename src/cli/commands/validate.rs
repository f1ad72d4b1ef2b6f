//! Configuration validation command.
//!
//! Validates one or more project configuration files without producing
//! any assets. All files are checked before the command fails, so a
//! batch run reports every broken file in one pass.

use std::path::Path;

use serde_json::json;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::loader::ConfigLoader;
use crate::error::{ConfigError, RoomforgeError};

/// Per-file validation outcome, for reporting.
struct FileReport {
    file: String,
    valid: bool,
    issues: Vec<String>,
}

/// Validate configuration files.
///
/// With `--strict`, warnings fail the file as well. The first failure is
/// returned after every file has been checked and reported.
///
/// # Errors
///
/// Returns the config error of the first invalid file.
#[allow(clippy::unused_async)] // validation is synchronous file I/O
pub async fn run(args: &ValidateArgs) -> Result<(), RoomforgeError> {
    let loader = ConfigLoader::new();
    let mut reports = Vec::with_capacity(args.files.len());
    let mut first_failure: Option<ConfigError> = None;

    for path in &args.files {
        let report = check_file(&loader, path, args.strict, &mut first_failure);
        reports.push(report);
    }

    match args.format {
        OutputFormat::Human => {
            for report in &reports {
                let verdict = if report.valid { "ok" } else { "invalid" };
                println!("{}: {verdict}", report.file);
                for issue in &report.issues {
                    println!("  {issue}");
                }
            }
        }
        OutputFormat::Json => {
            let payload: Vec<_> = reports
                .iter()
                .map(|r| json!({ "file": r.file, "valid": r.valid, "issues": r.issues }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    match first_failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Checks a single file, recording the first failure for the exit code.
fn check_file(
    loader: &ConfigLoader,
    path: &Path,
    strict: bool,
    first_failure: &mut Option<ConfigError>,
) -> FileReport {
    let file = path.display().to_string();

    match loader.load(path) {
        Ok(result) => {
            let issues: Vec<String> = result
                .warnings
                .iter()
                .map(|w| match &w.location {
                    Some(location) => format!("warning: {} at {location}", w.message),
                    None => format!("warning: {}", w.message),
                })
                .collect();

            let valid = !strict || issues.is_empty();
            if !valid && first_failure.is_none() {
                *first_failure = Some(ConfigError::ValidationError {
                    path: file.clone(),
                    errors: Vec::new(),
                });
            }
            FileReport { file, valid, issues }
        }
        Err(err) => {
            let issues = match &err {
                ConfigError::ValidationError { errors, .. } => {
                    errors.iter().map(ToString::to_string).collect()
                }
                other => vec![other.to_string()],
            };
            if first_failure.is_none() {
                *first_failure = Some(err);
            }
            FileReport {
                file,
                valid: false,
                issues,
            }
        }
    }
}
