//! Bulk template renaming.
//!
//! Applies a rename plan to a cloned template tree: explicit file
//! renames first, then ordered token replacement inside matching files,
//! then token-based file renames walked bottom-up. Running the same plan
//! twice is a no-op, since the first pass removes every search token.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::schema::RenamePlan;
use crate::error::{RenameError, Result};

/// Summary of a rename run.
#[derive(Debug, Default, Serialize)]
pub struct RenameOutcome {
    /// Files whose contents changed.
    pub files_updated: usize,
    /// Files renamed because their name contained a token.
    pub files_renamed: usize,
    /// Explicit path renames applied.
    pub explicit_renames: usize,
    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RenameOutcome {
    /// Returns `true` if the run changed nothing.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.files_updated == 0 && self.files_renamed == 0 && self.explicit_renames == 0
    }
}

/// Applies a rename plan to the project tree rooted at `root`.
///
/// With `dry_run` set, changes are counted and logged but nothing is
/// written or moved.
///
/// # Errors
///
/// Returns [`RenameError::MissingRoot`] if `root` is not a directory,
/// [`RenameError::Collision`] if a token-based file rename would
/// overwrite an existing file, and I/O errors for failed writes.
pub fn apply(plan: &RenamePlan, root: &Path, dry_run: bool) -> Result<RenameOutcome> {
    if !root.is_dir() {
        return Err(RenameError::MissingRoot {
            path: root.to_path_buf(),
        }
        .into());
    }

    let mut outcome = RenameOutcome {
        dry_run,
        ..RenameOutcome::default()
    };

    outcome.explicit_renames = apply_explicit_renames(plan, root, dry_run)?;
    outcome.files_updated = rewrite_contents(plan, root, dry_run)?;
    if plan.rename_files {
        outcome.files_renamed = rename_matching_files(plan, root, dry_run)?;
    }

    Ok(outcome)
}

/// Applies the explicit old-path → new-path renames from the plan.
/// A missing source file is logged and skipped, not fatal: on a second
/// run every source has already been moved.
fn apply_explicit_renames(plan: &RenamePlan, root: &Path, dry_run: bool) -> Result<usize> {
    let mut applied = 0;
    for (old, new) in &plan.file_renames {
        let old_path = root.join(old);
        let new_path = root.join(new);

        if !old_path.exists() {
            debug!(file = %old_path.display(), "explicit rename source not found, skipping");
            continue;
        }

        if dry_run {
            info!(from = %old_path.display(), to = %new_path.display(), "would rename");
        } else {
            if let Some(parent) = new_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::rename(&old_path, &new_path)?;
            info!(from = %old_path.display(), to = %new_path.display(), "renamed");
        }
        applied += 1;
    }
    Ok(applied)
}

/// Rewrites token occurrences inside files with a matching extension.
/// Unreadable files (e.g. non-UTF-8 content behind a text extension) are
/// logged and skipped.
fn rewrite_contents(plan: &RenamePlan, root: &Path, dry_run: bool) -> Result<usize> {
    let mut updated = 0;

    for entry in walk(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "walk error, skipping entry");
                continue;
            }
        };
        if !entry.file_type().is_file() || !matches_extension(entry.path(), &plan.extensions) {
            continue;
        }

        let content = match std::fs::read_to_string(entry.path()) {
            Ok(content) => content,
            Err(e) => {
                warn!(file = %entry.path().display(), error = %e, "unreadable, skipping");
                continue;
            }
        };

        let rewritten = replace_tokens(&content, plan);
        if rewritten == content {
            continue;
        }

        if dry_run {
            info!(file = %entry.path().display(), "would update");
        } else {
            std::fs::write(entry.path(), rewritten)?;
            info!(file = %entry.path().display(), "updated");
        }
        updated += 1;
    }

    Ok(updated)
}

/// Renames files whose names contain a search token, walking bottom-up
/// so directory traversal stays valid while entries move.
fn rename_matching_files(plan: &RenamePlan, root: &Path, dry_run: bool) -> Result<usize> {
    let mut renamed = 0;

    for entry in WalkDir::new(root)
        .contents_first(true)
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git")
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "walk error, skipping entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        let new_name = plan
            .tokens
            .iter()
            .fold(name.to_string(), |acc, (from, to)| acc.replace(from, to));
        if new_name == name {
            continue;
        }

        let new_path: PathBuf = entry.path().with_file_name(&new_name);
        if new_path.exists() {
            return Err(RenameError::Collision { to: new_path }.into());
        }

        if dry_run {
            info!(from = %entry.path().display(), to = %new_path.display(), "would rename");
        } else {
            std::fs::rename(entry.path(), &new_path)?;
            info!(from = %entry.path().display(), to = %new_path.display(), "renamed");
        }
        renamed += 1;
    }

    Ok(renamed)
}

/// Applies all token replacements in plan order.
fn replace_tokens(content: &str, plan: &RenamePlan) -> String {
    plan.tokens
        .iter()
        .fold(content.to_string(), |acc, (from, to)| acc.replace(from, to))
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}

fn walk(root: &Path) -> impl Iterator<Item = walkdir::Result<walkdir::DirEntry>> {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn plan() -> RenamePlan {
        serde_yaml::from_str(
            r"
tokens:
  ShoeResultStorage: GuestResultStorage
  'Shoe Room': 'Guest Room'
  shoe_: guest_
extensions: [dart, yaml]
file_renames:
  lib/model/shoe_ai_config.dart: lib/model/guest_ai_config.dart
",
        )
        .unwrap()
    }

    fn setup() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().join("lib/model");
        fs::create_dir_all(&lib).unwrap();
        fs::write(
            lib.join("shoe_ai_config.dart"),
            "class ShoeResultStorage {}\nimport 'shoe_result_storage.dart';\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("pubspec.yaml"),
            "name: shoe_room_ai\ndescription: Shoe Room AI app\n",
        )
        .unwrap();
        fs::write(dir.path().join("shoe_notes.txt"), "shoe_ but wrong ext").unwrap();
        dir
    }

    #[test]
    fn apply_rewrites_and_renames() {
        let dir = setup();
        let outcome = apply(&plan(), dir.path(), false).unwrap();

        assert_eq!(outcome.explicit_renames, 1);
        assert!(outcome.files_updated >= 1);
        assert!(!outcome.is_noop());

        let config = dir.path().join("lib/model/guest_ai_config.dart");
        assert!(config.exists());
        let content = fs::read_to_string(&config).unwrap();
        assert!(content.contains("GuestResultStorage"));
        assert!(content.contains("guest_result_storage.dart"));
        assert!(!content.contains("Shoe"));

        let pubspec = fs::read_to_string(dir.path().join("pubspec.yaml")).unwrap();
        assert!(pubspec.contains("guest_room_ai"));
        assert!(pubspec.contains("Guest Room AI"));
    }

    #[test]
    fn second_run_is_noop() {
        let dir = setup();
        apply(&plan(), dir.path(), false).unwrap();
        let second = apply(&plan(), dir.path(), false).unwrap();
        assert!(second.is_noop(), "{second:?}");
    }

    #[test]
    fn dry_run_changes_nothing() {
        let dir = setup();
        let outcome = apply(&plan(), dir.path(), true).unwrap();

        assert!(outcome.dry_run);
        assert!(!outcome.is_noop());
        assert!(dir.path().join("lib/model/shoe_ai_config.dart").exists());
        let pubspec = fs::read_to_string(dir.path().join("pubspec.yaml")).unwrap();
        assert!(pubspec.contains("shoe_room_ai"));
    }

    #[test]
    fn non_matching_extensions_untouched() {
        let dir = setup();
        apply(&plan(), dir.path(), false).unwrap();
        let notes = fs::read_to_string(dir.path().join("guest_notes.txt")).unwrap();
        // Contents keep the token (wrong extension), but the file name
        // was still renamed.
        assert!(notes.contains("shoe_"));
    }

    #[test]
    fn token_order_is_respected() {
        // The specific class token must win over the generic prefix.
        let plan: RenamePlan = serde_yaml::from_str(
            r"
tokens:
  ShoeResultStorage: ApartmentResultStorage
  Shoe: Guest
extensions: [dart]
",
        )
        .unwrap();
        let out = replace_tokens("ShoeResultStorage and ShoeConfig", &plan);
        assert_eq!(out, "ApartmentResultStorage and GuestConfig");
    }

    #[test]
    fn missing_root_is_error() {
        let err = apply(&plan(), Path::new("/nonexistent/project"), false).unwrap_err();
        assert!(matches!(
            err,
            crate::error::RoomforgeError::Rename(RenameError::MissingRoot { .. })
        ));
    }

    #[test]
    fn missing_explicit_source_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pubspec.yaml"), "name: shoe_room_ai\n").unwrap();
        let outcome = apply(&plan(), dir.path(), false).unwrap();
        assert_eq!(outcome.explicit_renames, 0);
        assert_eq!(outcome.files_updated, 1);
    }

    #[test]
    fn git_directory_is_left_alone() {
        let dir = setup();
        let git = dir.path().join(".git");
        fs::create_dir_all(&git).unwrap();
        fs::write(git.join("config.yaml"), "shoe_room_ai").unwrap();

        apply(&plan(), dir.path(), false).unwrap();
        let content = fs::read_to_string(git.join("config.yaml")).unwrap();
        assert!(content.contains("shoe_room_ai"));
    }
}
