//! End-to-end tests for the `rename` command.

mod common;

use std::fs;
use std::path::Path;

use common::RoomforgeCmd;

const CONFIG: &str = r##"
project:
  name: Guest Room AI
  slug: guest_room_ai

palette: ["#0A0D14", "#151B28", "#B9C3D1", "#D0A85C"]

rename:
  tokens:
    ShoeResultStorage: GuestResultStorage
    "Shoe Room": "Guest Room"
    shoe_: guest_
  extensions: [dart, yaml]
  file_renames:
    lib/shoe_app.dart: lib/guest_app.dart
"##;

fn make_project(root: &Path) {
    fs::create_dir_all(root.join("lib")).unwrap();
    fs::write(
        root.join("lib/shoe_app.dart"),
        "class ShoeResultStorage {}\n// Shoe Room entry point\n",
    )
    .unwrap();
    fs::write(
        root.join("lib/shoe_result_storage.dart"),
        "const table = 'shoe_results';\n",
    )
    .unwrap();
    fs::write(
        root.join("pubspec.yaml"),
        "name: shoe_room_ai\ndescription: Shoe Room AI template\n",
    )
    .unwrap();
}

#[test]
fn rename_rewrites_project_tree() {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("app");
    make_project(&project);
    let config = RoomforgeCmd::write_config(dir.path(), CONFIG);

    let output = RoomforgeCmd::run(&[
        "rename",
        "--config",
        config.to_str().unwrap(),
        "--project",
        project.to_str().unwrap(),
    ]);
    assert!(
        output.status.success(),
        "rename failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // Explicit rename applied, then contents rewritten
    let app = fs::read_to_string(project.join("lib/guest_app.dart")).unwrap();
    assert!(app.contains("GuestResultStorage"));
    assert!(app.contains("Guest Room"));
    assert!(!app.contains("Shoe"));

    // Token-based file rename
    assert!(project.join("lib/guest_result_storage.dart").exists());
    assert!(!project.join("lib/shoe_result_storage.dart").exists());

    let pubspec = fs::read_to_string(project.join("pubspec.yaml")).unwrap();
    assert!(pubspec.contains("guest_room_ai"));
}

#[test]
fn rename_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("app");
    make_project(&project);
    let config = RoomforgeCmd::write_config(dir.path(), CONFIG);

    let args = [
        "rename",
        "--config",
        config.to_str().unwrap(),
        "--project",
        project.to_str().unwrap(),
        "--format",
        "json",
    ];

    let first = RoomforgeCmd::run(&args);
    assert!(first.status.success());

    let second = RoomforgeCmd::run(&args);
    assert!(second.status.success());

    let summary: serde_json::Value =
        serde_json::from_slice(&second.stdout).expect("invalid JSON summary");
    assert_eq!(summary["files_updated"], 0, "second run must be a no-op");
    assert_eq!(summary["files_renamed"], 0);
    assert_eq!(summary["explicit_renames"], 0);
}

#[test]
fn rename_dry_run_reports_without_changing() {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("app");
    make_project(&project);
    let config = RoomforgeCmd::write_config(dir.path(), CONFIG);

    let output = RoomforgeCmd::run(&[
        "rename",
        "--config",
        config.to_str().unwrap(),
        "--project",
        project.to_str().unwrap(),
        "--dry-run",
        "--format",
        "json",
    ]);
    assert!(output.status.success());

    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("invalid JSON summary");
    assert_eq!(summary["dry_run"], true);
    assert!(summary["files_updated"].as_u64().unwrap() > 0);

    // Tree untouched
    assert!(project.join("lib/shoe_app.dart").exists());
    let pubspec = fs::read_to_string(project.join("pubspec.yaml")).unwrap();
    assert!(pubspec.contains("shoe_room_ai"));
}

#[test]
fn rename_without_plan_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("app");
    make_project(&project);
    let config = RoomforgeCmd::write_config(
        dir.path(),
        "project:\n  name: Guest Room AI\n  slug: guest_room_ai\npalette: [\"#0A0D14\", \"#151B28\", \"#B9C3D1\", \"#D0A85C\"]\n",
    );

    let output = RoomforgeCmd::run(&[
        "rename",
        "--config",
        config.to_str().unwrap(),
        "--project",
        project.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rename"), "unexpected stderr: {stderr}");
}

#[test]
fn rename_missing_project_root_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = RoomforgeCmd::write_config(dir.path(), CONFIG);

    let output = RoomforgeCmd::run(&[
        "rename",
        "--config",
        config.to_str().unwrap(),
        "--project",
        dir.path().join("nope").to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(6), "rename errors exit with 6");
}
