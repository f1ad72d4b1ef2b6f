//! Shared integration-test harness for running the `roomforge` binary
//! as a child process.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Helpers for spawning the compiled `roomforge` binary.
pub struct RoomforgeCmd;

impl RoomforgeCmd {
    /// Path to a file under `tests/fixtures/`.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// Runs the binary with the given arguments and waits for it to exit.
    #[allow(clippy::missing_panics_doc)]
    pub fn run(args: &[&str]) -> Output {
        let bin = env!("CARGO_BIN_EXE_roomforge");
        Command::new(bin)
            .args(args)
            .env_remove("ROOMFORGE_CONFIG")
            .env_remove("ROOMFORGE_LOG_LEVEL")
            .output()
            .expect("failed to spawn roomforge")
    }

    /// Writes a config file into `dir` and returns its path.
    #[allow(clippy::missing_panics_doc)]
    pub fn write_config(dir: &Path, yaml: &str) -> PathBuf {
        let path = dir.join("project.yaml");
        std::fs::write(&path, yaml).expect("failed to write config fixture");
        path
    }
}

/// Collects relative file paths under `root`, sorted, for tree asserts.
#[allow(clippy::missing_panics_doc)]
pub fn tree_files(root: &Path) -> Vec<String> {
    let mut files = Vec::new();
    collect(root, root, &mut files);
    files.sort();
    files
}

fn collect(root: &Path, dir: &Path, out: &mut Vec<String>) {
    for entry in std::fs::read_dir(dir).expect("read_dir failed") {
        let entry = entry.expect("dir entry failed");
        let path = entry.path();
        if path.is_dir() {
            collect(root, &path, out);
        } else {
            let rel = path
                .strip_prefix(root)
                .expect("entry outside root")
                .to_string_lossy()
                .replace('\\', "/");
            out.push(rel);
        }
    }
}
