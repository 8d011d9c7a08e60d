//! Shared helpers for atomic-fileutils integration tests.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates an empty directory and returns it with a target path inside it
/// that does not exist yet.
#[allow(unused)]
pub fn dir_with_target(name: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join(name);
    (temp, target)
}

/// Number of entries directly inside `dir`.
#[allow(unused)]
pub fn entry_count(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

/// Names of entries directly inside `dir`, sorted.
#[allow(unused)]
pub fn entry_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Helper to run the binary with arguments in `dir`
#[allow(unused)]
pub fn run_cli(dir: &Path, args: &[&str], stdin: &str) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("atomic-fileutils");
    cmd.args(args).current_dir(dir).write_stdin(stdin);

    cmd.assert()
}
