//! Common test utilities for doccat CLI and scenario tests.
//!
//! - `doccat()`: a `Command` for the built binary with an isolated environment
//! - Fixtures: catalog JSON documents used across tests

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// The binary under test, with config, color and locale pinned so output is
/// stable wherever the tests run.
pub fn doccat(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_doccat"));
    let home = cwd.join(".home");
    cmd.current_dir(cwd)
        .env("HOME", &home)
        .env("USERPROFILE", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env("LC_ALL", "C")
        .env_remove("DOCCAT_INITIAL_SECTION")
        .env_remove("DOCCAT_COLOR")
        .env_remove("DOCCAT_LOG")
        .env_remove("DOCCAT_DOWNLOAD_DIR");
    cmd
}

/// Run with `args` and return the output.
pub fn run(cwd: &Path, args: &[&str]) -> Output {
    doccat(cwd).args(args).output().expect("failed to run doccat")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Write `content` as `docs_tree.json` in `dir`.
pub fn write_catalog(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("docs_tree.json");
    std::fs::write(&path, content).expect("write catalog");
    path
}

/// Parse every stdout line as a JSON event.
pub fn json_lines(output: &Output) -> Vec<serde_json::Value> {
    stdout(output)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("stdout line is JSON"))
        .collect()
}
