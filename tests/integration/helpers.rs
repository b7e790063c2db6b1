//! Shared helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const RESET: &str = "\x1b[0m";

/// Directory holding test fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Read a fixture file as text.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

/// Write `content` to a palette file inside a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn temp_palette(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("palette.json");
    fs::write(&path, content).expect("Failed to write palette");
    (temp_dir, path)
}

/// The binary with logging pinned to the default level.
pub fn rgb2ansi() -> Command {
    let mut cmd = Command::cargo_bin("rgb2ansi").expect("binary should be built");
    cmd.env_remove("RGB2ANSI_LOG");
    cmd
}

/// Truecolor foreground sequence for `(r, g, b)`.
pub fn truecolor(r: u32, g: u32, b: u32) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}
