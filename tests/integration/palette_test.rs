//! Palette file handling through the CLI.

use predicates::prelude::*;
use serde_json::Value;

use crate::helpers::{fixtures_dir, rgb2ansi, temp_palette, truecolor, RESET};

const RED: &str = "\x1b[31m";
const BLACK: &str = "\x1b[30m";

fn printed_palette(args: &[&str]) -> Value {
    let output = rgb2ansi()
        .arg("--print-palette")
        .args(args)
        .output()
        .expect("Failed to execute rgb2ansi");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("palette output should be JSON")
}

#[test]
fn override_changes_nearest_color() {
    let path = fixtures_dir().join("red_override.json");

    // Without the override (10, 10, 10) is black
    rgb2ansi()
        .write_stdin(format!("{}x", truecolor(10, 10, 10)))
        .assert()
        .success()
        .stdout(format!("{BLACK}x{RESET}\n"));

    rgb2ansi()
        .arg("--palette")
        .arg(&path)
        .write_stdin(format!("{}x", truecolor(10, 10, 10)))
        .assert()
        .success()
        .stdout(format!("{RED}x{RESET}\n"))
        .stderr("");
}

#[test]
fn override_only_touches_named_entry() {
    let path = fixtures_dir().join("red_override.json");
    let default = printed_palette(&[]);
    let overridden = printed_palette(&["--palette", path.to_str().unwrap()]);

    let default = default.as_object().unwrap();
    let overridden = overridden.as_object().unwrap();
    assert_eq!(overridden.len(), 16);
    for (name, value) in default {
        if name == "red" {
            assert_eq!(overridden[name], serde_json::json!([10, 10, 10]));
        } else {
            assert_eq!(&overridden[name], value, "{name} should keep its default");
        }
    }
}

#[test]
fn invalid_entries_are_reported_and_ignored() {
    let path = fixtures_dir().join("invalid_entries.json");

    rgb2ansi()
        .arg("--palette")
        .arg(&path)
        .arg("--print-palette")
        .assert()
        .success()
        .stderr(predicate::str::contains("'red' is not a valid color, ignoring"))
        .stderr(predicate::str::contains("'purple' is not a valid color, ignoring"))
        .stderr(predicate::str::contains("'green'").not());

    let palette = printed_palette(&["--palette", path.to_str().unwrap()]);
    assert_eq!(palette["red"], serde_json::json!([181, 5, 5]));
    assert_eq!(palette["green"], serde_json::json!([0, 200, 0]));
    assert!(palette.get("purple").is_none());
}

#[test]
fn malformed_file_falls_back_to_default() {
    let path = fixtures_dir().join("malformed.json");

    rgb2ansi()
        .arg("--palette")
        .arg(&path)
        .write_stdin(format!("{}x", truecolor(255, 0, 0)))
        .assert()
        .success()
        .stdout(format!("{RED}x{RESET}\n"))
        .stderr(predicate::str::contains("Falling back to default"));
}

#[test]
fn missing_file_falls_back_to_default() {
    rgb2ansi()
        .args(["--palette", "/nonexistent/palette.json"])
        .write_stdin("plain")
        .assert()
        .success()
        .stdout("plain\n")
        .stderr(predicate::str::contains("Error loading palette file"))
        .stderr(predicate::str::contains("/nonexistent/palette.json"));
}

#[test]
fn temp_palette_overrides_bright_colors() {
    let (temp_dir, path) = temp_palette(r#"{"bright_white": [250, 250, 250]}"#);

    let palette = printed_palette(&["--palette", path.to_str().unwrap()]);
    assert_eq!(palette["bright_white"], serde_json::json!([250, 250, 250]));

    drop(temp_dir);
}

#[test]
fn verbose_logging_reports_stage_details() {
    rgb2ansi()
        .env("RGB2ANSI_LOG", "debug")
        .write_stdin(format!("{}A{}B", truecolor(255, 0, 0), truecolor(255, 0, 0)))
        .assert()
        .success()
        .stderr(predicate::str::contains("mapped truecolor sequences"))
        .stderr(predicate::str::contains("pruned repeated color codes"));
}

#[test]
fn rejected_file_logs_default_fallback() {
    rgb2ansi()
        .env("RGB2ANSI_LOG", "debug")
        .args(["--palette", "/nonexistent/palette.json"])
        .write_stdin("plain")
        .assert()
        .success()
        .stderr(predicate::str::contains("palette file rejected, using default palette"));

    // Entry-level problems keep the file
    rgb2ansi()
        .env("RGB2ANSI_LOG", "debug")
        .arg("--palette")
        .arg(fixtures_dir().join("invalid_entries.json"))
        .write_stdin("plain")
        .assert()
        .success()
        .stderr(predicate::str::contains("palette file rejected").not());
}
