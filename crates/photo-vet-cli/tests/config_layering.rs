//! Integration tests for configuration layering.
//!
//! Tests the full priority chain: hardcoded defaults < XDG config < project config < CLI args

#![allow(clippy::unwrap_used)] // Test code uses unwrap for brevity
#![allow(deprecated)] // cargo_bin deprecation warning

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use photo_vet_test_support::SyntheticImage;
use predicates::prelude::*;

fn write_png(dir: &Path, name: &str, buffer: &photo_vet_core::PixelBuffer) -> PathBuf {
    let path = dir.join(name);
    SyntheticImage::save_png(buffer, &path);
    path
}

#[test]
fn test_cli_luma_validation_rejects_invalid() {
    let mut cmd = Command::cargo_bin("photo-vet").unwrap();
    cmd.arg("--min-luma").arg("256").arg("whatever.png");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("256 is not in 0.0..=255.0"));
}

#[test]
fn test_project_config_applies_format() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_png(
        temp_dir.path(),
        "good.png",
        &SyntheticImage::bright_noise(512, 512, 41),
    );

    fs::write(
        temp_dir.path().join(".photo-vet.toml"),
        r"
[output]
format = 'json'
",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("photo-vet").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("--quiet")
        .arg("good.png");

    // Output should be a JSON array per config
    cmd.assert().code(0).stdout(predicate::str::starts_with("["));
}

#[test]
fn test_cli_overrides_project_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_png(
        temp_dir.path(),
        "good.png",
        &SyntheticImage::bright_noise(512, 512, 41),
    );

    fs::write(
        temp_dir.path().join(".photo-vet.toml"),
        r"
[output]
format = 'json'
",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("photo-vet").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("--quiet")
        .arg("--format")
        .arg("jsonl") // CLI overrides config
        .arg("good.png");

    // JSONL: single object per line
    cmd.assert().code(0).stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_config_threshold_applies() {
    let temp_dir = tempfile::tempdir().unwrap();
    // Dark noise fails the default luma floor of 50
    write_png(
        temp_dir.path(),
        "dark.png",
        &SyntheticImage::dark_noise(512, 512, 43),
    );

    fs::write(
        temp_dir.path().join(".photo-vet.toml"),
        r"
[brightness]
min_luma = 10.0
",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("photo-vet").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("--quiet")
        .arg("dark.png");

    // Config lowers the floor, so the dark upload is accepted
    cmd.assert().code(0);
}

#[test]
fn test_cli_threshold_overrides_config_threshold() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_png(
        temp_dir.path(),
        "dark.png",
        &SyntheticImage::dark_noise(512, 512, 43),
    );

    fs::write(
        temp_dir.path().join(".photo-vet.toml"),
        r"
[brightness]
min_luma = 10.0
",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("photo-vet").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("--quiet")
        .arg("--min-luma")
        .arg("50")
        .arg("dark.png");

    // CLI restores the strict floor, so the dark upload is rejected again
    cmd.assert().code(1);
}

#[test]
fn test_config_disables_checks() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_png(
        temp_dir.path(),
        "good.png",
        &SyntheticImage::bright_noise(512, 512, 41),
    );

    fs::write(
        temp_dir.path().join(".photo-vet.toml"),
        r"
[brightness]
enabled = false

[sharpness]
enabled = false

[resolution]
enabled = false

[filesize]
enabled = false

[dedupe]
enabled = false
",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("photo-vet").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("-v") // Verbose to see check status
        .arg("good.png");

    // Everything disabled: nothing to vet against
    cmd.assert()
        .code(0)
        .stderr(predicate::str::contains("All checks disabled"));
}

#[test]
fn test_config_enables_recursive() {
    let temp_dir = tempfile::tempdir().unwrap();
    let sub_dir = temp_dir.path().join("nested");
    fs::create_dir(&sub_dir).unwrap();
    write_png(
        &sub_dir,
        "deep.png",
        &SyntheticImage::bright_noise(512, 512, 47),
    );

    fs::write(
        temp_dir.path().join(".photo-vet.toml"),
        r"
[general]
recursive = true
",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("photo-vet").unwrap();
    cmd.current_dir(temp_dir.path()).arg("--quiet").arg(".");

    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("deep.png"));
}
