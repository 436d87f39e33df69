//! Integration tests for fzf-package-preview

use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::helpers::{preview_cmd, run, ToolPath};

const BIN: &str = env!("CARGO_BIN_EXE_fzf-package-preview");

fn write_cache(dir: &Path, records: serde_json::Value) -> PathBuf {
    let path = dir.join("packages.json");
    fs::write(&path, records.to_string()).unwrap();
    path
}

fn run_package(name: &str, cache: &Path, tools: &ToolPath) -> (String, String, i32) {
    run(preview_cmd(BIN, tools).arg(name).arg(cache))
}

// ============================================================================
// Arguments and Cache Loading
// ============================================================================

#[test]
fn missing_arguments_exit_1() {
    let tools = ToolPath::minimal();

    let (_stdout, stderr, exit_code) = run(&mut preview_cmd(BIN, &tools));
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("<NAME>"));

    let (_stdout, stderr, exit_code) = run(preview_cmd(BIN, &tools).arg("serde"));
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("<CACHE_FILE>"));
}

#[test]
fn missing_cache_file_exits_1() {
    let dir = TempDir::new().unwrap();

    let (stdout, stderr, exit_code) =
        run_package("serde", &dir.path().join("absent.json"), &ToolPath::minimal());

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("Error loading cache file: "));
}

#[test]
fn invalid_cache_json_exits_1() {
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("packages.json");
    fs::write(&cache, "[{\"name\": \"serde\",").unwrap();

    let (_stdout, stderr, exit_code) = run_package("serde", &cache, &ToolPath::minimal());

    assert_eq!(exit_code, 1);
    assert!(stderr.starts_with("Error loading cache file: "));
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn mistyped_records_are_skipped() {
    let dir = TempDir::new().unwrap();
    let cache = write_cache(
        dir.path(),
        json!([
            {"name": 1, "path": "/numeric"},
            {"name": "serde", "path": "/wanted"},
        ]),
    );

    let (stdout, _stderr, exit_code) = run_package("serde", &cache, &ToolPath::minimal());

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "/wanted\n");
}

#[test]
fn unknown_package_exits_0_with_message() {
    let dir = TempDir::new().unwrap();
    let cache = write_cache(dir.path(), json!([{"name": "serde", "path": "/x"}]));

    preview_cmd(BIN, &ToolPath::minimal())
        .arg("tokio")
        .arg(&cache)
        .assert()
        .success()
        .stdout("No package information found for tokio\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn duplicate_locations_warn_once_and_render_all() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    fs::write(&first, "from first\n").unwrap();
    fs::write(&second, "from second\n").unwrap();
    let cache = write_cache(
        dir.path(),
        json!([
            {"name": "dup", "path": first},
            {"name": "other", "path": "/elsewhere"},
            {"name": "dup", "path": second},
        ]),
    );

    let (stdout, _stderr, exit_code) = run_package("dup", &cache, &ToolPath::minimal());

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout,
        format!(
            "Warning: More than one location found for dup\n{}\nfrom first\n{}\nfrom second\n",
            first.display(),
            second.display()
        )
    );
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn json_location_is_pretty_printed() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("package.json");
    fs::write(&manifest, r#"{"name":"left-pad","version":"1.3.0","a":1}"#).unwrap();
    let cache = write_cache(dir.path(), json!([{"name": "left-pad", "path": manifest}]));

    let (stdout, _stderr, exit_code) = run_package("left-pad", &cache, &ToolPath::minimal());

    assert_eq!(exit_code, 0);
    let body = stdout
        .strip_prefix(&format!("{}\n", manifest.display()))
        .unwrap();
    assert_eq!(
        body,
        "{\n  \"name\": \"left-pad\",\n  \"version\": \"1.3.0\",\n  \"a\": 1\n}\n"
    );
}

#[test]
fn long_file_is_cut_to_twenty_lines() {
    let dir = TempDir::new().unwrap();
    let readme = dir.path().join("README");
    let content: String = (1..=50).map(|n| format!("row {}\n", n)).collect();
    fs::write(&readme, content).unwrap();
    let cache = write_cache(dir.path(), json!([{"name": "pkg", "path": readme}]));

    let (stdout, _stderr, exit_code) = run_package("pkg", &cache, &ToolPath::minimal());

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.lines().count(), 21);
    assert!(stdout.ends_with("row 20\n"));
}

#[test]
fn preview_command_renders_locations() {
    let dir = TempDir::new().unwrap();
    let location = dir.path().join("with space.txt");
    fs::write(&location, "spaced out\n").unwrap();
    let cache = write_cache(dir.path(), json!([{"name": "pkg", "path": location}]));

    let (stdout, _stderr, exit_code) = run(preview_cmd(BIN, &ToolPath::minimal())
        .env("FZF_PREVIEW_CMD", "cat")
        .arg("pkg")
        .arg(&cache));

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, format!("{}\nspaced out\n", location.display()));
}
