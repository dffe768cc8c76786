//! Integration tests for Tally CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = "the cat sat on the mat the cat ran";

/// Word-count lines of a text report (everything before the blank line).
fn count_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .take_while(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("word-frequency counter"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tally"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Test sequential counting of a file
#[test]
fn test_sequential_count() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    fs::write(&input, SAMPLE).unwrap();

    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("count")
        .arg(&input)
        .arg("--mode")
        .arg("sequential")
        .assert()
        .success()
        .stdout(predicate::str::contains("'the': 3"))
        .stdout(predicate::str::contains("'cat': 2"))
        .stdout(predicate::str::contains("'ran': 1"))
        .stdout(predicate::str::contains("Time taken: "));
}

/// Test counting text piped through stdin
#[test]
fn test_count_from_stdin() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("count")
        .write_stdin("a b a")
        .assert()
        .success()
        .stdout(predicate::str::contains("'a': 2"))
        .stdout(predicate::str::contains("'b': 1"));
}

/// Parallel and sequential runs must render identical word counts
#[test]
fn test_parallel_matches_sequential() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    fs::write(&input, SAMPLE).unwrap();

    let sequential = Command::cargo_bin("tally")
        .unwrap()
        .arg("count")
        .arg(&input)
        .arg("--mode")
        .arg("sequential")
        .output()
        .unwrap();
    let parallel = Command::cargo_bin("tally")
        .unwrap()
        .arg("count")
        .arg(&input)
        .arg("--mode")
        .arg("parallel")
        .arg("--chunks")
        .arg("4")
        .output()
        .unwrap();

    assert!(sequential.status.success());
    assert!(parallel.status.success());
    assert_eq!(
        count_lines(&String::from_utf8_lossy(&sequential.stdout)),
        count_lines(&String::from_utf8_lossy(&parallel.stdout)),
    );
}

/// A zero chunk count is rejected before any counting happens
#[test]
fn test_zero_chunk_count_rejected() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("count")
        .arg("--mode")
        .arg("parallel")
        .arg("--chunks")
        .arg("0")
        .write_stdin(SAMPLE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("chunk count"));
}

/// Failures are printed by the styled error handler, not a bare panic
#[test]
fn test_errors_use_styled_handler() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("count")
        .arg("/nonexistent/input.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("✖"))
        .stderr(predicate::str::contains("Input file not found"));
}

/// Empty input is rejected
#[test]
fn test_empty_input_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("empty.txt");
    fs::write(&input, "").unwrap();

    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("count")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

/// --chunks is ignored (with a warning) in sequential mode
#[test]
fn test_chunks_ignored_in_sequential_mode() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("count")
        .arg("--mode")
        .arg("sequential")
        .arg("--chunks")
        .arg("8")
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("ignored"))
        .stdout(predicate::str::contains("'the': 3"));
}

/// Test report persistence with --output
#[test]
fn test_output_file_persistence() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    let report = temp_dir.path().join("report.txt");
    fs::write(&input, SAMPLE).unwrap();

    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("count")
        .arg(&input)
        .arg("--output")
        .arg(&report)
        .assert()
        .success();

    let saved = fs::read_to_string(&report).unwrap();
    assert!(saved.contains("'the': 3"));
    assert!(saved.contains("Time taken: "));
}

/// Test JSON output format
#[test]
fn test_json_format() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    fs::write(&input, SAMPLE).unwrap();

    let output = Command::cargo_bin("tally")
        .unwrap()
        .arg("count")
        .arg(&input)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(value["counts"]["the"], 3);
    assert_eq!(value["counts"]["cat"], 2);
    assert_eq!(value["stats"]["total_words"], 9);
}

/// Test statistics block
#[test]
fn test_stats_block() {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("count")
        .arg("--mode")
        .arg("parallel")
        .arg("--chunks")
        .arg("4")
        .arg("--stats")
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Count Statistics"))
        .stdout(predicate::str::contains("Total words:"));
}

/// Test configuration init, validate, and show
#[test]
fn test_config_operations() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("tally.toml");

    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("config")
        .arg("init")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();
    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("config")
        .arg("validate")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));

    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("config")
        .arg("show")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("default_chunks"));
}

/// Configured defaults drive the count command
#[test]
fn test_config_defaults_apply() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("tally.toml");
    fs::write(&config_path, "default_mode = \"parallel\"\ndefault_chunks = 2\n").unwrap();

    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("count")
        .arg("--config")
        .arg(&config_path)
        .arg("--stats")
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("'the': 3"))
        .stdout(predicate::str::contains("parallel"));
}

/// A config file with an invalid chunk default is rejected
#[test]
fn test_invalid_config_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("tally.toml");
    fs::write(&config_path, "default_chunks = 0\n").unwrap();

    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("count")
        .arg("--config")
        .arg(&config_path)
        .write_stdin(SAMPLE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("default_chunks"));
}
