//! Integration tests for the htmldown binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_htmldown"))
}

#[test]
fn test_basic_stdin() {
    cli()
        .write_stdin("<h1>Title</h1><p>Content</p>")
        .assert()
        .success()
        .stdout("# Title\n\n\nContent\n\n\n\n");
}

#[test]
fn test_file_input() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.html");
    fs::write(&input_path, "<p>Test content</p>").unwrap();

    cli()
        .arg(input_path.to_str().unwrap())
        .assert()
        .success()
        .stdout("Test content\n\n\n");
}

#[test]
fn test_file_output() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output.md");

    cli()
        .arg("-o")
        .arg(output_path.to_str().unwrap())
        .write_stdin("<em>Output test</em>")
        .assert()
        .success()
        .stdout("");

    let output = fs::read_to_string(&output_path).unwrap();
    assert_eq!(output, "_Output test_\n");
}

#[test]
fn test_dash_reads_stdin() {
    cli()
        .arg("-")
        .write_stdin("<b>Dash test</b>")
        .assert()
        .success()
        .stdout("**Dash test**\n");
}

#[test]
fn test_script_flag() {
    cli()
        .arg("--script")
        .write_stdin("<script>alert(1)</script>")
        .assert()
        .success()
        .stdout(predicate::str::contains("<script>alert(1)</script>"));

    cli()
        .write_stdin("<script>alert(1)</script>")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_trim_space_flag() {
    cli()
        .arg("--trim-space")
        .write_stdin("<div><span>a</span> <span>b</span></div>")
        .assert()
        .success()
        .stdout("ab\n\n");
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.html");

    cli()
        .arg(missing.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}

#[test]
fn test_max_depth_flag() {
    cli()
        .args(["--max-depth", "3"])
        .write_stdin("<div><div><div><p>deep</p></div></div></div>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nesting exceeds 3 levels"));
}

#[test]
fn test_failed_conversion_keeps_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output.md");
    fs::write(&output_path, "previous\n").unwrap();

    cli()
        .args(["--max-depth", "3"])
        .arg("-o")
        .arg(output_path.to_str().unwrap())
        .write_stdin("<div><div><div><p>deep</p></div></div></div>")
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&output_path).unwrap(), "previous\n");
}
