//! CLI-level tests for error paths; the interactive viewer itself needs a
//! real terminal and is exercised manually.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_file_fails_without_a_plot() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("evoplot")
        .unwrap()
        .current_dir(dir.path())
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to open score file"));
}

#[test]
fn malformed_line_fails_with_line_number() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.txt");
    std::fs::write(&path, "0 10\ngen abc\n").unwrap();

    Command::cargo_bin("evoplot")
        .unwrap()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("abc"));
}

#[test]
fn blank_line_fails_with_line_number() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.txt");
    std::fs::write(&path, "0 10\n\n2 9\n").unwrap();

    Command::cargo_bin("evoplot")
        .unwrap()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("no score field"));
}

#[test]
fn default_input_is_output_txt_in_the_working_directory() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("evoplot")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("output.txt"));
}

#[test]
fn help_describes_the_score_log() {
    Command::cargo_bin("evoplot")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("score log"));
}
