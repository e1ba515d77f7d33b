//! # ChatRS CLI Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//! Author: Christi Mahu
//!
//! Integration tests for `chatrs ask`, including config and table selection.
//!
mod common;

use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_ask_builtin_reply() {
    let dir = tempdir().unwrap();
    chatrs_in(dir.path())
        .args(["ask", "How", "old", "are", "you?"])
        .assert()
        .success()
        .stdout("I am infinite.\n");
}

#[test]
fn test_ask_gratitude_and_virus_fallbacks() {
    let dir = tempdir().unwrap();
    chatrs_in(dir.path())
        .args(["ask", "thanks for the covid news"])
        .assert()
        .success()
        .stdout("You're welcome!\n");

    chatrs_in(dir.path())
        .args(["a", "--explain", "any news on the virus?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("route: fallback virus"));
}

#[test]
fn test_ask_explain() {
    let dir = tempdir().unwrap();
    chatrs_in(dir.path())
        .args(["ask", "--explain", "Hello!!!"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "normalized: hello\nroute: prompt #1\n",
        ));
}

#[test]
fn test_ask_empty_input_fails() {
    let dir = tempdir().unwrap();
    chatrs_in(dir.path())
        .args(["ask", "   "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Input cannot be empty."));
}

#[test]
fn test_ask_with_table_flag() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("table.toml");
    fs::write(&table, PING_TABLE).unwrap();

    chatrs_in(dir.path())
        .args(["ask", "--table", table.to_str().unwrap(), "PING!"])
        .assert()
        .success()
        .stdout("pong\n");

    // Built-in fallbacks still apply to custom tables without a [[fallbacks]] section.
    chatrs_in(dir.path())
        .args(["ask", "--table", table.to_str().unwrap(), "thank you"])
        .assert()
        .success()
        .stdout("You're welcome!\n");
}

#[test]
fn test_ask_uses_project_config_table() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("table.toml"), PING_TABLE).unwrap();
    let table_path = dir.path().join("table.toml");
    fs::write(
        dir.path().join(".chatrs.toml"),
        format!("[bot]\ntable = {:?}\n", table_path.to_str().unwrap()),
    )
    .unwrap();

    chatrs_in(dir.path())
        .args(["ask", "ping"])
        .assert()
        .success()
        .stdout("pong\n");
}

#[test]
fn test_ask_rejects_missing_table() {
    let dir = tempdir().unwrap();
    chatrs_in(dir.path())
        .args(["ask", "--table", "missing.toml", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_ask_rejects_invalid_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".chatrs.toml"), "[bot]\nmood = \"grumpy\"\n").unwrap();

    chatrs_in(dir.path())
        .args(["ask", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
