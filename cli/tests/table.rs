//! # ChatRS CLI Table Integration Tests
//!
//! File: cli/tests/table.rs
//! Author: Christi Mahu
//!
//! Integration tests for `chatrs table list` and `chatrs table check`.
//!
mod common;

use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_table_list_builtin() {
    let dir = tempdir().unwrap();
    chatrs_in(dir.path())
        .args(["table", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prompt table (18 entries):"))
        .stdout(predicate::str::contains("gratitude"))
        .stdout(predicate::str::contains("Default replies: 6"));
}

#[test]
fn test_table_list_custom() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("table.toml");
    fs::write(&table, PING_TABLE).unwrap();

    chatrs_in(dir.path())
        .args(["t", "list", "--table", table.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prompt table (1 entry):"))
        .stdout(predicate::str::contains("#1   ping  -> 1 reply"))
        .stdout(predicate::str::contains("Default replies: 1"));
}

#[test]
fn test_table_check_valid() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("table.toml");
    fs::write(&table, PING_TABLE).unwrap();

    chatrs_in(dir.path())
        .args(["table", "check", table.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "is valid: 1 prompt entries, 2 fallbacks, 1 default replies.",
        ));
}

#[test]
fn test_table_check_invalid() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("bad.toml");
    fs::write(
        &table,
        "[[prompts]]\ntriggers = [\"hi\"]\nreplies = [\"hey\"]\n\n[[fallbacks]]\nname = \"broken\"\npattern = \"(unclosed\"\nreplies = [\"x\"]\n",
    )
    .unwrap();

    chatrs_in(dir.path())
        .args(["table", "check", table.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_table_check_missing_file() {
    let dir = tempdir().unwrap();
    chatrs_in(dir.path())
        .args(["table", "check", "nope.toml"])
        .assert()
        .failure();
}
