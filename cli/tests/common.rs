//! # ChatRS CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test crates in `cli/tests/`. Every
//! command built here runs inside a scratch directory with its own `HOME` and
//! `XDG_CONFIG_HOME`, so a developer's real `.chatrs.toml` or user config never
//! leaks into test results.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get ChatRS Command (`chatrs_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `chatrs` binary.
///
/// ## Panics
/// Panics if the `chatrs` binary cannot be found via `Command::cargo_bin`.
pub fn chatrs_cmd() -> Command {
    Command::cargo_bin("chatrs").expect("Failed to find chatrs binary for testing")
}

/// # Get Isolated ChatRS Command (`chatrs_in`)
///
/// Like `chatrs_cmd`, but runs in `dir` with configuration lookups confined to it.
pub fn chatrs_in(dir: &Path) -> Command {
    let mut cmd = chatrs_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("CHATRS_TABLE")
        .env_remove("RUST_LOG");
    cmd
}

/// A small, valid reply table used by several tests.
pub const PING_TABLE: &str = r#"
default = ["..."]

[[prompts]]
triggers = ["ping"]
replies = ["pong"]
"#;
