//! # ChatRS Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers used by more than one command. Currently this is only the
//! terminal UI used to render the chat transcript.

/// Terminal rendering of transcript lines and the thinking indicator.
pub mod ui;
