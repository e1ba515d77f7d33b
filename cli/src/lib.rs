//! # ChatRS Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Library half of the `chatrs` crate. It holds everything that is useful
//! outside the command-line shell:
//! - `matcher`: normalization, reply tables and the lookup itself
//! - `core`: errors, configuration and the resolved bot profile
//! - `common`: shared terminal UI helpers
//!
//! The binary (`main.rs`) adds the `commands` on top of this library, and the
//! integration tests in `tests/` use it directly.
//!
pub mod common;
pub mod core;
pub mod matcher;
