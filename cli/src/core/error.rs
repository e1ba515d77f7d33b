//! # ChatRS Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout ChatRS. The matcher
//! itself never fails (every input ends in some reply), so errors only appear
//! at the edges: loading configuration, loading a user-supplied reply table,
//! compiling fallback patterns, and rejecting empty input before it reaches
//! the matcher.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ChatrsError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if replies.is_empty() {
//!     return Err(ChatrsError::Table("reply group is empty".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read table file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the ChatRS application.
#[derive(Error, Debug)]
pub enum ChatrsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Reply table error: {0}")]
    Table(String),

    #[error("Invalid pattern for fallback '{name}': {source}")]
    Pattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Input cannot be empty.")]
    EmptyInput,
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
