//! # ChatRS Bot Profile
//!
//! File: cli/src/core/bot.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Resolves everything a chat surface needs (display name, thinking delay and
//! the matcher) from the loaded configuration plus command-line overrides.
//!
//! Reply table precedence:
//! 1. `--table <FILE>` / `CHATRS_TABLE`
//! 2. `bot.table` from the configuration
//! 3. The built-in table
//!
use crate::core::config::{Config, MAX_THINKING_DELAY_MS};
use crate::core::error::{ChatrsError, Result};
use crate::matcher::{table, Matcher};
use anyhow::anyhow;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Command-line values that take precedence over the configuration.
#[derive(Debug, Clone, Default)]
pub struct ProfileOverrides {
    pub table: Option<PathBuf>,
    pub name: Option<String>,
    pub thinking_delay_ms: Option<u64>,
}

/// A ready-to-use bot: who it is, how long it "thinks", and what it says.
#[derive(Debug, Clone)]
pub struct BotProfile {
    pub name: String,
    pub thinking_delay: Duration,
    pub matcher: Matcher,
}

/// # Load Profile (`load_profile`)
///
/// Combines the configuration with explicit overrides and loads the reply
/// table.
///
/// ## Errors
///
/// - An override name that is blank.
/// - An override delay above `MAX_THINKING_DELAY_MS`.
/// - A table file that cannot be read or fails validation.
pub fn load_profile(config: &Config, overrides: &ProfileOverrides) -> Result<BotProfile> {
    let name = match &overrides.name {
        Some(name) if name.trim().is_empty() => {
            return Err(anyhow!(ChatrsError::Config(
                "Bot name cannot be empty.".to_string()
            )))
        }
        Some(name) => name.trim().to_string(),
        None => config.bot.name.clone(),
    };

    let delay_ms = overrides
        .thinking_delay_ms
        .unwrap_or(config.bot.thinking_delay_ms);
    if delay_ms > MAX_THINKING_DELAY_MS {
        return Err(anyhow!(ChatrsError::Config(format!(
            "Thinking delay of {} ms exceeds the maximum of {} ms.",
            delay_ms, MAX_THINKING_DELAY_MS
        ))));
    }

    let table_path: Option<&Path> = overrides
        .table
        .as_deref()
        .or(config.bot.table.as_deref().map(Path::new));
    let matcher = match table_path {
        Some(path) => table::load_table_file(path)?,
        None => {
            info!("Using the built-in reply table.");
            Matcher::builtin()
        }
    };

    Ok(BotProfile {
        name,
        thinking_delay: Duration::from_millis(delay_ms),
        matcher,
    })
}
