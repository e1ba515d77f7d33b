//! # ChatRS Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates all top-level commands that comprise the ChatRS CLI
//! and the argument group they share for choosing and naming the bot.
//!
//! ## Command Groups
//!
//! - `chat`: Interactive chat session in the terminal
//! - `ask`: One-shot reply for a single message
//! - `table`: Inspect the active reply table or validate a table file
//! - `srv`: Local HTTP shell serving the chat widget page and reply API
//!
//! Each command defines its own arguments structure and handler function.
//!
use chatrs::core::bot::{self, BotProfile, ProfileOverrides};
use chatrs::core::config::{self, Config};
use chatrs::core::error::Result;
use clap::Args;
use std::path::PathBuf;

/// One-shot reply for a single message (`chatrs ask`).
pub mod ask;
/// Interactive terminal chat session (`chatrs chat`).
pub mod chat;
/// Local HTTP shell for the chat widget (`chatrs srv`).
pub mod srv;
/// Reply table inspection and validation (`chatrs table list|check`).
pub mod table;

/// # Bot Selection Arguments (`BotArgs`)
///
/// Flattened into every command that talks as the bot. Values given here take
/// precedence over `.chatrs.toml` and the user configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct BotArgs {
    /// Reply table file (TOML) to use instead of the configured or built-in table.
    #[arg(long, value_name = "FILE", env = "CHATRS_TABLE")]
    pub table: Option<PathBuf>,

    /// Display name of the bot.
    #[arg(long)]
    pub name: Option<String>,
}

impl BotArgs {
    /// Loads the configuration and resolves the bot profile from it.
    pub fn load_profile(&self, thinking_delay_ms: Option<u64>) -> Result<BotProfile> {
        let config = config::load_config()?;
        self.profile_from(&config, thinking_delay_ms)
    }

    /// Resolves the bot profile from an already loaded configuration.
    pub fn profile_from(&self, config: &Config, thinking_delay_ms: Option<u64>) -> Result<BotProfile> {
        let overrides = ProfileOverrides {
            table: self.table.clone(),
            name: self.name.clone(),
            thinking_delay_ms,
        };
        bot::load_profile(config, &overrides)
    }
}
