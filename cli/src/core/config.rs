//! # ChatRS Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for ChatRS, handling loading,
//! merging, validation, and access to configuration data. It supports a multi-level
//! configuration approach that combines defaults, user settings, and project-specific
//! overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.chatrs.toml` in current directory or ancestors
//!    (the search stops at a directory containing `.git`)
//! 2. User-specific `~/.config/chatrs/config.toml`
//! 3. Default values defined in the code
//!
//! Paths are `~`-expanded and the merged result is validated before use.
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! [bot]
//! name = "Rusty"
//! thinking_delay_ms = 2000
//! table = "~/bots/table.toml"
//!
//! [server]
//! port = 8000
//! host = "127.0.0.1"
//! enable_cors = true
//! static_dir = "./public"
//! ```
//!
//! Loading and using configuration:
//!
//! ```rust,ignore
//! let cfg = config::load_config()?;
//! println!("Bot name: {}", cfg.bot.name);
//! ```
//!
use crate::core::error::{ChatrsError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::net::IpAddr;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Upper bound for the artificial reply delay.
pub const MAX_THINKING_DELAY_MS: u64 = 60_000;

const PROJECT_CONFIG_FILENAME: &str = ".chatrs.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub server: ServerSection,
}

/// Settings for the bot persona and its reply table.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    /// Display name used in the transcript and the web page.
    #[serde(default = "default_bot_name")]
    pub name: String,
    /// Artificial "thinking" delay before a reply is shown, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    pub thinking_delay_ms: u64,
    /// Optional path to a TOML reply table (can use ~). Built-in table otherwise.
    #[serde(default)]
    pub table: Option<String>,
}

/// Settings for the local HTTP shell (`chatrs srv`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Kept as a string so a bad value is reported by validation, not serde.
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
    /// Optional directory of extra assets (avatars, css) (can use ~).
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            thinking_delay_ms: default_thinking_delay_ms(),
            table: None,
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            enable_cors: default_enable_cors(),
            static_dir: None,
        }
    }
}

fn default_bot_name() -> String {
    "Rusty".to_string()
}
fn default_thinking_delay_ms() -> u64 {
    2000
}
fn default_port() -> u16 {
    8000
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_enable_cors() -> bool {
    true
}

impl ServerSection {
    /// The configured host as an IP address. Validated by `load_config`.
    pub fn host_addr(&self) -> Result<IpAddr> {
        self.host.parse().map_err(|e| {
            anyhow!(ChatrsError::Config(format!(
                "Invalid server host '{}': {}",
                self.host, e
            )))
        })
    }
}

/// # Load Configuration (`load_config`)
///
/// Loads, merges, expands and validates configuration for the current
/// working directory.
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let user_config_path = ProjectDirs::from("com", "ChatRS", "chatrs")
        .map(|dirs| dirs.config_dir().join("config.toml"));
    if user_config_path.is_none() {
        warn!("Could not determine user config directory.");
    }
    load_config_in(&current_dir, user_config_path.as_deref())
}

/// Same as `load_config`, with the project search start and the user config
/// location given explicitly.
pub fn load_config_in(start_dir: &Path, user_config_path: Option<&Path>) -> Result<Config> {
    let user_config = load_user_config(user_config_path)?;
    let project_config = load_project_config(start_dir)?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config(config_path: Option<&Path>) -> Result<Option<Config>> {
    match config_path {
        Some(path) if path.is_file() => {
            info!("Loading user configuration from: {}", path.display());
            load_config_from_path(path).map(Some)
        }
        Some(path) => {
            debug!("User configuration file not found at {}", path.display());
            Ok(None)
        }
        None => Ok(None),
    }
}

fn load_project_config(start_dir: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.chatrs.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path: &Path = start_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => return None,
        }
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.bot.name = if project_cfg.bot.name != default_bot_name() {
        project_cfg.bot.name
    } else {
        user.bot.name
    };
    merged.bot.thinking_delay_ms =
        if project_cfg.bot.thinking_delay_ms != default_thinking_delay_ms() {
            project_cfg.bot.thinking_delay_ms
        } else {
            user.bot.thinking_delay_ms
        };
    merged.bot.table = project_cfg.bot.table.or(user.bot.table);
    merged.server.port = if project_cfg.server.port != default_port() {
        project_cfg.server.port
    } else {
        user.server.port
    };
    merged.server.host = if project_cfg.server.host != default_host() {
        project_cfg.server.host
    } else {
        user.server.host
    };
    merged.server.enable_cors = if project_cfg.server.enable_cors != default_enable_cors() {
        project_cfg.server.enable_cors
    } else {
        user.server.enable_cors
    };
    merged.server.static_dir = project_cfg.server.static_dir.or(user.server.static_dir);
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    debug!("Expanding paths in configuration...");
    if let Some(table) = config.bot.table.as_mut() {
        *table = shellexpand::tilde(table.as_str()).into_owned();
        debug!("Expanded table path: {}", table);
    }
    if let Some(dir) = config.server.static_dir.as_mut() {
        *dir = shellexpand::tilde(dir.as_str()).into_owned();
        debug!("Expanded static directory: {}", dir);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.bot.name.trim().is_empty() {
        return Err(anyhow!(ChatrsError::Config(
            "Bot name cannot be empty.".to_string()
        )));
    }
    if config.bot.thinking_delay_ms > MAX_THINKING_DELAY_MS {
        return Err(anyhow!(ChatrsError::Config(format!(
            "thinking_delay_ms is {} but must be at most {}.",
            config.bot.thinking_delay_ms, MAX_THINKING_DELAY_MS
        ))));
    }
    if let Some(table) = &config.bot.table {
        if !Path::new(table).is_file() {
            return Err(anyhow!(ChatrsError::Config(format!(
                "Configured reply table '{}' does not exist or is not a file.",
                table
            ))));
        }
    }
    if let Some(dir) = &config.server.static_dir {
        if !Path::new(dir).is_dir() {
            return Err(anyhow!(ChatrsError::Config(format!(
                "Configured static directory '{}' does not exist or is not a directory.",
                dir
            ))));
        }
    }
    config.server.host_addr()?;
    info!("Configuration validation successful.");
    Ok(())
}
