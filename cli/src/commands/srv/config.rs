//! # ChatRS HTTP Server Configuration
//!
//! File: cli/src/commands/srv/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module merges the settings for the chat widget server. It combines:
//! 1. Command-line arguments (highest priority, when explicitly set)
//! 2. The `[server]` section of the loaded configuration (`.chatrs.toml` or user config)
//! 3. Default values (lowest priority)
//!
//! ## Architecture
//!
//! 1. Parse command-line arguments
//! 2. Take the `[server]` section from the already loaded `Config`
//! 3. Merge settings (CLI args override config values only if they differ from CLI defaults)
//! 4. Validate and resolve the optional static asset directory
//! 5. Produce a unified `ServerConfig`
//!
//! ## Examples
//!
//! ```toml
//! [server]
//! port = 9000
//! host = "0.0.0.0"
//! enable_cors = false
//! static_dir = "public"
//! ```
//!
use crate::commands::BotArgs;
use anyhow::Context;
use chatrs::core::config::ServerSection;
use chatrs::core::error::Result;
use clap::Parser;
use std::net::IpAddr;
use std::{env, path::PathBuf};
use tracing::debug;

/// # Server Command Arguments (`SrvArgs`)
///
/// Defines the command-line arguments accepted by `chatrs srv`.
#[derive(Parser, Debug)]
pub struct SrvArgs {
    /// Sets the network port the server will listen on.
    /// Defaults to port `8000`.
    #[arg(long, short, default_value_t = 8000)]
    pub port: u16,

    /// Sets the network IP address the server will bind to.
    /// Use `0.0.0.0` to accept connections from other machines.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Disables Cross-Origin Resource Sharing (CORS) headers.
    #[arg(long)]
    pub no_cors: bool,

    /// Directory of extra assets (avatars, stylesheets) served next to the widget.
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Thinking delay the widget shows before each reply, in milliseconds.
    #[arg(long = "delay-ms", value_name = "MS")]
    pub delay_ms: Option<u64>,

    #[command(flatten)]
    pub bot: BotArgs,
}

/// # Effective Server Configuration (`ServerConfig`)
///
/// Final, validated settings the server logic uses.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// The network port the server will listen on.
    pub port: u16,

    /// The network IP address the server will bind to.
    pub host: IpAddr,

    /// Indicates whether CORS headers should be enabled.
    pub enable_cors: bool,

    /// Resolved, absolute directory of extra assets, if any.
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
            enable_cors: true,
            static_dir: None,
        }
    }
}

/// # Merge Server Configuration (`merge_config`)
///
/// Combines `args` with the `[server]` section of the loaded configuration.
///
/// ## Process:
/// 1. Start from the configuration section.
/// 2. Port and host from the command line win only if they differ from the
///    CLI defaults (meaning the user explicitly set them).
/// 3. `--no-cors` always disables CORS.
/// 4. `--static-dir` replaces the configured directory.
/// 5. Resolve the static directory to a canonical path and validate it.
///
/// ## Errors
///
/// Returns an error if the configured host is not an IP address, or the
/// static directory does not exist or is not a directory.
pub async fn merge_config(args: &SrvArgs, section: &ServerSection) -> Result<ServerConfig> {
    let cli_defaults = SrvArgs::parse_from(["srv"]); // Get defaults for comparison

    let mut effective = ServerConfig {
        port: section.port,
        host: section.host_addr()?,
        enable_cors: section.enable_cors,
        static_dir: section.static_dir.as_ref().map(PathBuf::from),
    };

    if args.port != cli_defaults.port {
        effective.port = args.port;
    }
    if args.host != cli_defaults.host {
        effective.host = args.host;
    }
    if args.no_cors {
        effective.enable_cors = false;
    }
    if let Some(dir) = &args.static_dir {
        effective.static_dir = Some(dir.clone());
    }

    effective.resolve_static_dir().await?;
    debug!("Merged server configuration: {:?}", effective);
    Ok(effective)
}

impl ServerConfig {
    /// # Resolve and Validate Static Directory (`resolve_static_dir`)
    ///
    /// Makes the optional asset directory absolute and canonical, and checks
    /// that it is a directory. Does nothing when no directory is configured.
    async fn resolve_static_dir(&mut self) -> Result<()> {
        let Some(dir_path) = &self.static_dir else {
            return Ok(());
        };

        let absolute_path = if dir_path.is_absolute() {
            dir_path.clone()
        } else {
            env::current_dir()
                .context("Failed to get current working directory")?
                .join(dir_path)
        };

        let canonical_path = tokio::fs::canonicalize(&absolute_path)
            .await
            .with_context(|| {
                format!(
                    "Directory '{}' could not be found or accessed",
                    absolute_path.display()
                )
            })?;
        let metadata = tokio::fs::metadata(&canonical_path)
            .await
            .with_context(|| format!("Failed to get metadata for path '{}'", canonical_path.display()))?;
        if !metadata.is_dir() {
            anyhow::bail!("Path is not a directory: {}", canonical_path.display());
        }

        debug!("Resolved static directory to: {}", canonical_path.display());
        self.static_dir = Some(canonical_path);
        Ok(())
    }
}
