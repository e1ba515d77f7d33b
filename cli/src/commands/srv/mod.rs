//! # ChatRS Chat Widget Server
//!
//! File: cli/src/commands/srv/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module provides a lightweight local HTTP shell around the matcher.
//! It serves the embedded chat widget page and a small JSON API the page talks
//! to, with configurable options for:
//! - CORS (Cross-Origin Resource Sharing)
//! - Port binding (with automatic fallback if port is in use)
//! - Host interface binding
//! - An extra asset directory (avatars, stylesheets)
//!
//! ## Architecture
//!
//! - `config.rs`: Argument parsing and merging with the `[server]` config section
//! - `api.rs`: Widget page, settings and reply endpoints
//! - `server_logic.rs`: Axum server, middleware and shutdown handling
//! - `utils.rs`: Helpers for the startup banner
//!
//! ## Examples
//!
//! ```bash
//! # Serve the widget on the default port
//! chatrs srv
//!
//! # Listen on all interfaces with a custom table and no thinking delay
//! chatrs srv --host 0.0.0.0 --port 9000 --table ./bots/table.toml --delay-ms 0
//!
//! # Serve extra assets next to the widget
//! chatrs srv --static-dir ./public
//! ```
//!
use chatrs::core::config::load_config;
use chatrs::core::error::Result;
use tracing::info;

pub use config::SrvArgs;

/// Widget page and JSON endpoints.
pub mod api;
/// Handles argument merging for the widget server.
pub mod config;
/// Contains the Axum-based HTTP server implementation.
pub mod server_logic;
/// Startup banner helpers.
pub mod utils;

/// # Handle Server Command (`handle_srv`)
///
/// 1. Loads the layered configuration once.
/// 2. Resolves the bot profile (table, name, thinking delay) from it.
/// 3. Merges the `[server]` section with the command-line flags.
/// 4. Runs the server until shutdown.
pub async fn handle_srv(args: SrvArgs) -> Result<()> {
    info!("Handling srv command with args: {:?}", args);

    let loaded = load_config()?;
    let profile = args.bot.profile_from(&loaded, args.delay_ms)?;
    let server = config::merge_config(&args, &loaded.server).await?;
    info!("Effective server config: {:?}", server);

    server_logic::run_server(server, api::AppState::from(profile)).await?;
    Ok(())
}
