//! # ChatRS HTTP Server Implementation
//!
//! File: cli/src/commands/srv/server_logic.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Runs the widget server for `chatrs srv`:
//! - Widget page and reply API (see `api.rs`)
//! - Optional directory of extra assets served for every other path
//! - Port availability checking with automatic fallback
//! - CORS configuration
//! - Graceful shutdown handling
//!
//! ## Architecture
//!
//! 1. Build the Axum router with the API routes and middleware
//! 2. Find an available port if the requested one is in use
//! 3. Start the server with graceful shutdown handlers
//! 4. Display connection information (URLs, bot name, etc.)
//!
use super::api::{self, AppState};
use super::config::ServerConfig;
use super::utils;
use anyhow::Context;
use axum::Router;
use chatrs::core::error::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

const MAX_PORT_ATTEMPTS: u8 = 10;

/// # Run HTTP Server (`run_server`)
///
/// Binds the first free port starting at `config.port`, prints the startup
/// banner, and serves the widget until Ctrl+C or SIGTERM.
///
/// ## Errors
///
/// Fails when no port is free within the allowed attempts, the listener cannot
/// be bound, or the server stops with an error.
pub async fn run_server(config: ServerConfig, state: AppState) -> Result<()> {
    let addr = find_available_port(config.host, config.port, MAX_PORT_ATTEMPTS).await?;

    if let Some(dir) = &config.static_dir {
        utils::log_directory_contents(dir);
    }
    let local_ip = utils::get_local_ip();

    let bot_name = state.bot_name.clone();
    let delay_ms = state.thinking_delay_ms;
    let app = create_app(&config, Arc::new(state));

    println!("\n=================================================================");
    println!("🤖 Chatting as:       {}", bot_name);
    println!("🌐 Local URL:         http://localhost:{}", addr.port());
    if local_ip != "localhost" {
        println!("🔗 Network URL:       http://{}:{}", local_ip, addr.port());
    }
    println!("⚙️  Binding to address: {}", addr);
    println!("⏳ Thinking delay:    {} ms", delay_ms);
    if let Some(dir) = &config.static_dir {
        println!("📂 Extra assets:      {}", dir.display());
    }
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("=================================================================\n");

    info!("Starting chat widget server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// # Handle Shutdown Signal (`shutdown_signal`)
///
/// Resolves when Ctrl+C (or SIGTERM on Unix) is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Find Available Port (`find_available_port`)
///
/// Tries `start_port` and the following ports, up to `max_attempts` in total,
/// and returns the first address a listener can bind to.
async fn find_available_port(
    req_host: std::net::IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<SocketAddr> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(req_host, current_port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, using available port {}.",
                        start_port, current_port
                    );
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    req_host,
                    e
                );
                current_port = match current_port.checked_add(1) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
    }

    anyhow::bail!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        req_host,
        start_port,
        max_attempts
    )
}

/// # Create Axum Application (`create_app`)
///
/// API routes first; anything else falls through to the extra asset directory
/// when one is configured. Tracing and CORS wrap the whole router.
fn create_app(config: &ServerConfig, state: Arc<AppState>) -> Router {
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let mut app = api::routes(state);
    if let Some(dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(ServiceBuilder::new().layer(trace_layer).layer(cors_layer))
}
