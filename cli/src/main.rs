//! # ChatRS Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the ChatRS CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - Each top-level command (`chat`, `ask`, `table`, `srv`) is a variant of the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting
//! chatrs chat
//!
//! # One-shot reply with debug logging
//! chatrs -vv ask "what's up?"
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Command surfaces live in the binary; matcher, config and UI helpers come from the library.
mod commands;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "chatrs",
    about = "🦀 ChatRS 💬: A small scripted chatbot",
    long_about = "Chat with a rule-based bot that matches normalized input against a reply table,\n\
                  with keyword fallbacks and a random default reply.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Starts an interactive chat session in the terminal.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Prints a single reply for a message.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Inspects or validates reply tables.
    #[command(alias = "t")]
    Table(commands::table::TableArgs),
    /// Serves the chat widget page and reply API locally.
    #[command(alias = "s")]
    Srv(commands::srv::SrvArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
        Commands::Ask(args) => commands::ask::handle_ask(args).await,
        Commands::Table(args) => commands::table::handle_table(args).await,
        Commands::Srv(args) => commands::srv::handle_srv(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_aliases_route_to_commands() {
        let cli = Cli::try_parse_from(["chatrs", "a", "hello"]).unwrap();
        assert!(matches!(cli.command, Commands::Ask(_)));

        let cli = Cli::try_parse_from(["chatrs", "-vv", "t", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::Table(_)));
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["chatrs", "s", "--port", "9000"]).unwrap();
        match cli.command {
            Commands::Srv(args) => assert_eq!(args.port, 9000),
            _ => panic!("Incorrect command parsed for 's'"),
        }
    }
}
