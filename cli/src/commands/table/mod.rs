//! # ChatRS Table Command Group
//!
//! File: cli/src/commands/table/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Entry point and router for `chatrs table`. Subcommands:
//! - `list`: print the active reply table (prompt groups, fallbacks, default set)
//! - `check`: validate a reply table file without starting a chat
//!
//! ## Examples
//!
//! ```bash
//! # Show the built-in (or configured) table
//! chatrs table list
//!
//! # Validate a table before pointing the config at it
//! chatrs table check ./my-table.toml
//! ```
//!
use chatrs::core::error::Result;
use clap::{Parser, Subcommand};

/// Contains the handler and arguments for `chatrs table check`.
mod check;
/// Contains the handler and arguments for `chatrs table list`.
mod list;

/// # Table Command Group Arguments (`TableArgs`)
#[derive(Parser, Debug)]
pub struct TableArgs {
    #[command(subcommand)]
    command: TableCommand,
}

/// # Table Subcommands (`TableCommand`)
#[derive(Subcommand, Debug)]
enum TableCommand {
    /// Lists prompt groups, fallbacks and the default reply set of the active table.
    List(list::ListArgs),
    /// Validates a reply table file.
    Check(check::CheckArgs),
}

/// # Handle Table Command (`handle_table`)
///
/// Dispatches to the subcommand handler.
pub async fn handle_table(args: TableArgs) -> Result<()> {
    match args.command {
        TableCommand::List(args) => list::handle_list(args).await?,
        TableCommand::Check(args) => check::handle_check(args).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_table_list() {
        let result = TableArgs::try_parse_from(["table", "list"]);
        match result.unwrap().command {
            TableCommand::List(_) => {}
            _ => panic!("Incorrect subcommand parsed for 'list'"),
        }
    }

    #[test]
    fn test_parses_table_check() {
        let result = TableArgs::try_parse_from(["table", "check", "table.toml"]);
        match result.unwrap().command {
            TableCommand::Check(args) => assert_eq!(args.file.to_string_lossy(), "table.toml"),
            _ => panic!("Incorrect subcommand parsed for 'check'"),
        }
    }

    #[test]
    fn test_check_requires_file() {
        assert!(TableArgs::try_parse_from(["table", "check"]).is_err());
    }
}
