//! # ChatRS Table Check Command
//!
//! File: cli/src/commands/table/check.rs
//! Author: Christi Mahu
//!
//! Validates a reply table file and reports its size. Any validation problem
//! (bad TOML, empty groups, blank replies, uncompilable fallback patterns) is
//! returned as an error, so the command exits non-zero.
//!
use chatrs::core::error::Result;
use chatrs::matcher::{table, Matcher};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

/// # Check Command Arguments (`CheckArgs`)
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the reply table file (TOML).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// # Handle Check Command (`handle_check`)
pub async fn handle_check(args: CheckArgs) -> Result<()> {
    info!("Handling table check command with args: {:?}", args);
    let matcher = table::load_table_file(&args.file)?;
    println!("{}", summary(&args.file, &matcher));
    Ok(())
}

fn summary(path: &Path, matcher: &Matcher) -> String {
    format!(
        "✅ Table '{}' is valid: {} prompt entries, {} fallbacks, {} default replies.",
        path.display(),
        matcher.table().len(),
        matcher.fallbacks().len(),
        matcher.default_replies().len()
    )
}
