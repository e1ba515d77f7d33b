//! # ChatRS Table List Command
//!
//! File: cli/src/commands/table/list.rs
//! Author: Christi Mahu
//!
//! Prints the active reply table: every prompt group with its triggers and
//! number of replies, the fallback categories in priority order, and the size
//! of the default reply set.
//!
use crate::commands::BotArgs;
use chatrs::core::error::Result;
use chatrs::matcher::Matcher;
use clap::Parser;
use std::fmt::Write;
use tracing::info;

/// # List Command Arguments (`ListArgs`)
#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub bot: BotArgs,
}

/// # Handle List Command (`handle_list`)
pub async fn handle_list(args: ListArgs) -> Result<()> {
    info!("Handling table list command with args: {:?}", args);
    let profile = args.bot.load_profile(None)?;
    print!("{}", describe(&profile.matcher));
    Ok(())
}

fn counted(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

/// Human-readable summary of a matcher's tables.
fn describe(matcher: &Matcher) -> String {
    let mut out = String::new();
    let table = matcher.table();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Prompt table ({}):", counted(table.len(), "entry", "entries"));
    for (idx, entry) in table.entries().iter().enumerate() {
        let _ = writeln!(
            out,
            "  #{:<3} {}  -> {}",
            idx + 1,
            entry.prompts.triggers().join(" | "),
            counted(entry.replies.len(), "reply", "replies")
        );
    }

    let _ = writeln!(out, "\nFallbacks (in priority order):");
    if matcher.fallbacks().is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for category in matcher.fallbacks() {
        let _ = writeln!(
            out,
            "  {:<12} /{}/  -> {}",
            category.name(),
            category.pattern(),
            counted(category.replies().len(), "reply", "replies")
        );
    }

    let _ = writeln!(
        out,
        "\nDefault replies: {}",
        matcher.default_replies().len()
    );
    out
}
