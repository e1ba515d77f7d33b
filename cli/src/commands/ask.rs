//! # ChatRS Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `chatrs ask <MESSAGE>...` prints a single reply and exits, which makes the
//! bot usable from scripts. Multiple words are joined with spaces, so quoting
//! is optional. Empty input is an error (exit code 1).
//!
//! With `--explain`, the normalized input and the route that produced the
//! reply are printed before it:
//!
//! ```text
//! $ chatrs ask --explain "What's up?"
//! normalized: what is up
//! route: prompt #3
//! Nothing much.
//! ```
//!
use crate::commands::BotArgs;
use anyhow::anyhow;
use chatrs::core::error::{ChatrsError, Result};
use chatrs::matcher::Matcher;
use clap::Parser;
use tracing::info;

/// # Ask Command Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message to reply to.
    #[arg(required = true, num_args = 1.., value_name = "MESSAGE")]
    pub message: Vec<String>,

    /// Also print the normalized input and the matching route.
    #[arg(long)]
    pub explain: bool,

    #[command(flatten)]
    pub bot: BotArgs,
}

/// # Handle Ask Command (`handle_ask`)
pub async fn handle_ask(args: AskArgs) -> Result<()> {
    info!("Handling ask command with args: {:?}", args);
    let message = args.message.join(" ");
    // Reject empty input before touching config or tables.
    if message.trim().is_empty() {
        return Err(anyhow!(ChatrsError::EmptyInput));
    }

    let profile = args.bot.load_profile(None)?;
    println!("{}", answer(&profile.matcher, &message, args.explain)?);
    Ok(())
}

/// Renders the command's output for `message`.
fn answer(matcher: &Matcher, message: &str, explain: bool) -> Result<String> {
    if !explain {
        return matcher.try_reply(message);
    }
    if message.trim().is_empty() {
        return Err(anyhow!(ChatrsError::EmptyInput));
    }
    let reply = matcher.respond(message);
    Ok(format!(
        "normalized: {}\nroute: {}\n{}",
        reply.normalized, reply.kind, reply.text
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_multi_word_message() {
        let args = AskArgs::try_parse_from(["ask", "how", "are", "you", "--explain"]).unwrap();
        assert_eq!(args.message.join(" "), "how are you");
        assert!(args.explain);
    }

    #[test]
    fn test_requires_message() {
        assert!(AskArgs::try_parse_from(["ask"]).is_err());
    }

    #[test]
    fn test_answer_plain() {
        let out = answer(&Matcher::builtin(), "Thanks a lot", false).unwrap();
        assert_eq!(out, "You're welcome!");
    }

    #[test]
    fn test_answer_explain() {
        let out = answer(&Matcher::builtin(), "how old are you?", true).unwrap();
        assert_eq!(out, "normalized: how old are you\nroute: prompt #4\nI am infinite.");
    }

    #[test]
    fn test_answer_rejects_blank() {
        for explain in [false, true] {
            let err = answer(&Matcher::builtin(), "  ", explain).unwrap_err();
            assert_eq!(err.to_string(), "Input cannot be empty.");
        }
    }
}
