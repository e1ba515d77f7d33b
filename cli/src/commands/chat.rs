//! # ChatRS Chat Session
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `chatrs chat`, a read-reply loop that behaves like the chat
//! widget it replaces:
//! - Blank lines are ignored, just as the widget ignores an empty submit.
//! - `bye` (any case, punctuation ignored) ends the session with a goodbye.
//! - After each message the bot shows `Thinking...` for the configured delay
//!   and then replaces it with its reply.
//! - End of input (Ctrl+D, or the end of a piped file) ends the session.
//!
//! On an interactive terminal the user's own typing is the transcript line, so
//! only a `You: ` prompt is printed. When input is piped in, each message is
//! echoed as a timestamped transcript line instead and no indicator is drawn.
//!
//! ## Examples
//!
//! ```bash
//! # Chat with the built-in bot
//! chatrs chat
//!
//! # Use a custom table and reply instantly
//! chatrs chat --table ./table.toml --delay-ms 0
//!
//! # Scripted session
//! printf 'hello\nthank you\nbye\n' | chatrs chat --delay-ms 0
//! ```
//!
use crate::commands::BotArgs;
use anyhow::Context;
use chatrs::common::ui;
use chatrs::core::bot::BotProfile;
use chatrs::core::error::Result;
use chatrs::matcher::normalize;
use clap::Parser;
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// The word that ends a session, compared case-insensitively.
const EXIT_WORD: &str = "bye";
const USER_LABEL: &str = "You";

/// # Chat Command Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    #[command(flatten)]
    pub bot: BotArgs,

    /// Thinking delay before each reply, in milliseconds (0 replies instantly).
    #[arg(long = "delay-ms", value_name = "MS")]
    pub delay_ms: Option<u64>,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Resolves the bot profile and runs a session over stdin/stdout.
pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);
    let profile = args.bot.load_profile(args.delay_ms)?;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let interactive = std::io::stdin().is_terminal() && stdout.is_terminal();

    let exchanges = run_session(&profile, stdin, &mut stdout, interactive).await?;
    info!("Chat session ended after {} exchanges.", exchanges);
    Ok(())
}

/// # Run Session (`run_session`)
///
/// Drives one conversation from `input` to `out`. Returns how many messages
/// the bot answered (the goodbye is not counted).
///
/// ## Errors
///
/// Fails only on I/O errors reading input or writing output.
pub async fn run_session<R, W>(
    profile: &BotProfile,
    input: R,
    out: &mut W,
    interactive: bool,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(
        out,
        "Chat with {}! Type '{}' to quit.",
        profile.name, EXIT_WORD
    )?;

    let mut lines = input.lines();
    let mut exchanges = 0;

    loop {
        if interactive {
            write!(out, "{}: ", USER_LABEL)?;
            out.flush()?;
        }

        let line = match lines.next_line().await.context("Failed to read input")? {
            Some(line) => line,
            None => {
                debug!("Input closed, ending session.");
                if interactive {
                    writeln!(out)?;
                }
                break;
            }
        };

        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        if !interactive {
            writeln!(out, "{}", ui::transcript_line(&ui::timestamp(), USER_LABEL, text))?;
        }

        if normalize(text) == EXIT_WORD {
            writeln!(
                out,
                "{}",
                ui::transcript_line(&ui::timestamp(), &profile.name, "Goodbye!")
            )?;
            break;
        }

        // Pick the reply first; the delay is purely cosmetic.
        let reply = profile.matcher.reply(text);
        think(profile, out, interactive).await?;
        writeln!(
            out,
            "{}",
            ui::transcript_line(&ui::timestamp(), &profile.name, &reply)
        )?;
        out.flush()?;
        exchanges += 1;
    }

    Ok(exchanges)
}

/// Shows the indicator (interactive only) for the profile's delay, then clears it.
async fn think<W: Write>(profile: &BotProfile, out: &mut W, interactive: bool) -> Result<()> {
    if profile.thinking_delay.is_zero() {
        return Ok(());
    }
    if interactive {
        write!(out, "{}", ui::thinking_line(&profile.name))?;
        out.flush()?;
    }
    tokio::time::sleep(profile.thinking_delay).await;
    if interactive {
        write!(out, "{}", ui::CLEAR_LINE)?;
    }
    Ok(())
}
