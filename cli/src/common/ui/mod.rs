//! # ChatRS UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!

//! ## Overview
//!
//! Terminal rendering for the chat transcript: timestamped speaker lines and
//! the transient "Thinking..." indicator shown while the bot "types".
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chatrs::common::ui;
//!
//! let line = ui::transcript_line(&ui::timestamp(), "Rusty", "Hello!");
//! println!("{}", line); // [14:02] Rusty: Hello!
//! ```
//!
use chrono::Local;

/// Placeholder text shown while the reply is "being typed".
pub const THINKING: &str = "Thinking...";

/// Carriage return plus ANSI "erase line", used to replace the indicator.
pub const CLEAR_LINE: &str = "\r\x1b[2K";

/// Local wall-clock time as `HH:MM`.
pub fn timestamp() -> String {
    Local::now().format("%H:%M").to_string()
}

/// # Transcript Line (`transcript_line`)
///
/// Formats one message of the visible transcript, e.g. `[09:41] You: hi`.
pub fn transcript_line(time: &str, speaker: &str, text: &str) -> String {
    format!("[{}] {}: {}", time, speaker, text)
}

/// The indicator line drawn (without newline) before the reply arrives.
pub fn thinking_line(speaker: &str) -> String {
    format!("{}: {}", speaker, THINKING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_transcript_line() {
        assert_eq!(transcript_line("09:41", "You", "hi"), "[09:41] You: hi");
    }

    #[test]
    fn formats_thinking_line() {
        assert_eq!(thinking_line("Rusty"), "Rusty: Thinking...");
    }

    #[test]
    fn timestamp_is_hours_and_minutes() {
        let ts = timestamp();
        assert_eq!(ts.len(), 5);
        assert_eq!(ts.as_bytes()[2], b':');
    }
}
