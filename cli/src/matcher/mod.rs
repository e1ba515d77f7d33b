//! # ChatRS Matcher
//!
//! File: cli/src/matcher/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The matcher is the one piece of real logic in ChatRS: given raw user text,
//! it produces exactly one reply string. It never fails.
//!
//! ## Architecture
//!
//! - `normalize`: canonicalizes input (case, punctuation, digits, phrase rewrites).
//! - `table`: the immutable data model and the table file loader.
//! - `builtin`: the compiled-in prompts, fallbacks and default replies.
//!
//! Lookup order for a normalized input:
//! 1. The first prompt group containing it exactly; reply drawn from that group.
//! 2. The first fallback category whose pattern matches (gratitude, then virus).
//! 3. A random reply from the default group.
//!
//! ## Examples
//!
//! ```
//! use chatrs::matcher::{MatchKind, Matcher};
//!
//! let matcher = Matcher::builtin();
//! let reply = matcher.respond("Thank you so much!");
//! assert_eq!(reply.text, "You're welcome!");
//! assert_eq!(reply.kind, MatchKind::Fallback { category: "gratitude".into() });
//! ```
//!
use crate::core::error::{ChatrsError, Result};
use anyhow::anyhow;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use tracing::debug;

pub mod builtin;
pub mod normalize;
pub mod table;

pub use normalize::normalize;
pub use table::{FallbackCategory, PromptEntry, PromptGroup, PromptTable, ReplyGroup};

/// Which route produced a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum MatchKind {
    /// Exact match in the prompt table (zero-based entry index).
    Prompt { group: usize },
    /// A keyword fallback category matched.
    Fallback { category: String },
    /// Nothing matched; reply drawn from the default group.
    Default,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Prompt { group } => write!(f, "prompt #{}", group + 1),
            MatchKind::Fallback { category } => write!(f, "fallback {}", category),
            MatchKind::Default => write!(f, "default"),
        }
    }
}

/// A chosen reply together with how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub kind: MatchKind,
    /// The normalized form of the input that was matched.
    pub normalized: String,
}

/// Prompt table, fallbacks and default replies. Immutable once built.
#[derive(Debug, Clone)]
pub struct Matcher {
    table: PromptTable,
    fallbacks: Vec<FallbackCategory>,
    default: ReplyGroup,
}

impl Matcher {
    /// Assembles a matcher. Fallbacks are checked in the given order.
    pub fn new(table: PromptTable, fallbacks: Vec<FallbackCategory>, default: ReplyGroup) -> Self {
        Self {
            table,
            fallbacks,
            default,
        }
    }

    /// The matcher with the compiled-in conversation tables.
    pub fn builtin() -> Self {
        Self::new(
            builtin::prompt_table(),
            builtin::fallbacks(),
            builtin::default_replies(),
        )
    }

    /// # Reply (`reply`)
    ///
    /// Returns exactly one reply for `input`, using the thread-local RNG.
    pub fn reply(&self, input: &str) -> String {
        self.respond(input).text
    }

    /// # Try Reply (`try_reply`)
    ///
    /// The caller-side guard: rejects empty or whitespace-only input with
    /// `ChatrsError::EmptyInput` instead of sending it to the matcher.
    pub fn try_reply(&self, input: &str) -> Result<String> {
        if input.trim().is_empty() {
            return Err(anyhow!(ChatrsError::EmptyInput));
        }
        Ok(self.reply(input))
    }

    /// Like `reply`, but also reports the route and the normalized input.
    pub fn respond(&self, input: &str) -> Reply {
        self.respond_with(input, &mut rand::thread_rng())
    }

    /// # Respond With RNG (`respond_with`)
    ///
    /// Full lookup with a caller-supplied RNG, so tests can seed it.
    pub fn respond_with<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> Reply {
        let normalized = normalize(input);

        let (text, kind) = if let Some((group, entry)) = self.table.find(&normalized) {
            (entry.replies.choose(rng), MatchKind::Prompt { group })
        } else if let Some(category) = self.fallbacks.iter().find(|c| c.is_match(&normalized)) {
            (
                category.replies().choose(rng),
                MatchKind::Fallback {
                    category: category.name().to_string(),
                },
            )
        } else {
            (self.default.choose(rng), MatchKind::Default)
        };

        debug!("Matched {:?} via {} -> {:?}", normalized, kind, text);
        Reply {
            text: text.to_string(),
            kind,
            normalized,
        }
    }

    pub fn table(&self) -> &PromptTable {
        &self.table
    }

    pub fn fallbacks(&self) -> &[FallbackCategory] {
        &self.fallbacks
    }

    pub fn default_replies(&self) -> &ReplyGroup {
        &self.default
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn prompt_match_reports_group_and_reply_from_that_group() {
        let matcher = Matcher::builtin();
        let reply = matcher.respond_with("Hello!", &mut rng());
        assert_eq!(reply.kind, MatchKind::Prompt { group: 0 });
        assert_eq!(reply.normalized, "hello");
        assert!(matcher.table().entries()[0].replies.contains(&reply.text));
    }

    #[test]
    fn table_match_wins_over_fallback() {
        let matcher = Matcher::new(
            PromptTable::new(vec![PromptEntry {
                prompts: PromptGroup::new(["covid"]),
                replies: ReplyGroup::from_static(&["table"]),
            }]),
            builtin::fallbacks(),
            builtin::default_replies(),
        );
        assert_eq!(matcher.reply("COVID"), "table");
        assert_eq!(
            matcher.respond("covid news").kind,
            MatchKind::Fallback {
                category: builtin::VIRUS.into()
            }
        );
    }

    #[test]
    fn gratitude_outranks_virus() {
        let reply = Matcher::builtin().respond("thanks for the covid update");
        assert_eq!(
            reply.kind,
            MatchKind::Fallback {
                category: builtin::GRATITUDE.into()
            }
        );
    }

    #[test]
    fn unmatched_input_uses_default_group() {
        let matcher = Matcher::builtin();
        let reply = matcher.respond_with("zxqv wubble", &mut rng());
        assert_eq!(reply.kind, MatchKind::Default);
        assert!(matcher.default_replies().contains(&reply.text));
    }

    #[test]
    fn try_reply_rejects_blank_input() {
        let matcher = Matcher::builtin();
        for blank in ["", "   ", "\t\n"] {
            let err = matcher.try_reply(blank).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<ChatrsError>(),
                Some(ChatrsError::EmptyInput)
            ));
        }
        assert!(matcher.try_reply("hi").is_ok());
    }

    #[test]
    fn match_kind_display_and_serialization() {
        assert_eq!(MatchKind::Prompt { group: 2 }.to_string(), "prompt #3");
        assert_eq!(
            MatchKind::Fallback {
                category: "virus".into()
            }
            .to_string(),
            "fallback virus"
        );
        assert_eq!(MatchKind::Default.to_string(), "default");

        let json = serde_json::to_value(MatchKind::Prompt { group: 1 }).unwrap();
        assert_eq!(json, serde_json::json!({"route": "prompt", "group": 1}));
        let json = serde_json::to_value(MatchKind::Default).unwrap();
        assert_eq!(json, serde_json::json!({"route": "default"}));
    }
}
