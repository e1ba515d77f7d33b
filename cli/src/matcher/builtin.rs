//! # Built-in Conversation Tables
//!
//! File: cli/src/matcher/builtin.rs
//! Author: Christi Mahu
//!
//! The canned prompts, replies and fallbacks the bot ships with. Triggers are
//! written in normalized form (see `normalize`), so they compare directly
//! against normalized input.

use super::table::{FallbackCategory, PromptEntry, PromptGroup, PromptTable, ReplyGroup};
use tracing::error;

/// Name of the fallback answering any form of "thanks".
pub const GRATITUDE: &str = "gratitude";
/// Name of the fallback answering questions about the virus.
pub const VIRUS: &str = "virus";

/// (triggers, replies), in lookup order.
const PROMPTS: &[(&[&str], &[&str])] = &[
    (
        &["hi", "hey", "hello", "good morning", "good afternoon", "good evening"],
        &["Hello!", "Hi!", "Hey!", "Hi there!", "Howdy!"],
    ),
    (
        &["how are you", "how is life", "how are things", "how is it going"],
        &[
            "Fine... how are you?",
            "Pretty well, how are you?",
            "Fantastic, how are you?",
        ],
    ),
    (
        &["what are you doing", "what is going on", "what is up", "sup"],
        &[
            "Nothing much.",
            "About to go to sleep.",
            "Can you guess?",
            "I don't know actually.",
        ],
    ),
    (&["how old are you"], &["I am infinite."]),
    (
        &["who are you", "are you human", "are you bot", "are you human or bot"],
        &["I am just a bot.", "I am a bot. What are you?"],
    ),
    (
        &["who created you", "who made you", "who built you"],
        &["A handful of crates and a lot of patience."],
    ),
    (
        &[
            "your name",
            "may i know your name",
            "what is your name",
            "what do you call yourself",
        ],
        &["I am nameless.", "I don't have a name."],
    ),
    (&["i love you"], &["I love you too.", "Me too!"]),
    (
        &["happy", "good", "fun", "wonderful", "fantastic", "cool"],
        &["Have you ever felt bad?", "Glad to hear it!"],
    ),
    (
        &["bad", "bored", "tired", "sad"],
        &["Why?", "Why? You shouldn't!", "Try watching TV."],
    ),
    (
        &["help me", "tell me story", "tell me joke"],
        &["What about?", "Once upon a time..."],
    ),
    (
        &["ah", "yes", "ok", "okay", "nice"],
        &["Tell me a story.", "Tell me a joke.", "Tell me about yourself."],
    ),
    (
        &["bye", "good bye", "goodbye", "see you later"],
        &["Bye!", "Goodbye!", "See you later!"],
    ),
    (&["what should i eat today"], &["Sushi.", "Pizza."]),
    (&["bro"], &["Bro!"]),
    (&["what", "why", "how", "where", "when"], &["Great question."]),
    (
        &["no", "not sure", "maybe"],
        &["That's ok.", "I understand.", "What do you want to talk about?"],
    ),
    (
        &["haha", "ha", "lol", "hehe", "funny", "joke"],
        &["Haha!", "Good one!"],
    ),
];

const GRATITUDE_REPLIES: &[&str] = &["You're welcome!"];

const VIRUS_REPLIES: &[&str] = &[
    "Please stay home.",
    "Wear a mask.",
    "Fortunately, I don't have COVID.",
    "These are uncertain times.",
];

const DEFAULT_REPLIES: &[&str] = &[
    "Same.",
    "Go on...",
    "Bro...",
    "Try again.",
    "I'm listening...",
    "I don't understand :/",
];

/// The built-in prompt table.
pub fn prompt_table() -> PromptTable {
    PromptTable::new(
        PROMPTS
            .iter()
            .map(|(triggers, replies)| PromptEntry {
                prompts: PromptGroup::new(triggers.iter().copied()),
                replies: ReplyGroup::from_static(replies),
            })
            .collect(),
    )
}

/// The built-in fallbacks in priority order: gratitude, then virus.
pub fn fallbacks() -> Vec<FallbackCategory> {
    [
        (GRATITUDE, "thank", GRATITUDE_REPLIES),
        (VIRUS, "corona|covid|virus", VIRUS_REPLIES),
    ]
    .into_iter()
    .filter_map(|(name, pattern, replies)| {
        match FallbackCategory::new(name, pattern, ReplyGroup::from_static(replies)) {
            Ok(category) => Some(category),
            Err(e) => {
                error!("Built-in fallback '{}' failed to compile: {:#}", name, e);
                None
            }
        }
    })
    .collect()
}

/// The built-in default replies.
pub fn default_replies() -> ReplyGroup {
    ReplyGroup::from_static(DEFAULT_REPLIES)
}
