//! # Input Normalization
//!
//! File: cli/src/matcher/normalize.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns raw user text into the canonical form that prompt triggers are
//! written in. The pipeline is:
//!
//! 1. Lowercase.
//! 2. Strip everything that is neither a word character nor whitespace.
//! 3. Strip digits (so `hi1` still reads as `hi`).
//! 4. Split into words, which also trims and collapses whitespace.
//! 5. Apply the phrase rewrites in order, repeating the whole list until
//!    nothing changes.
//!
//! Step 5 runs to a fixed point, so `normalize(normalize(x)) == normalize(x)`.
//!
//! ## Rewrites
//!
//! | Phrase   | Becomes   | Only when                                |
//! |----------|-----------|------------------------------------------|
//! | `a`      | (dropped) | it sits between two other words          |
//! | `i feel` | (dropped) | another word follows                     |
//! | `whats`  | `what is` | always                                   |
//! | `please` | (dropped) | other words remain                       |
//! | `r u`    | `are you` | always                                   |
//!
//! ```text
//! "Tell me a story, please!"  -> "tell me story"
//! "What's up?"                -> "what is up"
//! "r u human??"               -> "are you human"
//! ```
//!
use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is not a word character or whitespace.
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("static pattern is valid"));

/// Decimal digits (word characters, so they survive `NON_WORD`).
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("static pattern is valid"));

/// Where in the word list a rewrite is allowed to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Anywhere in the input.
    Anywhere,
    /// Only with at least one word before and one word after the phrase.
    Interior,
    /// Only when at least one word follows the phrase.
    BeforeWord,
    /// Only when the phrase is not the whole input.
    NotAlone,
}

/// A single phrase substitution over whole words.
#[derive(Debug)]
struct Rewrite {
    from: &'static [&'static str],
    to: &'static [&'static str],
    scope: Scope,
}

/// The fixed, ordered substitution list.
const REWRITES: &[Rewrite] = &[
    // "tell me a story" -> "tell me story"
    Rewrite {
        from: &["a"],
        to: &[],
        scope: Scope::Interior,
    },
    Rewrite {
        from: &["i", "feel"],
        to: &[],
        scope: Scope::BeforeWord,
    },
    Rewrite {
        from: &["whats"],
        to: &["what", "is"],
        scope: Scope::Anywhere,
    },
    Rewrite {
        from: &["please"],
        to: &[],
        scope: Scope::NotAlone,
    },
    Rewrite {
        from: &["r", "u"],
        to: &["are", "you"],
        scope: Scope::Anywhere,
    },
];

/// # Normalize Input (`normalize`)
///
/// Produces the canonical form of `input` used for exact trigger matching and
/// for fallback keyword checks. Never fails; input made only of punctuation,
/// digits or whitespace normalizes to the empty string.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let without_punctuation = NON_WORD.replace_all(&lowered, "");
    let without_digits = DIGITS.replace_all(&without_punctuation, "");

    let mut words: Vec<&str> = without_digits.split_whitespace().collect();

    // Each full pass either shortens the list or consumes a "whats" / "r u"
    // phrase, so this terminates.
    loop {
        let rewritten = REWRITES
            .iter()
            .fold(words.clone(), |acc, rewrite| apply(rewrite, &acc));
        if rewritten == words {
            break;
        }
        words = rewritten;
    }

    words.join(" ")
}

/// Applies one rewrite left to right over `words`, without overlapping matches.
fn apply<'a>(rewrite: &Rewrite, words: &[&'a str]) -> Vec<&'a str> {
    let len = rewrite.from.len();
    let total = words.len();
    let mut out = Vec::with_capacity(total);
    let mut i = 0;

    while i < total {
        let fits = i + len <= total && words[i..i + len] == *rewrite.from;
        let allowed = match rewrite.scope {
            Scope::Anywhere => true,
            Scope::Interior => i > 0 && i + len < total,
            Scope::BeforeWord => i + len < total,
            // Something must survive: an earlier kept word or a later one.
            Scope::NotAlone => !(out.is_empty() && i + len == total),
        };

        if fits && allowed {
            out.extend_from_slice(rewrite.to);
            i += len;
        } else {
            out.push(words[i]);
            i += 1;
        }
    }

    out
}
