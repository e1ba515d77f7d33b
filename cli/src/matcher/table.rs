//! # Reply Table Data Model
//!
//! File: cli/src/matcher/table.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The types the matcher looks replies up in, and the loader for user-supplied
//! table files. Everything here is immutable once built.
//!
//! - `PromptGroup`: equivalent canonical triggers.
//! - `ReplyGroup`: non-empty list of candidate replies.
//! - `PromptEntry` / `PromptTable`: ordered (triggers, replies) pairs. Each
//!   entry owns both halves, so the i-th prompt group always maps to the i-th
//!   reply group.
//! - `FallbackCategory`: a named keyword pattern with its replies.
//!
//! ## Table Files
//!
//! ```toml
//! default = ["Go on...", "I'm listening..."]   # optional
//!
//! [[prompts]]
//! triggers = ["hi", "hello"]
//! replies = ["Hello!", "Hi there!"]
//!
//! [[fallbacks]]                                 # optional
//! name = "gratitude"
//! pattern = "thank"
//! replies = ["You're welcome!"]
//! ```
//!
//! Omitted `fallbacks` or `default` sections keep the built-in ones.
//!
use super::{builtin, normalize::normalize, Matcher};
use crate::core::error::{ChatrsError, Result};
use anyhow::{anyhow, Context};
use rand::seq::SliceRandom;
use rand::Rng;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::{debug, info, warn};

/// Returned only if a group somehow ends up empty; construction prevents it.
const LAST_RESORT_REPLY: &str = "I'm listening...";

/// Ordered set of canonical triggers considered equivalent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptGroup {
    triggers: Vec<String>,
}

impl PromptGroup {
    /// Builds a group from already-canonical triggers.
    pub fn new<I, S>(triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            triggers: triggers.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact string comparison against every trigger.
    pub fn contains(&self, text: &str) -> bool {
        self.triggers.iter().any(|t| t == text)
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }
}

/// Non-empty ordered list of candidate replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyGroup {
    replies: Vec<String>,
}

impl ReplyGroup {
    /// # Create Reply Group (`ReplyGroup::new`)
    ///
    /// Validates that the group has at least one reply and that no reply is
    /// blank, so that choosing from it always yields visible text.
    pub fn new<I, S>(replies: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let replies: Vec<String> = replies.into_iter().map(Into::into).collect();
        if replies.is_empty() {
            return Err(anyhow!(ChatrsError::Table(
                "reply group must contain at least one reply".into()
            )));
        }
        if let Some(pos) = replies.iter().position(|r| r.trim().is_empty()) {
            return Err(anyhow!(ChatrsError::Table(format!(
                "reply #{} is blank",
                pos + 1
            ))));
        }
        Ok(Self { replies })
    }

    /// Trusted constructor for the compiled-in tables.
    pub(crate) fn from_static(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|r| (*r).to_string()).collect(),
        }
    }

    /// Picks one reply uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.replies
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(LAST_RESORT_REPLY)
    }

    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    pub fn contains(&self, reply: &str) -> bool {
        self.replies.iter().any(|r| r == reply)
    }

    pub fn len(&self) -> usize {
        self.replies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }
}

/// One row of the prompt table: triggers and the replies they map to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptEntry {
    pub prompts: PromptGroup,
    pub replies: ReplyGroup,
}

/// Ordered prompt table; the first entry whose group contains the input wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptTable {
    entries: Vec<PromptEntry>,
}

impl PromptTable {
    pub fn new(entries: Vec<PromptEntry>) -> Self {
        Self { entries }
    }

    /// # Find Entry (`PromptTable::find`)
    ///
    /// Linear scan in table order. Returns the index and entry of the first
    /// group containing `text` exactly.
    pub fn find(&self, text: &str) -> Option<(usize, &PromptEntry)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.prompts.contains(text))
    }

    pub fn entries(&self) -> &[PromptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Keyword-based fallback, checked after the prompt table misses.
#[derive(Debug, Clone)]
pub struct FallbackCategory {
    name: String,
    pattern: Regex,
    replies: ReplyGroup,
}

impl FallbackCategory {
    /// Compiles `pattern` case-insensitively.
    pub fn new(name: &str, pattern: &str, replies: ReplyGroup) -> Result<Self> {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| ChatrsError::Pattern {
                name: name.to_string(),
                source,
            })?;
        Ok(Self {
            name: name.to_string(),
            pattern,
            replies,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replies(&self) -> &ReplyGroup {
        &self.replies
    }
}

// --- Table file loading ---

/// Raw shape of a table file.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct TableFile {
    #[serde(default)]
    prompts: Vec<PromptSpec>,
    fallbacks: Option<Vec<FallbackSpec>>,
    default: Option<Vec<String>>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct PromptSpec {
    triggers: Vec<String>,
    replies: Vec<String>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct FallbackSpec {
    name: String,
    pattern: String,
    replies: Vec<String>,
}

/// # Load Table File (`load_table_file`)
///
/// Reads and validates a TOML reply table, returning a ready `Matcher`.
///
/// ## Errors
///
/// Fails if the file cannot be read, is not valid TOML, or does not pass the
/// checks in `parse_table`.
pub fn load_table_file(path: &Path) -> Result<Matcher> {
    info!("Loading reply table from: {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read table file: {}", path.display()))?;
    parse_table(&content).with_context(|| format!("Invalid table file: {}", path.display()))
}

/// # Parse Table (`parse_table`)
///
/// Builds a `Matcher` from TOML text. Triggers are normalized here so they
/// compare equal to normalized user input; a trigger that normalizes to
/// nothing can never match and is skipped with a warning.
///
/// ## Errors
///
/// - No `[[prompts]]` entries.
/// - An entry without usable triggers, or with an empty/blank reply list.
/// - A fallback whose pattern does not compile.
/// - An empty `default` list.
pub fn parse_table(content: &str) -> Result<Matcher> {
    let file: TableFile = toml::from_str(content).context("Failed to parse table TOML")?;

    if file.prompts.is_empty() {
        return Err(anyhow!(ChatrsError::Table(
            "table must define at least one [[prompts]] entry".into()
        )));
    }

    let mut entries = Vec::with_capacity(file.prompts.len());
    for (idx, spec) in file.prompts.into_iter().enumerate() {
        let number = idx + 1;
        let mut triggers: Vec<String> = Vec::with_capacity(spec.triggers.len());
        for raw in &spec.triggers {
            let canonical = normalize(raw);
            if canonical.is_empty() {
                warn!("Skipping trigger {:?} in entry #{}: nothing left after normalization", raw, number);
                continue;
            }
            if canonical != *raw {
                debug!("Trigger {:?} in entry #{} normalized to {:?}", raw, number, canonical);
            }
            triggers.push(canonical);
        }
        if triggers.is_empty() {
            return Err(anyhow!(ChatrsError::Table(format!(
                "prompt entry #{number} has no usable triggers"
            ))));
        }
        let replies = ReplyGroup::new(spec.replies)
            .with_context(|| format!("prompt entry #{number} has invalid replies"))?;
        entries.push(PromptEntry {
            prompts: PromptGroup::new(triggers),
            replies,
        });
    }

    let fallbacks = match file.fallbacks {
        Some(specs) => specs
            .into_iter()
            .map(|spec| {
                let replies = ReplyGroup::new(spec.replies)
                    .with_context(|| format!("fallback '{}' has invalid replies", spec.name))?;
                FallbackCategory::new(&spec.name, &spec.pattern, replies)
            })
            .collect::<Result<Vec<_>>>()?,
        None => builtin::fallbacks(),
    };

    let default = match file.default {
        Some(replies) => {
            ReplyGroup::new(replies).context("default reply group is invalid")?
        }
        None => builtin::default_replies(),
    };

    debug!(
        "Parsed table: {} prompt entries, {} fallbacks, {} default replies",
        entries.len(),
        fallbacks.len(),
        default.len()
    );
    Ok(Matcher::new(PromptTable::new(entries), fallbacks, default))
}
