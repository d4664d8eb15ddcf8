//! Knowledge base domain models.
//!
//! Represents the static question/answer table the assistant answers from,
//! plus the ordered generic fallback rules applied when no entry matches.

use serde::{Deserialize, Serialize};

/// A single recognized question pattern and its canned answer.
///
/// Entries are checked in order; the first entry whose pattern matches the
/// input wins. Entries are immutable after the knowledge base is loaded.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry {
    /// The question pattern. Matching uses the first whitespace-delimited
    /// token of this pattern, lowercased.
    pub pattern: String,
    /// The canned answer returned when the pattern matches.
    pub answer: String,
}

/// A generic fallback rule keyed by substring membership.
///
/// Fallback rules are checked in order after all entries have failed to
/// match; the first rule with any trigger present in the input wins.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FallbackRule {
    /// Trigger substrings, lowercased. Any one of them firing selects the rule.
    pub triggers: Vec<String>,
    /// The canned answer returned when the rule fires.
    pub answer: String,
}

/// The read-only lookup table the matcher selects answers from.
///
/// Loaded once at startup and never mutated. A knowledge base with zero
/// entries is valid; the matcher then always falls through to the fallback
/// rules or the default acknowledgement.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    /// Returned when neither an entry nor a fallback rule matches.
    #[serde(default = "default_answer")]
    pub default_answer: String,
    /// The bot message a fresh (or reset) session opens with.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Ordered question/answer entries (first-match wins).
    #[serde(default)]
    pub entries: Vec<KnowledgeEntry>,
    /// Ordered generic fallback rules.
    #[serde(default)]
    pub fallbacks: Vec<FallbackRule>,
}

fn default_answer() -> String {
    super::preset::DEFAULT_ANSWER.to_string()
}

fn default_greeting() -> String {
    super::preset::GREETING.to_string()
}

impl KnowledgeBase {
    /// Creates an empty knowledge base with the default acknowledgement
    /// and greeting.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            fallbacks: Vec::new(),
            default_answer: default_answer(),
            greeting: default_greeting(),
        }
    }

    /// Returns the ordered entries.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// Returns the ordered fallback rules.
    pub fn fallbacks(&self) -> &[FallbackRule] {
        &self.fallbacks
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        super::preset::builtin()
    }
}
