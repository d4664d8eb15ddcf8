//! Answer selection over the knowledge base.
//!
//! The matcher is a pure, total function: given the same input and the same
//! knowledge base it always selects the same answer, and it never fails.
//! It is a deliberately weak keyword heuristic, not a language model; the
//! contract is determinism, not semantic correctness.

use crate::knowledge::KnowledgeBase;

/// Selects an answer for `input` from the knowledge base.
///
/// Selection proceeds in three stages, each first-match-wins:
///
/// 1. Entries, in order: an entry matches when the lowercased input
///    contains the first whitespace-delimited token of the entry's
///    lowercased pattern.
/// 2. Fallback rules, in order: a rule fires when any of its trigger
///    substrings occurs in the lowercased input.
/// 3. The knowledge base's default acknowledgement.
pub fn respond(input: &str, kb: &KnowledgeBase) -> String {
    let lowered = input.to_lowercase();

    for entry in kb.entries() {
        if let Some(token) = first_token(&entry.pattern) {
            if lowered.contains(&token) {
                return entry.answer.clone();
            }
        }
    }

    for rule in kb.fallbacks() {
        if rule
            .triggers
            .iter()
            .any(|trigger| lowered.contains(&trigger.to_lowercase()))
        {
            return rule.answer.clone();
        }
    }

    kb.default_answer.clone()
}

/// Returns the first whitespace-delimited token of `pattern`, lowercased.
///
/// `None` for patterns that are empty or all whitespace; such entries can
/// never match.
fn first_token(pattern: &str) -> Option<String> {
    pattern.split_whitespace().next().map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{FallbackRule, KnowledgeBase, KnowledgeEntry};

    fn test_base() -> KnowledgeBase {
        KnowledgeBase {
            entries: vec![
                KnowledgeEntry {
                    pattern: "What technologies do you use?".to_string(),
                    answer: "Technologies answer".to_string(),
                },
                KnowledgeEntry {
                    pattern: "How long does a project take?".to_string(),
                    answer: "Timeline answer".to_string(),
                },
            ],
            fallbacks: vec![
                FallbackRule {
                    triggers: vec!["hello".to_string(), "hi".to_string()],
                    answer: "Greeting answer".to_string(),
                },
                FallbackRule {
                    triggers: vec!["price".to_string(), "cost".to_string()],
                    answer: "Pricing answer".to_string(),
                },
            ],
            default_answer: "Default answer".to_string(),
            greeting: "Greeting".to_string(),
        }
    }

    #[test]
    fn test_entry_match_on_first_token() {
        let kb = test_base();
        // "what" is the first token of the first entry's pattern
        assert_eq!(respond("So, WHAT do you do?", &kb), "Technologies answer");
    }

    #[test]
    fn test_entry_order_wins_over_fallbacks() {
        let kb = test_base();
        // "how" matches the second entry even though "price" would fire a fallback
        assert_eq!(respond("how much does it price?", &kb), "Timeline answer");
    }

    #[test]
    fn test_fallback_trigger() {
        let kb = test_base();
        assert_eq!(respond("hi there", &kb), "Greeting answer");
        assert_eq!(respond("your cost?", &kb), "Pricing answer");
    }

    #[test]
    fn test_fallback_order() {
        let kb = test_base();
        // Input misses every entry token; both rules could fire and the
        // earlier one wins
        assert_eq!(respond("hello, your cost?", &kb), "Greeting answer");
    }

    #[test]
    fn test_entry_token_beats_fallback_triggers_in_same_input() {
        let kb = test_base();
        // "what" hits the first entry even though "hello" and "cost" would
        // both fire fallback rules
        assert_eq!(
            respond("hello, what's the cost?", &kb),
            "Technologies answer"
        );
    }

    #[test]
    fn test_default_answer() {
        let kb = test_base();
        assert_eq!(respond("xyzzy", &kb), "Default answer");
    }

    #[test]
    fn test_empty_base_always_defaults() {
        let kb = KnowledgeBase::empty();
        let answer = respond("what is the cost of a project?", &kb);
        assert_eq!(answer, kb.default_answer);
    }

    #[test]
    fn test_deterministic() {
        let kb = test_base();
        let first = respond("tell me about pricing", &kb);
        for _ in 0..10 {
            assert_eq!(respond("tell me about pricing", &kb), first);
        }
    }

    #[test]
    fn test_blank_pattern_never_matches() {
        let mut kb = test_base();
        kb.entries.insert(
            0,
            KnowledgeEntry {
                pattern: "   ".to_string(),
                answer: "Should never be selected".to_string(),
            },
        );
        assert_eq!(respond("what do you do?", &kb), "Technologies answer");
    }

    #[test]
    fn test_builtin_preset_fallbacks() {
        let kb = KnowledgeBase::default();
        let answer = respond("can I email you?", &kb);
        assert!(answer.contains("contact form"));
    }
}
