//! Assistant configuration.
//!
//! Timing constants and the greeting are configurable; defaults mirror the
//! shipped behavior (reply after 1000-3000 ms, form submit after 2000 ms,
//! success indicator reverting after 3000 ms).

use serde::{Deserialize, Serialize};

/// An inclusive millisecond range for the randomized reply delay.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for DelayRange {
    fn default() -> Self {
        Self {
            min_ms: 1000,
            max_ms: 3000,
        }
    }
}

/// Configuration for the assistant and the contact flow.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Simulated latency of a contact form submission.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// How long the success indicator stays up before reverting to idle.
    #[serde(default = "default_success_revert_ms")]
    pub success_revert_ms: u64,

    /// Override for the opening bot greeting. When absent, the knowledge
    /// base's greeting is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,

    /// Range the simulated "thinking" delay is drawn from, uniformly.
    #[serde(default)]
    pub reply_delay: DelayRange,
}

fn default_submit_delay_ms() -> u64 {
    2000
}

fn default_success_revert_ms() -> u64 {
    3000
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay: DelayRange::default(),
            submit_delay_ms: default_submit_delay_ms(),
            success_revert_ms: default_success_revert_ms(),
            greeting: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_constants() {
        let config = AssistantConfig::default();
        assert_eq!(config.reply_delay.min_ms, 1000);
        assert_eq!(config.reply_delay.max_ms, 3000);
        assert_eq!(config.submit_delay_ms, 2000);
        assert_eq!(config.success_revert_ms, 3000);
        assert!(config.greeting.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AssistantConfig = toml::from_str("submit_delay_ms = 50").unwrap();
        assert_eq!(config.submit_delay_ms, 50);
        assert_eq!(config.success_revert_ms, 3000);
        assert_eq!(config.reply_delay, DelayRange::default());
    }
}
