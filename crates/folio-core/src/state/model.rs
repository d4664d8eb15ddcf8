//! UI state domain models.
//!
//! Contains the application-level state that persists across restarts:
//! the theme preference and the last active session id.

use crate::theme::ThemePreference;
use serde::{Deserialize, Serialize};

/// UI state that persists across restarts.
///
/// # Fields
///
/// * `theme` - The visitor's theme preference (light/dark/system).
/// * `active_session_id` - The id of the last conversation session, if any.
///   Transcripts themselves are not persisted; this only lets a surface
///   decide whether to present a "resume" affordance.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct UiState {
    /// The visitor's theme preference.
    #[serde(default)]
    pub theme: ThemePreference,

    /// Id of the last active conversation session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_session_id: Option<String>,
}

impl UiState {
    /// Creates a new UiState with default values.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let state = UiState::default();
        assert_eq!(state.theme, ThemePreference::System);
        assert!(state.active_session_id.is_none());
    }
}
