//! Session phase types for conversation state management.

use serde::{Deserialize, Serialize};

/// Represents the pending-reply state of a conversation.
///
/// A session is `AwaitingReply` exactly when a bot reply has been scheduled
/// but not yet delivered; this doubles as the typing indicator. At most one
/// reply is ever pending at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No reply is pending; the session is waiting for user input.
    #[default]
    Idle,
    /// Exactly one bot reply has been scheduled and not yet delivered.
    AwaitingReply,
}

impl SessionPhase {
    /// Returns true when a bot reply is pending (the typing indicator).
    pub fn is_bot_typing(&self) -> bool {
        matches!(self, Self::AwaitingReply)
    }
}
