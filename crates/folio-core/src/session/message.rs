//! Conversation message types.
//!
//! This module contains types for representing messages in a conversation
//! transcript.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents the sender of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// Message from the visitor.
    User,
    /// Message from the assistant.
    Bot,
}

/// A single message in a conversation transcript.
///
/// Messages are created on submission (user) or on scheduled delivery (bot)
/// and never mutated afterwards. Ids are monotonic and unique within a
/// session; the transcript allocates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Monotonic, session-unique message identifier.
    pub id: u64,
    /// Who sent the message.
    pub sender: Sender,
    /// The message content.
    pub text: String,
    /// When the message was created.
    pub sent_at: DateTime<Utc>,
}
