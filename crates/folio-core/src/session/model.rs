//! Session transcript domain model.
//!
//! The transcript is the append-only message log of a single conversation.
//! It owns message id allocation; all mutation goes through `append_user`,
//! `append_bot`, and `reset`.

use super::message::{ChatMessage, Sender};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The ordered, append-only message log of one conversation.
///
/// A fresh transcript contains exactly one bot message: the greeting.
/// `reset` returns it to that state. Ids are allocated monotonically and
/// are never reused within the life of the transcript, including across
/// resets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Unique session identifier (UUID format).
    pub session_id: String,
    /// The greeting the transcript opens (and reopens after reset) with.
    greeting: String,
    /// The ordered message log.
    messages: Vec<ChatMessage>,
    /// Next message id to allocate.
    next_id: u64,
}

impl Transcript {
    /// Creates a fresh transcript containing only the greeting.
    pub fn new(greeting: impl Into<String>) -> Self {
        let mut transcript = Self {
            session_id: Uuid::new_v4().to_string(),
            greeting: greeting.into(),
            messages: Vec::new(),
            next_id: 1,
        };
        let greeting = transcript.greeting.clone();
        transcript.push(Sender::Bot, greeting);
        transcript
    }

    /// Appends a user message and returns it.
    pub fn append_user(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(Sender::User, text.into())
    }

    /// Appends a bot message and returns it.
    pub fn append_bot(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(Sender::Bot, text.into())
    }

    /// Clears the log back to a single greeting message.
    ///
    /// Id allocation continues from where it was, so messages appended
    /// after a reset still carry ids greater than everything before it.
    pub fn reset(&mut self) {
        self.messages.clear();
        let greeting = self.greeting.clone();
        self.push(Sender::Bot, greeting);
    }

    /// Returns the ordered message log.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Returns the number of messages in the log.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true when the log is empty (never the case after `new`).
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn push(&mut self, sender: Sender, text: String) -> &ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            sender,
            text,
            sent_at: Utc::now(),
        };
        self.next_id += 1;
        self.messages.push(message);
        // Safe to unwrap because we just pushed an element
        self.messages.last().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_opens_with_greeting() {
        let transcript = Transcript::new("Welcome!");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].sender, Sender::Bot);
        assert_eq!(transcript.messages()[0].text, "Welcome!");
        assert_eq!(transcript.messages()[0].id, 1);
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut transcript = Transcript::new("Welcome!");
        let user_id = transcript.append_user("hello").id;
        let bot_id = transcript.append_bot("hi back").id;
        assert!(user_id > 1);
        assert!(bot_id > user_id);
    }

    #[test]
    fn test_reset_restores_greeting_only() {
        let mut transcript = Transcript::new("Welcome!");
        transcript.append_user("hello");
        transcript.append_bot("hi back");
        transcript.reset();

        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].text, "Welcome!");
    }

    #[test]
    fn test_ids_not_reused_across_reset() {
        let mut transcript = Transcript::new("Welcome!");
        transcript.append_user("hello");
        transcript.reset();
        let after = transcript.append_user("again").id;
        assert!(after > 2);
    }
}
