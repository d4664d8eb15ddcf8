//! Conversational session service.
//!
//! Drives the session state machine around the matcher: user submissions
//! append immediately, a single cancellable timer simulates the assistant
//! "thinking", and delivery appends the bot reply.
//!
//! # Pending-reply policy
//!
//! While a reply is pending, further submissions still append their user
//! messages but do not schedule a second timer; the one in-flight timer
//! answers the *latest* submitted text at fire time. This keeps the number
//! of concurrent timers bounded at one per session.

use crate::delay::DelayProvider;
use crate::scheduler::ReplyTimer;
use folio_core::config::AssistantConfig;
use folio_core::error::{FolioError, Result};
use folio_core::knowledge::KnowledgeBase;
use folio_core::matcher;
use folio_core::session::{ChatMessage, SessionPhase, Transcript};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// One live conversation: transcript, pending-reply state, and the timer
/// that will deliver the next bot message.
///
/// # Thread Safety
///
/// All mutable state sits behind a single `tokio::sync::Mutex`, so every
/// mutation is atomic between suspension points. The knowledge base is
/// shared read-only via `Arc` and may back any number of sessions.
pub struct ChatService {
    /// Mutable session state (transcript, phase, pending timer)
    state: Arc<Mutex<ChatState>>,
    /// Shared read-only knowledge base
    knowledge: Arc<KnowledgeBase>,
    /// Source of the simulated reply latency
    delay: Arc<dyn DelayProvider>,
}

struct ChatState {
    transcript: Transcript,
    phase: SessionPhase,
    /// Latest submitted text while a reply is pending; answered at fire time.
    pending_input: Option<String>,
    /// The single in-flight reply timer, if any.
    pending_reply: Option<ReplyTimer>,
}

impl ChatService {
    /// Creates a service with a fresh greeting-only transcript.
    ///
    /// The greeting comes from `config.greeting` when set, otherwise from
    /// the knowledge base.
    pub fn new(
        knowledge: Arc<KnowledgeBase>,
        config: &AssistantConfig,
        delay: Arc<dyn DelayProvider>,
    ) -> Self {
        let greeting = config
            .greeting
            .clone()
            .unwrap_or_else(|| knowledge.greeting.clone());

        Self {
            state: Arc::new(Mutex::new(ChatState {
                transcript: Transcript::new(greeting),
                phase: SessionPhase::Idle,
                pending_input: None,
                pending_reply: None,
            })),
            knowledge,
            delay,
        }
    }

    /// Submits user text to the conversation.
    ///
    /// Appends a user message immediately. If no reply is pending, schedules
    /// exactly one; otherwise the existing timer will answer this (latest)
    /// text when it fires.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::EmptyInput` for blank or whitespace-only text;
    /// the transcript is left unchanged.
    pub async fn submit(&self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(FolioError::EmptyInput);
        }

        let mut state = self.state.lock().await;
        let message_id = state.transcript.append_user(text).id;
        state.pending_input = Some(text.to_string());

        match state.phase {
            SessionPhase::AwaitingReply => {
                // One timer max; it will pick up the latest text at fire time.
                debug!(
                    session_id = %state.transcript.session_id,
                    message_id,
                    "submission while reply pending; reusing in-flight timer"
                );
            }
            SessionPhase::Idle => {
                state.phase = SessionPhase::AwaitingReply;

                let delay = self.delay.reply_delay();
                let token = CancellationToken::new();
                let deliver_token = token.clone();
                let shared = self.state.clone();
                let knowledge = self.knowledge.clone();

                debug!(
                    session_id = %state.transcript.session_id,
                    message_id,
                    delay_ms = delay.as_millis() as u64,
                    "reply scheduled"
                );

                let timer = ReplyTimer::spawn(delay, token, async move {
                    let mut state = shared.lock().await;
                    // reset() cancels under this same lock; a stale delivery
                    // must never touch a cleared transcript.
                    if deliver_token.is_cancelled() {
                        return;
                    }
                    let input = state.pending_input.take().unwrap_or_default();
                    let answer = matcher::respond(&input, &knowledge);
                    let reply_id = state.transcript.append_bot(answer).id;
                    state.phase = SessionPhase::Idle;
                    state.pending_reply = None;
                    debug!(
                        session_id = %state.transcript.session_id,
                        reply_id,
                        "reply delivered"
                    );
                });
                state.pending_reply = Some(timer);
            }
        }

        Ok(())
    }

    /// Clears the transcript back to the greeting and cancels any pending
    /// reply, so a stale delivery can never append to the cleared log.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        if let Some(timer) = state.pending_reply.take() {
            timer.cancel();
        }
        state.pending_input = None;
        state.phase = SessionPhase::Idle;
        state.transcript.reset();
        debug!(session_id = %state.transcript.session_id, "session reset");
    }

    /// Returns a snapshot of the ordered message log.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.state.lock().await.transcript.messages().to_vec()
    }

    /// True while a bot reply is scheduled but undelivered.
    pub async fn is_bot_typing(&self) -> bool {
        self.state.lock().await.phase.is_bot_typing()
    }

    /// Returns the session id.
    pub async fn session_id(&self) -> String {
        self.state.lock().await.transcript.session_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::FixedDelay;
    use folio_core::session::Sender;
    use std::time::Duration;

    fn service(delay_ms: u64) -> ChatService {
        ChatService::new(
            Arc::new(KnowledgeBase::default()),
            &AssistantConfig::default(),
            Arc::new(FixedDelay(Duration::from_millis(delay_ms))),
        )
    }

    #[tokio::test]
    async fn test_blank_submission_is_rejected() {
        let chat = service(100);

        assert!(chat.submit("").await.unwrap_err().is_empty_input());
        assert!(chat.submit("   ").await.unwrap_err().is_empty_input());

        // Transcript untouched: greeting only, no reply pending.
        assert_eq!(chat.messages().await.len(), 1);
        assert!(!chat.is_bot_typing().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_schedules_one_reply() {
        let chat = service(100);

        chat.submit("Hello").await.unwrap();

        let messages = chat.messages().await;
        assert_eq!(messages.len(), 2); // greeting + user
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].text, "Hello");
        assert!(chat.is_bot_typing().await);

        tokio::time::sleep(Duration::from_millis(200)).await;

        let messages = chat.messages().await;
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].sender, Sender::Bot);
        assert!(messages[2].id > messages[1].id);
        assert!(!chat.is_bot_typing().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_while_awaiting_suppresses_reply() {
        let chat = service(100);

        chat.submit("Hello").await.unwrap();
        chat.reset().await;

        // Even well past the scheduled delay, nothing is delivered.
        tokio::time::sleep(Duration::from_millis(500)).await;

        let messages = chat.messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::Bot);
        assert!(!chat.is_bot_typing().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submission_reuses_pending_timer() {
        let chat = service(100);

        chat.submit("hello").await.unwrap();
        chat.submit("your price?").await.unwrap();

        // Both user messages appended, still exactly one pending reply.
        assert_eq!(chat.messages().await.len(), 3);
        assert!(chat.is_bot_typing().await);

        tokio::time::sleep(Duration::from_millis(200)).await;

        let messages = chat.messages().await;
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[2].sender, Sender::User);
        assert_eq!(messages[3].sender, Sender::Bot);
        // The single reply answers the latest text (pricing, not greeting).
        assert!(messages[3].text.contains("cost"));
        assert!(!chat.is_bot_typing().await);

        // No second reply shows up later.
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(chat.messages().await.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_usable_after_reset() {
        let chat = service(50);

        chat.submit("hello").await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        chat.reset().await;

        chat.submit("hi again").await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        let messages = chat.messages().await;
        assert_eq!(messages.len(), 3); // greeting + user + bot
        assert_eq!(messages[2].sender, Sender::Bot);
    }

    #[tokio::test(start_paused = true)]
    async fn test_config_greeting_overrides_knowledge_base() {
        let config = AssistantConfig {
            greeting: Some("Custom greeting".to_string()),
            ..AssistantConfig::default()
        };
        let chat = ChatService::new(
            Arc::new(KnowledgeBase::default()),
            &config,
            Arc::new(FixedDelay(Duration::from_millis(10))),
        );

        assert_eq!(chat.messages().await[0].text, "Custom greeting");
    }
}
