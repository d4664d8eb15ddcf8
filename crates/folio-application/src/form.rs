//! Contact form submission service.
//!
//! Simulates the submission flow: validation, a fixed "network" delay into
//! `Succeeded`, draft clearing, and an auto-revert back to `Idle` so the
//! success indicator is transient. There is no server; `Failed` is declared
//! in the state space but never produced.

use crate::scheduler::ReplyTimer;
use folio_core::config::AssistantConfig;
use folio_core::error::Result;
use folio_core::form::{FormDraft, SubmissionState};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Drives the contact form machine `Idle -> Submitting -> Succeeded -> Idle`.
///
/// All mutable state sits behind one `tokio::sync::Mutex`; `submit` returns
/// immediately and completes its effects via the scheduled timer.
pub struct FormService {
    state: Arc<Mutex<FormState>>,
    submit_delay: Duration,
    success_revert: Duration,
}

struct FormState {
    draft: FormDraft,
    submission: SubmissionState,
    /// The in-flight completion or revert timer, if any.
    pending: Option<ReplyTimer>,
}

impl FormService {
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState {
                draft: FormDraft::new(),
                submission: SubmissionState::Idle,
                pending: None,
            })),
            submit_delay: Duration::from_millis(config.submit_delay_ms),
            success_revert: Duration::from_millis(config.success_revert_ms),
        }
    }

    /// Replaces the draft's name field.
    pub async fn set_name(&self, value: impl Into<String>) {
        self.state.lock().await.draft.name = value.into();
    }

    /// Replaces the draft's email field.
    pub async fn set_email(&self, value: impl Into<String>) {
        self.state.lock().await.draft.email = value.into();
    }

    /// Replaces the draft's subject field.
    pub async fn set_subject(&self, value: impl Into<String>) {
        self.state.lock().await.draft.subject = value.into();
    }

    /// Replaces the draft's body field.
    pub async fn set_body(&self, value: impl Into<String>) {
        self.state.lock().await.draft.body = value.into();
    }

    /// Submits the current draft.
    ///
    /// On validation failure the machine stays `Idle` and the draft is left
    /// untouched. Otherwise the machine enters `Submitting`, reaches
    /// `Succeeded` after the simulated delay (clearing the draft), and
    /// auto-reverts to `Idle` after the configured indicator duration.
    ///
    /// A submission while one is already in flight is ignored.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Validation` naming the first blank field.
    pub async fn submit(&self) -> Result<()> {
        let mut state = self.state.lock().await;

        if state.submission == SubmissionState::Submitting {
            debug!("submission already in flight; ignoring");
            return Ok(());
        }

        state.draft.validate()?;

        // A new submission supersedes a pending success-revert timer.
        if let Some(timer) = state.pending.take() {
            timer.cancel();
        }
        state.submission = SubmissionState::Submitting;
        debug!("form submission started");

        let token = CancellationToken::new();
        let deliver_token = token.clone();
        let shared = self.state.clone();
        let success_revert = self.success_revert;

        let timer = ReplyTimer::spawn(self.submit_delay, token, async move {
            let mut state = shared.lock().await;
            if deliver_token.is_cancelled() {
                return;
            }
            state.submission = SubmissionState::Succeeded;
            state.draft.clear();
            debug!("form submission succeeded");

            // Transient success indicator: schedule the revert to idle.
            let token = CancellationToken::new();
            let revert_token = token.clone();
            let shared = shared.clone();
            let revert = ReplyTimer::spawn(success_revert, token, async move {
                let mut state = shared.lock().await;
                if revert_token.is_cancelled() {
                    return;
                }
                state.submission = SubmissionState::Idle;
                state.pending = None;
            });
            state.pending = Some(revert);
        });
        state.pending = Some(timer);

        Ok(())
    }

    /// Returns the current submission state.
    pub async fn submission_state(&self) -> SubmissionState {
        self.state.lock().await.submission
    }

    /// Returns a snapshot of the current draft.
    pub async fn draft(&self) -> FormDraft {
        self.state.lock().await.draft.clone()
    }
}
