//! Single-shot, cancellable reply timer.
//!
//! A dumb timer abstraction: wait out a delay on a detached task, then run
//! a delivery future. Cancellation before the delay elapses suppresses the
//! delivery forever; cancelling after it has fired is a no-op. Enforcing
//! "at most one in-flight timer per session" is the caller's job.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Handle to one scheduled delivery.
///
/// Dropping the handle does not cancel the timer; call [`ReplyTimer::cancel`].
/// The delivery future should re-check the token after acquiring any locks,
/// so a cancellation racing the firing instant can still win (the caller
/// cancels while holding the same lock the delivery takes).
#[derive(Debug)]
pub struct ReplyTimer {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl ReplyTimer {
    /// Spawns a detached task that waits `delay`, then runs `deliver`.
    ///
    /// The caller supplies the token so the delivery future can hold a
    /// clone and re-check it at the last moment.
    pub fn spawn<F>(delay: Duration, token: CancellationToken, deliver: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let task_token = token.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    deliver.await;
                }
            }
        });
        Self { token, handle }
    }

    /// Prevents delivery if it has not happened yet. No-op afterwards.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// True once `cancel` has been called.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// True once the timer task has either delivered or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
