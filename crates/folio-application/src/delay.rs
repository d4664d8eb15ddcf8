//! Reply delay providers.
//!
//! The simulated "thinking" pause is injectable so tests can substitute a
//! deterministic delay instead of waiting on wall-clock randomness.

use folio_core::config::DelayRange;
use rand::Rng;
use std::time::Duration;

/// Source of the simulated latency before a scheduled reply fires.
pub trait DelayProvider: Send + Sync {
    /// Picks the delay for the next scheduled reply.
    fn reply_delay(&self) -> Duration;
}

/// Draws a delay uniformly from a millisecond range.
///
/// This is the production provider; the shipped range is 1000-3000 ms.
#[derive(Debug, Clone, Copy)]
pub struct UniformDelay {
    range: DelayRange,
}

impl UniformDelay {
    pub fn new(range: DelayRange) -> Self {
        Self { range }
    }
}

impl Default for UniformDelay {
    fn default() -> Self {
        Self::new(DelayRange::default())
    }
}

impl DelayProvider for UniformDelay {
    fn reply_delay(&self) -> Duration {
        // Tolerate an inverted range rather than panicking in gen_range.
        let lo = self.range.min_ms.min(self.range.max_ms);
        let hi = self.range.min_ms.max(self.range.max_ms);
        Duration::from_millis(rand::thread_rng().gen_range(lo..=hi))
    }
}

/// Always returns the same delay. Intended for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl DelayProvider for FixedDelay {
    fn reply_delay(&self) -> Duration {
        self.0
    }
}
