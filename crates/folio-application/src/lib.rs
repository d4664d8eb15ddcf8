//! Application services for the folio engine.
//!
//! - `chat`: the conversational session state machine (`ChatService`)
//! - `form`: the simulated contact-form submission machine (`FormService`)
//! - `scheduler`: the single-shot cancellable timer both services build on
//! - `delay`: injectable providers for the simulated reply latency

pub mod chat;
pub mod delay;
pub mod form;
pub mod scheduler;

pub use chat::ChatService;
pub use delay::{DelayProvider, FixedDelay, UniformDelay};
pub use form::FormService;
pub use scheduler::ReplyTimer;
