//! Session domain module.
//!
//! # Module Structure
//!
//! - `message`: Conversation message types (`Sender`, `ChatMessage`)
//! - `model`: The append-only transcript (`Transcript`)
//! - `phase`: Pending-reply state (`SessionPhase`)
//!
//! The async state machine driving submissions and scheduled replies lives
//! in `folio-application::chat`; this module holds only the pure domain
//! types it operates on.

mod message;
mod model;
mod phase;

// Re-export public API
pub use message::{ChatMessage, Sender};
pub use model::Transcript;
pub use phase::SessionPhase;
