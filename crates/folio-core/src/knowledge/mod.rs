//! Knowledge base domain module.
//!
//! # Module Structure
//!
//! - `model`: Knowledge base domain models (`KnowledgeEntry`, `FallbackRule`, `KnowledgeBase`)
//! - `preset`: The built-in FAQ entries and fallback rules
//! - `repository`: Repository trait for knowledge base storage

mod model;
pub mod preset;
mod repository;

// Re-export public API
pub use model::{FallbackRule, KnowledgeBase, KnowledgeEntry};
pub use repository::KnowledgeRepository;
