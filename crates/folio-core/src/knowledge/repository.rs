//! Knowledge repository trait.
//!
//! Defines the interface for loading and saving the knowledge base.

use super::model::KnowledgeBase;
use crate::error::Result;

/// An abstract repository for the assistant's knowledge base.
///
/// This trait decouples the matcher and session logic from the specific
/// storage mechanism (TOML file, built-in preset, remote source).
///
/// # Implementation Notes
///
/// The knowledge base is read-only at runtime: implementations load it once
/// and callers share it via `Arc`. `save_all` exists for editing tooling.
#[async_trait::async_trait]
pub trait KnowledgeRepository: Send + Sync {
    /// Loads the knowledge base from storage.
    ///
    /// # Returns
    ///
    /// - `Ok(KnowledgeBase)`: The stored knowledge base, or the built-in
    ///   preset when nothing has been stored yet
    /// - `Err(FolioError)`: Error if retrieval fails
    async fn get_all(&self) -> Result<KnowledgeBase>;

    /// Saves the knowledge base to storage, replacing the existing one.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Knowledge base saved successfully
    /// - `Err(FolioError)`: Error if save fails
    async fn save_all(&self, base: &KnowledgeBase) -> Result<()>;
}
