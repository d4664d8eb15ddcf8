//! TOML-based KnowledgeRepository implementation

use crate::paths::FolioPaths;
use folio_core::error::{FolioError, Result};
use folio_core::knowledge::{KnowledgeBase, KnowledgeRepository};
use std::path::PathBuf;

/// A repository implementation for storing the knowledge base in a TOML file.
///
/// Responsibilities:
/// - Load the knowledge base from `knowledge.toml`
/// - Fall back to the built-in preset when no file exists
/// - Save an edited knowledge base back to the file
///
/// Does NOT:
/// - Cache: callers load once at startup and share via `Arc`
pub struct TomlKnowledgeRepository {
    file_path: PathBuf,
}

impl TomlKnowledgeRepository {
    /// Creates a new repository with the default path
    /// (`~/.config/folio/knowledge.toml`)
    pub fn new() -> Result<Self> {
        let file_path = FolioPaths::knowledge_file()
            .map_err(|e| FolioError::config(e.to_string()))?;
        Ok(Self { file_path })
    }

    /// Creates a new repository with a custom path (for testing)
    pub fn with_path(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}

#[async_trait::async_trait]
impl KnowledgeRepository for TomlKnowledgeRepository {
    async fn get_all(&self) -> Result<KnowledgeBase> {
        if !self.file_path.exists() {
            // No file yet: the assistant runs on the built-in preset.
            return Ok(KnowledgeBase::default());
        }

        let contents = tokio::fs::read_to_string(&self.file_path).await?;
        let base: KnowledgeBase = toml::from_str(&contents)?;
        Ok(base)
    }

    async fn save_all(&self, base: &KnowledgeBase) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let contents = toml::to_string_pretty(base)?;
        tokio::fs::write(&self.file_path, contents).await?;
        Ok(())
    }
}
