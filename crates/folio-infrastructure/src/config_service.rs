//! Assistant configuration loading.

use crate::paths::FolioPaths;
use folio_core::config::AssistantConfig;
use folio_core::error::{FolioError, Result};
use std::path::PathBuf;

/// Loads the assistant configuration from `config.toml`.
///
/// A missing file is not an error: the shipped defaults apply. A present
/// but malformed file is surfaced as a serialization error rather than
/// silently ignored.
pub struct ConfigService {
    file_path: PathBuf,
}

impl ConfigService {
    /// Creates a service with the default path (`~/.config/folio/config.toml`)
    pub fn new() -> Result<Self> {
        let file_path =
            FolioPaths::config_file().map_err(|e| FolioError::config(e.to_string()))?;
        Ok(Self { file_path })
    }

    /// Creates a service with a custom path (for testing)
    pub fn with_path(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// Loads the configuration, falling back to defaults when no file exists.
    pub async fn load(&self) -> Result<AssistantConfig> {
        if !self.file_path.exists() {
            return Ok(AssistantConfig::default());
        }

        let contents = tokio::fs::read_to_string(&self.file_path).await?;
        let config: AssistantConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Saves the configuration.
    pub async fn save(&self, config: &AssistantConfig) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let contents = toml::to_string_pretty(config)?;
        tokio::fs::write(&self.file_path, contents).await?;
        Ok(())
    }
}
