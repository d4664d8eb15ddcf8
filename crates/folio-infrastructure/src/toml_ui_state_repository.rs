//! UI state repository implementation.
//!
//! This module provides a service for managing UI state that persists
//! across restarts: the theme preference and the last active session id.

use crate::paths::FolioPaths;
use folio_core::error::{FolioError, Result};
use folio_core::state::model::UiState;
use folio_core::state::repository::UiStateRepository;
use folio_core::theme::ThemePreference;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// File-backed UI state with an in-memory cache.
///
/// Reads hit the cache; every mutation writes through to `ui_state.toml`.
/// All methods are async to support non-blocking I/O in async contexts.
#[derive(Clone)]
pub struct TomlUiStateRepository {
    /// Cached state loaded from storage.
    state: Arc<Mutex<UiState>>,
    file_path: PathBuf,
}

impl TomlUiStateRepository {
    /// Creates a repository at the default path
    /// (`~/.config/folio/ui_state.toml`) and loads the initial state.
    ///
    /// A missing file yields the default state; it is created on the first
    /// write.
    pub async fn new() -> Result<Self> {
        let file_path = FolioPaths::ui_state_file()
            .map_err(|e| FolioError::config(e.to_string()))?;
        Self::with_path(file_path).await
    }

    /// Creates a repository with a custom path (for testing).
    pub async fn with_path(file_path: PathBuf) -> Result<Self> {
        let initial = if file_path.exists() {
            let contents = tokio::fs::read_to_string(&file_path).await?;
            toml::from_str(&contents)?
        } else {
            UiState::default()
        };

        Ok(Self {
            state: Arc::new(Mutex::new(initial)),
            file_path,
        })
    }

    async fn persist(&self, state: &UiState) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let contents = toml::to_string_pretty(state)?;
        tokio::fs::write(&self.file_path, contents).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl UiStateRepository for TomlUiStateRepository {
    async fn save_state(&self, state: UiState) -> Result<()> {
        {
            let mut cached = self.state.lock().await;
            *cached = state.clone();
        }
        self.persist(&state).await
    }

    async fn get_state(&self) -> Result<UiState> {
        Ok(self.state.lock().await.clone())
    }

    async fn get_theme(&self) -> ThemePreference {
        self.state.lock().await.theme
    }

    async fn set_theme(&self, theme: ThemePreference) -> Result<()> {
        let updated = {
            let mut cached = self.state.lock().await;
            cached.theme = theme;
            cached.clone()
        };
        self.persist(&updated).await
    }

    async fn get_active_session(&self) -> Option<String> {
        self.state.lock().await.active_session_id.clone()
    }

    async fn set_active_session(&self, session_id: String) -> Result<()> {
        let updated = {
            let mut cached = self.state.lock().await;
            cached.active_session_id = Some(session_id);
            cached.clone()
        };
        self.persist(&updated).await
    }

    async fn clear_active_session(&self) -> Result<()> {
        let updated = {
            let mut cached = self.state.lock().await;
            cached.active_session_id = None;
            cached.clone()
        };
        self.persist(&updated).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let repo = TomlUiStateRepository::with_path(dir.path().join("ui_state.toml"))
            .await
            .unwrap();

        assert_eq!(repo.get_theme().await, ThemePreference::System);
        assert_eq!(repo.get_active_session().await, None);
    }

    #[tokio::test]
    async fn test_theme_cycle_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui_state.toml");

        let repo = TomlUiStateRepository::with_path(path.clone()).await.unwrap();
        let next = repo.get_theme().await.cycle();
        repo.set_theme(next).await.unwrap();

        let reloaded = TomlUiStateRepository::with_path(path).await.unwrap();
        assert_eq!(reloaded.get_theme().await, ThemePreference::Light);
    }

    #[tokio::test]
    async fn test_active_session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui_state.toml");

        let repo = TomlUiStateRepository::with_path(path.clone()).await.unwrap();
        repo.set_active_session("session-1".to_string()).await.unwrap();

        let reloaded = TomlUiStateRepository::with_path(path).await.unwrap();
        assert_eq!(
            reloaded.get_active_session().await,
            Some("session-1".to_string())
        );

        reloaded.clear_active_session().await.unwrap();
        assert_eq!(reloaded.get_active_session().await, None);
    }
}
