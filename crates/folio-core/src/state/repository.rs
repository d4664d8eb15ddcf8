//! UI state repository trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::state::model::UiState;
use crate::theme::ThemePreference;

/// Repository for managing persisted UI state.
#[async_trait]
pub trait UiStateRepository: Send + Sync {
    /// Saves the full UI state to storage.
    async fn save_state(&self, state: UiState) -> Result<()>;

    async fn get_state(&self) -> Result<UiState>;

    async fn get_theme(&self) -> ThemePreference;

    async fn set_theme(&self, theme: ThemePreference) -> Result<()>;

    async fn get_active_session(&self) -> Option<String>;

    async fn set_active_session(&self, session_id: String) -> Result<()>;

    async fn clear_active_session(&self) -> Result<()>;
}
