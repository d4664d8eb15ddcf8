//! Unified path management for folio configuration files.
//!
//! This ensures consistency across all platforms (Linux, macOS, Windows).
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/folio/             # Config directory
//! ├── config.toml              # Assistant configuration (delays, greeting)
//! ├── knowledge.toml           # Knowledge base entries and fallback rules
//! └── ui_state.toml            # Persisted UI state (theme, active session)
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for folio.
pub struct FolioPaths;

impl FolioPaths {
    /// Returns the folio configuration directory (e.g. `~/.config/folio/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("folio"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the assistant configuration file path.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the knowledge base file path.
    pub fn knowledge_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("knowledge.toml"))
    }

    /// Returns the persisted UI state file path.
    pub fn ui_state_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("ui_state.toml"))
    }
}
