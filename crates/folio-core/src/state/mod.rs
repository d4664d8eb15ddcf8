//! Persisted UI state module.

pub mod model;
pub mod repository;

pub use model::UiState;
pub use repository::UiStateRepository;
