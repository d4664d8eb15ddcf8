//! File-backed implementations of the folio-core repository traits.

pub mod config_service;
pub mod paths;
pub mod toml_knowledge_repository;
pub mod toml_ui_state_repository;

pub use config_service::ConfigService;
pub use paths::FolioPaths;
pub use toml_knowledge_repository::TomlKnowledgeRepository;
pub use toml_ui_state_repository::TomlUiStateRepository;
