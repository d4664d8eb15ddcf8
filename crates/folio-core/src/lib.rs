pub mod config;
pub mod error;
pub mod form;
pub mod knowledge;
pub mod matcher;
pub mod session;
pub mod state;
pub mod theme;

// Re-export common error type
pub use error::FolioError;
