//! Utility modules for error handling, configuration and platform paths

pub mod config;
pub mod error;
pub mod folder_store;
pub mod platform;

// Re-export for convenience
pub use config::AppSettings;
pub use error::ClipFetchError;
pub use folder_store::FolderStore;
pub use platform::{default_download_dir, find_ytdlp};
