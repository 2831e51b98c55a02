//! ClipFetch library

pub mod downloader;
pub mod extractor;
pub mod gui;
pub mod quality;
pub mod utils;

// Re-export main types for easier use
pub use downloader::{DownloadOptions, DownloadOrchestrator, SessionEvent, SessionId};
pub use extractor::{Extractor, Format, VideoInfo, YtDlpExtractor};
pub use gui::{AppFlags, ClipFetchApp, Message};
pub use quality::{QualityMap, QualityResolver, QualitySelection, Resolution};
pub use utils::{AppSettings, ClipFetchError, FolderStore};
