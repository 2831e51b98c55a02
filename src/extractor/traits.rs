use crate::downloader::{DownloadOptions, ProgressHook};
use crate::extractor::models::{Format, VideoInfo};
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

/// Core trait for the external media extraction engine
///
/// This trait isolates the application from the specific engine
/// (yt-dlp subprocess, test doubles, etc.).
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Returns a unique identifier for this extractor (e.g., "ytdlp")
    fn id(&self) -> &'static str;

    /// Extracts video information without downloading anything
    async fn extract_info(&self, url: &str) -> Result<VideoInfo>;

    /// Gets available formats (usually calls extract_info internally)
    async fn get_formats(&self, url: &str) -> Result<Vec<Format>> {
        let info = self.extract_info(url).await?;
        Ok(info.formats)
    }

    /// Downloads exactly one URL as described by `options`, calling `hook`
    /// with progress as it goes.
    ///
    /// Returns the final file path when the engine reported one. Stops early
    /// with an error when `cancel` fires.
    async fn download(
        &self,
        options: &DownloadOptions,
        hook: ProgressHook,
        cancel: CancellationToken,
    ) -> Result<Option<PathBuf>>;
}
