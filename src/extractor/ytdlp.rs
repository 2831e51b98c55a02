//! yt-dlp wrapper for video extraction and download
//!
//! yt-dlp runs as a subprocess. Metadata comes from `--dump-json`; downloads
//! print one progress line per update through a custom `--progress-template`
//! which is parsed back into [`ProgressEvent`]s.

use crate::downloader::{DownloadOptions, ProgressEvent, ProgressHook};
use crate::extractor::models::VideoInfo;
use crate::extractor::traits::Extractor;
use crate::utils::error::ClipFetchError;
use crate::utils::platform;
use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};
use tokio::process::Command as AsyncCommand;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace, warn};

const PROGRESS_PREFIX: &str = "clipfetch-progress:";
const FILE_PREFIX: &str = "clipfetch-file:";

/// Emitted on stdout for every progress update.
const PROGRESS_TEMPLATE: &str =
    "download:clipfetch-progress:%(progress.status)s:%(progress._percent_str)s";
/// Emitted once the file reached its final name.
const FILE_TEMPLATE: &str = "after_move:clipfetch-file:%(filepath)s";

/// Extractor backed by the yt-dlp command-line program
pub struct YtDlpExtractor {
    ytdlp_path: PathBuf,
}

impl YtDlpExtractor {
    /// Locate yt-dlp (bundled, PATH, common install paths)
    pub fn new() -> Result<Self> {
        match platform::find_ytdlp() {
            Some(path) => {
                info!("Found yt-dlp at: {}", path.display());
                Ok(Self { ytdlp_path: path })
            }
            None => {
                error!("yt-dlp not found anywhere!");
                Err(ClipFetchError::YtDlpNotFound.into())
            }
        }
    }

    /// Use an explicit yt-dlp binary
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            ytdlp_path: path.into(),
        }
    }

    /// Get the path to yt-dlp being used
    pub fn ytdlp_path(&self) -> &Path {
        &self.ytdlp_path
    }

    /// `yt-dlp --version`
    pub async fn version(&self) -> Result<String> {
        let output = AsyncCommand::new(&self.ytdlp_path)
            .arg("--version")
            .output()
            .await?;
        if !output.status.success() {
            return Err(ClipFetchError::YtDlpNotFound.into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[async_trait]
impl Extractor for YtDlpExtractor {
    fn id(&self) -> &'static str {
        "ytdlp"
    }

    /// Uses: yt-dlp --dump-json --no-download
    async fn extract_info(&self, url: &str) -> Result<VideoInfo> {
        debug!("Extracting video info for URL: {}", url);

        let output = AsyncCommand::new(&self.ytdlp_path)
            .arg("--dump-json")
            .arg("--no-download")
            .arg("--no-warnings")
            .arg("--no-playlist")
            .arg(url)
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            let error_msg = summarize_stderr(&String::from_utf8_lossy(&output.stderr));
            error!("yt-dlp extraction failed: {}", error_msg);
            return Err(ClipFetchError::ExtractionError(error_msg).into());
        }

        let json_str = String::from_utf8(output.stdout)?;
        let json_line = json_str
            .lines()
            .find(|line| !line.trim().is_empty())
            .ok_or_else(|| ClipFetchError::ExtractionError("yt-dlp returned no data".into()))?;
        let video_info: VideoInfo =
            serde_json::from_str(json_line).map_err(ClipFetchError::SerializationError)?;

        Ok(video_info)
    }

    async fn download(
        &self,
        options: &DownloadOptions,
        hook: ProgressHook,
        cancel: CancellationToken,
    ) -> Result<Option<PathBuf>> {
        let mut args = options.to_ytdlp_args();
        args.extend([
            "--encoding".to_string(),
            "utf-8".to_string(),
            "--newline".to_string(),
            "--progress".to_string(),
            "--progress-template".to_string(),
            PROGRESS_TEMPLATE.to_string(),
            "--print".to_string(),
            FILE_TEMPLATE.to_string(),
            options.url.clone(),
        ]);
        debug!("Running {} {:?}", self.ytdlp_path.display(), args);

        let mut child = AsyncCommand::new(&self.ytdlp_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ClipFetchError::DownloadError(format!("failed to start yt-dlp: {}", e)))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| ClipFetchError::DownloadError("yt-dlp stdout unavailable".into()))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| ClipFetchError::DownloadError("yt-dlp stderr unavailable".into()))?;

        let line_reader = tokio::spawn(forward_output(stdout, hook));

        let stderr_reader = tokio::spawn(async move {
            let mut buf = Vec::new();
            let _ = stderr.read_to_end(&mut buf).await;
            String::from_utf8_lossy(&buf).into_owned()
        });

        let status = tokio::select! {
            status = child.wait() => status?,
            _ = cancel.cancelled() => {
                let _ = child.kill().await;
                line_reader.abort();
                stderr_reader.abort();
                info!("yt-dlp download cancelled: {}", options.url);
                return Err(ClipFetchError::Cancelled.into());
            }
        };

        let destination = line_reader.await.unwrap_or(None);
        let stderr_text = stderr_reader.await.unwrap_or_default();

        if !status.success() {
            let mut error_msg = summarize_stderr(&stderr_text);
            if error_msg.is_empty() {
                error_msg = format!("yt-dlp exited with {}", status);
            }
            error!("yt-dlp download failed: {}", error_msg);
            return Err(ClipFetchError::DownloadError(error_msg).into());
        }

        Ok(destination)
    }
}

/// Feed every recognised stdout line to `hook` until the stream ends.
///
/// Lines are split on raw bytes and decoded lossily so a single badly
/// encoded line never stops the pipe from being drained. Returns the last
/// destination path seen.
async fn forward_output<R>(reader: R, hook: ProgressHook) -> Option<PathBuf>
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).split(b'\n');
    let mut destination = None;
    loop {
        let raw = match lines.next_segment().await {
            Ok(Some(raw)) => raw,
            Ok(None) => break,
            Err(e) => {
                warn!("Failed to read yt-dlp output: {}", e);
                break;
            }
        };
        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                warn!("yt-dlp printed a line that is not valid UTF-8");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        trace!("yt-dlp: {}", line);
        if let Some(event) = parse_output_line(&line) {
            if let ProgressEvent::Destination(path) = &event {
                destination = Some(path.clone());
            }
            hook(event);
        }
    }
    destination
}

/// Map one stdout line to a progress event, if it is one of ours.
pub(crate) fn parse_output_line(line: &str) -> Option<ProgressEvent> {
    let line = line.trim_end_matches(['\r', '\n']);

    if let Some(rest) = line.strip_prefix(PROGRESS_PREFIX) {
        let (status, percent) = rest.split_once(':')?;
        return match status {
            "downloading" => Some(ProgressEvent::Downloading {
                percent: percent.to_string(),
            }),
            "finished" => Some(ProgressEvent::Finished),
            _ => None,
        };
    }

    line.strip_prefix(FILE_PREFIX)
        .filter(|path| !path.is_empty())
        .map(|path| ProgressEvent::Destination(PathBuf::from(path)))
}

/// Reduce yt-dlp stderr to the message worth showing a user.
fn summarize_stderr(stderr: &str) -> String {
    let lines: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    lines
        .iter()
        .rev()
        .find(|line| line.starts_with("ERROR:"))
        .or_else(|| lines.last())
        .map(|line| line.to_string())
        .unwrap_or_default()
}

// ============================================================
// Tests
// ============================================================
