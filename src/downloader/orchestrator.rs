//! Download orchestration
//!
//! Validates a download request against the current quality map, builds the
//! engine options and runs the engine on a tracked background task. The task
//! reports back exclusively through [`SessionEvent`]s on an unbounded channel
//! that the UI drains on its own schedule.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::downloader::options::DownloadOptions;
use crate::downloader::progress::ProgressReporter;
use crate::extractor::Extractor;
use crate::quality::{QualityMap, Resolution};
use crate::utils::config::AppSettings;
use crate::utils::error::ClipFetchError;

pub type SessionId = Uuid;

/// Title shown when the engine cannot tell us the real one.
pub const UNKNOWN_TITLE: &str = "Unknown Video";

/// Updates sent from a download task to the UI thread
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    TitleResolved { id: SessionId, title: String },
    Progress { id: SessionId, percent: f32 },
    /// The engine's "finished" status for a stream.
    Finished { id: SessionId },
    Destination { id: SessionId, path: PathBuf },
    /// The engine returned successfully.
    Completed { id: SessionId },
    Failed { id: SessionId, error: String },
    Cancelled { id: SessionId },
}

impl SessionEvent {
    pub fn session_id(&self) -> SessionId {
        match self {
            Self::TitleResolved { id, .. }
            | Self::Progress { id, .. }
            | Self::Finished { id }
            | Self::Destination { id, .. }
            | Self::Completed { id }
            | Self::Failed { id, .. }
            | Self::Cancelled { id } => *id,
        }
    }
}

/// A validated download, ready to be started.
#[derive(Debug, Clone)]
pub struct PreparedDownload {
    pub id: SessionId,
    pub resolution: Resolution,
    pub format_id: String,
    pub options: DownloadOptions,
}

struct RunningSession {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// Starts downloads and keeps a handle on every one still running.
pub struct DownloadOrchestrator {
    extractor: Arc<dyn Extractor>,
    runtime: Handle,
    events: mpsc::UnboundedSender<SessionEvent>,
    container: String,
    ffmpeg_location: PathBuf,
    running: HashMap<SessionId, RunningSession>,
}

impl DownloadOrchestrator {
    pub fn new(
        extractor: Arc<dyn Extractor>,
        runtime: Handle,
        events: mpsc::UnboundedSender<SessionEvent>,
        settings: &AppSettings,
    ) -> Self {
        let ffmpeg_location = settings.resolved_ffmpeg();
        info!("Using ffmpeg location {}", ffmpeg_location.display());

        Self {
            extractor,
            runtime,
            events,
            container: settings.container.clone(),
            ffmpeg_location,
            running: HashMap::new(),
        }
    }

    /// Check the request and build the engine options for it.
    ///
    /// The format identifier is captured here; the running task never looks at
    /// the quality map again.
    pub fn prepare(
        &self,
        url: &str,
        resolution: Option<Resolution>,
        qualities: &QualityMap,
        folder: &Path,
    ) -> Result<PreparedDownload, ClipFetchError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ClipFetchError::InvalidInput(
                "Please enter a video URL".to_string(),
            ));
        }
        let resolution = resolution.ok_or_else(|| {
            ClipFetchError::InvalidInput("Please select a video quality".to_string())
        })?;
        let format_id = qualities
            .format_id(resolution)
            .ok_or(ClipFetchError::InvalidSelection)?
            .to_string();

        let options = DownloadOptions::new(
            url,
            &format_id,
            folder,
            &self.container,
            self.ffmpeg_location.clone(),
        );

        Ok(PreparedDownload {
            id: Uuid::new_v4(),
            resolution,
            format_id,
            options,
        })
    }

    /// Validate, then start the download on its own task.
    pub fn download(
        &mut self,
        url: &str,
        resolution: Option<Resolution>,
        qualities: &QualityMap,
        folder: &Path,
    ) -> Result<PreparedDownload, ClipFetchError> {
        let prepared = self.prepare(url, resolution, qualities, folder)?;
        self.start(&prepared);
        Ok(prepared)
    }

    /// Spawn the background task for an already prepared download.
    pub fn start(&mut self, prepared: &PreparedDownload) {
        self.reap_finished();

        let cancel = CancellationToken::new();
        let task = run_session(
            Arc::clone(&self.extractor),
            prepared.options.clone(),
            prepared.id,
            self.events.clone(),
            cancel.clone(),
        );
        let handle = self.runtime.spawn(task);

        info!(
            "Started session {} ({} @ {})",
            prepared.id, prepared.options.url, prepared.resolution
        );
        self.running
            .insert(prepared.id, RunningSession { cancel, handle });
    }

    /// Request cancellation of one session. Returns false if it is not running.
    pub fn cancel(&mut self, id: SessionId) -> bool {
        match self.running.get(&id) {
            Some(session) if !session.handle.is_finished() => {
                session.cancel.cancel();
                true
            }
            _ => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (id, session) in &self.running {
            if !session.handle.is_finished() {
                debug!("Cancelling session {}", id);
                session.cancel.cancel();
            }
        }
    }

    /// Cancel everything and wait for the tasks to wind down.
    pub async fn shutdown(mut self) {
        self.cancel_all();
        for (id, session) in self.running.drain() {
            if let Err(e) = session.handle.await {
                warn!("Session {} ended abnormally: {}", id, e);
            }
        }
    }

    /// Number of sessions whose task has not returned yet.
    pub fn active_count(&self) -> usize {
        self.running
            .values()
            .filter(|session| !session.handle.is_finished())
            .count()
    }

    fn reap_finished(&mut self) {
        self.running.retain(|_, session| !session.handle.is_finished());
    }
}

async fn run_session(
    extractor: Arc<dyn Extractor>,
    options: DownloadOptions,
    id: SessionId,
    events: mpsc::UnboundedSender<SessionEvent>,
    cancel: CancellationToken,
) {
    let title = tokio::select! {
        title = lookup_title(extractor.as_ref(), &options.url) => title,
        _ = cancel.cancelled() => {
            let _ = events.send(SessionEvent::Cancelled { id });
            return;
        }
    };
    let _ = events.send(SessionEvent::TitleResolved {
        id,
        title: title.clone(),
    });

    let hook = ProgressReporter::new(id, events.clone()).into_hook();
    let outcome = match extractor.download(&options, hook, cancel).await {
        Ok(destination) => {
            info!("Session {} completed: {:?}", id, destination);
            SessionEvent::Completed { id }
        }
        Err(e) => match ClipFetchError::download(e) {
            ClipFetchError::Cancelled => {
                info!("Session {} cancelled", id);
                SessionEvent::Cancelled { id }
            }
            other => {
                error!("Session {} ({}) failed: {}", id, title, other);
                SessionEvent::Failed {
                    id,
                    error: other.to_string(),
                }
            }
        },
    };
    let _ = events.send(outcome);
}

/// Best-effort title lookup; never fails the download.
async fn lookup_title(extractor: &dyn Extractor, url: &str) -> String {
    match extractor.extract_info(url).await {
        Ok(info) if !info.title.trim().is_empty() => info.title,
        Ok(_) => UNKNOWN_TITLE.to_string(),
        Err(e) => {
            warn!("Title lookup failed for {}: {}", url, e);
            UNKNOWN_TITLE.to_string()
        }
    }
}
