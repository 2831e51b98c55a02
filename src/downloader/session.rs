//! Per-download UI state
//!
//! Lives on the UI thread and is only changed by applying [`SessionEvent`]s
//! drained from the orchestrator channel.

use std::path::PathBuf;
use tracing::debug;

use crate::downloader::orchestrator::{PreparedDownload, SessionEvent, SessionId};
use crate::quality::Resolution;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Running,
    Completed,
    Failed(String),
    Cancelled,
}

/// One row in the downloads list
#[derive(Debug, Clone)]
pub struct DownloadSession {
    pub id: SessionId,
    pub url: String,
    pub resolution: Resolution,
    pub format_id: String,
    pub title: Option<String>,
    /// 0.0 to 100.0
    pub progress: f32,
    pub state: SessionState,
    pub destination: Option<PathBuf>,
    finished: bool,
}

impl DownloadSession {
    pub fn new(prepared: &PreparedDownload) -> Self {
        Self {
            id: prepared.id,
            url: prepared.options.url.clone(),
            resolution: prepared.resolution,
            format_id: prepared.format_id.clone(),
            title: None,
            progress: 0.0,
            state: SessionState::Running,
            destination: None,
            finished: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Row label, e.g. `"Cats - 720p"` or `"Cats - Download Complete ✅"`.
    pub fn label(&self) -> String {
        let title = self.title.as_deref().unwrap_or(&self.url);
        match &self.state {
            SessionState::Failed(_) => format!("{} - Download Failed ❌", title),
            SessionState::Cancelled => format!("{} - Download Cancelled", title),
            _ if self.finished => format!("{} - Download Complete ✅", title),
            _ => format!("{} - {}", title, self.resolution),
        }
    }

    /// Apply one event. Returns the error text to surface for a failure.
    pub fn apply(&mut self, event: SessionEvent) -> Option<String> {
        match event {
            SessionEvent::TitleResolved { title, .. } => self.title = Some(title),
            SessionEvent::Progress { percent, .. } => self.progress = percent,
            SessionEvent::Finished { .. } => self.finished = true,
            SessionEvent::Destination { path, .. } => self.destination = Some(path),
            SessionEvent::Completed { .. } => {
                self.finished = true;
                self.state = SessionState::Completed;
            }
            SessionEvent::Failed { error, .. } => {
                self.state = SessionState::Failed(error.clone());
                return Some(error);
            }
            SessionEvent::Cancelled { .. } => self.state = SessionState::Cancelled,
        }
        None
    }
}

/// All rows, in creation order. Rows are never removed.
#[derive(Debug, Clone, Default)]
pub struct SessionList {
    sessions: Vec<DownloadSession>,
}

impl SessionList {
    pub fn push(&mut self, session: DownloadSession) {
        self.sessions.push(session);
    }

    pub fn get(&self, id: SessionId) -> Option<&DownloadSession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DownloadSession> {
        self.sessions.iter()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Route an event to its row. Returns the error text of a failed session.
    pub fn apply(&mut self, event: SessionEvent) -> Option<String> {
        let id = event.session_id();
        match self.sessions.iter_mut().find(|s| s.id == id) {
            Some(session) => session.apply(event),
            None => {
                debug!("Dropping event for unknown session {}", id);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::downloader::DownloadOptions;
    use std::path::Path;
    use uuid::Uuid;

    fn session() -> DownloadSession {
        let prepared = PreparedDownload {
            id: Uuid::new_v4(),
            resolution: Resolution(720),
            format_id: "22".into(),
            options: DownloadOptions::new(
                "https://v",
                "22",
                Path::new("/tmp"),
                "mp4",
                PathBuf::new(),
            ),
        };
        DownloadSession::new(&prepared)
    }

    #[test]
    fn test_label_lifecycle() {
        let mut s = session();
        let id = s.id;
        assert_eq!(s.label(), "https://v - 720p");

        s.apply(SessionEvent::TitleResolved {
            id,
            title: "Cats".into(),
        });
        assert_eq!(s.label(), "Cats - 720p");

        s.apply(SessionEvent::Progress { id, percent: 42.5 });
        assert_eq!(s.progress, 42.5);

        s.apply(SessionEvent::Finished { id });
        assert!(s.label().ends_with("Download Complete ✅"));
        // the bar is not forced to 100
        assert_eq!(s.progress, 42.5);
        assert!(s.is_running());
    }

    #[test]
    fn test_failure_returns_error_text() {
        let mut s = session();
        let id = s.id;
        s.apply(SessionEvent::TitleResolved {
            id,
            title: "Cats".into(),
        });
        let err = s.apply(SessionEvent::Failed {
            id,
            error: "Download failed: boom".into(),
        });
        assert_eq!(err.as_deref(), Some("Download failed: boom"));
        assert_eq!(s.label(), "Cats - Download Failed ❌");
        assert!(!s.is_running());
    }

    #[test]
    fn test_list_routes_by_id_and_ignores_unknown() {
        let mut list = SessionList::default();
        let a = session();
        let b = session();
        let (a_id, b_id) = (a.id, b.id);
        list.push(a);
        list.push(b);

        list.apply(SessionEvent::Progress {
            id: b_id,
            percent: 10.0,
        });
        assert_eq!(list.get(a_id).unwrap().progress, 0.0);
        assert_eq!(list.get(b_id).unwrap().progress, 10.0);

        assert!(list
            .apply(SessionEvent::Cancelled { id: Uuid::new_v4() })
            .is_none());
        assert_eq!(list.len(), 2);
    }
}
