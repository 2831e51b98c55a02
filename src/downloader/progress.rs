//! Progress reporting from the extraction engine to the UI
//!
//! The engine calls a [`ProgressHook`] with raw [`ProgressEvent`]s from the
//! download task. [`ProgressReporter`] turns those into [`SessionEvent`]s for
//! one session and pushes them onto the UI channel; it never touches UI state
//! itself.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::downloader::orchestrator::{SessionEvent, SessionId};

/// Terminal colour sequences such as `\x1b[0;32m`.
static ANSI_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("ansi colour regex"));

/// Raw status reported by the engine while a download runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// Percent-complete string as printed by the engine, e.g. `" 45.2%"`.
    Downloading { percent: String },
    /// One stream finished downloading.
    Finished,
    /// Final file path after post-processing.
    Destination(PathBuf),
}

/// Callback registered with a download operation.
pub type ProgressHook = Arc<dyn Fn(ProgressEvent) + Send + Sync>;

/// Parse an engine percent string into a value in `0.0..=100.0`.
///
/// Returns `None` for anything that is not a number once colour codes, whitespace
/// and the trailing `%` are removed.
pub fn parse_percent(raw: &str) -> Option<f32> {
    let cleaned = ANSI_COLOR_RE.replace_all(raw, "");
    let value: f32 = cleaned.trim().trim_end_matches('%').trim().parse().ok()?;
    value.is_finite().then(|| value.clamp(0.0, 100.0))
}

/// Forwards engine progress for one session to the UI thread.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    session_id: SessionId,
    events: mpsc::UnboundedSender<SessionEvent>,
}

impl ProgressReporter {
    pub fn new(session_id: SessionId, events: mpsc::UnboundedSender<SessionEvent>) -> Self {
        Self { session_id, events }
    }

    pub fn handle(&self, event: ProgressEvent) {
        let update = match event {
            ProgressEvent::Downloading { percent } => match parse_percent(&percent) {
                Some(value) => SessionEvent::Progress {
                    id: self.session_id,
                    percent: value,
                },
                None => {
                    trace!("Ignoring unparseable progress {:?}", percent);
                    return;
                }
            },
            ProgressEvent::Finished => SessionEvent::Finished {
                id: self.session_id,
            },
            ProgressEvent::Destination(path) => SessionEvent::Destination {
                id: self.session_id,
                path,
            },
        };

        // The receiver only goes away when the window is closing.
        if self.events.send(update).is_err() {
            debug!("UI channel closed, dropping progress for {}", self.session_id);
        }
    }

    pub fn into_hook(self) -> ProgressHook {
        Arc::new(move |event| self.handle(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_parse_plain_percent() {
        assert_eq!(parse_percent("45.2%"), Some(45.2));
        assert_eq!(parse_percent("  7.0%"), Some(7.0));
        assert_eq!(parse_percent("100%"), Some(100.0));
    }

    #[test]
    fn test_parse_strips_colour_codes() {
        assert_eq!(parse_percent("\x1b[32m67.0%\x1b[0m"), Some(67.0));
        assert_eq!(parse_percent("\x1b[0;94m 12.5%\x1b[0m"), Some(12.5));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_percent("garbage"), None);
        assert_eq!(parse_percent(""), None);
        assert_eq!(parse_percent("NA"), None);
        assert_eq!(parse_percent("NaN%"), None);
    }

    #[test]
    fn test_reporter_sends_progress_and_drops_garbage() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let id = Uuid::new_v4();
        let hook = ProgressReporter::new(id, tx).into_hook();

        hook(ProgressEvent::Downloading {
            percent: "45.2%".into(),
        });
        hook(ProgressEvent::Downloading {
            percent: "\x1b[32m67.0%\x1b[0m".into(),
        });
        hook(ProgressEvent::Downloading {
            percent: "garbage".into(),
        });
        hook(ProgressEvent::Finished);

        assert!(matches!(
            rx.try_recv(),
            Ok(SessionEvent::Progress { percent, .. }) if (percent - 45.2).abs() < f32::EPSILON
        ));
        assert!(matches!(
            rx.try_recv(),
            Ok(SessionEvent::Progress { percent, .. }) if (percent - 67.0).abs() < f32::EPSILON
        ));
        assert!(matches!(rx.try_recv(), Ok(SessionEvent::Finished { id: got }) if got == id));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_reporter_survives_closed_channel() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let reporter = ProgressReporter::new(Uuid::new_v4(), tx);
        reporter.handle(ProgressEvent::Finished);
    }
}
