//! Download orchestration and progress reporting

pub mod options;
pub mod orchestrator;
pub mod progress;
pub mod session;

// Re-export for convenience
pub use options::{DownloadOptions, PostProcessor};
pub use orchestrator::{
    DownloadOrchestrator, PreparedDownload, SessionEvent, SessionId, UNKNOWN_TITLE,
};
pub use progress::{parse_percent, ProgressEvent, ProgressHook, ProgressReporter};
pub use session::{DownloadSession, SessionList, SessionState};
