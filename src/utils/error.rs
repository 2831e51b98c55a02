//! Error handling for ClipFetch

use thiserror::Error;

/// Main error type for ClipFetch
#[derive(Debug, Error)]
pub enum ClipFetchError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    /// Missing or empty user input. The message is shown verbatim.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid quality selection")]
    InvalidSelection,

    #[error("Failed to extract video info: {0}")]
    ExtractionError(String),

    #[error("No downloadable video qualities found")]
    NoQualities,

    #[error("Download failed: {0}")]
    DownloadError(String),

    #[error("Download cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ClipFetchError {
    /// True for errors caused by what the user typed or selected, as opposed
    /// to failures reported by the extraction engine.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::InvalidSelection)
    }

    /// Engine error from a metadata probe.
    pub fn extraction(err: anyhow::Error) -> Self {
        err.downcast()
            .unwrap_or_else(|other| Self::ExtractionError(other.to_string()))
    }

    /// Engine error from a download.
    pub fn download(err: anyhow::Error) -> Self {
        err.downcast()
            .unwrap_or_else(|other| Self::DownloadError(other.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors_are_classified() {
        assert!(ClipFetchError::InvalidSelection.is_user_error());
        assert!(ClipFetchError::InvalidInput("Please enter a video URL".into()).is_user_error());
        assert!(!ClipFetchError::NoQualities.is_user_error());
        assert!(!ClipFetchError::DownloadError("boom".into()).is_user_error());
    }

    #[test]
    fn test_engine_errors_keep_their_kind() {
        let cancelled = ClipFetchError::download(ClipFetchError::Cancelled.into());
        assert!(matches!(cancelled, ClipFetchError::Cancelled));

        let wrapped = ClipFetchError::download(anyhow::anyhow!("disk full"));
        assert_eq!(wrapped.to_string(), "Download failed: disk full");

        let probe = ClipFetchError::extraction(anyhow::anyhow!("HTTP Error 403"));
        assert_eq!(
            probe.to_string(),
            "Failed to extract video info: HTTP Error 403"
        );
    }

    #[test]
    fn test_invalid_input_displays_message_verbatim() {
        let err = ClipFetchError::InvalidInput("Please select a video quality".into());
        assert_eq!(err.to_string(), "Please select a video quality");
    }
}
