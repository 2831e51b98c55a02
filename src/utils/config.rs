//! Application configuration

use crate::utils::platform;
use std::path::PathBuf;

/// ffmpeg location used when nothing else is configured.
pub const DEFAULT_FFMPEG_LOCATION: &str = r"C:\ffmpeg\bin\ffmpeg.exe";

/// Name of the file holding the last chosen download folder.
pub const FOLDER_CONFIG_FILE: &str = "config.txt";

/// Application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Explicit yt-dlp binary; discovered when `None`
    pub ytdlp_path: Option<PathBuf>,

    /// ffmpeg binary handed to yt-dlp for merging and conversion
    pub ffmpeg_location: PathBuf,

    /// Container every download is merged and converted into
    pub container: String,

    /// Smallest vertical resolution offered in the quality list
    pub min_height: u32,

    /// Folder preference file
    pub config_file: PathBuf,

    /// Older preference file read while `config_file` does not exist
    pub legacy_config_file: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ytdlp_path: None,
            ffmpeg_location: PathBuf::from(DEFAULT_FFMPEG_LOCATION),
            container: "mp4".to_string(),
            min_height: 144,
            config_file: platform::config_dir().join(FOLDER_CONFIG_FILE),
            legacy_config_file: Some(PathBuf::from(FOLDER_CONFIG_FILE)),
        }
    }
}

impl AppSettings {
    /// ffmpeg path after discovery fallback.
    pub fn resolved_ffmpeg(&self) -> PathBuf {
        platform::resolve_ffmpeg(&self.ffmpeg_location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppSettings::default();
        assert_eq!(config.container, "mp4");
        assert_eq!(config.min_height, 144);
        assert_eq!(config.ffmpeg_location, PathBuf::from(DEFAULT_FFMPEG_LOCATION));
        assert!(config.config_file.ends_with(FOLDER_CONFIG_FILE));
        assert_eq!(
            config.legacy_config_file,
            Some(PathBuf::from(FOLDER_CONFIG_FILE))
        );
        assert!(config.ytdlp_path.is_none());
    }
}
