//! Last-used download folder persistence
//!
//! A single plain-text file holds the folder the user picked most recently.
//! There is no schema: whatever text is in the file is the folder.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::utils::config::AppSettings;
use crate::utils::error::ClipFetchError;
use crate::utils::platform;

#[derive(Debug, Clone)]
pub struct FolderStore {
    file_path: PathBuf,
    legacy_file: Option<PathBuf>,
}

impl FolderStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            legacy_file: None,
        }
    }

    /// Store described by the application settings.
    pub fn from_settings(settings: &AppSettings) -> Self {
        let store = Self::new(settings.config_file.clone());
        match &settings.legacy_config_file {
            Some(legacy) => store.with_legacy(legacy.clone()),
            None => store,
        }
    }

    /// Read `legacy_file` when the preference file does not exist yet.
    /// Saving always goes to the preference file.
    pub fn with_legacy(mut self, legacy_file: impl Into<PathBuf>) -> Self {
        self.legacy_file = Some(legacy_file.into());
        self
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the saved folder, or the OS downloads directory when nothing
    /// usable is stored.
    pub fn load(&self) -> PathBuf {
        let (path, read) = match std::fs::read_to_string(&self.file_path) {
            Err(e) if e.kind() == ErrorKind::NotFound => match &self.legacy_file {
                Some(legacy) => (legacy.as_path(), std::fs::read_to_string(legacy)),
                None => return platform::default_download_dir(),
            },
            read => (self.file_path.as_path(), read),
        };

        match read {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() {
                    debug!("Folder preference file is empty, using default");
                    platform::default_download_dir()
                } else {
                    if path != self.file_path {
                        info!("Using folder preference from {}", path.display());
                    }
                    PathBuf::from(trimmed)
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => platform::default_download_dir(),
            Err(e) => {
                warn!("Failed to read folder preference {}: {}", path.display(), e);
                platform::default_download_dir()
            }
        }
    }

    /// Overwrites the preference file with exactly `folder`.
    pub fn save(&self, folder: &Path) -> Result<(), ClipFetchError> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.file_path, folder.to_string_lossy().as_bytes())?;
        debug!("Saved download folder {}", folder.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_falls_back_to_downloads() {
        let temp = TempDir::new().unwrap();
        let store = FolderStore::new(temp.path().join("config.txt"));
        assert_eq!(store.load(), platform::default_download_dir());
    }

    #[test]
    fn test_whitespace_only_file_falls_back_to_downloads() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("config.txt");
        std::fs::write(&file, "  \n").unwrap();
        assert_eq!(FolderStore::new(file).load(), platform::default_download_dir());
    }

    #[test]
    fn test_contents_are_trimmed_and_accepted_as_is() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("config.txt");
        std::fs::write(&file, "  not/a/real folder \n").unwrap();
        assert_eq!(
            FolderStore::new(file).load(),
            PathBuf::from("not/a/real folder")
        );
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("nested").join("config.txt");
        let store = FolderStore::new(&file);
        store.save(Path::new("/videos")).unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "/videos");
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let temp = TempDir::new().unwrap();
        let store = FolderStore::new(temp.path().join("config.txt"));
        store.save(Path::new("/first")).unwrap();
        store.save(Path::new("/second")).unwrap();
        assert_eq!(store.load(), PathBuf::from("/second"));
    }

    #[test]
    fn test_legacy_file_used_until_first_save() {
        let temp = TempDir::new().unwrap();
        let primary = temp.path().join("clipfetch").join("config.txt");
        let legacy = temp.path().join("config.txt");
        std::fs::write(&legacy, "/old/videos\n").unwrap();

        let store = FolderStore::new(&primary).with_legacy(&legacy);
        assert_eq!(store.load(), PathBuf::from("/old/videos"));

        store.save(Path::new("/new/videos")).unwrap();
        assert_eq!(store.load(), PathBuf::from("/new/videos"));
        assert_eq!(std::fs::read_to_string(&legacy).unwrap(), "/old/videos\n");
    }

    #[test]
    fn test_primary_file_wins_over_legacy() {
        let temp = TempDir::new().unwrap();
        let primary = temp.path().join("primary.txt");
        let legacy = temp.path().join("config.txt");
        std::fs::write(&primary, "/current").unwrap();
        std::fs::write(&legacy, "/old").unwrap();

        let store = FolderStore::new(&primary).with_legacy(&legacy);
        assert_eq!(store.load(), PathBuf::from("/current"));
    }

    #[test]
    fn test_missing_legacy_falls_back_to_downloads() {
        let temp = TempDir::new().unwrap();
        let store = FolderStore::new(temp.path().join("config.txt"))
            .with_legacy(temp.path().join("missing.txt"));
        assert_eq!(store.load(), platform::default_download_dir());
    }
}
