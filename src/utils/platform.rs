//! Platform-specific utilities for ClipFetch
//!
//! This module provides cross-platform abstractions for:
//! - Application directories (config, downloads)
//! - Locating the external yt-dlp and ffmpeg binaries

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Returns the configuration directory
/// - macOS: ~/Library/Application Support/ClipFetch
/// - Windows: %APPDATA%\ClipFetch
/// - Linux: ~/.config/clipfetch
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(if cfg!(target_os = "linux") {
            "clipfetch"
        } else {
            "ClipFetch"
        })
}

/// Returns the OS default downloads directory.
///
/// Falls back to `~/Downloads` when the platform lookup fails, and to the
/// temp directory as a last resort so the result is never relative.
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| {
            warn!("Could not determine Downloads directory, using temp dir");
            std::env::temp_dir()
        })
}

/// Platform-specific executable extension
pub fn exe_extension() -> &'static str {
    #[cfg(target_os = "windows")]
    {
        ".exe"
    }
    #[cfg(not(target_os = "windows"))]
    {
        ""
    }
}

/// Find yt-dlp with priority:
/// 1. Next to the executable (bundled builds)
/// 2. System PATH
/// 3. Common installation paths
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Some(bundled) = find_adjacent("yt-dlp") {
        info!("Using bundled yt-dlp: {:?}", bundled);
        return Some(bundled);
    }

    if let Ok(system) = which::which("yt-dlp") {
        info!("Using system yt-dlp: {:?}", system);
        return Some(system);
    }

    let common_paths = [
        // macOS Homebrew (Apple Silicon)
        "/opt/homebrew/bin/yt-dlp",
        // macOS Homebrew (Intel)
        "/usr/local/bin/yt-dlp",
        "/usr/bin/yt-dlp",
        "/Library/Frameworks/Python.framework/Versions/Current/bin/yt-dlp",
        "~/.local/bin/yt-dlp",
    ];

    for path_str in common_paths {
        let expanded = expand_home(path_str);
        if is_executable(&expanded) {
            info!("Using yt-dlp from common path: {:?}", expanded);
            return Some(expanded);
        }
    }

    warn!("yt-dlp not found anywhere!");
    None
}

/// Resolve the ffmpeg location handed to yt-dlp.
///
/// The configured path wins when it exists. Otherwise a bundled or PATH
/// ffmpeg is used. When nothing is found the configured path is returned
/// unchanged so the mismatch surfaces when yt-dlp runs.
pub fn resolve_ffmpeg(configured: &Path) -> PathBuf {
    if configured.exists() {
        return configured.to_path_buf();
    }

    let discovered = find_adjacent("ffmpeg").or_else(|| which::which("ffmpeg").ok());
    match discovered {
        Some(path) => {
            debug!(
                "Configured ffmpeg {:?} missing, using discovered {:?}",
                configured, path
            );
            path
        }
        None => {
            warn!("ffmpeg not found; keeping configured path {:?}", configured);
            configured.to_path_buf()
        }
    }
}

fn find_adjacent(name: &str) -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let exe_dir = exe_path.parent()?;
    let candidate = exe_dir.join(format!("{}{}", name, exe_extension()));
    is_executable(&candidate).then_some(candidate)
}

fn expand_home(path_str: &str) -> PathBuf {
    match path_str.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path_str)),
        None => PathBuf::from(path_str),
    }
}

/// Check if a file is executable
fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        std::fs::metadata(path)
            .map(|metadata| metadata.is_file() && metadata.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    {
        path.is_file()
    }
}
