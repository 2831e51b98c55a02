//! ClipFetch - 4K Video Downloader
//!
//! Paste a video URL, pick one of the resolutions yt-dlp reports for it, and
//! download it merged into a single mp4 with ffmpeg.

use anyhow::{bail, Context, Result};
use clap::Parser;
use clipfetch::downloader::{DownloadOrchestrator, SessionEvent};
use clipfetch::extractor::{Extractor, YtDlpExtractor};
use clipfetch::gui::{dialog, AppFlags, ClipFetchApp};
use clipfetch::quality::{QualityResolver, Resolution};
use clipfetch::utils::{AppSettings, FolderStore};
use iced::Application;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(version, about = "Download online videos at a chosen resolution")]
struct Args {
    /// yt-dlp binary to use instead of searching for one
    #[arg(long, value_name = "PATH")]
    ytdlp: Option<PathBuf>,

    /// ffmpeg binary handed to yt-dlp for merging and conversion
    #[arg(long, value_name = "PATH")]
    ffmpeg: Option<PathBuf>,

    /// File that remembers the last download folder
    #[arg(long, value_name = "PATH")]
    config_file: Option<PathBuf>,

    /// Print the available resolutions for URL and exit
    #[arg(long, value_name = "URL", conflicts_with = "download")]
    list_qualities: Option<String>,

    /// Download URL without opening the window
    #[arg(long, value_name = "URL", requires = "quality")]
    download: Option<String>,

    /// Resolution for --download, e.g. 720 or 720p
    #[arg(long, value_name = "HEIGHT")]
    quality: Option<String>,

    /// Output folder for --download (defaults to the saved folder)
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> AppSettings {
        let mut settings = AppSettings::default();
        if let Some(path) = &self.ytdlp {
            settings.ytdlp_path = Some(path.clone());
        }
        if let Some(path) = &self.ffmpeg {
            settings.ffmpeg_location = path.clone();
        }
        if let Some(path) = &self.config_file {
            settings.config_file = path.clone();
            settings.legacy_config_file = None;
        }
        settings
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let settings = args.settings();
    let runtime = Arc::new(Runtime::new().context("Failed to create tokio runtime")?);

    let extractor: Arc<dyn Extractor> = match init_extractor(&settings, &runtime) {
        Ok(extractor) => extractor,
        Err(e) => {
            if args.list_qualities.is_none() && args.download.is_none() {
                dialog::show_error(&format!("{:#}", e));
            }
            return Err(e);
        }
    };

    if let Some(url) = &args.list_qualities {
        return runtime.block_on(list_qualities_cli(extractor, &settings, url));
    }

    if let Some(url) = &args.download {
        let quality = args.quality.as_deref().unwrap_or_default();
        let folder = args
            .output
            .clone()
            .unwrap_or_else(|| FolderStore::from_settings(&settings).load());
        return runtime.block_on(download_cli(extractor, &settings, url, quality, folder));
    }

    // Start the GUI application (synchronous entrypoint)
    ClipFetchApp::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(800.0, 600.0),
            min_size: Some(iced::Size::new(640.0, 480.0)),
            exit_on_close_request: false,
            ..Default::default()
        },
        antialiasing: true,
        ..iced::Settings::with_flags(AppFlags {
            settings,
            extractor,
            runtime: Arc::clone(&runtime),
        })
    })?;

    // Give cancelled engine processes a moment to be reaped
    if let Ok(runtime) = Arc::try_unwrap(runtime) {
        runtime.shutdown_timeout(Duration::from_secs(2));
    }

    Ok(())
}

fn init_extractor(settings: &AppSettings, runtime: &Runtime) -> Result<Arc<dyn Extractor>> {
    let extractor = match &settings.ytdlp_path {
        Some(path) => YtDlpExtractor::with_path(path),
        None => YtDlpExtractor::new()?,
    };

    match runtime.block_on(extractor.version()) {
        Ok(version) => info!(
            "Using yt-dlp {} at {}",
            version,
            extractor.ytdlp_path().display()
        ),
        Err(e) => warn!(
            "Could not run {}: {}. Downloads will fail until yt-dlp is installed",
            extractor.ytdlp_path().display(),
            e
        ),
    }

    Ok(Arc::new(extractor))
}

async fn list_qualities_cli(
    extractor: Arc<dyn Extractor>,
    settings: &AppSettings,
    url: &str,
) -> Result<()> {
    let resolver = QualityResolver::new(extractor, settings.min_height);
    let qualities = resolver.fetch(url).await?;

    for (resolution, format_id) in qualities.iter() {
        println!("{:>6}  {}", resolution.to_string(), format_id);
    }
    Ok(())
}

async fn download_cli(
    extractor: Arc<dyn Extractor>,
    settings: &AppSettings,
    url: &str,
    quality: &str,
    folder: PathBuf,
) -> Result<()> {
    let Some(resolution) = Resolution::parse_label(quality) else {
        bail!("Invalid quality '{}', expected a height such as 720", quality);
    };

    println!("Fetching qualities for {}", url);
    let resolver = QualityResolver::new(Arc::clone(&extractor), settings.min_height);
    let qualities = resolver.fetch(url).await?;

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let mut orchestrator = DownloadOrchestrator::new(
        extractor,
        tokio::runtime::Handle::current(),
        events_tx,
        settings,
    );
    let prepared = orchestrator.download(url, Some(resolution), &qualities, &folder)?;
    println!("Saving to {}", folder.display());

    let mut title = String::new();
    while let Some(event) = events_rx.recv().await {
        match event {
            SessionEvent::TitleResolved { title: t, .. } => {
                println!("{} - {}", t, prepared.resolution);
                title = t;
            }
            SessionEvent::Progress { percent, .. } => println!("Progress: {:.1}%", percent),
            SessionEvent::Finished { .. } => println!("{} - Download Complete ✅", title),
            SessionEvent::Destination { path, .. } => println!("Saved {}", path.display()),
            SessionEvent::Completed { .. } => break,
            SessionEvent::Failed { error, .. } => {
                println!("{} - Download Failed ❌", title);
                bail!(error);
            }
            SessionEvent::Cancelled { .. } => bail!("Download cancelled"),
        }
    }

    orchestrator.shutdown().await;
    Ok(())
}
