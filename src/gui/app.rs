//! Main GUI application

use crate::downloader::{
    DownloadOrchestrator, DownloadSession, SessionEvent, SessionId, SessionList,
};
use crate::extractor::Extractor;
use crate::gui::{clipboard, dialog, theme};
use crate::quality::{QualityMap, QualityResolver, QualitySelection};
use crate::utils::config::AppSettings;
use crate::utils::error::ClipFetchError;
use crate::utils::folder_store::FolderStore;
use iced::widget::container;
use iced::{event, window, Application, Command, Element, Event, Length, Subscription, Theme};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Everything the application needs from `main`.
pub struct AppFlags {
    pub settings: AppSettings,
    pub extractor: Arc<dyn Extractor>,
    /// Long-lived runtime that owns every download task
    pub runtime: Arc<Runtime>,
}

/// Main application state
pub struct ClipFetchApp {
    runtime: Arc<Runtime>,
    resolver: QualityResolver,
    orchestrator: DownloadOrchestrator,
    events: mpsc::UnboundedReceiver<SessionEvent>,
    folder_store: FolderStore,

    // UI state
    url_input: String,
    qualities: QualitySelection,
    is_fetching: bool,
    download_folder: PathBuf,
    sessions: SessionList,
    status_message: String,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    UrlInputChanged(String),
    PasteFromClipboard,
    ClearUrlInput,

    // Quality lookup
    CheckQualities,
    QualitiesFetched(Result<QualityMap, String>),
    QualitySelected(String),

    // Folder and downloads
    ChooseFolder,
    DownloadPressed,
    CancelDownload(SessionId),
    ShowInFolder(SessionId),

    // System
    Tick,
    CloseRequested,
}

impl Application for ClipFetchApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        let AppFlags {
            settings,
            extractor,
            runtime,
        } = flags;

        let folder_store = FolderStore::from_settings(&settings);
        let download_folder = folder_store.load();
        info!("Download location: {}", download_folder.display());

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let resolver = QualityResolver::new(Arc::clone(&extractor), settings.min_height);
        let orchestrator =
            DownloadOrchestrator::new(extractor, runtime.handle().clone(), events_tx, &settings);

        let app = Self {
            runtime,
            resolver,
            orchestrator,
            events: events_rx,
            folder_store,
            url_input: String::new(),
            qualities: QualitySelection::default(),
            is_fetching: false,
            download_folder,
            sessions: SessionList::default(),
            status_message: "Ready".to_string(),
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("4K Video Downloader")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::UrlInputChanged(url) => {
                self.url_input = url;
                Command::none()
            }

            Message::PasteFromClipboard => {
                match clipboard::read_url() {
                    Ok(content) => {
                        self.url_input = content;
                        self.status_message = "URL pasted from clipboard".to_string();
                    }
                    Err(e) => {
                        warn!("{}", e);
                        self.status_message = e;
                    }
                }
                Command::none()
            }

            Message::ClearUrlInput => {
                self.url_input.clear();
                Command::none()
            }

            Message::CheckQualities => {
                if self.is_fetching {
                    return Command::none();
                }
                if self.url_input.trim().is_empty() {
                    dialog::show_error("Please enter a video URL");
                    return Command::none();
                }

                self.is_fetching = true;
                self.status_message = "Fetching available qualities...".to_string();

                let resolver = self.resolver.clone();
                let url = self.url_input.clone();
                let task = self.runtime.spawn(async move { resolver.fetch(&url).await });

                Command::perform(
                    async move {
                        match task.await {
                            Ok(result) => result.map_err(|e| fetch_error_message(&e)),
                            Err(e) => Err(format!("Failed to fetch qualities: {}", e)),
                        }
                    },
                    Message::QualitiesFetched,
                )
            }

            Message::QualitiesFetched(result) => {
                self.is_fetching = false;
                match result {
                    Ok(map) => {
                        self.status_message = format!("Found {} qualities", map.len());
                        self.qualities.replace(map);
                    }
                    Err(e) => {
                        // The previous map and selection stay as they were.
                        error!("{}", e);
                        self.status_message = "Ready".to_string();
                        dialog::show_error(&e);
                    }
                }
                Command::none()
            }

            Message::QualitySelected(label) => {
                self.qualities.select_label(&label);
                Command::none()
            }

            Message::ChooseFolder => {
                if let Some(folder) = dialog::pick_folder(&self.download_folder) {
                    match self.folder_store.save(&folder) {
                        Ok(()) => info!("Saved download location {}", folder.display()),
                        Err(e) => {
                            warn!("Could not save download location: {}", e);
                            self.status_message =
                                format!("Could not save download location: {}", e);
                        }
                    }
                    self.download_folder = folder;
                }
                Command::none()
            }

            Message::DownloadPressed => {
                match self.orchestrator.download(
                    &self.url_input,
                    self.qualities.selected(),
                    self.qualities.map(),
                    &self.download_folder,
                ) {
                    Ok(prepared) => {
                        self.sessions.push(DownloadSession::new(&prepared));
                        self.status_message = format!("Downloading at {}", prepared.resolution);
                    }
                    Err(e) => dialog::show_error(&e.to_string()),
                }
                Command::none()
            }

            Message::CancelDownload(id) => {
                if self.orchestrator.cancel(id) {
                    self.status_message = "Cancelling download...".to_string();
                }
                Command::none()
            }

            Message::ShowInFolder(id) => {
                let folder = self
                    .sessions
                    .get(id)
                    .and_then(|s| s.destination.as_ref())
                    .and_then(|path| path.parent())
                    .map(PathBuf::from)
                    .unwrap_or_else(|| self.download_folder.clone());
                if let Err(e) = open::that(&folder) {
                    warn!("Failed to open {}: {}", folder.display(), e);
                    self.status_message = format!("Failed to open folder: {}", e);
                }
                Command::none()
            }

            Message::Tick => {
                while let Ok(event) = self.events.try_recv() {
                    self.apply_event(event);
                }
                Command::none()
            }

            Message::CloseRequested => {
                info!("Window closing, cancelling {} downloads", self.orchestrator.active_count());
                self.orchestrator.cancel_all();
                window::close(window::Id::MAIN)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        use crate::gui::views::{main_view, MainViewState};

        let content = main_view(MainViewState {
            url: &self.url_input,
            qualities: &self.qualities,
            is_fetching: self.is_fetching,
            download_folder: &self.download_folder,
            sessions: &self.sessions,
            status_message: &self.status_message,
        });

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(
                theme::WindowBackground,
            )))
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            iced::time::every(Duration::from_millis(100)).map(|_| Message::Tick),
            event::listen_with(|event, _status| match event {
                Event::Window(_, window::Event::CloseRequested) => Some(Message::CloseRequested),
                _ => None,
            }),
        ])
    }

    fn theme(&self) -> Self::Theme {
        Theme::Light
    }
}

impl ClipFetchApp {
    fn apply_event(&mut self, event: SessionEvent) {
        debug!("Session event: {:?}", event);
        let id = event.session_id();
        let failure = self.sessions.apply(event);

        if let Some(session) = self.sessions.get(id) {
            if !session.is_running() {
                self.status_message = session.label();
            }
        }
        if let Some(message) = failure {
            dialog::show_error(&message);
        }
    }
}

/// Dialog text for a failed quality lookup. Engine errors are shown raw.
fn fetch_error_message(err: &ClipFetchError) -> String {
    match err {
        ClipFetchError::ExtractionError(raw) => format!("Failed to fetch qualities: {}", raw),
        e if e.is_user_error() => e.to_string(),
        e => format!("Failed to fetch qualities: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message() {
        let empty = ClipFetchError::InvalidInput("Please enter a video URL".into());
        assert_eq!(fetch_error_message(&empty), "Please enter a video URL");

        let engine = ClipFetchError::ExtractionError("HTTP Error 404".into());
        assert_eq!(
            fetch_error_message(&engine),
            "Failed to fetch qualities: HTTP Error 404"
        );

        assert_eq!(
            fetch_error_message(&ClipFetchError::NoQualities),
            "Failed to fetch qualities: No downloadable video qualities found"
        );
    }
}
