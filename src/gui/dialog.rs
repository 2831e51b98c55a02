//! Modal message dialogs

use rfd::{MessageButtons, MessageDialog, MessageLevel};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Show a blocking error dialog with an OK button.
pub fn show_error(message: &str) {
    debug!("Error dialog: {}", message);
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Error")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Ask for a download folder, starting in `current`.
pub fn pick_folder(current: &Path) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Choose Download Location")
        .set_directory(current)
        .pick_folder()
}
