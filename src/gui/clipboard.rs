//! Clipboard access for the Paste button

use arboard::Clipboard;

/// Read text from the system clipboard, trimmed.
pub fn read_url() -> Result<String, String> {
    let mut clipboard =
        Clipboard::new().map_err(|e| format!("Failed to access clipboard: {}", e))?;

    let text = clipboard
        .get_text()
        .map_err(|e| format!("Failed to read clipboard: {}", e))?;

    Ok(text.trim().to_string())
}
