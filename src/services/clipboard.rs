//! System clipboard access for the contact section's copy buttons.

use arboard::Clipboard;

/// Copy the given text to the system clipboard.
pub fn copy_text(text: &str) -> Result<(), String> {
    Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text))
        .map_err(|e| {
            let message = format!("clipboard copy failed: {e}");
            tracing::error!("{message}");
            message
        })
}
