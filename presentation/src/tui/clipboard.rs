//! System clipboard access
//!
//! A copy failure is logged as a warning and surfaced only as a status-bar
//! flash; it never touches conversation state.

use tracing::warn;

/// Copy text to the system clipboard. Returns whether it worked.
pub fn copy_text(text: &str) -> bool {
    let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("clipboard unavailable: {e}");
            false
        }
    }
}
