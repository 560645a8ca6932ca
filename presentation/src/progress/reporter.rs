//! Drafting spinner for one-shot mode
//!
//! The console equivalent of the TUI's busy affordance: visible exactly
//! while the single reply request is in flight.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while a reply is being drafted
pub struct DraftSpinner {
    bar: ProgressBar,
}

impl DraftSpinner {
    pub fn start() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        bar.set_message("Drafting reply…");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Stop the spinner and clear its line
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
