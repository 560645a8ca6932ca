//! Presentation layer for replymate
//!
//! This crate contains the terminal chat interface, CLI definitions,
//! the one-shot output formatter, and the drafting spinner.

pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::DraftSpinner;
pub use tui::TuiApp;
