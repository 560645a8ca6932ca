//! TUI (Text User Interface) module for replymate
//!
//! A terminal chat interface built on ratatui: conversation pane, input
//! box, busy spinner, and a status bar with key hints. Events flow in
//! from the orchestrator over a channel; submissions flow back out as
//! commands.

mod app;
mod clipboard;
mod layout;
mod mode;
mod state;
mod widgets;

pub use app::TuiApp;
pub use mode::{InputMode, KeyAction, KeyHandler};
pub use state::TuiState;
