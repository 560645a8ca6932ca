//! UI events emitted by the chat orchestrator for presentation rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer. Every conversation mutation produces exactly one
//! event, so applying the stream in order reproduces the store state.

use replymate_domain::Turn;

/// Events the presentation layer renders from.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// A turn was appended to the conversation.
    TurnAppended(Turn),
    /// The busy flag changed: `true` when a reply request is dispatched,
    /// `false` when its response or failure has been applied.
    BusyChanged(bool),
}
