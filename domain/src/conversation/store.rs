//! Conversation store
//!
//! [`Conversation`] owns the ordered turn sequence and the busy flag.
//! It is mutated by exactly one logical caller (the chat orchestrator),
//! which also guarantees that at most one reply request is ever in flight.

use super::entities::{Role, Turn};

/// Ordered sequence of turns plus the single-request-in-flight flag.
///
/// Append-only: turns are never edited or removed. `busy` is true iff a
/// reply request has been dispatched and no response or failure has been
/// applied yet.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
    busy: bool,
}

impl Conversation {
    /// Create an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a conversation seeded with one synthetic model turn.
    ///
    /// The greeting is part of the initial store content, not a real model
    /// response.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::model(greeting)],
            busy: false,
        }
    }

    /// Append a turn and return the new sequence.
    pub fn append(&mut self, turn: Turn) -> &[Turn] {
        self.turns.push(turn);
        &self.turns
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent model-authored turn, if any.
    pub fn last_model_turn(&self) -> Option<&Turn> {
        self.turns.iter().rev().find(|t| t.role == Role::Model)
    }
}
