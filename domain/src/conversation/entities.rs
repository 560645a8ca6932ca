//! Conversation domain entities

use serde::{Deserialize, Serialize};

/// Originator of a turn in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Model,
}

/// A single message in a conversation (Entity)
///
/// Immutable once created. Ordering is significant: insertion order is
/// display order is conversational-history order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }

    /// Whether this turn was authored by the model.
    pub fn is_model(&self) -> bool {
        self.role == Role::Model
    }
}
