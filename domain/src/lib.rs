//! Domain layer for replymate
//!
//! This crate contains the conversation model and the assistant's prompt
//! text. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation
//!
//! A conversation is an append-only sequence of [`Turn`]s plus a busy flag.
//! The busy flag is the admission-control mechanism for the whole
//! application: while a reply request is in flight, new submissions are
//! dropped rather than queued.
//!
//! ## Turns
//!
//! Every message is a [`Turn`] tagged with its originator ([`Role::User`]
//! or [`Role::Model`]). Turns are immutable once created; display order is
//! insertion order.

pub mod conversation;
pub mod prompt;

// Re-export commonly used types
pub use conversation::{
    entities::{Role, Turn},
    store::Conversation,
};
