//! Application layer for replymate
//!
//! This crate contains use cases and port definitions. It depends only on
//! the domain layer; adapters for the ports live in the infrastructure
//! layer, and the event consumers live in the presentation layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    reply_gateway::{ReplyGateway, ReplySession, UpstreamError},
    ui_event::UiEvent,
};
pub use use_cases::chat::{ChatCommand, ChatOrchestrator};
pub use use_cases::draft_once::{DraftOnceError, DraftOnceUseCase};
