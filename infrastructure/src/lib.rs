//! Infrastructure layer for replymate
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the Gemini reply gateway, configuration file
//! loading, and the JSONL conversation logger.

pub mod config;
pub mod gemini;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigurationError, FileChatConfig, FileConfig, FileModelConfig};
pub use gemini::{
    error::GeminiError,
    gateway::{API_KEY_ENV, GeminiReplyGateway},
    session::GeminiSession,
};
pub use logging::JsonlConversationLogger;
