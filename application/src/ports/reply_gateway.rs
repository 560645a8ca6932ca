//! Reply gateway port
//!
//! Defines the interface for the external reply-drafting service.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Error for a failed reply request.
///
/// Every upstream failure — transport, non-2xx status, malformed body,
/// timeout — collapses into this one kind. Callers log the detail for
/// diagnostics and otherwise treat all failures identically; nothing
/// downstream branches on the cause.
#[derive(Error, Debug, Clone)]
#[error("reply request failed: {0}")]
pub struct UpstreamError(String);

impl UpstreamError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }
}

/// Gateway to the reply-drafting service.
///
/// Implementations (adapters) live in the infrastructure layer. Credentials
/// are validated when the gateway itself is constructed; creating a session
/// is pure local state and cannot fail.
pub trait ReplyGateway: Send + Sync {
    /// Create a session carrying the given persona instruction.
    ///
    /// The handle is created once at startup, held for the process
    /// lifetime, and never recreated.
    fn create_session(&self, persona: &str) -> Arc<dyn ReplySession>;
}

/// An active reply session.
///
/// The handle preserves conversational context across calls; callers only
/// transmit the next user turn, never the accumulated history.
#[async_trait]
pub trait ReplySession: Send + Sync {
    /// Send one user turn and await exactly one reply.
    ///
    /// This is the single suspension point of the application. No retry.
    async fn send(&self, user_text: &str) -> Result<String, UpstreamError>;
}
