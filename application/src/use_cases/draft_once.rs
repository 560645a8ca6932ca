//! One-shot reply drafting.
//!
//! Drafts a single reply outside the chat loop: validate the scenario,
//! send it, return the reply text. Used by the CLI when a scenario is
//! passed as an argument instead of entering chat mode.
//!
//! Unlike [`ChatOrchestrator`](super::chat::ChatOrchestrator), there is no
//! turn sequence to protect here, so upstream errors propagate to the
//! caller instead of becoming a fallback turn.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::reply_gateway::{ReplySession, UpstreamError};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during one-shot drafting.
#[derive(Error, Debug)]
pub enum DraftOnceError {
    #[error("scenario must not be empty")]
    EmptyScenario,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Use case for drafting a single auto-reply.
pub struct DraftOnceUseCase {
    session: Arc<dyn ReplySession>,
    logger: Arc<dyn ConversationLogger>,
}

impl DraftOnceUseCase {
    pub fn new(session: Arc<dyn ReplySession>) -> Self {
        Self {
            session,
            logger: Arc::new(NoConversationLogger),
        }
    }

    /// Attach a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Draft one reply for the described scenario.
    pub async fn execute(&self, scenario: &str) -> Result<String, DraftOnceError> {
        if scenario.trim().is_empty() {
            return Err(DraftOnceError::EmptyScenario);
        }

        info!("drafting one-shot reply");
        self.logger.log(ConversationEvent::new(
            "turn_submitted",
            serde_json::json!({ "text": scenario }),
        ));

        let reply = self.session.send(scenario).await.inspect_err(|e| {
            self.logger.log(ConversationEvent::new(
                "reply_failed",
                serde_json::json!({ "error": e.to_string() }),
            ));
        })?;

        self.logger.log(ConversationEvent::new(
            "reply_received",
            serde_json::json!({ "bytes": reply.len(), "text": reply }),
        ));

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedSession {
        outcome: Result<String, UpstreamError>,
    }

    #[async_trait]
    impl ReplySession for FixedSession {
        async fn send(&self, _user_text: &str) -> Result<String, UpstreamError> {
            self.outcome.clone()
        }
    }

    #[tokio::test]
    async fn test_draft_once_returns_reply() {
        let use_case = DraftOnceUseCase::new(Arc::new(FixedSession {
            outcome: Ok("On it!".to_string()),
        }));

        let reply = use_case.execute("A client texted about the invoice.").await;
        assert_eq!(reply.unwrap(), "On it!");
    }

    #[tokio::test]
    async fn test_draft_once_rejects_empty_scenario() {
        let use_case = DraftOnceUseCase::new(Arc::new(FixedSession {
            outcome: Ok("unused".to_string()),
        }));

        let result = use_case.execute("   ").await;
        assert!(matches!(result, Err(DraftOnceError::EmptyScenario)));
    }

    #[tokio::test]
    async fn test_draft_once_propagates_upstream_error() {
        let use_case = DraftOnceUseCase::new(Arc::new(FixedSession {
            outcome: Err(UpstreamError::new("HTTP 429")),
        }));

        let result = use_case.execute("test").await;
        assert!(matches!(result, Err(DraftOnceError::Upstream(_))));
    }
}
