//! Chat orchestration.
//!
//! [`ChatOrchestrator`] mediates between user submissions and the reply
//! session: it validates input, gates admission on the busy flag, appends
//! turns to the conversation store, and maps failures to the fixed
//! fallback turn.
//!
//! The orchestrator runs as an actor: the presentation layer pushes
//! [`ChatCommand`]s into its inbox and observes [`UiEvent`]s. While a
//! reply is pending, the loop keeps draining the inbox, so a submission
//! that arrives mid-flight is observed and dropped rather than queued
//! behind the pending request.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::reply_gateway::{ReplySession, UpstreamError};
use crate::ports::ui_event::UiEvent;
use replymate_domain::{Conversation, Turn, prompt};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Commands accepted by the orchestrator inbox.
#[derive(Debug)]
pub enum ChatCommand {
    /// Raw text captured by the presentation layer. Validation happens
    /// here, not in the UI.
    Submit(String),
    /// Stop the actor loop.
    Shutdown,
}

/// Chat orchestrator — the only mutator of the conversation store.
///
/// State machine with two states, `Idle` and `AwaitingReply`, where
/// `AwaitingReply` is represented by the busy flag plus the pending send
/// task inside [`run`](Self::run).
pub struct ChatOrchestrator {
    session: Arc<dyn ReplySession>,
    conversation: Conversation,
    events: mpsc::UnboundedSender<UiEvent>,
    logger: Arc<dyn ConversationLogger>,
}

impl ChatOrchestrator {
    /// Create an orchestrator with a greeting-seeded conversation.
    pub fn new(session: Arc<dyn ReplySession>, events: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self {
            session,
            conversation: Conversation::with_greeting(prompt::GREETING),
            events,
            logger: Arc::new(NoConversationLogger),
        }
    }

    /// Attach a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Run the actor loop until the inbox closes or `Shutdown` arrives.
    ///
    /// Returns the final conversation so callers (and tests) can inspect
    /// the transcript after shutdown.
    pub async fn run(mut self, mut commands: mpsc::UnboundedReceiver<ChatCommand>) -> Conversation {
        // Replay seed content so the UI starts from the same state.
        for turn in self.conversation.turns().to_vec() {
            let _ = self.events.send(UiEvent::TurnAppended(turn));
        }

        let mut pending: Option<JoinHandle<Result<String, UpstreamError>>> = None;

        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(ChatCommand::Submit(text)) => {
                        if let Some(prompt_text) = self.begin_submit(&text) {
                            let session = Arc::clone(&self.session);
                            pending = Some(tokio::spawn(async move {
                                session.send(&prompt_text).await
                            }));
                        }
                    }
                    Some(ChatCommand::Shutdown) | None => break,
                },
                outcome = await_pending(&mut pending) => {
                    pending = None;
                    self.apply_outcome(outcome);
                }
            }
        }

        self.conversation
    }

    /// Validate a submission. Returns the prompt to dispatch when accepted.
    ///
    /// Submissions are dropped while a reply is in flight and when the
    /// text is empty after trimming. Accepted text is appended raw —
    /// trimming is for validation only.
    fn begin_submit(&mut self, text: &str) -> Option<String> {
        if self.conversation.is_busy() {
            debug!("submission dropped: reply already in flight");
            return None;
        }
        if text.trim().is_empty() {
            debug!("submission dropped: empty input");
            return None;
        }

        self.append(Turn::user(text));
        self.set_busy(true);
        self.logger.log(ConversationEvent::new(
            "turn_submitted",
            serde_json::json!({ "text": text }),
        ));
        Some(text.to_string())
    }

    /// Apply the resolution of the pending reply request.
    fn apply_outcome(&mut self, outcome: Result<String, UpstreamError>) {
        match outcome {
            Ok(reply) => {
                info!("reply received ({} bytes)", reply.len());
                self.logger.log(ConversationEvent::new(
                    "reply_received",
                    serde_json::json!({ "bytes": reply.len(), "text": reply }),
                ));
                self.append(Turn::model(reply));
            }
            Err(e) => {
                // Full detail goes to diagnostics; the turn sequence only
                // ever sees the fixed fallback text.
                error!("reply request failed: {e}");
                self.logger.log(ConversationEvent::new(
                    "reply_failed",
                    serde_json::json!({ "error": e.to_string() }),
                ));
                self.append(Turn::model(prompt::FALLBACK_REPLY));
            }
        }
        self.set_busy(false);
    }

    fn append(&mut self, turn: Turn) {
        self.conversation.append(turn.clone());
        let _ = self.events.send(UiEvent::TurnAppended(turn));
    }

    fn set_busy(&mut self, busy: bool) {
        self.conversation.set_busy(busy);
        let _ = self.events.send(UiEvent::BusyChanged(busy));
    }
}

/// Await the pending send task, or park forever when none is in flight.
///
/// The select! arm built from this future is simply never ready while
/// idle; dropping the future between loop iterations does not cancel the
/// spawned task.
async fn await_pending(
    pending: &mut Option<JoinHandle<Result<String, UpstreamError>>>,
) -> Result<String, UpstreamError> {
    match pending.as_mut() {
        Some(handle) => match handle.await {
            Ok(outcome) => outcome,
            Err(join_error) => Err(UpstreamError::new(format!(
                "reply task failed: {join_error}"
            ))),
        },
        None => std::future::pending().await,
    }
}
