//! Gemini session handle.
//!
//! [`GeminiSession`] implements [`ReplySession`] for one long-lived
//! conversation. The `generateContent` endpoint keeps no server-side chat
//! state, so the handle itself preserves conversational context: it
//! accumulates the turn history and re-transmits it, together with the
//! persona instruction, on every call. Callers only ever see "send one
//! turn, get one reply".

use crate::gemini::error::{GeminiError, Result};
use crate::gemini::types::{Content, ErrorResponse, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use replymate_application::ports::reply_gateway::{ReplySession, UpstreamError};
use tokio::sync::Mutex;
use tracing::debug;

/// An active conversation session against a Gemini model.
pub struct GeminiSession {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    system_instruction: Content,
    history: Mutex<Vec<Content>>,
}

impl GeminiSession {
    pub(crate) fn new(
        client: reqwest::Client,
        endpoint: String,
        api_key: String,
        persona: &str,
    ) -> Self {
        Self {
            client,
            endpoint,
            api_key,
            system_instruction: Content::system(persona),
            history: Mutex::new(Vec::new()),
        }
    }

    /// Sends the next user turn and waits for the complete reply.
    async fn request_reply(&self, user_text: &str) -> Result<String> {
        // The lock is held across the request. That is intentional: the
        // caller enforces a single in-flight request anyway, and holding it
        // keeps history reads and writes atomic per call.
        let mut history = self.history.lock().await;

        let mut contents = history.clone();
        contents.push(Content::user(user_text));

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(self.system_instruction.clone()),
        };

        debug!(
            "sending turn {} to {}",
            history.len() / 2 + 1,
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // The error body is itself JSON when the API produced it;
            // fall back to the raw body for proxy-level failures.
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::ParseError {
                error: e.to_string(),
                raw: body,
            })?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "usage: prompt={:?} reply={:?} tokens",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        let candidate = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or(GeminiError::NoCandidates)?;
        let reply = candidate
            .content
            .ok_or(GeminiError::EmptyReply)?
            .text();
        if reply.is_empty() {
            return Err(GeminiError::EmptyReply);
        }

        // Record history only on success so a failed call leaves the
        // handle's context exactly as before the attempt.
        history.push(Content::user(user_text));
        history.push(Content::model(reply.as_str()));

        Ok(reply)
    }

    /// Number of turns currently held by the handle.
    pub async fn history_len(&self) -> usize {
        self.history.lock().await.len()
    }
}

#[async_trait]
impl ReplySession for GeminiSession {
    async fn send(&self, user_text: &str) -> std::result::Result<String, UpstreamError> {
        self.request_reply(user_text)
            .await
            .map_err(|e| UpstreamError::new(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GeminiSession {
        GeminiSession::new(
            reqwest::Client::new(),
            "http://localhost/v1beta/models/test:generateContent".to_string(),
            "test-key".to_string(),
            "be brief",
        )
    }

    #[tokio::test]
    async fn test_new_session_has_empty_history() {
        let session = session();
        assert_eq!(session.history_len().await, 0);
    }

    #[tokio::test]
    async fn test_persona_becomes_roleless_system_instruction() {
        let session = session();
        assert!(session.system_instruction.role.is_none());
        assert_eq!(session.system_instruction.text(), "be brief");
    }
}
