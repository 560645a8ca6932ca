//! Gemini reply gateway implementation

use crate::config::{ConfigurationError, FileModelConfig};
use crate::gemini::session::GeminiSession;
use replymate_application::ports::reply_gateway::{ReplyGateway, ReplySession};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Environment variable holding the service credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Reply gateway backed by the Gemini `generateContent` endpoint.
pub struct GeminiReplyGateway {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiReplyGateway {
    /// Construct the gateway from the environment.
    ///
    /// Fails when [`API_KEY_ENV`] is absent. This is a startup-only check:
    /// the process must not reach message handling without the credential.
    pub fn from_env(config: &FileModelConfig) -> Result<Self, ConfigurationError> {
        Self::from_credential(std::env::var(API_KEY_ENV).ok(), config)
    }

    /// Construct the gateway from an optional credential value.
    pub fn from_credential(
        api_key: Option<String>,
        config: &FileModelConfig,
    ) -> Result<Self, ConfigurationError> {
        let api_key = api_key
            .filter(|k| !k.is_empty())
            .ok_or(ConfigurationError::MissingCredential(API_KEY_ENV))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("HTTP client construction");

        info!("Gemini gateway initialized for model {}", config.name);

        Ok(Self {
            client,
            api_key,
            model: config.name.clone(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the API base URL (for tests against a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl ReplyGateway for GeminiReplyGateway {
    fn create_session(&self, persona: &str) -> Arc<dyn ReplySession> {
        Arc::new(GeminiSession::new(
            self.client.clone(),
            self.endpoint(),
            self.api_key.clone(),
            persona,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_is_fatal() {
        let result = GeminiReplyGateway::from_credential(None, &FileModelConfig::default());
        assert!(matches!(
            result,
            Err(ConfigurationError::MissingCredential(API_KEY_ENV))
        ));
    }

    #[test]
    fn test_empty_credential_is_fatal() {
        let result =
            GeminiReplyGateway::from_credential(Some(String::new()), &FileModelConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_endpoint_includes_model_name() {
        let gateway = GeminiReplyGateway::from_credential(
            Some("test-key".to_string()),
            &FileModelConfig::default(),
        )
        .unwrap();

        assert_eq!(
            gateway.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_base_url_override() {
        let gateway = GeminiReplyGateway::from_credential(
            Some("test-key".to_string()),
            &FileModelConfig::default(),
        )
        .unwrap()
        .with_base_url("http://localhost:8080/");

        assert_eq!(
            gateway.endpoint(),
            "http://localhost:8080/models/gemini-2.5-flash:generateContent"
        );
    }
}
