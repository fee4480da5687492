use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::CompletionService;
use crate::domain::{DomainError, SessionConfig, Turn};

const DEFAULT_BASE_URL: &str = "https://api.groq.com";
const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";

/// Chat-completions request payload.
#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the chat-completions response we care about. Every
/// level is optional so a well-formed body without usable content maps to
/// "no reply" instead of a parse error.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: Option<ApiChoiceMessage>,
}

#[derive(Deserialize)]
struct ApiChoiceMessage {
    content: Option<String>,
}

/// HTTP client for the Groq chat-completions endpoint.
///
/// Implements [`CompletionService`] so the exchange controller stays
/// decoupled from transport and serialization details. The endpoint is
/// fixed in production; [`GroqClient::with_base_url`] exists so tests can
/// point the adapter at a local server.
pub struct GroqClient {
    client: reqwest::Client,
    url: String,
}

impl GroqClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Pull the first choice's message content out of a parsed response.
    /// Empty content counts as absent.
    fn extract_content(response: ApiResponse) -> Option<String> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
    }
}

impl Default for GroqClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionService for GroqClient {
    async fn complete(
        &self,
        turns: &[Turn],
        config: &SessionConfig,
    ) -> Result<Option<String>, DomainError> {
        let request = ApiRequest {
            model: config.model().as_str(),
            messages: turns
                .iter()
                .map(|turn| ApiMessage {
                    role: turn.role().as_str(),
                    content: turn.content(),
                })
                .collect(),
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(config.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::network(format!("GroqClient: request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("GroqClient: API returned {status}: {body}");
            return Err(DomainError::api(format!("GroqClient: API returned {status}")));
        }

        let body = response.text().await.map_err(|e| {
            DomainError::network(format!("GroqClient: failed to read response body: {e}"))
        })?;

        let api_response: ApiResponse = serde_json::from_str(&body).map_err(|e| {
            DomainError::malformed(format!("GroqClient: response is not valid JSON: {e}"))
        })?;

        let content = Self::extract_content(api_response);
        if content.is_none() {
            debug!("GroqClient: response carried no message content");
        }

        Ok(content)
    }
}
