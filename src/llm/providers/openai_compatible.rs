//! OpenAI-compatible chat completion provider (`/v1/chat/completions`).
//!
//! Works against Together AI, OpenAI and local compatible servers. All wire
//! types are private to this module. Each call is a single round-trip with
//! the client-wide timeout; failures are classified into [`ProviderError`]
//! kinds and logged here, once, with the upstream detail.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace, warn};

use crate::llm::{BuildError, CompletionOutcome, CompletionRequest, ProviderError};

// ── Public provider ───────────────────────────────────────────────────────────

/// Constructed once at startup, then cheaply cloned because
/// `reqwest::Client` is an `Arc` internally.
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleProvider {
    client: Client,
    api_base_url: String,
    api_key: Option<String>,
}

impl OpenAiCompatibleProvider {
    /// `api_key` is `None` for keyless local models. When present it is sent
    /// as `Authorization: Bearer <key>` on every request.
    pub fn new(
        api_base_url: String,
        timeout_seconds: u64,
        api_key: Option<String>,
    ) -> Result<Self, BuildError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| BuildError::Client(e.to_string()))?;

        Ok(Self { client, api_base_url, api_key })
    }

    pub async fn complete(&self, request: &CompletionRequest) -> CompletionOutcome {
        let payload = ChatCompletionRequest {
            model: &request.model,
            messages: [
                Message { role: "system", content: &request.system_prompt },
                Message { role: "user", content: &request.user_message },
            ],
            max_tokens: request.params.max_tokens,
            temperature: request.params.temperature,
            top_p: request.params.top_p,
        };

        debug!(
            model = %payload.model,
            prompt_len = request.system_prompt.len(),
            content_len = request.user_message.len(),
            "sending LLM request"
        );
        if tracing::enabled!(tracing::Level::TRACE) {
            let json = serde_json::to_string_pretty(&payload)
                .unwrap_or_else(|e| format!("<serialization failed: {e}>"));
            trace!(payload = %json, "full LLM request payload");
        }

        let mut req = self.client.post(&self.api_base_url).json(&payload);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let response = req.send().await.map_err(|e| self.classify(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            error!(
                url = %self.api_base_url,
                %status,
                upstream_message = %upstream_error_message(&body),
                "LLM request returned HTTP error"
            );
            return Err(ProviderError::Api { status: status.as_u16(), body });
        }

        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes).map_err(|e| {
            error!(error = %e, "failed to deserialize LLM response");
            ProviderError::Unexpected(format!("failed to parse response body: {e}"))
        })?;

        debug!(choices = parsed.choices.len(), "received LLM response");

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                warn!(url = %self.api_base_url, "LLM response carried no candidates");
                ProviderError::Empty
            })
    }

    /// Map a reqwest failure to a kind and log it.
    fn classify(&self, e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            warn!(url = %self.api_base_url, error = %e, "LLM request timed out");
            ProviderError::Timeout
        } else if e.is_connect() || e.is_request() || e.is_body() || e.is_redirect() {
            error!(url = %self.api_base_url, error = %e, "LLM HTTP request failed (transport)");
            ProviderError::Transport(e.to_string())
        } else {
            error!(url = %self.api_base_url, error = %e, "LLM HTTP request failed");
            ProviderError::Unexpected(e.to_string())
        }
    }
}

// ── Private wire types ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

// Error envelope used by OpenAI and compatible APIs.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Best-effort extraction of the upstream's error message for logs.
fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|env| env.error.message)
        .unwrap_or_else(|_| body.to_string())
}
