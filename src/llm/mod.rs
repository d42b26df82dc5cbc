//! Completion gateway and LLM provider abstraction.
//!
//! `LlmProvider` is an enum over concrete provider implementations; add a
//! variant + module in `providers/` for each additional backend.
//! [`CompletionGateway`] pairs a provider with the configured model and
//! generation parameters and is what the chat pipeline talks to.
//!
//! Every call makes exactly one upstream attempt. The outcome is either the
//! first candidate's text or a [`ProviderError`] naming the failure kind.

pub mod providers;

use thiserror::Error;

use crate::config::LlmConfig;

// ── Error ─────────────────────────────────────────────────────────────────────

/// Failure building a provider from config. Startup only.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Failure kinds of a completion call.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Upstream answered with a non-200 status. `body` is for operator logs only.
    #[error("upstream returned HTTP {status}")]
    Api { status: u16, body: String },
    #[error("upstream request timed out")]
    Timeout,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("upstream returned no completion candidates")]
    Empty,
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

/// Result of one completion call: the raw answer text, or why there is none.
pub type CompletionOutcome = Result<String, ProviderError>;

// ── Request ──────────────────────────────────────────────────────────────────

/// Sampling settings, fixed for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl From<&LlmConfig> for GenerationParams {
    fn from(config: &LlmConfig) -> Self {
        Self {
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            top_p: config.top_p,
        }
    }
}

/// Everything a provider needs for one chat turn. Built per turn, never reused.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_message: String,
    pub model: String,
    pub params: GenerationParams,
}

// ── Provider enum ─────────────────────────────────────────────────────────────

/// All available provider backends.
///
/// Enum dispatch avoids `dyn` trait objects and the `async-trait` dependency.
#[derive(Debug, Clone)]
pub enum LlmProvider {
    OpenAiCompatible(providers::openai_compatible::OpenAiCompatibleProvider),
    Dummy(providers::dummy::DummyProvider),
}

impl LlmProvider {
    pub async fn complete(&self, request: &CompletionRequest) -> CompletionOutcome {
        match self {
            LlmProvider::OpenAiCompatible(p) => p.complete(request).await,
            LlmProvider::Dummy(p) => p.complete(request).await,
        }
    }
}

// ── Gateway ──────────────────────────────────────────────────────────────────

/// Configured entry point for completions. Cheap to clone.
#[derive(Debug, Clone)]
pub struct CompletionGateway {
    provider: LlmProvider,
    model: String,
    params: GenerationParams,
}

impl CompletionGateway {
    /// Build from config. `api_key` comes from the environment, never TOML.
    pub fn new(config: &LlmConfig, api_key: Option<String>) -> Result<Self, BuildError> {
        Ok(Self {
            provider: providers::build(config, api_key)?,
            model: config.model.clone(),
            params: GenerationParams::from(config),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `system_prompt` + `user_message` upstream and return the first candidate.
    pub async fn complete(&self, system_prompt: &str, user_message: &str) -> CompletionOutcome {
        let request = CompletionRequest {
            system_prompt: system_prompt.to_string(),
            user_message: user_message.to_string(),
            model: self.model.clone(),
            params: self.params,
        };
        self.provider.complete(&request).await
    }
}
