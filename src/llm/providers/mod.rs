//! LLM provider implementations.
//!
//! `build(config, api_key)` is the factory, called once at startup.

pub mod dummy;
pub mod openai_compatible;

use crate::config::LlmConfig;
use crate::llm::{BuildError, LlmProvider};

/// Construct a `LlmProvider` from config and an optional API key.
pub fn build(config: &LlmConfig, api_key: Option<String>) -> Result<LlmProvider, BuildError> {
    match config.provider.as_str() {
        "dummy" => Ok(LlmProvider::Dummy(dummy::DummyProvider)),
        "openai" | "openai-compatible" | "together" => {
            let p = openai_compatible::OpenAiCompatibleProvider::new(
                config.api_base_url.clone(),
                config.timeout_seconds,
                api_key,
            )?;
            Ok(LlmProvider::OpenAiCompatible(p))
        }
        _ => Err(BuildError::UnknownProvider(config.provider.clone())),
    }
}
