//! Dummy LLM provider. Echoes the user message back prefixed with `[echo]`.
//! Lets the whole chat pipeline run without an API key.

use crate::llm::{CompletionOutcome, CompletionRequest};

#[derive(Debug, Clone)]
pub struct DummyProvider;

impl DummyProvider {
    pub async fn complete(&self, request: &CompletionRequest) -> CompletionOutcome {
        Ok(format!("[echo] {}", request.user_message))
    }
}
