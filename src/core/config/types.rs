//! Public configuration types.
//!
//! These are the resolved, ready-to-use structs the server consumes.
//! Raw TOML deserialization types live in `raw.rs`.

use std::path::PathBuf;

// ── LLM ──────────────────────────────────────────────────────────────────────

/// Completion gateway configuration.
/// Populated from `[llm]` in the TOML, with `LLM_*` env overrides.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Backend name: `openai` (any `/v1/chat/completions` endpoint) or `dummy`.
    pub provider: String,
    /// Full chat completions endpoint URL.
    pub api_base_url: String,
    /// Model name passed in the request body.
    pub model: String,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

// ── Top-level ────────────────────────────────────────────────────────────────

/// Fully resolved configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address for the HTTP listener.
    pub bind: String,
    pub log_level: String,
    /// Location of the merchant profile JSON, re-read on every request.
    pub profile_path: PathBuf,
    pub llm: LlmConfig,
    /// Sourced from `LLM_API_KEY` (or `TOGETHER_API_KEY`), never from TOML.
    pub llm_api_key: Option<String>,
}
