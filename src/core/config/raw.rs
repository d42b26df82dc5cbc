//! Raw TOML deserialization types.
//!
//! These structs mirror the TOML file shape and use `serde` defaults.
//! The `load` module converts them into the public `types` structs.

use serde::Deserialize;

// ── Top-level ────────────────────────────────────────────────────────────────

/// Raw TOML shape — serde target before resolution.
#[derive(Deserialize, Default)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub server: RawServer,
    #[serde(default)]
    pub llm: RawLlm,
}

// ── Server ───────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct RawServer {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_profile_path")]
    pub profile_path: String,
}

impl Default for RawServer {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            log_level: default_log_level(),
            profile_path: default_profile_path(),
        }
    }
}

// ── LLM ─────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct RawLlm {
    #[serde(default = "default_llm_provider")]
    pub provider: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
}

impl Default for RawLlm {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_base_url: default_api_base_url(),
            model: default_model(),
            timeout_seconds: default_timeout_seconds(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
        }
    }
}

// ── Defaults ─────────────────────────────────────────────────────────────────

pub(super) fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_profile_path() -> String {
    "config/profile.json".to_string()
}

fn default_llm_provider() -> String {
    "openai".to_string()
}

fn default_api_base_url() -> String {
    "https://api.together.xyz/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "deepseek-ai/DeepSeek-V3".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}

fn default_top_p() -> f32 {
    0.9
}
