//! Configuration loading with env-var overrides.
//!
//! Reads a TOML file (or falls back to built-in defaults when
//! `config/default.toml` is absent), then applies `SHOPDESK_*` and `LLM_*`
//! env overrides and validates the result.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

use super::raw::RawConfig;
use super::types::*;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Values taken from the environment that win over the TOML file.
///
/// Tests build this directly instead of mutating process env vars.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub bind: Option<String>,
    pub log_level: Option<String>,
    pub profile_path: Option<String>,
    pub api_base_url: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
}

impl EnvOverrides {
    /// Snapshot the relevant variables from the process environment.
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        let var = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            bind: var("SHOPDESK_BIND"),
            log_level: var("SHOPDESK_LOG_LEVEL"),
            profile_path: var("SHOPDESK_PROFILE_PATH"),
            api_base_url: var("LLM_API_BASE_URL"),
            model: var("LLM_MODEL"),
            api_key: var("LLM_API_KEY").or_else(|| var("TOGETHER_API_KEY")),
        }
    }
}

/// Load config from the given path, or `config/default.toml`, then apply env-var overrides.
/// If no path is given and `config/default.toml` does not exist, built-in defaults are used.
pub fn load(config_path: Option<&str>) -> Result<Config, AppError> {
    let overrides = EnvOverrides::from_env();

    if let Some(path) = config_path {
        return load_from(Path::new(path), &overrides);
    }

    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        load_from(default_path, &overrides)
    } else {
        resolve(RawConfig::default(), &overrides)
    }
}

/// Load an explicit TOML file and apply `overrides`.
pub fn load_from(path: &Path, overrides: &EnvOverrides) -> Result<Config, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&text)
        .map_err(|e| AppError::Config(format!("config error in {}: {e}", path.display())))?;

    resolve(parsed, overrides)
}

/// Built-in defaults with `overrides` applied. Never touches the filesystem.
pub fn defaults(overrides: &EnvOverrides) -> Result<Config, AppError> {
    resolve(RawConfig::default(), overrides)
}

fn resolve(parsed: RawConfig, overrides: &EnvOverrides) -> Result<Config, AppError> {
    let s = parsed.server;
    let l = parsed.llm;

    let config = Config {
        bind: overrides.bind.clone().unwrap_or(s.bind),
        log_level: overrides.log_level.clone().unwrap_or(s.log_level),
        profile_path: expand_home(overrides.profile_path.as_deref().unwrap_or(&s.profile_path)),
        llm: LlmConfig {
            provider: l.provider,
            api_base_url: overrides.api_base_url.clone().unwrap_or(l.api_base_url),
            model: overrides.model.clone().unwrap_or(l.model),
            timeout_seconds: l.timeout_seconds,
            max_tokens: l.max_tokens,
            temperature: l.temperature,
            top_p: l.top_p,
        },
        llm_api_key: overrides.api_key.clone(),
    };

    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), AppError> {
    if config.bind.trim().is_empty() {
        return Err(AppError::Config("server.bind must not be empty".into()));
    }
    if config.llm.model.trim().is_empty() {
        return Err(AppError::Config("llm.model must not be empty".into()));
    }
    if config.llm.timeout_seconds == 0 {
        return Err(AppError::Config("llm.timeout_seconds must be at least 1".into()));
    }
    if config.llm.max_tokens == 0 {
        return Err(AppError::Config("llm.max_tokens must be at least 1".into()));
    }
    if !(0.0..=2.0).contains(&config.llm.temperature) {
        return Err(AppError::Config(format!(
            "llm.temperature must be within 0.0..=2.0, got {}",
            config.llm.temperature
        )));
    }
    if !(config.llm.top_p > 0.0 && config.llm.top_p <= 1.0) {
        return Err(AppError::Config(format!(
            "llm.top_p must be within (0.0, 1.0], got {}",
            config.llm.top_p
        )));
    }
    Ok(())
}

/// Expand a leading `~` to the user's home directory.
/// Absolute or relative paths without `~` are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
