//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory
//! (or the file passed with `-f`), then applies env overrides.
//!
//! # Module layout
//!
//! - **types** — Public configuration structs (`Config`, `LlmConfig`).
//! - **raw** — Raw TOML deserialization types. These mirror the file shape
//!   and carry the serde defaults; kept private.
//! - **load** — Loading logic: `load`, `load_from`, `defaults`, `expand_home`.

mod load;
mod raw;
mod types;

pub use load::{EnvOverrides, defaults, expand_home, load, load_from};
pub use types::*;

impl Config {
    /// Safe `Config` for tests: dummy LLM, no API key, no external calls.
    pub fn test_default(profile_path: &std::path::Path) -> Self {
        Self {
            bind: raw::default_bind(),
            log_level: "info".into(),
            profile_path: profile_path.to_path_buf(),
            llm: LlmConfig {
                provider: "dummy".into(),
                api_base_url: "http://localhost:0/v1/chat/completions".into(),
                model: "test-model".into(),
                timeout_seconds: 1,
                max_tokens: 500,
                temperature: 0.7,
                top_p: 0.9,
            },
            llm_api_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL_TOML: &str = r#"
[server]
bind = "0.0.0.0:8080"
log_level = "debug"
"#;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parse_basic_config() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), &EnvOverrides::default()).unwrap();
        assert_eq!(cfg.bind, "0.0.0.0:8080");
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.profile_path, std::path::PathBuf::from("config/profile.json"));
    }

    #[test]
    fn llm_section_defaults() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), &EnvOverrides::default()).unwrap();
        assert_eq!(cfg.llm.provider, "openai");
        assert_eq!(cfg.llm.model, "deepseek-ai/DeepSeek-V3");
        assert_eq!(cfg.llm.api_base_url, "https://api.together.xyz/v1/chat/completions");
        assert_eq!(cfg.llm.timeout_seconds, 30);
        assert_eq!(cfg.llm.max_tokens, 500);
        assert_eq!(cfg.llm.temperature, 0.7);
        assert_eq!(cfg.llm.top_p, 0.9);
        assert!(cfg.llm_api_key.is_none());
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let f = write_toml("");
        let cfg = load_from(f.path(), &EnvOverrides::default()).unwrap();
        assert_eq!(cfg.bind, "127.0.0.1:5000");
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn llm_section_parsed() {
        let f = write_toml(
            r#"
[llm]
provider = "dummy"
model = "some/model"
timeout_seconds = 5
temperature = 0.1
top_p = 0.5
max_tokens = 64
"#,
        );
        let cfg = load_from(f.path(), &EnvOverrides::default()).unwrap();
        assert_eq!(cfg.llm.provider, "dummy");
        assert_eq!(cfg.llm.model, "some/model");
        assert_eq!(cfg.llm.timeout_seconds, 5);
        assert_eq!(cfg.llm.max_tokens, 64);
        assert_eq!(cfg.llm.top_p, 0.5);
    }

    #[test]
    fn env_overrides_win() {
        let f = write_toml(MINIMAL_TOML);
        let overrides = EnvOverrides {
            bind: Some("127.0.0.1:9999".into()),
            log_level: Some("trace".into()),
            profile_path: Some("/tmp/profile.json".into()),
            api_base_url: Some("http://127.0.0.1:1/v1/chat/completions".into()),
            model: Some("override-model".into()),
            api_key: Some("sk-test".into()),
        };
        let cfg = load_from(f.path(), &overrides).unwrap();
        assert_eq!(cfg.bind, "127.0.0.1:9999");
        assert_eq!(cfg.log_level, "trace");
        assert_eq!(cfg.profile_path, std::path::PathBuf::from("/tmp/profile.json"));
        assert_eq!(cfg.llm.api_base_url, "http://127.0.0.1:1/v1/chat/completions");
        assert_eq!(cfg.llm.model, "override-model");
        assert_eq!(cfg.llm_api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn defaults_without_file() {
        let cfg = defaults(&EnvOverrides::default()).unwrap();
        assert_eq!(cfg.bind, "127.0.0.1:5000");
        assert_eq!(cfg.llm.model, "deepseek-ai/DeepSeek-V3");
    }

    #[test]
    fn zero_timeout_rejected() {
        let f = write_toml("[llm]\ntimeout_seconds = 0\n");
        let err = load_from(f.path(), &EnvOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn out_of_range_top_p_rejected() {
        let f = write_toml("[llm]\ntop_p = 1.5\n");
        let err = load_from(f.path(), &EnvOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("top_p"));
    }

    #[test]
    fn malformed_toml_errors() {
        let f = write_toml("[server\nbind = ");
        let err = load_from(f.path(), &EnvOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("config error"));
    }

    #[test]
    fn missing_file_errors() {
        let result = load_from(
            std::path::Path::new("/nonexistent/config.toml"),
            &EnvOverrides::default(),
        );
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("cannot read"));
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = dirs::home_dir().expect("home dir must exist in test env");
        let expanded = expand_home("~/.shopdesk/profile.json");
        assert!(expanded.starts_with(&home));
        assert!(expanded.ends_with("profile.json"));
    }

    #[test]
    fn relative_path_unchanged() {
        let p = expand_home("config/profile.json");
        assert_eq!(p, std::path::PathBuf::from("config/profile.json"));
    }
}
