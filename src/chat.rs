//! Per-turn chat pipeline.
//!
//! ```text
//! message → profile::load → prompt::compose → CompletionGateway::complete
//!         → sanitize (on success) | apology (on failure) → reply text
//! ```
//!
//! Nothing is kept between turns: the profile is re-read every call and the
//! gateway is immutable, so one `ChatService` is shared by all requests.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::llm::{CompletionGateway, ProviderError};
use crate::profile::{self, MerchantProfile};
use crate::prompt;
use crate::sanitize::sanitize;

pub const APOLOGY_EMPTY: &str = "Üzgünüm, şu anda yanıt veremiyorum. Lütfen tekrar deneyin.";
pub const APOLOGY_API: &str = "Teknik bir sorun var, lütfen daha sonra deneyin.";
pub const APOLOGY_TIMEOUT: &str = "Yanıt süresi aşıldı. Lütfen tekrar deneyin.";
pub const APOLOGY_TRANSPORT: &str = "Bağlantı sorunu var, internetini kontrol et.";
pub const APOLOGY_GENERIC: &str = "Bir hata oluştu, lütfen tekrar dene.";

/// The user-facing text for a failed completion. Never includes upstream detail.
pub fn apology(err: &ProviderError) -> &'static str {
    match err {
        ProviderError::Empty => APOLOGY_EMPTY,
        ProviderError::Api { .. } => APOLOGY_API,
        ProviderError::Timeout => APOLOGY_TIMEOUT,
        ProviderError::Transport(_) => APOLOGY_TRANSPORT,
        ProviderError::Unexpected(_) => APOLOGY_GENERIC,
    }
}

#[derive(Debug, Clone)]
pub struct ChatService {
    profile_path: PathBuf,
    gateway: CompletionGateway,
}

impl ChatService {
    pub fn new(profile_path: impl Into<PathBuf>, gateway: CompletionGateway) -> Self {
        Self {
            profile_path: profile_path.into(),
            gateway,
        }
    }

    /// Fresh read of the merchant profile.
    pub async fn profile(&self) -> MerchantProfile {
        let path = self.profile_path.clone();
        // profile::load does blocking file I/O, run it off the async executor.
        match tokio::task::spawn_blocking(move || profile::load(&path)).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(error = %e, "profile load task failed");
                MerchantProfile::default()
            }
        }
    }

    /// Answer one already-validated (non-empty, trimmed) user message.
    /// Always yields text for the user.
    pub async fn reply(&self, message: &str) -> String {
        let profile = self.profile().await;
        let system_prompt = prompt::compose(&profile, message);
        debug!(
            company = %profile.name,
            topic = ?prompt::detect_topic(message),
            prompt_len = system_prompt.len(),
            "system prompt composed"
        );

        let outcome = self
            .gateway
            .complete(&system_prompt, message)
            .await
            .and_then(|raw| {
                let clean = sanitize(&raw);
                if clean.is_empty() {
                    // Nothing left once reasoning markup is gone.
                    Err(ProviderError::Empty)
                } else {
                    Ok(clean)
                }
            });

        match outcome {
            Ok(answer) => {
                info!(model = %self.gateway.model(), answer_len = answer.len(), "chat turn answered");
                answer
            }
            Err(e) => {
                warn!(model = %self.gateway.model(), error = %e, "chat turn failed, sending apology");
                apology(&e).to_string()
            }
        }
    }
}
