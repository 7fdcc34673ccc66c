//! Explicit adapter settings, resolved once from the file config

use crate::config::FileBackendConfig;
use mobility_application::GatewayError;
use std::time::Duration;

/// Everything the Gemini adapter needs, with the API key already resolved
#[derive(Clone)]
pub struct GeminiSettings {
    pub base_url: String,
    pub api_key: String,
    pub text_model: String,
    pub image_model: String,
    pub timeout: Duration,
}

impl GeminiSettings {
    /// Build settings from `[backend]`, failing when no API key is available
    pub fn from_config(config: &FileBackendConfig) -> Result<Self, GatewayError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            GatewayError::MissingCredentials(format!(
                "set {} or backend.api_key in the config file",
                config.api_key_env
            ))
        })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// `generateContent` endpoint for a model
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

impl std::fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("timeout", &self.timeout)
            .finish()
    }
}
