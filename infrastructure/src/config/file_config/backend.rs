//! Generative backend configuration from TOML (`[backend]` section)

use mobility_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Google Generative Language API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL of the API (overridable for proxies and tests).
    pub base_url: String,
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Model used for route reasoning and parking prediction.
    pub text_model: String,
    /// Model used for generated route images.
    pub image_model: String,
    /// Transport timeout per request in seconds.
    pub timeout_secs: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            text_model: "gemini-2.5-flash".to_string(),
            image_model: "gemini-2.0-flash-preview-image-generation".to_string(),
            timeout_secs: 60,
        }
    }
}

impl FileBackendConfig {
    /// Resolve the API key: direct value first, then the configured env var.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub(crate) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("backend.text_model", &self.text_model),
            ("backend.image_model", &self.image_model),
            ("backend.base_url", &self.base_url),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    format!("{}: cannot be empty", field),
                ));
            }
        }

        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "backend.timeout_secs".to_string(),
                },
                "backend.timeout_secs: cannot be 0",
            ));
        }

        issues
    }
}
