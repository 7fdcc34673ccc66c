//! Route visual configuration from TOML (`[illustration]` and `[map_widget]` sections)

use mobility_domain::{ConfigIssue, ConfigIssueCode, IllustrationProvider};
use serde::{Deserialize, Serialize};

/// Raw illustration configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileIllustrationConfig {
    /// "none" | "map_widget" | "generated_image"
    pub provider: String,
    /// Send `BLOCK_NONE` for the dangerous-content category with image requests
    pub relax_dangerous_content: bool,
}

impl Default for FileIllustrationConfig {
    fn default() -> Self {
        Self {
            provider: IllustrationProvider::default().as_str().to_string(),
            relax_dangerous_content: true,
        }
    }
}

impl FileIllustrationConfig {
    /// Parse provider string into IllustrationProvider
    ///
    /// Accepts: "none", "off", "map_widget", "map", "generated_image", "image"
    pub fn parse_provider(&self) -> (IllustrationProvider, Vec<ConfigIssue>) {
        match self.provider.parse::<IllustrationProvider>() {
            Ok(provider) => (provider, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "illustration.provider".to_string(),
                        value: self.provider.clone(),
                        valid_values: IllustrationProvider::valid_values()
                            .iter()
                            .map(|v| v.to_string())
                            .collect(),
                    },
                    format!(
                        "illustration.provider: unknown value '{}', falling back to 'none'",
                        self.provider
                    ),
                );
                (IllustrationProvider::default(), vec![issue])
            }
        }
    }
}

/// Raw map widget configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMapWidgetConfig {
    /// Base URL of the map service
    pub base_url: String,
    /// Environment variable holding an embed API key; switches to embed links
    pub embed_api_key_env: Option<String>,
}

impl Default for FileMapWidgetConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.google.com/maps".to_string(),
            embed_api_key_env: None,
        }
    }
}

impl FileMapWidgetConfig {
    pub fn resolve_embed_key(&self) -> Option<String> {
        self.embed_api_key_env
            .as_deref()
            .and_then(|name| std::env::var(name).ok())
            .filter(|k| !k.trim().is_empty())
    }
}
