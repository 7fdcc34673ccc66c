//! Map widget delegation
//!
//! Instead of drawing a picture, hand the address pair to a live map
//! service. No network call is made; the link itself is the visual.

use crate::config::FileMapWidgetConfig;
use async_trait::async_trait;
use mobility_application::{IllustrationError, RouteVisualizer};
use mobility_domain::{Illustration, IllustrationRequest};
use reqwest::Url;
use tracing::debug;

/// Settings for [`MapWidgetVisualizer`]
#[derive(Clone)]
pub struct MapWidgetSettings {
    pub base_url: String,
    /// When present, links use the embeddable directions endpoint
    pub embed_api_key: Option<String>,
}

impl MapWidgetSettings {
    pub fn from_config(config: &FileMapWidgetConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            embed_api_key: config.resolve_embed_key(),
        }
    }
}

impl std::fmt::Debug for MapWidgetSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapWidgetSettings")
            .field("base_url", &self.base_url)
            .field("embed_api_key", &self.embed_api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// [`RouteVisualizer`] producing a directions link for the address pair
pub struct MapWidgetVisualizer {
    settings: MapWidgetSettings,
}

impl MapWidgetVisualizer {
    pub fn new(settings: MapWidgetSettings) -> Self {
        Self { settings }
    }

    /// Build the link; fails only when the base URL does not parse
    pub fn link(&self, request: &IllustrationRequest) -> Result<Url, IllustrationError> {
        let origin = request.start_location.as_str();
        let destination = request.end_location.as_str();

        let result = match &self.settings.embed_api_key {
            Some(key) => Url::parse_with_params(
                &format!("{}/embed/v1/directions", self.settings.base_url),
                &[
                    ("key", key.as_str()),
                    ("origin", origin),
                    ("destination", destination),
                ],
            ),
            None => Url::parse_with_params(
                &format!("{}/dir/", self.settings.base_url),
                &[("api", "1"), ("origin", origin), ("destination", destination)],
            ),
        };

        result.map_err(|e| {
            IllustrationError::InvalidLink(format!("{}: {}", self.settings.base_url, e))
        })
    }
}

#[async_trait]
impl RouteVisualizer for MapWidgetVisualizer {
    async fn illustrate(
        &self,
        request: &IllustrationRequest,
    ) -> Result<Illustration, IllustrationError> {
        let link = self.link(request)?;
        debug!(
            "Map widget link built (embed: {})",
            self.settings.embed_api_key.is_some()
        );
        Ok(Illustration::new(link.to_string()))
    }
}
