//! Route illustration over an image-generation gateway.

use crate::ports::llm_gateway::{ImageGateway, ImageGenerationRequest, SafetySetting};
use crate::ports::route_visualizer::{IllustrationError, RouteVisualizer};
use async_trait::async_trait;
use mobility_domain::{Illustration, IllustrationRequest, PromptTemplate};
use std::sync::Arc;
use tracing::debug;

/// [`RouteVisualizer`] that asks a text-to-image backend for a map-style picture
pub struct GeneratedImageVisualizer {
    gateway: Arc<dyn ImageGateway>,
    relax_dangerous_content: bool,
}

impl GeneratedImageVisualizer {
    pub fn new(gateway: Arc<dyn ImageGateway>) -> Self {
        Self {
            gateway,
            relax_dangerous_content: true,
        }
    }

    /// Keep the backend's default "dangerous content" filter
    pub fn with_default_safety(mut self) -> Self {
        self.relax_dangerous_content = false;
        self
    }

    pub fn build_request(&self, request: &IllustrationRequest) -> ImageGenerationRequest {
        let generation = ImageGenerationRequest::new(PromptTemplate::route_illustration(request));
        if self.relax_dangerous_content {
            generation.with_safety_setting(SafetySetting::allow_dangerous_content())
        } else {
            generation
        }
    }
}

#[async_trait]
impl RouteVisualizer for GeneratedImageVisualizer {
    async fn illustrate(
        &self,
        request: &IllustrationRequest,
    ) -> Result<Illustration, IllustrationError> {
        let generation = self.build_request(request);
        debug!(
            "Requesting route image ({} safety overrides)",
            generation.safety_settings.len()
        );

        match self.gateway.generate_image(&generation).await? {
            Some(reference) if !reference.trim().is_empty() => Ok(Illustration::new(reference)),
            _ => Err(IllustrationError::NoMedia),
        }
    }
}
