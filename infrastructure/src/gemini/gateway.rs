//! HTTP gateway implementing the text and image ports

use super::settings::GeminiSettings;
use super::types::{
    GenerateContentRequest, GenerateContentResponse, extract_image, extract_text,
    image_request_body, text_request_body,
};
use async_trait::async_trait;
use mobility_application::{
    GatewayError, ImageGateway, ImageGenerationRequest, LlmGateway, TextGenerationRequest,
};
use mobility_domain::truncate;
use tracing::{debug, info};

/// Longest error body kept in a [`GatewayError::HttpStatus`]
const MAX_ERROR_BODY: usize = 500;

/// Gemini `generateContent` client.
///
/// Sends exactly one request per call. No retries, caching or request
/// deduplication happen here.
pub struct GeminiGateway {
    client: reqwest::Client,
    settings: GeminiSettings,
}

impl GeminiGateway {
    pub fn new(settings: GeminiSettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        info!(
            base_url = %settings.base_url,
            text_model = %settings.text_model,
            "Gemini gateway initialized"
        );

        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }

    async fn post(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GatewayError> {
        let url = self.settings.endpoint(model);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.settings.api_key)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))
    }
}

fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::ConnectionError(error.to_string())
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn generate(&self, request: &TextGenerationRequest) -> Result<String, GatewayError> {
        let body = text_request_body(request);
        let response = self.post(&self.settings.text_model, &body).await?;
        let text = extract_text(&response)?;
        debug!("Text reply: {} bytes", text.len());
        Ok(text)
    }
}

#[async_trait]
impl ImageGateway for GeminiGateway {
    async fn generate_image(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<Option<String>, GatewayError> {
        let body = image_request_body(request);
        let response = self.post(&self.settings.image_model, &body).await?;
        let image = extract_image(&response)?;
        debug!("Image reply: {}", if image.is_some() { "media" } else { "no media" });
        Ok(image)
    }
}
