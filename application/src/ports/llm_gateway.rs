//! Generative backend ports
//!
//! Defines the interfaces for the text and image generation backends.
//! Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to a generative backend
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Response blocked: {0}")]
    Blocked(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// A single text-generation call
#[derive(Debug, Clone, PartialEq)]
pub struct TextGenerationRequest {
    /// Optional system instruction
    pub system: Option<String>,
    /// The natural-language prompt
    pub prompt: String,
    /// Declared output shape; when set the backend is asked for JSON
    pub response_schema: Option<Value>,
}

impl TextGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            response_schema: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_response_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

/// Safety filter override sent with an image request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

impl SafetySetting {
    pub fn new(category: impl Into<String>, threshold: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            threshold: threshold.into(),
        }
    }

    /// Relax the "dangerous content" gate, which misfires on map requests
    pub fn allow_dangerous_content() -> Self {
        Self::new("HARM_CATEGORY_DANGEROUS_CONTENT", "BLOCK_NONE")
    }
}

/// A single image-generation call
#[derive(Debug, Clone, PartialEq)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub safety_settings: Vec<SafetySetting>,
}

impl ImageGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            safety_settings: Vec::new(),
        }
    }

    pub fn with_safety_setting(mut self, setting: SafetySetting) -> Self {
        self.safety_settings.push(setting);
        self
    }
}

/// Gateway for text generation
///
/// One call per invocation: implementations must not retry, cache or
/// deduplicate requests.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Generate a text reply for the request
    async fn generate(&self, request: &TextGenerationRequest) -> Result<String, GatewayError>;
}

/// Gateway for image generation
#[async_trait]
pub trait ImageGateway: Send + Sync {
    /// Generate an image; `Ok(None)` means the backend returned no media
    async fn generate_image(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<Option<String>, GatewayError>;
}
