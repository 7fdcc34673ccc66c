//! Wire types for `generateContent` and conversions to port types

use mobility_application::{GatewayError, ImageGenerationRequest, TextGenerationRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub safety_settings: Vec<WireSafetySetting>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn user_text(text: &str) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part::text(text)],
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            inline_data: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct WireSafetySetting {
    pub category: String,
    pub threshold: String,
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

// ─── Port → Wire ─────────────────────────────────────────────────

/// Body for a text call; a declared schema switches the reply to JSON
pub fn text_request_body(request: &TextGenerationRequest) -> GenerateContentRequest {
    let generation_config = request.response_schema.as_ref().map(|schema| GenerationConfig {
        response_mime_type: Some("application/json".to_string()),
        response_schema: Some(schema.clone()),
        ..Default::default()
    });

    GenerateContentRequest {
        contents: vec![Content::user_text(&request.prompt)],
        system_instruction: request.system.as_deref().map(|system| Content {
            role: None,
            parts: vec![Part::text(system)],
        }),
        generation_config,
        safety_settings: Vec::new(),
    }
}

/// Body for an image call
pub fn image_request_body(request: &ImageGenerationRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::user_text(&request.prompt)],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            response_modalities: Some(vec!["TEXT".to_string(), "IMAGE".to_string()]),
            ..Default::default()
        }),
        safety_settings: request
            .safety_settings
            .iter()
            .map(|s| WireSafetySetting {
                category: s.category.clone(),
                threshold: s.threshold.clone(),
            })
            .collect(),
    }
}

// ─── Wire → Port ─────────────────────────────────────────────────

fn check_blocked(response: &GenerateContentResponse) -> Result<(), GatewayError> {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_ref())
    {
        return Err(GatewayError::Blocked(reason.clone()));
    }
    Ok(())
}

fn first_candidate_parts(response: &GenerateContentResponse) -> &[Part] {
    response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|c| c.parts.as_slice())
        .unwrap_or(&[])
}

/// Concatenated text of the first candidate.
///
/// An empty string is returned as-is; deciding whether that is usable is
/// the caller's job.
pub fn extract_text(response: &GenerateContentResponse) -> Result<String, GatewayError> {
    check_blocked(response)?;

    if response.candidates.is_empty() {
        return Err(GatewayError::MalformedResponse(
            "response has no candidates".to_string(),
        ));
    }

    let text: String = first_candidate_parts(response)
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect();

    if text.is_empty()
        && let Some(reason) = response.candidates[0].finish_reason.as_deref()
        && reason == "SAFETY"
    {
        return Err(GatewayError::Blocked(reason.to_string()));
    }

    Ok(text)
}

/// First inline image of the first candidate as a `data:` URI
pub fn extract_image(response: &GenerateContentResponse) -> Result<Option<String>, GatewayError> {
    check_blocked(response)?;

    Ok(first_candidate_parts(response)
        .iter()
        .filter_map(|p| p.inline_data.as_ref())
        .find(|d| !d.data.is_empty())
        .map(|d| format!("data:{};base64,{}", d.mime_type, d.data)))
}
