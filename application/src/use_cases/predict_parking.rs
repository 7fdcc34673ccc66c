//! Predict Parking use case.
//!
//! Peak-hour forecast and alternative parking for one location. Shares the
//! text gateway with route reasoning but none of its failure policy: every
//! error is returned to the caller as-is.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway, TextGenerationRequest};
use mobility_domain::{
    MIN_LOCATION_LEN, ParkingPrediction, ParkingQuery, PromptTemplate, ReplyParseError,
    parse_parking_reply,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during parking prediction
#[derive(Error, Debug)]
pub enum PredictParkingError {
    #[error("Parking location must be at least {MIN_LOCATION_LEN} characters.")]
    InvalidLocation,

    #[error("Backend error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Unusable parking reply: {0}")]
    InvalidReply(#[from] ReplyParseError),
}

/// Input for the parking use case
#[derive(Debug, Clone)]
pub struct PredictParkingInput {
    pub location: String,
    /// Defaults to the local wall clock when absent
    pub current_time: Option<String>,
}

impl PredictParkingInput {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            current_time: None,
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.current_time = Some(time.into());
        self
    }
}

/// Use case for predicting parking availability
pub struct PredictParkingUseCase {
    gateway: Arc<dyn LlmGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl PredictParkingUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub async fn execute(
        &self,
        input: PredictParkingInput,
    ) -> Result<ParkingPrediction, PredictParkingError> {
        let current_time = input
            .current_time
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| chrono::Local::now().format("%H:%M").to_string());

        let query = ParkingQuery::try_new(input.location, current_time)
            .ok_or(PredictParkingError::InvalidLocation)?;

        info!(
            "Predicting parking for {} at {}",
            query.location(),
            query.current_time()
        );

        let request = TextGenerationRequest::new(PromptTemplate::parking_prediction(&query))
            .with_response_schema(PromptTemplate::parking_response_schema());

        self.conversation_logger.log(ConversationEvent::new(
            "parking_prompt",
            serde_json::json!({
                "location": query.location(),
                "time": query.current_time(),
            }),
        ));

        let reply = self.gateway.generate(&request).await?;
        debug!("Parking reply: {} bytes", reply.len());

        self.conversation_logger.log(ConversationEvent::new(
            "parking_reply",
            serde_json::json!({ "text": reply }),
        ));

        Ok(parse_parking_reply(&reply)?)
    }
}
