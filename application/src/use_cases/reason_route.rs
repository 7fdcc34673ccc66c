//! Route reasoning over a text-generation gateway.
//!
//! Builds the labelled route prompt, declares the four-field output shape,
//! calls the backend exactly once and parses the reply. A reply that fails
//! the shape check is fatal for the request.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{LlmGateway, TextGenerationRequest};
use crate::ports::route_reasoner::{ReasoningError, RouteReasoner};
use async_trait::async_trait;
use mobility_domain::{PromptTemplate, RouteRequest, RouteResult, parse_route_reply, truncate};
use std::sync::Arc;
use tracing::{debug, info};

/// [`RouteReasoner`] backed by an [`LlmGateway`]
pub struct GatewayRouteReasoner {
    gateway: Arc<dyn LlmGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl GatewayRouteReasoner {
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

    /// Build the backend request for a validated route request
    pub fn build_request(request: &RouteRequest) -> TextGenerationRequest {
        TextGenerationRequest::new(PromptTemplate::route_optimization(request))
            .with_system(PromptTemplate::route_system())
            .with_response_schema(PromptTemplate::route_response_schema())
    }
}

#[async_trait]
impl RouteReasoner for GatewayRouteReasoner {
    async fn optimize(&self, request: &RouteRequest) -> Result<RouteResult, ReasoningError> {
        let generation = Self::build_request(request);
        debug!("Route prompt: {}", truncate(&generation.prompt, 200));

        self.conversation_logger.log(ConversationEvent::new(
            "route_prompt",
            serde_json::json!({
                "start": request.start_location(),
                "end": request.end_location(),
                "prompt": generation.prompt,
            }),
        ));

        let reply = self.gateway.generate(&generation).await?;

        self.conversation_logger.log(ConversationEvent::new(
            "route_reply",
            serde_json::json!({
                "bytes": reply.len(),
                "text": reply,
            }),
        ));

        let route = parse_route_reply(&reply).map_err(|error| ReasoningError::InvalidReply {
            error,
            raw: reply.clone(),
        })?;

        info!("Route reasoning produced: {}", truncate(&route.route_summary, 100));
        Ok(route)
    }
}
