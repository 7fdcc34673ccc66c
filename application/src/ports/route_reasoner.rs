//! Route reasoning port
//!
//! The orchestrator only knows this trait, so tests can substitute a
//! deterministic reasoner for the non-deterministic backend.

use super::llm_gateway::GatewayError;
use async_trait::async_trait;
use mobility_domain::{ReplyParseError, RouteRequest, RouteResult};
use thiserror::Error;

/// Fatal failure of the reasoning step. Never retried.
#[derive(Error, Debug)]
pub enum ReasoningError {
    #[error("Reasoning backend failed: {0}")]
    Backend(#[from] GatewayError),

    #[error("Reasoning reply did not match the expected shape: {error}")]
    InvalidReply {
        #[source]
        error: ReplyParseError,
        raw: String,
    },
}

/// Produces a [`RouteResult`] for a validated request
#[async_trait]
pub trait RouteReasoner: Send + Sync {
    /// Ask the backend once for the optimal route
    async fn optimize(&self, request: &RouteRequest) -> Result<RouteResult, ReasoningError>;
}
