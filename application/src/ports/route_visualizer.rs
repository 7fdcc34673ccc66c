//! Route visual port
//!
//! "Get a visual for this route" as a capability. Which implementation is
//! used is decided by configuration at wiring time.

use super::llm_gateway::GatewayError;
use async_trait::async_trait;
use mobility_domain::{Illustration, IllustrationRequest};
use thiserror::Error;

/// Failure of the illustration step. Swallowed by the orchestrator.
#[derive(Error, Debug)]
pub enum IllustrationError {
    #[error("Illustration backend failed: {0}")]
    Backend(#[from] GatewayError),

    #[error("Failed to generate map image: backend returned no media")]
    NoMedia,

    #[error("Invalid map link: {0}")]
    InvalidLink(String),
}

/// Supplies a supplementary visual for an optimized route
#[async_trait]
pub trait RouteVisualizer: Send + Sync {
    /// Produce a visual for the route, or the "not available" sentinel
    async fn illustrate(
        &self,
        request: &IllustrationRequest,
    ) -> Result<Illustration, IllustrationError>;
}

/// The retired illustration feature
///
/// Map rendering is delegated to a live map widget outside this pipeline,
/// so this always answers "not available" without any external call.
pub struct RetiredVisualizer;

#[async_trait]
impl RouteVisualizer for RetiredVisualizer {
    async fn illustrate(
        &self,
        _request: &IllustrationRequest,
    ) -> Result<Illustration, IllustrationError> {
        Ok(Illustration::unavailable())
    }
}
