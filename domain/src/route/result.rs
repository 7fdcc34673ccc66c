//! Route result value objects

use serde::{Deserialize, Serialize};

/// Reply of the reasoning backend, reshaped into the fixed output contract
///
/// All four fields are free text; the backend answers in prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    /// Step-by-step route description (multi-line)
    pub optimal_route: String,
    /// Estimated travel time, e.g. "35-45 minutes"
    pub estimated_travel_time: String,
    /// Cost estimate in currency prose, e.g. "₹60 (Metro) + ₹30 (auto)"
    pub cost_estimate: String,
    /// Short summary, also fed to the illustration step
    pub route_summary: String,
}

/// Input for the illustration step, derived from a successful [`RouteResult`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllustrationRequest {
    pub start_location: String,
    pub end_location: String,
    pub route_summary: String,
}

impl IllustrationRequest {
    pub fn new(
        start_location: impl Into<String>,
        end_location: impl Into<String>,
        route_summary: impl Into<String>,
    ) -> Self {
        Self {
            start_location: start_location.into(),
            end_location: end_location.into(),
            route_summary: route_summary.into(),
        }
    }
}

/// A single image reference, or the empty sentinel meaning "not available"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Illustration {
    reference: String,
}

impl Illustration {
    /// Wrap an image reference (URL or `data:` URI)
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    /// The "not available" sentinel
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn is_available(&self) -> bool {
        !self.reference.trim().is_empty()
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Convert to an optional reference, mapping the sentinel to `None`
    pub fn into_reference(self) -> Option<String> {
        if self.is_available() {
            Some(self.reference)
        } else {
            None
        }
    }
}

/// Merged pipeline result: every route field plus an optional illustration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedRoute {
    #[serde(flatten)]
    pub route: RouteResult,
    /// Absent when the visual step failed, was retired, or had no media
    #[serde(skip_serializing_if = "Option::is_none", rename = "mapImageUrl")]
    pub illustration: Option<String>,
}

impl OptimizedRoute {
    pub fn new(route: RouteResult, illustration: Option<Illustration>) -> Self {
        Self {
            route,
            illustration: illustration.and_then(Illustration::into_reference),
        }
    }

    pub fn has_illustration(&self) -> bool {
        self.illustration.is_some()
    }
}
