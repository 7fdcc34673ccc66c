//! Route request value objects

use crate::core::string::non_blank;
use serde::{Deserialize, Serialize};

/// Form fields that can carry validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    StartLocation,
    EndLocation,
}

impl FormField {
    /// Wire name of the field as submitted by the form
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::StartLocation => "startLocation",
            FormField::EndLocation => "endLocation",
        }
    }

    /// Human-readable label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            FormField::StartLocation => "Start location",
            FormField::EndLocation => "End location",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw, unvalidated route submission
///
/// Mirrors what the caller typed. Nothing here is trusted until it has
/// passed [`validate_route_form`](super::validation::validate_route_form).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteForm {
    pub start_location: String,
    pub end_location: String,
    pub current_traffic_conditions: Option<String>,
    pub available_public_transport: Option<String>,
    pub available_micro_mobility: Option<String>,
    pub departure_time: Option<String>,
}

impl RouteForm {
    pub fn new(start_location: impl Into<String>, end_location: impl Into<String>) -> Self {
        Self {
            start_location: start_location.into(),
            end_location: end_location.into(),
            ..Default::default()
        }
    }

    pub fn with_traffic(mut self, traffic: impl Into<String>) -> Self {
        self.current_traffic_conditions = Some(traffic.into());
        self
    }

    pub fn with_public_transport(mut self, transport: impl Into<String>) -> Self {
        self.available_public_transport = Some(transport.into());
        self
    }

    pub fn with_micro_mobility(mut self, options: impl Into<String>) -> Self {
        self.available_micro_mobility = Some(options.into());
        self
    }

    pub fn with_departure_time(mut self, departure: impl Into<String>) -> Self {
        self.departure_time = Some(departure.into());
        self
    }
}

/// Optional travel context forwarded verbatim to the reasoning backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelContext {
    pub current_traffic_conditions: Option<String>,
    pub available_public_transport: Option<String>,
    pub available_micro_mobility: Option<String>,
    pub departure_time: Option<String>,
}

impl TravelContext {
    pub(crate) fn from_form(form: &RouteForm) -> Self {
        Self {
            current_traffic_conditions: non_blank(form.current_traffic_conditions.clone()),
            available_public_transport: non_blank(form.available_public_transport.clone()),
            available_micro_mobility: non_blank(form.available_micro_mobility.clone()),
            departure_time: non_blank(form.departure_time.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current_traffic_conditions.is_none()
            && self.available_public_transport.is_none()
            && self.available_micro_mobility.is_none()
            && self.departure_time.is_none()
    }
}

/// A validated route request (Value Object)
///
/// Only the validator can build one, so holding a `RouteRequest` is proof
/// that the locations met the length rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    start_location: String,
    end_location: String,
    #[serde(flatten)]
    context: TravelContext,
}

impl RouteRequest {
    pub(crate) fn new(
        start_location: String,
        end_location: String,
        context: TravelContext,
    ) -> Self {
        Self {
            start_location,
            end_location,
            context,
        }
    }

    pub fn start_location(&self) -> &str {
        &self.start_location
    }

    pub fn end_location(&self) -> &str {
        &self.end_location
    }

    pub fn context(&self) -> &TravelContext {
        &self.context
    }
}
