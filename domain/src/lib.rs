//! Domain layer for city-mobility
//!
//! This crate contains the route-optimization entities, the schema validator,
//! prompt templates and reply parsing. It has no dependencies on
//! infrastructure or presentation concerns, and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Route pipeline
//!
//! A [`RouteForm`] is validated into a [`RouteRequest`], the reasoning
//! backend's reply is parsed into a [`RouteResult`], and an optional
//! [`Illustration`] is merged in to form an [`OptimizedRoute`].
//! [`PipelineStage`] tracks where a single request is.
//!
//! ## Parking prediction
//!
//! A [`ParkingQuery`] yields a [`ParkingPrediction`] of peak hours and
//! alternative locations.

pub mod config;
pub mod core;
pub mod parking;
pub mod prompt;
pub mod route;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, IllustrationProvider, OutputFormat, Severity};
pub use core::{error::ReplyParseError, string::truncate};
pub use parking::{ParkingPrediction, ParkingQuery, parse_parking_reply};
pub use prompt::PromptTemplate;
pub use route::{
    FieldErrors, FormField, Illustration, IllustrationRequest, MIN_LOCATION_LEN, OptimizedRoute,
    PipelineStage, RouteForm, RouteRequest, RouteResult, TravelContext, ValidationOutcome,
    parse_route_reply, validate_route_form,
};
