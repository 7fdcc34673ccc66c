//! Route domain
//!
//! Everything the route-optimization pipeline passes between its steps:
//!
//! - [`request`]: raw form input and the validated [`RouteRequest`]
//! - [`validation`]: the schema validator
//! - [`result`]: [`RouteResult`], [`Illustration`] and the merged [`OptimizedRoute`]
//! - [`parsing`]: reasoning reply → [`RouteResult`]
//! - [`stage`]: per-request state machine

pub mod parsing;
pub mod request;
pub mod result;
pub mod stage;
pub mod validation;

pub use parsing::parse_route_reply;
pub use request::{FormField, RouteForm, RouteRequest, TravelContext};
pub use result::{Illustration, IllustrationRequest, OptimizedRoute, RouteResult};
pub use stage::PipelineStage;
pub use validation::{FieldErrors, MIN_LOCATION_LEN, ValidationOutcome, validate_route_form};
