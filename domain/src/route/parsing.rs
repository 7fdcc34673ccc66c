//! Route reply parsing
//!
//! Turns the reasoning backend's reply into a [`RouteResult`]. A reply that
//! lacks any of the four fields is rejected as a whole.

use super::result::RouteResult;
use crate::core::error::ReplyParseError;
use crate::core::reply::{extract_json_object, required_text};

pub const OPTIMAL_ROUTE: &str = "optimalRoute";
pub const ESTIMATED_TRAVEL_TIME: &str = "estimatedTravelTime";
pub const COST_ESTIMATE: &str = "costEstimate";
pub const ROUTE_SUMMARY: &str = "routeSummary";

/// Parse a reasoning reply into a [`RouteResult`].
pub fn parse_route_reply(reply: &str) -> Result<RouteResult, ReplyParseError> {
    let object = extract_json_object(reply)?;

    Ok(RouteResult {
        optimal_route: required_text(&object, OPTIMAL_ROUTE)?,
        estimated_travel_time: required_text(&object, ESTIMATED_TRAVEL_TIME)?,
        cost_estimate: required_text(&object, COST_ESTIMATE)?,
        route_summary: required_text(&object, ROUTE_SUMMARY)?,
    })
}
