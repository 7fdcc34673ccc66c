//! Parking availability prediction
//!
//! Peak-hour forecasts and alternative parking suggestions for a single
//! location at a given time.

use crate::core::error::ReplyParseError;
use crate::core::reply::{extract_json_object, required_text};
use crate::route::MIN_LOCATION_LEN;
use serde::{Deserialize, Serialize};

pub const PEAK_HOURS_PREDICTION: &str = "peakHoursPrediction";
pub const ALTERNATIVE_PARKING_SUGGESTIONS: &str = "alternativeParkingSuggestions";

const PEAK_HOURS_LABEL: &str = "Peak Hours Prediction:";
const ALTERNATIVES_LABEL: &str = "Alternative Parking Suggestions:";

/// A parking prediction query (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingQuery {
    parking_location: String,
    current_time: String,
}

impl ParkingQuery {
    /// Try to create a query, returning None if the location is too short
    pub fn try_new(location: impl Into<String>, current_time: impl Into<String>) -> Option<Self> {
        let location = location.into().trim().to_string();
        if location.chars().count() < MIN_LOCATION_LEN {
            return None;
        }
        Some(Self {
            parking_location: location,
            current_time: current_time.into(),
        })
    }

    pub fn location(&self) -> &str {
        &self.parking_location
    }

    pub fn current_time(&self) -> &str {
        &self.current_time
    }
}

/// Prediction returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingPrediction {
    pub peak_hours_prediction: String,
    pub alternative_parking_suggestions: String,
}

/// Parse a parking reply.
///
/// Accepts the JSON shape first and falls back to the labelled text format:
///
/// ```text
/// Peak Hours Prediction: 9-11 AM and 5-8 PM
/// Alternative Parking Suggestions: Palika Bazaar underground parking
/// ```
pub fn parse_parking_reply(reply: &str) -> Result<ParkingPrediction, ReplyParseError> {
    match extract_json_object(reply) {
        Ok(object) => Ok(ParkingPrediction {
            peak_hours_prediction: required_text(&object, PEAK_HOURS_PREDICTION)?,
            alternative_parking_suggestions: required_text(
                &object,
                ALTERNATIVE_PARKING_SUGGESTIONS,
            )?,
        }),
        Err(ReplyParseError::EmptyReply) => Err(ReplyParseError::EmptyReply),
        Err(json_error) => parse_labelled(reply).ok_or(json_error),
    }
}

fn parse_labelled(reply: &str) -> Option<ParkingPrediction> {
    let peak_start = reply.find(PEAK_HOURS_LABEL)?;
    let alt_start = reply.find(ALTERNATIVES_LABEL)?;

    let (peak, alternatives) = if peak_start < alt_start {
        (
            &reply[peak_start + PEAK_HOURS_LABEL.len()..alt_start],
            &reply[alt_start + ALTERNATIVES_LABEL.len()..],
        )
    } else {
        (
            &reply[peak_start + PEAK_HOURS_LABEL.len()..],
            &reply[alt_start + ALTERNATIVES_LABEL.len()..peak_start],
        )
    };

    let peak = peak.trim();
    let alternatives = alternatives.trim();
    if peak.is_empty() || alternatives.is_empty() {
        return None;
    }

    Some(ParkingPrediction {
        peak_hours_prediction: peak.to_string(),
        alternative_parking_suggestions: alternatives.to_string(),
    })
}
