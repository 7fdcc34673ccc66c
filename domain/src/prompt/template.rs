//! Prompt templates for the route and parking flows

use crate::parking::{ALTERNATIVE_PARKING_SUGGESTIONS, PEAK_HOURS_PREDICTION, ParkingQuery};
use crate::route::parsing::{COST_ESTIMATE, ESTIMATED_TRAVEL_TIME, OPTIMAL_ROUTE, ROUTE_SUMMARY};
use crate::route::{IllustrationRequest, RouteRequest};
use serde_json::{Value, json};

/// Templates for every prompt sent to a generative backend
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for route optimization
    pub fn route_system() -> &'static str {
        r#"You are an AI-powered route optimization expert for city travel.
You combine walking, public transport, micro-mobility and road travel into the most efficient multi-modal route.
Always answer with a single JSON object and nothing else."#
    }

    /// User prompt for route optimization
    ///
    /// Optional context lines are emitted only when present. Costs are
    /// always requested in Indian Rupees.
    pub fn route_optimization(request: &RouteRequest) -> String {
        let context = request.context();
        let mut prompt = String::from(
            "Given the following information, suggest the optimal multi-modal travel route:\n\n",
        );

        prompt.push_str(&format!("Start Location: {}\n", request.start_location()));
        prompt.push_str(&format!("End Location: {}\n", request.end_location()));

        let optional = [
            ("Current Traffic Conditions", &context.current_traffic_conditions),
            ("Available Public Transport", &context.available_public_transport),
            ("Available Micro-Mobility Options", &context.available_micro_mobility),
            ("Departure Time", &context.departure_time),
        ];
        for (label, value) in optional {
            if let Some(value) = value {
                prompt.push_str(&format!("{}: {}\n", label, value));
            }
        }

        prompt.push_str(&format!(
            r#"
Consider real-time traffic, public transport schedules, and micro-mobility options to provide the most efficient route.

Respond with a JSON object containing exactly these fields:
- "{OPTIMAL_ROUTE}": the suggested optimal route with numbered step-by-step instructions, one step per line
- "{ESTIMATED_TRAVEL_TIME}": the estimated travel time for the suggested route
- "{COST_ESTIMATE}": the estimated cost for the suggested route, in Indian Rupees (INR, ₹)
- "{ROUTE_SUMMARY}": a brief one-sentence summary of the suggested route"#
        ));

        prompt
    }

    /// JSON response schema declared alongside the route prompt
    pub fn route_response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                OPTIMAL_ROUTE: {
                    "type": "STRING",
                    "description": "The suggested optimal route with step-by-step instructions."
                },
                ESTIMATED_TRAVEL_TIME: {
                    "type": "STRING",
                    "description": "The estimated travel time for the suggested route."
                },
                COST_ESTIMATE: {
                    "type": "STRING",
                    "description": "The estimated cost for the suggested route in INR."
                },
                ROUTE_SUMMARY: {
                    "type": "STRING",
                    "description": "A brief summary of the suggested route."
                }
            },
            "required": [OPTIMAL_ROUTE, ESTIMATED_TRAVEL_TIME, COST_ESTIMATE, ROUTE_SUMMARY]
        })
    }

    /// Prompt for the map-style route illustration
    pub fn route_illustration(request: &IllustrationRequest) -> String {
        format!(
            r#"Generate a visually appealing and clear map image that shows a route from "{}" to "{}". The style should be a modern digital map. The route should be clearly highlighted. The map should be conceptual and represent the journey described: "{}". Do not include any real-world street names unless they are in the locations. The image should be clean, with a clear path from start to finish."#,
            request.start_location, request.end_location, request.route_summary
        )
    }

    /// User prompt for parking prediction
    pub fn parking_prediction(query: &ParkingQuery) -> String {
        format!(
            r#"You are an AI assistant designed to predict peak parking hours and suggest alternative parking locations.

Based on the given location and current time, provide predictions for peak parking hours and suggestions for alternative parking.

Location: {}
Current Time: {}

Respond with a JSON object containing:
- "{PEAK_HOURS_PREDICTION}": predicted peak hours for parking at the location
- "{ALTERNATIVE_PARKING_SUGGESTIONS}": suggested alternative parking locations"#,
            query.location(),
            query.current_time()
        )
    }

    /// JSON response schema declared alongside the parking prompt
    pub fn parking_response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                PEAK_HOURS_PREDICTION: {
                    "type": "STRING",
                    "description": "Predicted peak hours for parking at the specified location."
                },
                ALTERNATIVE_PARKING_SUGGESTIONS: {
                    "type": "STRING",
                    "description": "Suggestions for alternative parking locations."
                }
            },
            "required": [PEAK_HOURS_PREDICTION, ALTERNATIVE_PARKING_SUGGESTIONS]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{RouteForm, validate_route_form};

    #[test]
    fn test_route_prompt_labels_both_locations() {
        let request = validate_route_form(&RouteForm::new(
            "India Gate, New Delhi",
            "Qutub Minar, New Delhi",
        ))
        .unwrap();
        let prompt = PromptTemplate::route_optimization(&request);
        assert!(prompt.contains("Start Location: India Gate, New Delhi\n"));
        assert!(prompt.contains("End Location: Qutub Minar, New Delhi\n"));
        assert!(!prompt.contains("Current Traffic Conditions:"));
        assert!(!prompt.contains("Departure Time:"));
    }

    #[test]
    fn test_route_prompt_includes_present_context() {
        let form = RouteForm::new("Saket", "Hauz Khas")
            .with_traffic("heavy")
            .with_public_transport("Magenta Line")
            .with_micro_mobility("Yulu")
            .with_departure_time("8:30 AM");
        let request = validate_route_form(&form).unwrap();
        let prompt = PromptTemplate::route_optimization(&request);
        assert!(prompt.contains("Current Traffic Conditions: heavy"));
        assert!(prompt.contains("Available Public Transport: Magenta Line"));
        assert!(prompt.contains("Available Micro-Mobility Options: Yulu"));
        assert!(prompt.contains("Departure Time: 8:30 AM"));
    }

    #[test]
    fn test_route_prompt_names_all_output_fields() {
        let request = validate_route_form(&RouteForm::new("Saket", "Hauz Khas")).unwrap();
        let prompt = PromptTemplate::route_optimization(&request);
        for field in [OPTIMAL_ROUTE, ESTIMATED_TRAVEL_TIME, COST_ESTIMATE, ROUTE_SUMMARY] {
            assert!(prompt.contains(&format!("\"{}\"", field)), "{}", field);
        }
        assert!(prompt.contains("INR"));
    }

    #[test]
    fn test_route_schema_requires_all_fields() {
        let schema = PromptTemplate::route_response_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 4);
        assert_eq!(schema["properties"][ROUTE_SUMMARY]["type"], "STRING");
    }

    #[test]
    fn test_illustration_prompt_embeds_summary() {
        let request = IllustrationRequest::new("Saket", "Hauz Khas", "Short auto ride");
        let prompt = PromptTemplate::route_illustration(&request);
        assert!(prompt.contains("from \"Saket\" to \"Hauz Khas\""));
        assert!(prompt.contains("\"Short auto ride\""));
    }

    #[test]
    fn test_parking_prompt() {
        let query = ParkingQuery::try_new("Connaught Place", "6:00 PM").unwrap();
        let prompt = PromptTemplate::parking_prediction(&query);
        assert!(prompt.contains("Location: Connaught Place"));
        assert!(prompt.contains("Current Time: 6:00 PM"));
        assert!(prompt.contains(PEAK_HOURS_PREDICTION));
    }
}
