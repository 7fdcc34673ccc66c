//! Console output formatter for route and parking results

use colored::Colorize;
use mobility_application::OptimizeRouteOutcome;
use mobility_domain::{FieldErrors, OptimizedRoute, OutputFormat, ParkingPrediction};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a route outcome in the requested format
    pub fn format_outcome(outcome: &OptimizeRouteOutcome, format: OutputFormat) -> String {
        if format == OutputFormat::Json {
            return Self::format_json(outcome);
        }

        match outcome {
            OptimizeRouteOutcome::Rejected { message, errors } => {
                Self::format_field_errors(message, errors)
            }
            OptimizeRouteOutcome::Failed { message } => {
                format!("{} {}\n", "Error:".red().bold(), message)
            }
            OptimizeRouteOutcome::Optimized { message, data } => match format {
                OutputFormat::Summary => Self::format_summary(data),
                _ => Self::format_route(message, data),
            },
        }
    }

    /// Format the complete route
    pub fn format_route(message: &str, route: &OptimizedRoute) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Optimized Route"));
        output.push('\n');
        output.push_str(&format!("{}\n\n", message.green()));

        output.push_str(&format!(
            "{} {}\n",
            "Summary:".cyan().bold(),
            route.route.route_summary
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Travel time:".cyan().bold(),
            route.route.estimated_travel_time
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Cost:".cyan().bold(),
            route.route.cost_estimate
        ));

        output.push_str(&Self::section_header("Route"));
        for line in route.route.optimal_route.lines() {
            output.push_str(&format!("  {}\n", line));
        }

        if let Some(illustration) = &route.illustration {
            output.push_str(&Self::section_header("Map"));
            output.push_str(&format!("  {}\n", Self::display_reference(illustration)));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Summary only (concise output)
    pub fn format_summary(route: &OptimizedRoute) -> String {
        format!(
            "{} {}\n{} {}  {} {}\n",
            "Route:".bold(),
            route.route.route_summary,
            "Time:".dimmed(),
            route.route.estimated_travel_time,
            "Cost:".dimmed(),
            route.route.cost_estimate
        )
    }

    /// Per-field validation messages
    pub fn format_field_errors(message: &str, errors: &FieldErrors) -> String {
        let mut output = format!("{} {}\n", "Error:".red().bold(), message);
        for (field, messages) in errors.iter() {
            for m in messages {
                output.push_str(&format!("  {} {}: {}\n", "x".red(), field.label(), m));
            }
        }
        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &OptimizeRouteOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a parking prediction
    pub fn format_parking(prediction: &ParkingPrediction, format: OutputFormat) -> String {
        if format == OutputFormat::Json {
            return serde_json::to_string_pretty(prediction).unwrap_or_else(|_| "{}".to_string());
        }

        format!(
            "{}\n{}\n\n{}\n{}\n",
            "Peak Hours Prediction:".cyan().bold(),
            prediction.peak_hours_prediction,
            "Alternative Parking Suggestions:".cyan().bold(),
            prediction.alternative_parking_suggestions
        )
    }

    /// Inline images are too long for a terminal
    fn display_reference(reference: &str) -> String {
        match reference.strip_prefix("data:") {
            Some(rest) => {
                let mime = rest.split(';').next().unwrap_or("image");
                format!("<inline {} image, {} bytes>", mime, reference.len())
            }
            None => reference.to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
