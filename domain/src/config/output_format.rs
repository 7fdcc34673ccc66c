//! Output format value object

use serde::{Deserialize, Serialize};

/// How a route result is rendered for the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary, time, cost and the full step list (default)
    #[default]
    Full,
    /// Summary, time and cost only
    Summary,
    /// JSON output
    Json,
}
