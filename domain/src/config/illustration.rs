//! Route visual provider selection

use serde::{Deserialize, Serialize};

/// Which implementation supplies the route visual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IllustrationProvider {
    /// Retired: always "not available", no external call (default)
    #[default]
    None,
    /// Link to a live third-party map widget for the address pair
    MapWidget,
    /// Text-to-image backend call
    GeneratedImage,
}

impl IllustrationProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            IllustrationProvider::None => "none",
            IllustrationProvider::MapWidget => "map_widget",
            IllustrationProvider::GeneratedImage => "generated_image",
        }
    }

    pub fn valid_values() -> &'static [&'static str] {
        &["none", "map_widget", "generated_image"]
    }
}

impl std::fmt::Display for IllustrationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for IllustrationProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "none" | "off" | "disabled" => Ok(IllustrationProvider::None),
            "map_widget" | "map" => Ok(IllustrationProvider::MapWidget),
            "generated_image" | "image" => Ok(IllustrationProvider::GeneratedImage),
            other => Err(format!(
                "unknown illustration provider '{}' (expected one of: {})",
                other,
                Self::valid_values().join(", ")
            )),
        }
    }
}
