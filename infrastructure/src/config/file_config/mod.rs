//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod backend;
mod illustration;
mod logging;
mod output;

pub use backend::FileBackendConfig;
pub use illustration::{FileIllustrationConfig, FileMapWidgetConfig};
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;

use mobility_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generative backend settings
    pub backend: FileBackendConfig,
    /// Route visual selection
    pub illustration: FileIllustrationConfig,
    /// Map widget link settings
    pub map_widget: FileMapWidgetConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript and log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks empty model names, the backend timeout and the illustration
    /// provider name.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.backend.validate());
        issues.extend(self.illustration.parse_provider().1);

        issues
    }
}
