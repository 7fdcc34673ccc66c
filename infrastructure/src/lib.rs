//! Infrastructure layer for city-mobility
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;
pub mod map_widget;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileBackendConfig, FileConfig, FileIllustrationConfig, FileLoggingConfig,
    FileMapWidgetConfig, FileOutputConfig,
};
pub use gemini::{GeminiGateway, GeminiSettings};
pub use logging::JsonlConversationLogger;
pub use map_widget::{MapWidgetSettings, MapWidgetVisualizer};
