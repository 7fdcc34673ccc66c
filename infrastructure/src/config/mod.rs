//! Configuration file loading for city-mobility
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CITY_MOBILITY_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./mobility.toml` or `./.mobility.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/city-mobility/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileBackendConfig, FileConfig, FileIllustrationConfig, FileLoggingConfig,
    FileMapWidgetConfig, FileOutputConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
