//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of prompts, replies and failures
    pub conversation_log: Option<PathBuf>,
    /// Additional tracing output file (plain text, no ANSI)
    pub log_file: Option<PathBuf>,
}

impl FileLoggingConfig {
    /// Conversation log path with a leading `~/` expanded
    pub fn conversation_log_path(&self) -> Option<PathBuf> {
        self.conversation_log.as_deref().map(expand_home)
    }

    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.log_file.as_deref().map(expand_home)
    }
}

fn expand_home(path: &std::path::Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}
