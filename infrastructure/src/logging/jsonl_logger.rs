//! JSONL transcript writer.
//!
//! Each [`ConversationEvent`] becomes one JSON line carrying `type` and
//! `timestamp` next to the payload fields. The file is opened in append
//! mode so consecutive runs share one transcript.

use mobility_application::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Append-only JSONL transcript.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every line and on `Drop`.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open (or create) the transcript at `path`, creating parent directories.
    ///
    /// Returns `None` when the file cannot be opened; the caller then runs
    /// without a transcript.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create transcript directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open transcript {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: ConversationEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::String(event.event_type.to_string()));
        map.insert("timestamp".to_string(), Value::String(timestamp));
        Value::Object(map)
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let Ok(line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new(
            "route_prompt",
            serde_json::json!({
                "start": "India Gate, New Delhi",
                "end": "Qutub Minar, New Delhi",
            }),
        ));
        logger.log(ConversationEvent::new(
            "reasoning_failed",
            serde_json::json!({ "error": "Timeout" }),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(line.get("timestamp").is_some());
        }
        assert_eq!(lines[0]["type"], "route_prompt");
        assert_eq!(lines[0]["start"], "India Gate, New Delhi");
        assert_eq!(lines[1]["type"], "reasoning_failed");
        assert_eq!(lines[1]["error"], "Timeout");
    }

    #[test]
    fn test_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/transcript.jsonl");

        for _ in 0..2 {
            let logger = JsonlConversationLogger::open(&path).unwrap();
            logger.log(ConversationEvent::new("route_reply", serde_json::json!({})));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn test_non_object_payload_goes_under_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new(
            "parking_reply",
            serde_json::json!("just a string"),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "parking_reply");
        assert_eq!(lines[0]["data"], "just a string");
    }

    #[test]
    fn test_directory_path_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlConversationLogger::open(dir.path()).is_none());
    }
}
