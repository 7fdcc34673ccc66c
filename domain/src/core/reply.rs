//! Helpers for reading structured replies from generative backends.
//!
//! Backends asked for JSON usually return a bare object, but some wrap it in
//! a fenced code block or surround it with prose. Both are accepted.

use super::error::ReplyParseError;
use serde_json::{Map, Value};

/// Extract the first JSON object from a backend reply.
///
/// Tried in order:
/// 1. ` ```json ` (or bare ` ``` `) fenced blocks
/// 2. The entire reply as JSON
/// 3. The outermost `{ ... }` span within surrounding prose
pub fn extract_json_object(reply: &str) -> Result<Map<String, Value>, ReplyParseError> {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        return Err(ReplyParseError::EmptyReply);
    }

    let mut in_block = false;
    let mut block = String::new();
    for line in trimmed.lines() {
        let marker = line.trim();
        if !in_block && (marker == "```json" || marker == "```") {
            in_block = true;
            block.clear();
        } else if in_block && marker == "```" {
            in_block = false;
            if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(&block) {
                return Ok(map);
            }
        } else if in_block {
            block.push_str(line);
            block.push('\n');
        }
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => return Ok(map),
        Ok(_) => return Err(ReplyParseError::NoJsonObject),
        Err(_) => {}
    }

    let (Some(open), Some(close)) = (trimmed.find('{'), trimmed.rfind('}')) else {
        return Err(ReplyParseError::NoJsonObject);
    };
    if close < open {
        return Err(ReplyParseError::NoJsonObject);
    }

    match serde_json::from_str::<Value>(&trimmed[open..=close]) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ReplyParseError::NoJsonObject),
        Err(e) => Err(ReplyParseError::InvalidJson(e.to_string())),
    }
}

/// Read a required, non-empty text field.
///
/// Numbers are stringified; arrays of strings are joined line by line, which
/// some backends do for step lists.
pub fn required_text(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ReplyParseError> {
    let text = match object.get(field) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    };

    if text.is_empty() {
        Err(ReplyParseError::MissingField(field))
    } else {
        Ok(text)
    }
}
