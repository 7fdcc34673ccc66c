//! Domain error types

use thiserror::Error;

/// Errors raised while turning a backend reply into a domain value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplyParseError {
    #[error("Reply is empty")]
    EmptyReply,

    #[error("Reply does not contain a JSON object")]
    NoJsonObject,

    #[error("Reply is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Reply is missing required field '{0}'")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let error = ReplyParseError::MissingField("routeSummary");
        assert_eq!(
            error.to_string(),
            "Reply is missing required field 'routeSummary'"
        );
    }
}
