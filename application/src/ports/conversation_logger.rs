//! Port for the operator transcript.
//!
//! Records prompts, backend replies and failures in a machine-readable log.
//! This is separate from `tracing`: users only ever see static messages,
//! so the transcript is where operators find the full failure detail.

use serde_json::Value;

/// A structured transcript event.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "route_prompt", "route_reply", "reasoning_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging transcript events.
///
/// `log` is synchronous and infallible; a broken log must never fail a request.
pub trait ConversationLogger: Send + Sync {
    /// Record a transcript event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
