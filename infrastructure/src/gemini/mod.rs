//! Google Generative Language API adapter
//!
//! Implements both generative ports over a single `generateContent`
//! endpoint. Text calls ask for JSON matching a declared schema; image
//! calls ask for an image modality and turn the first inline part into a
//! `data:` URI.

mod gateway;
mod settings;
pub mod types;

pub use gateway::GeminiGateway;
pub use settings::GeminiSettings;
