//! Prompt domain
//!
//! Templates and response schemas for every backend call.

mod template;

pub use template::PromptTemplate;
