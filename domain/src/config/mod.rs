//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod illustration;
mod output_format;
pub mod validation;

pub use illustration::IllustrationProvider;
pub use output_format::OutputFormat;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
