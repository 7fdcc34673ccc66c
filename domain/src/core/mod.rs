//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ReplyParseError`]: failures turning backend replies into domain values
//! - [`reply`]: JSON extraction from backend replies
//! - [`string`]: UTF-8 safe helpers for log previews

pub mod error;
pub mod reply;
pub mod string;
