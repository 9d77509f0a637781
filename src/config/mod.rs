//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, scoring thresholds, limits)
//! - HTTP header name constants
//! - Library configuration and CLI option types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{AuditCategory, Config, LogFormat, LogLevel, Opt};
