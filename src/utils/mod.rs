//! Utility functions.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Text normalization and rounding helpers

mod selector;
mod text;

pub use selector::{parse_selector_unsafe, parse_selector_with_fallback};
pub use text::{char_len, collapse_whitespace, percentage, round1};
