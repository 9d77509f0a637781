//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - HTTP client (user agent, connect timeout, redirect policy)
//! - Logger (plain or JSON format)

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
