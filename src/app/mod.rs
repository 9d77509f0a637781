//! Command-line support.
//!
//! This module provides URL normalization, Ctrl-C cancellation and statistics
//! printing used by the `seo_audit` binary.

pub mod shutdown;
pub mod statistics;
pub mod url;

// Re-export public API
pub use shutdown::cancel_on_ctrl_c;
pub use statistics::print_diagnostic_statistics;
pub use url::normalize_audit_url;
