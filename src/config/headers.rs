//! HTTP header name constants.
//!
//! Response headers are stored lowercased in `FetchResult::headers`, so these
//! names are lowercase too.

/// Declared body size, the only source for `pageSizeKB`.
pub const HEADER_CONTENT_LENGTH: &str = "content-length";
/// Header-level robots directives (reported, not scored).
pub const HEADER_X_ROBOTS_TAG: &str = "x-robots-tag";
