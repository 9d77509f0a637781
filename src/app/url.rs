//! Command-line URL normalization.

use crate::audit::parse_audit_url;
use crate::error_handling::AuditError;

/// Normalizes a URL typed on the command line.
///
/// Adds an `https://` prefix when the input has no scheme, then applies the same
/// validation as the library entry points (http/https only, length limit).
/// The result is the parsed URL's serialization, so `example.com` becomes
/// `https://example.com/`.
///
/// # Arguments
///
/// * `input` - The URL as typed, surrounding whitespace allowed
///
/// # Errors
///
/// Returns `AuditError::InvalidUrl` if the URL cannot be audited.
pub fn normalize_audit_url(input: &str) -> Result<String, AuditError> {
    let trimmed = input.trim();
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    parse_audit_url(&with_scheme).map(|url| url.to_string())
}
