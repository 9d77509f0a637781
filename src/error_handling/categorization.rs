//! Error categorization.
//!
//! Maps `reqwest::Error` values onto the `FetchError` taxonomy so callers can
//! match on transport failure modes without inspecting reqwest internals.

use super::types::FetchError;

/// Categorizes a `reqwest::Error` into a `FetchError`.
///
/// Status errors are checked first, then the reqwest error kinds in order of
/// specificity. Anything unrecognized becomes `FetchError::Request`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchError {
    if let Some(status) = error.status() {
        return FetchError::Status(status.as_u16());
    }

    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_connect() {
        FetchError::Connect(error.to_string())
    } else if error.is_redirect() {
        FetchError::Redirect(error.to_string())
    } else if error.is_body() || error.is_decode() {
        FetchError::Body(error.to_string())
    } else if error.is_builder() {
        FetchError::InvalidUrl(error.to_string())
    } else {
        FetchError::Request(error.to_string())
    }
}
