//! Fetch result data structures.

use std::collections::BTreeMap;

use crate::config::HEADER_CONTENT_LENGTH;

/// A fetched resource.
///
/// Produced once per fetch and owned by the analyzer that requested it.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// HTTP status of the final response (always 2xx; other statuses are errors)
    pub status: u16,
    /// Body decoded as UTF-8 (lossy)
    pub body: String,
    /// Response headers, names lowercased, repeated headers joined with ", "
    pub headers: BTreeMap<String, String>,
    /// Whether the exchange finished inside its timeout budget
    pub elapsed_ok: bool,
    /// URL after redirects
    pub final_url: String,
}

impl FetchResult {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Declared `Content-Length` in bytes, if present and numeric.
    pub fn content_length(&self) -> Option<u64> {
        self.header(HEADER_CONTENT_LENGTH)
            .and_then(|value| value.trim().parse::<u64>().ok())
    }
}

/// Lowercases header names and joins repeated values.
///
/// Values that are not valid visible ASCII are skipped.
pub(crate) fn collect_headers(headers: &reqwest::header::HeaderMap) -> BTreeMap<String, String> {
    let mut collected: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            continue;
        };
        collected
            .entry(name.as_str().to_ascii_lowercase())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }
    collected
}
