//! Structured data (JSON-LD) extraction.

use std::sync::LazyLock;

use scraper::Selector;
use serde_json::Value;

use crate::utils::parse_selector_unsafe;

use super::document::Document;

const JSON_LD_SELECTOR_STR: &str = r#"script[type="application/ld+json"]"#;

static JSON_LD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(JSON_LD_SELECTOR_STR, "JSON_LD_SELECTOR"));

/// Whether at least one `application/ld+json` script exists.
///
/// Presence is what counts; the script body does not have to be valid JSON.
pub fn has_json_ld(document: &Document) -> bool {
    document.exists(&JSON_LD_SELECTOR)
}

/// Schema.org `@type` values declared across all JSON-LD blocks.
///
/// Handles a single object, a top-level array, `@graph` containers, and `@type`
/// given as a string or an array. Blocks that are not valid JSON are skipped.
/// Types are returned in document order without duplicates.
pub fn extract_schema_types(document: &Document) -> Vec<String> {
    let mut types = Vec::new();
    for node in document.select(&JSON_LD_SELECTOR) {
        let raw = node.text();
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => collect_types(&value, &mut types),
            Err(e) => log::debug!("Skipping invalid JSON-LD block: {}", e),
        }
    }
    types
}

fn collect_types(value: &Value, types: &mut Vec<String>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_types(item, types);
            }
        }
        Value::Object(obj) => {
            match obj.get("@type") {
                Some(Value::String(t)) => push_unique(types, t),
                Some(Value::Array(ts)) => {
                    for t in ts.iter().filter_map(Value::as_str) {
                        push_unique(types, t);
                    }
                }
                _ => {}
            }
            if let Some(graph) = obj.get("@graph") {
                collect_types(graph, types);
            }
        }
        _ => {}
    }
}

fn push_unique(types: &mut Vec<String>, t: &str) {
    if !types.iter().any(|existing| existing == t) {
        types.push(t.to_string());
    }
}
