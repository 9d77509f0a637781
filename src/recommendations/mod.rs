//! Recommendation derivation.
//!
//! One pure function per category. Rules run top to bottom in a fixed order and
//! each appends at most one fixed-template message; identical results always
//! yield identical lists.

mod content;
mod on_page;
mod technical;

pub use content::content;
pub use on_page::on_page;
pub use technical::technical;

use crate::models::{ContentResult, OnPageResult, RecommendationSet, TechnicalResult};

/// Recommendations for all three categories of an audit.
pub fn all(
    on_page_result: &OnPageResult,
    technical_result: &TechnicalResult,
    content_result: &ContentResult,
) -> RecommendationSet {
    RecommendationSet {
        on_page: on_page(on_page_result),
        technical: technical(technical_result),
        content: content(content_result),
    }
}
