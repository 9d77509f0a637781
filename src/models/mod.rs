//! Audit result records.
//!
//! Every record is built once per audit run, after all of its fetches and
//! parses have completed, and is not mutated afterwards. All records serialize
//! to camelCase JSON for downstream renderers.

mod content;
mod on_page;
mod report;
mod technical;

pub use content::{ContentReport, ContentResult, KeywordCount};
pub use on_page::{
    HeadingLevel, HeadingSet, ImageRecord, ImageSummary, LinkClassification, LinkSummary,
    OnPageReport, OnPageResult, SocialTags,
};
pub use report::{
    AuditFailure, AuditReport, CategoryScore, Overview, Recommendation, RecommendationSet,
};
pub use technical::{
    CheckStatus, RobotsDirective, SitemapUrlStatus, TechnicalOverview, TechnicalReport,
    TechnicalResult,
};
