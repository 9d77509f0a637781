//! Shared overview, recommendation and whole-audit records.

use serde::Serialize;

use crate::config::MAX_SCORE;

use super::{ContentResult, OnPageResult, TechnicalResult};

/// Category score on the declared 0..=100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub score: u32,
    pub max_score: u32,
}

impl Overview {
    pub fn new(score: u32) -> Self {
        Self {
            score,
            max_score: MAX_SCORE,
        }
    }
}

/// One remediation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub message: String,
}

impl Recommendation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    pub on_page: Vec<Recommendation>,
    pub technical: Vec<Recommendation>,
    pub content: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: &'static str,
    pub score: u32,
}

/// An analyzer that failed and was replaced by its zeroed default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditFailure {
    pub category: &'static str,
    pub message: String,
}

/// Output of `Auditor::run_audit`.
///
/// Category scores are reported side by side; weighting them into a single
/// number is left to the consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub url: String,
    pub on_page: OnPageResult,
    pub technical: TechnicalResult,
    pub content: ContentResult,
    pub recommendations: RecommendationSet,
    pub category_scores: Vec<CategoryScore>,
    pub failures: Vec<AuditFailure>,
}
