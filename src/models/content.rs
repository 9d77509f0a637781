//! Content result records.

use serde::Serialize;

use super::report::Overview;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Content analysis of one page's visible text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResult {
    pub score: u32,
    pub word_count: usize,
    pub word_count_pass: bool,
    pub paragraph_count: usize,
    pub paragraphs_pass: bool,
    pub sentence_count: usize,
    pub average_sentence_length: f64,
    pub sentence_length_pass: bool,
    pub text_to_html_ratio: f64,
    pub text_ratio_pass: bool,
    pub top_keywords: Vec<KeywordCount>,
}

/// `analyze_content` output: `{contentSeo:{...}, overview:{score,maxScore}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReport {
    pub content_seo: ContentResult,
    pub overview: Overview,
}

impl From<ContentResult> for ContentReport {
    fn from(content_seo: ContentResult) -> Self {
        Self {
            overview: Overview::new(content_seo.score),
            content_seo,
        }
    }
}
