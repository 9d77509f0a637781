//! Technical result records.

use serde::{Serialize, Serializer};

/// Outcome of a robots meta directive check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum RobotsDirective {
    #[default]
    Pass,
    Failed,
}

/// Status of one sitemap entry check: the HTTP status, or `"error"` when the
/// check did not complete (timeout, transport failure, cancellation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Code(u16),
    Error,
}

impl CheckStatus {
    /// A completed check with a 2xx/3xx status.
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Code(code) if *code < 400)
    }
}

impl Serialize for CheckStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CheckStatus::Code(code) => serializer.serialize_u16(*code),
            CheckStatus::Error => serializer.serialize_str("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapUrlStatus {
    pub url: String,
    pub status: CheckStatus,
}

/// Technical analysis of one page and its robots.txt/sitemap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalResult {
    pub score: u32,
    pub robots_txt_url: String,
    pub sitemap_url: Option<String>,
    pub sitemaps_declared: Vec<String>,
    pub disallowed_paths: Vec<String>,
    pub canonical: Option<String>,
    pub canonical_conflict: bool,
    pub has_viewport: bool,
    pub https: bool,
    pub has_fav_icon: bool,
    pub hreflang: bool,
    pub mixed_content: bool,
    #[serde(rename = "isWWW")]
    pub is_www: bool,
    pub trailing_slash: bool,
    #[serde(rename = "pageSizeKB")]
    pub page_size_kb: Option<u64>,
    pub num_requests: usize,
    #[serde(rename = "hasAMP")]
    pub has_amp: bool,
    pub robots_meta_present: bool,
    pub robots_index: RobotsDirective,
    pub robots_follow: RobotsDirective,
    pub x_robots_tag: Option<String>,
    pub sitemap_url_count: usize,
    pub sitemap_valid_urls: Vec<SitemapUrlStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechnicalOverview {
    pub score: u32,
}

/// `analyze_technical_seo` output: `{technicalSeo:{...}, overview:{score}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalReport {
    pub technical_seo: TechnicalResult,
    pub overview: TechnicalOverview,
}

impl From<TechnicalResult> for TechnicalReport {
    fn from(technical_seo: TechnicalResult) -> Self {
        Self {
            overview: TechnicalOverview {
                score: technical_seo.score,
            },
            technical_seo,
        }
    }
}
