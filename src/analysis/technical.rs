//! Technical result construction.

use url::Url;

use crate::models::{RobotsDirective, SitemapUrlStatus, TechnicalResult};
use crate::parse::PageSignals;
use crate::robots::{robots_url, RobotsTxt};

use super::scoring::technical_score;

/// Everything the technical analyzer gathered for one page.
///
/// Each field holds its default when the corresponding fetch failed.
#[derive(Debug, Clone, Default)]
pub struct TechnicalInputs {
    pub robots: RobotsTxt,
    pub signals: PageSignals,
    /// Declared `Content-Length` of the page response
    pub content_length: Option<u64>,
    pub x_robots_tag: Option<String>,
    /// The page declares an icon, or `/favicon.ico` answered with a non-error status
    pub favicon_found: bool,
    /// Total `<loc>` entries in the sitemap, before capping
    pub sitemap_url_count: usize,
    pub sitemap_statuses: Vec<SitemapUrlStatus>,
}

/// Builds the technical result from the audited URL and the gathered inputs.
///
/// `https`, `isWWW` and `trailingSlash` come from the URL itself, so they are
/// correct even when the page could not be fetched.
pub fn build_technical_result(page: &Url, inputs: TechnicalInputs) -> TechnicalResult {
    let TechnicalInputs {
        robots,
        signals,
        content_length,
        x_robots_tag,
        favicon_found,
        sitemap_url_count,
        sitemap_statuses,
    } = inputs;

    let (robots_index, robots_follow) = robots_directives(signals.robots_meta.as_deref());

    let mut result = TechnicalResult {
        score: 0,
        robots_txt_url: robots_url(page),
        sitemap_url: robots.sitemap_url().map(str::to_string),
        sitemaps_declared: robots.sitemaps,
        disallowed_paths: robots.disallowed_paths,
        canonical: signals.canonical,
        canonical_conflict: signals.canonical_count > 1,
        has_viewport: signals.has_viewport,
        https: page.scheme() == "https",
        has_fav_icon: favicon_found,
        hreflang: signals.hreflang,
        mixed_content: signals.mixed_content,
        is_www: page.host_str().is_some_and(|host| host.starts_with("www.")),
        trailing_slash: page.path().ends_with('/'),
        page_size_kb: content_length.map(|bytes| (bytes as f64 / 1024.0).round() as u64),
        num_requests: signals.num_requests,
        has_amp: signals.has_amp,
        robots_meta_present: signals.robots_meta.is_some(),
        robots_index,
        robots_follow,
        x_robots_tag,
        sitemap_url_count,
        sitemap_valid_urls: sitemap_statuses,
    };
    result.score = technical_score(&result);
    result
}

/// Reads `noindex` / `nofollow` / `none` from a robots meta `content` value.
fn robots_directives(content: Option<&str>) -> (RobotsDirective, RobotsDirective) {
    let mut index = RobotsDirective::Pass;
    let mut follow = RobotsDirective::Pass;
    for token in content.unwrap_or_default().split(',') {
        match token.trim().to_ascii_lowercase().as_str() {
            "noindex" => index = RobotsDirective::Failed,
            "nofollow" => follow = RobotsDirective::Failed,
            "none" => {
                index = RobotsDirective::Failed;
                follow = RobotsDirective::Failed;
            }
            _ => {}
        }
    }
    (index, follow)
}
