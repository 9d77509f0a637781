//! robots.txt resolution.
//!
//! Only the two directives the audit reports are read: `Sitemap:` pointers and
//! `Disallow:` paths. User-agent groups are not distinguished; every `Disallow`
//! line in the file is collected.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// `Sitemap: <url>` with any casing and spacing around the colon.
static SITEMAP_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*sitemap\s*:\s*(\S+)").unwrap_or_else(|e| {
        panic!(
            "Failed to compile SITEMAP_LINE_RE: {}. This is a programming error.",
            e
        )
    })
});

const DISALLOW_PREFIX: &str = "disallow:";

/// Directives read from one robots.txt body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotsTxt {
    /// Every `Sitemap:` value in document order, resolved against the origin
    pub sitemaps: Vec<String>,
    /// Non-empty `Disallow:` paths in document order
    pub disallowed_paths: Vec<String>,
}

impl RobotsTxt {
    /// The first declared sitemap.
    pub fn sitemap_url(&self) -> Option<&str> {
        self.sitemaps.first().map(String::as_str)
    }
}

/// The robots.txt location for a page: `origin + "/robots.txt"`.
pub fn robots_url(page: &Url) -> String {
    format!("{}/robots.txt", page.origin().ascii_serialization())
}

/// Parses a robots.txt body line by line.
///
/// Text after `#` is a comment. `Disallow:` lines with an empty value (which
/// allow everything) are skipped. Relative `Sitemap:` values are resolved
/// against `origin`; values that cannot be resolved are kept verbatim.
///
/// # Arguments
///
/// * `body` - robots.txt contents
/// * `origin` - Any URL on the audited site
pub fn parse_robots_txt(body: &str, origin: &Url) -> RobotsTxt {
    let mut robots = RobotsTxt::default();

    for raw_line in body.lines() {
        let line = match raw_line.find('#') {
            Some(idx) => &raw_line[..idx],
            None => raw_line,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = SITEMAP_LINE_RE.captures(line) {
            let value = &caps[1];
            let resolved = origin
                .join(value)
                .map(|url| url.to_string())
                .unwrap_or_else(|_| value.to_string());
            robots.sitemaps.push(resolved);
            continue;
        }

        let is_disallow = line
            .get(..DISALLOW_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(DISALLOW_PREFIX));
        if is_disallow {
            let path = line[DISALLOW_PREFIX.len()..].trim();
            if !path.is_empty() {
                robots.disallowed_paths.push(path.to_string());
            }
        }
    }

    log::debug!(
        "Parsed robots.txt: {} sitemap(s), {} disallow rule(s)",
        robots.sitemaps.len(),
        robots.disallowed_paths.len()
    );
    robots
}
