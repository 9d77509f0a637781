//! Technical signal extraction from a parsed page.

use std::sync::LazyLock;

use scraper::Selector;
use url::Url;

use crate::utils::parse_selector_unsafe;

use super::document::Document;

const CANONICAL_SELECTOR_STR: &str = "link[rel='canonical']";
const VIEWPORT_SELECTOR_STR: &str = "meta[name='viewport']";
const ICON_SELECTOR_STR: &str = "link[rel~='icon'], link[rel='apple-touch-icon']";
const HREFLANG_SELECTOR_STR: &str = "link[hreflang]";
const ROBOTS_META_SELECTOR_STR: &str = "meta[name='robots']";
const AMP_SELECTOR_STR: &str = "link[rel='amphtml'], html[amp]";
const SCRIPT_SRC_SELECTOR_STR: &str = "script[src]";
const IMG_SRC_SELECTOR_STR: &str = "img[src]";
const STYLESHEET_SELECTOR_STR: &str = "link[rel~='stylesheet'][href]";
// Sub-resources the browser requests on load
const SUBRESOURCE_SELECTOR_STR: &str =
    "script[src], link[rel~='stylesheet'][href], img[src], iframe[src], source[src], video[src], audio[src]";

static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(CANONICAL_SELECTOR_STR, "CANONICAL_SELECTOR"));
static VIEWPORT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(VIEWPORT_SELECTOR_STR, "VIEWPORT_SELECTOR"));
static ICON_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ICON_SELECTOR_STR, "ICON_SELECTOR"));
static HREFLANG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(HREFLANG_SELECTOR_STR, "HREFLANG_SELECTOR"));
static ROBOTS_META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ROBOTS_META_SELECTOR_STR, "ROBOTS_META_SELECTOR"));
static AMP_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(AMP_SELECTOR_STR, "AMP_SELECTOR"));
static SCRIPT_SRC_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(SCRIPT_SRC_SELECTOR_STR, "SCRIPT_SRC_SELECTOR"));
static IMG_SRC_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(IMG_SRC_SELECTOR_STR, "IMG_SRC_SELECTOR"));
static STYLESHEET_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(STYLESHEET_SELECTOR_STR, "STYLESHEET_SELECTOR"));
static SUBRESOURCE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(SUBRESOURCE_SELECTOR_STR, "SUBRESOURCE_SELECTOR"));

/// Page-derived technical signals.
///
/// `Default` is what an empty (unfetched) page yields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSignals {
    /// First canonical href, resolved against the page URL
    pub canonical: Option<String>,
    /// Number of `<link rel="canonical">` tags
    pub canonical_count: usize,
    pub has_viewport: bool,
    /// Whether the page declares an icon link
    pub favicon_declared: bool,
    pub hreflang: bool,
    pub mixed_content: bool,
    pub num_requests: usize,
    pub has_amp: bool,
    /// Raw `content` of `<meta name="robots">`, if the tag exists
    pub robots_meta: Option<String>,
}

/// Extracts technical signals from a parsed page.
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `base` - The page URL, used to resolve the canonical href
pub fn extract_page_signals(document: &Document, base: &Url) -> PageSignals {
    let canonical_count = document.count(&CANONICAL_SELECTOR);
    let canonical = document
        .first_attr(&CANONICAL_SELECTOR, "href")
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
        .map(|href| {
            base.join(&href)
                .map(|resolved| resolved.to_string())
                .unwrap_or(href)
        });

    let robots_meta = document
        .first(&ROBOTS_META_SELECTOR)
        .map(|node| node.attr("content").unwrap_or_default().trim().to_string());

    let signals = PageSignals {
        canonical,
        canonical_count,
        has_viewport: document.exists(&VIEWPORT_SELECTOR),
        favicon_declared: document.exists(&ICON_SELECTOR),
        hreflang: document.exists(&HREFLANG_SELECTOR),
        mixed_content: has_mixed_content(document),
        num_requests: document.count(&SUBRESOURCE_SELECTOR),
        has_amp: document.exists(&AMP_SELECTOR),
        robots_meta,
    };
    log::debug!("Page signals for {}: {:?}", base, signals);
    signals
}

fn has_mixed_content(document: &Document) -> bool {
    let insecure = |value: Option<&str>| value.is_some_and(is_insecure_reference);
    document
        .select(&SCRIPT_SRC_SELECTOR)
        .chain(document.select(&IMG_SRC_SELECTOR))
        .any(|node| insecure(node.attr("src")))
        || document
            .select(&STYLESHEET_SELECTOR)
            .any(|node| insecure(node.attr("href")))
}

fn is_insecure_reference(reference: &str) -> bool {
    reference
        .trim()
        .get(..7)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("http://"))
}
