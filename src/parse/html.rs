//! On-page element extraction.
//!
//! This module extracts the elements the on-page analyzer scores:
//! - Page title and meta description
//! - Heading structure (h1..h6)
//! - Images and their alt coverage
//! - Anchor classification (internal / external / broken)
//! - Paragraph count

use std::sync::LazyLock;

use scraper::Selector;
use url::Url;

use crate::models::{HeadingLevel, HeadingSet, ImageRecord, LinkClassification};
use crate::utils::{collapse_whitespace, parse_selector_unsafe};

use super::document::Document;

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";
const HEADINGS_SELECTOR_STR: &str = "h1, h2, h3, h4, h5, h6";
const IMAGE_SELECTOR_STR: &str = "img";
const ANCHOR_SELECTOR_STR: &str = "a[href]";
const PARAGRAPH_SELECTOR_STR: &str = "p";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(META_DESCRIPTION_SELECTOR_STR, "META_DESCRIPTION_SELECTOR")
});
static HEADINGS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(HEADINGS_SELECTOR_STR, "HEADINGS_SELECTOR"));
static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(IMAGE_SELECTOR_STR, "IMAGE_SELECTOR"));
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));
static PARAGRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(PARAGRAPH_SELECTOR_STR, "PARAGRAPH_SELECTOR"));

/// Extracts the page title.
///
/// Returns the trimmed text of the first `<title>` element, or an empty string
/// if there is none.
pub fn extract_title(document: &Document) -> String {
    let title = document.first_text(&TITLE_SELECTOR).unwrap_or_default();
    log::debug!("Extracted title: '{}' ({} chars)", title, title.chars().count());
    title
}

/// Extracts the meta description.
///
/// Returns the trimmed `content` of the first `<meta name="description">`, or an
/// empty string if the tag or its content is missing.
pub fn extract_meta_description(document: &Document) -> String {
    document
        .first_attr(&META_DESCRIPTION_SELECTOR, "content")
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

/// Extracts heading texts per level in document order.
///
/// Heading text has its internal whitespace collapsed.
pub fn extract_headings(document: &Document) -> HeadingSet {
    HeadingSet::from_headings(document.select(&HEADINGS_SELECTOR).filter_map(|node| {
        HeadingLevel::from_tag(node.name()).map(|level| (level, collapse_whitespace(&node.text())))
    }))
}

/// Extracts every `<img>` with its alt coverage.
///
/// An image "has alt" only when its `alt` attribute is non-empty after trimming;
/// `alt=""` counts the same as a missing attribute.
pub fn extract_images(document: &Document) -> Vec<ImageRecord> {
    document
        .select(&IMAGE_SELECTOR)
        .map(|node| {
            let alt = node.attr("alt").map(str::to_string);
            let has_alt = alt.as_deref().is_some_and(|a| !a.trim().is_empty());
            ImageRecord {
                src: node.attr("src").unwrap_or_default().to_string(),
                alt,
                has_alt,
            }
        })
        .collect()
}

/// Classifies every anchor that carries an `href`.
///
/// - empty, `#`, or unresolvable against `base` → broken
/// - resolved hostname equal to `base`'s hostname → internal
/// - anything else (other hosts, `mailto:`, `javascript:`) → external
pub fn classify_links(document: &Document, base: &Url) -> LinkClassification {
    let mut tally = LinkClassification::default();
    for node in document.select(&ANCHOR_SELECTOR) {
        let href = node.attr("href").unwrap_or_default();
        match classify_href(href, base) {
            LinkKind::Internal => tally.internal += 1,
            LinkKind::External => tally.external += 1,
            LinkKind::Broken => tally.broken += 1,
        }
    }
    log::debug!(
        "Classified links for {}: {} internal, {} external, {} broken",
        base,
        tally.internal,
        tally.external,
        tally.broken
    );
    tally
}

/// Number of `<p>` elements with non-blank text.
pub fn count_paragraphs(document: &Document) -> usize {
    document
        .select(&PARAGRAPH_SELECTOR)
        .filter(|node| !node.text().is_empty())
        .count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinkKind {
    Internal,
    External,
    Broken,
}

pub(crate) fn classify_href(href: &str, base: &Url) -> LinkKind {
    let href = href.trim();
    if href.is_empty() || href == "#" {
        return LinkKind::Broken;
    }
    match base.join(href) {
        Ok(resolved) if resolved.host_str() == base.host_str() => LinkKind::Internal,
        Ok(_) => LinkKind::External,
        Err(_) => LinkKind::Broken,
    }
}
