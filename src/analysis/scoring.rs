//! Category scoring.

use crate::config::{
    CONTENT_SIGNAL_COUNT, MAX_PAGE_SIZE_KB, MAX_REQUEST_COUNT, POINTS_BODY, POINTS_H1, POINTS_H2,
    POINTS_H3, POINTS_IMAGES, POINTS_LINKS, POINTS_META_DESCRIPTION, POINTS_SOCIAL,
    POINTS_STRUCTURED_DATA, POINTS_TITLE, TECHNICAL_SIGNAL_COUNT,
};
use crate::models::{ContentResult, HeadingLevel, OnPageResult, TechnicalResult};
use crate::utils::percentage;

/// Additive on-page score with no partial credit.
///
/// The point table tops out at 85 while the declared scale is 100; scores are
/// reported on that scale unchanged.
pub fn on_page_score(result: &OnPageResult) -> u32 {
    let headings = &result.headings;
    [
        (result.title_pass, POINTS_TITLE),
        (result.meta_pass, POINTS_META_DESCRIPTION),
        (headings.count(HeadingLevel::H1) == 1, POINTS_H1),
        (headings.count(HeadingLevel::H2) > 0, POINTS_H2),
        (headings.count(HeadingLevel::H3) > 0, POINTS_H3),
        (result.images.pass, POINTS_IMAGES),
        (result.links.pass, POINTS_LINKS),
        (result.body_pass, POINTS_BODY),
        (result.social.pass, POINTS_SOCIAL),
        (result.structured_data_present, POINTS_STRUCTURED_DATA),
    ]
    .iter()
    .filter(|(passed, _)| *passed)
    .map(|(_, points)| points)
    .sum()
}

/// The 13 technical signals in scoring order.
///
/// `isWWW` and `trailingSlash` count as good when true. A missing page size
/// counts as failing the size check.
pub fn technical_signals(result: &TechnicalResult) -> [bool; TECHNICAL_SIGNAL_COUNT] {
    [
        result.has_viewport,
        result.https,
        result.canonical.is_some(),
        !result.canonical_conflict,
        !result.mixed_content,
        result.page_size_kb.is_some_and(|kb| kb < MAX_PAGE_SIZE_KB),
        result.num_requests < MAX_REQUEST_COUNT,
        result.has_fav_icon,
        result.hreflang,
        result.is_www,
        result.trailing_slash,
        result.has_amp,
        result.robots_meta_present,
    ]
}

/// Rounded percentage of true technical signals.
pub fn technical_score(result: &TechnicalResult) -> u32 {
    let signals = technical_signals(result);
    percentage(signals.iter().filter(|s| **s).count(), signals.len())
}

/// Rounded percentage of passed content checks.
pub fn content_score(result: &ContentResult) -> u32 {
    let passed = [
        result.word_count_pass,
        result.paragraphs_pass,
        result.sentence_length_pass,
        result.text_ratio_pass,
    ]
    .iter()
    .filter(|p| **p)
    .count();
    percentage(passed, CONTENT_SIGNAL_COUNT)
}
