//! On-page result construction.

use url::Url;

use crate::config::{MAX_META_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH, MIN_BODY_TEXT_LENGTH};
use crate::models::{HeadingLevel, ImageSummary, LinkSummary, OnPageResult};
use crate::parse::{
    classify_links, extract_headings, extract_images, extract_meta_description,
    extract_schema_types, extract_social_tags, extract_title, has_json_ld, Document,
};
use crate::utils::char_len;

use super::scoring::on_page_score;

/// Builds the on-page result for a parsed page.
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `page` - The audited URL; anchors are resolved against it
pub fn build_on_page_result(document: &Document, page: &Url) -> OnPageResult {
    let title = extract_title(document);
    let title_pass = !title.is_empty() && char_len(&title) <= MAX_TITLE_LENGTH;

    let meta_description = extract_meta_description(document);
    let meta_pass =
        !meta_description.is_empty() && char_len(&meta_description) <= MAX_META_DESCRIPTION_LENGTH;

    let headings = extract_headings(document);
    let headings_pass =
        headings.count(HeadingLevel::H1) == 1 && headings.count(HeadingLevel::H2) > 0;

    let items = extract_images(document);
    let with_alt = items.iter().filter(|image| image.has_alt).count();
    let images = ImageSummary {
        count: items.len(),
        with_alt,
        without_alt: items.len() - with_alt,
        pass: !items.is_empty() && with_alt == items.len(),
        items,
    };

    let classification = classify_links(document, page);
    let links = LinkSummary {
        classification,
        pass: classification.internal > 0 && classification.broken == 0,
    };

    let body_text_length = char_len(&document.visible_body_text());

    let mut result = OnPageResult {
        score: 0,
        title,
        title_pass,
        meta_description,
        meta_pass,
        headings,
        headings_pass,
        images,
        links,
        social: extract_social_tags(document),
        structured_data_present: has_json_ld(document),
        structured_data_types: extract_schema_types(document),
        body_text_length,
        body_pass: body_text_length > MIN_BODY_TEXT_LENGTH,
    };
    result.score = on_page_score(&result);
    result
}
