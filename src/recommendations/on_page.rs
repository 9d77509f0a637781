use crate::config::{MAX_META_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH, MIN_BODY_TEXT_LENGTH};
use crate::models::{HeadingLevel, OnPageResult, Recommendation};
use crate::utils::char_len;

/// On-page recommendations, in rule order.
pub fn on_page(result: &OnPageResult) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if result.title.is_empty() {
        out.push(Recommendation::new("Add a title tag to the page."));
    } else if !result.title_pass {
        out.push(Recommendation::new(format!(
            "Shorten the title to {} characters or fewer (currently {}).",
            MAX_TITLE_LENGTH,
            char_len(&result.title)
        )));
    }

    if result.meta_description.is_empty() {
        out.push(Recommendation::new(
            "Add a meta description that summarizes the page.",
        ));
    } else if !result.meta_pass {
        out.push(Recommendation::new(format!(
            "Shorten the meta description to {} characters or fewer (currently {}).",
            MAX_META_DESCRIPTION_LENGTH,
            char_len(&result.meta_description)
        )));
    }

    match result.headings.count(HeadingLevel::H1) {
        0 => out.push(Recommendation::new("Add an H1 heading to the page.")),
        1 => {}
        n => out.push(Recommendation::new(format!(
            "Use a single H1 heading (found {}).",
            n
        ))),
    }
    if result.headings.count(HeadingLevel::H2) == 0 {
        out.push(Recommendation::new(
            "Add H2 subheadings to structure the content.",
        ));
    }

    if result.images.count == 0 {
        out.push(Recommendation::new(
            "Add relevant images with descriptive alt text.",
        ));
    } else if result.images.without_alt > 0 {
        out.push(Recommendation::new(format!(
            "Add alt text to {} image(s).",
            result.images.without_alt
        )));
    }

    let links = &result.links.classification;
    if links.broken > 0 {
        out.push(Recommendation::new(format!(
            "Fix {} broken link(s).",
            links.broken
        )));
    }
    if links.internal == 0 {
        out.push(Recommendation::new("Add internal links to related pages."));
    }

    if !result.body_pass {
        out.push(Recommendation::new(format!(
            "Add more body text (currently {} characters, aim for more than {}).",
            result.body_text_length, MIN_BODY_TEXT_LENGTH
        )));
    }

    if !result.social.pass {
        let missing: Vec<&str> = [
            ("og:title", result.social.og_title.is_none()),
            ("og:description", result.social.og_description.is_none()),
            ("twitter:card", result.social.twitter_card.is_none()),
        ]
        .into_iter()
        .filter(|(_, absent)| *absent)
        .map(|(tag, _)| tag)
        .collect();
        out.push(Recommendation::new(format!(
            "Add the missing social tags: {}.",
            missing.join(", ")
        )));
    }

    if !result.structured_data_present {
        out.push(Recommendation::new(
            "Add structured data (JSON-LD) describing the page.",
        ));
    }

    out
}
