use crate::config::{
    MAX_AVERAGE_SENTENCE_LENGTH, MIN_PARAGRAPH_COUNT, MIN_TEXT_TO_HTML_RATIO, MIN_WORD_COUNT,
};
use crate::models::{ContentResult, Recommendation};

/// Content recommendations, in rule order.
pub fn content(result: &ContentResult) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if !result.word_count_pass {
        out.push(Recommendation::new(format!(
            "Expand the content to at least {} words (currently {}).",
            MIN_WORD_COUNT, result.word_count
        )));
    }
    if !result.paragraphs_pass {
        out.push(Recommendation::new(format!(
            "Break the content into at least {} paragraphs (currently {}).",
            MIN_PARAGRAPH_COUNT, result.paragraph_count
        )));
    }
    if result.sentence_count == 0 {
        out.push(Recommendation::new("Add readable sentences to the page."));
    } else if !result.sentence_length_pass {
        out.push(Recommendation::new(format!(
            "Shorten sentences to {} words or fewer on average (currently {}).",
            MAX_AVERAGE_SENTENCE_LENGTH, result.average_sentence_length
        )));
    }
    if !result.text_ratio_pass {
        out.push(Recommendation::new(format!(
            "Increase visible text relative to markup to at least {}% (currently {}%).",
            MIN_TEXT_TO_HTML_RATIO, result.text_to_html_ratio
        )));
    }

    out
}
