//! Content result construction.

use std::collections::HashMap;

use crate::config::{
    MAX_AVERAGE_SENTENCE_LENGTH, MIN_KEYWORD_LENGTH, MIN_PARAGRAPH_COUNT, MIN_TEXT_TO_HTML_RATIO,
    MIN_WORD_COUNT, TOP_KEYWORD_COUNT,
};
use crate::models::{ContentResult, KeywordCount};
use crate::parse::{count_paragraphs, Document};
use crate::utils::{char_len, round1};

use super::scoring::content_score;

/// Common English words of keyword length that carry no topic.
const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "also", "because", "been", "before", "being", "below",
    "between", "both", "came", "come", "could", "does", "doing", "down", "during", "each",
    "even", "every", "from", "further", "have", "having", "here", "into", "just", "like",
    "made", "make", "many", "more", "most", "much", "must", "only", "other", "over", "same",
    "should", "some", "such", "than", "that", "their", "them", "then", "there", "these",
    "they", "this", "those", "through", "under", "until", "very", "want", "were", "what",
    "when", "where", "which", "while", "will", "with", "would", "your", "yours",
];

/// Builds the content result for a parsed page.
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `html_length` - Length of the raw HTML in characters, for the text-to-HTML ratio
pub fn build_content_result(document: &Document, html_length: usize) -> ContentResult {
    let text = document.visible_body_text();

    let word_count = text
        .split_whitespace()
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .count();
    let paragraph_count = count_paragraphs(document);
    let sentence_count = count_sentences(&text);
    let average_sentence_length = if sentence_count == 0 {
        0.0
    } else {
        round1(word_count as f64 / sentence_count as f64)
    };
    let text_to_html_ratio = if html_length == 0 {
        0.0
    } else {
        round1(char_len(&text) as f64 * 100.0 / html_length as f64)
    };

    let mut result = ContentResult {
        score: 0,
        word_count,
        word_count_pass: word_count >= MIN_WORD_COUNT,
        paragraph_count,
        paragraphs_pass: paragraph_count >= MIN_PARAGRAPH_COUNT,
        sentence_count,
        average_sentence_length,
        sentence_length_pass: average_sentence_length > 0.0
            && average_sentence_length <= MAX_AVERAGE_SENTENCE_LENGTH,
        text_to_html_ratio,
        text_ratio_pass: text_to_html_ratio >= MIN_TEXT_TO_HTML_RATIO,
        top_keywords: top_keywords(&text),
    };
    result.score = content_score(&result);
    result
}

/// Sentences are runs of text ending in `.`, `!` or `?` (or the end of the text)
/// that contain at least one word.
fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|fragment| fragment.chars().any(char::is_alphanumeric))
        .count()
}

/// Most frequent topic words, by count descending then alphabetically.
fn top_keywords(text: &str) -> Vec<KeywordCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in text.split(|c: char| !c.is_alphabetic()) {
        if char_len(word) < MIN_KEYWORD_LENGTH {
            continue;
        }
        let word = word.to_lowercase();
        if STOP_WORDS.contains(&word.as_str()) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut keywords: Vec<KeywordCount> = counts
        .into_iter()
        .map(|(keyword, count)| KeywordCount { keyword, count })
        .collect();
    keywords.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.keyword.cmp(&b.keyword)));
    keywords.truncate(TOP_KEYWORD_COUNT);
    keywords
}
