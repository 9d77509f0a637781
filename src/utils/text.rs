//! Text normalization helpers shared by the analyzers.

/// Collapses every run of whitespace into a single space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Length in characters (not bytes), so non-ASCII titles are measured fairly.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `round(100 * passed / total)`, 0 when `total` is 0.
pub fn percentage(passed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((passed as f64 * 100.0) / total as f64).round() as u32
}
