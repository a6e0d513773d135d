//! Text normalization — the first stage every heuristic reads from.

/// Splits raw extracted text into trimmed, non-empty lines, preserving
/// top-to-bottom document order.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Collapses every whitespace run (including newlines) to a single space
/// and trims the ends. Empty input yields an empty string.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
