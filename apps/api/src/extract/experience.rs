//! Experience summarizer — finds a section heading and folds the lines under
//! it into one bounded descriptive string.

use std::sync::LazyLock;

use regex::Regex;

pub const EXPERIENCE_FALLBACK: &str = "Extracted from CV...";

// How much of the section gets folded into the synthesized project card.
const SUMMARY_LINE_COUNT: usize = 5;
const SUMMARY_MAX_CHARS: usize = 300;

static SECTION_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)experience|work history|employment").expect("valid heading regex")
});

/// Joins up to five lines following the first experience-section heading,
/// truncated to 300 characters with an ellipsis marker. A document without a
/// recognizable heading gets the fixed placeholder.
pub fn summarize_experience(lines: &[String]) -> String {
    let Some(idx) = lines.iter().position(|l| SECTION_HEADING_RE.is_match(l)) else {
        return EXPERIENCE_FALLBACK.to_string();
    };

    let joined = lines[idx + 1..]
        .iter()
        .take(SUMMARY_LINE_COUNT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    let mut summary: String = joined.chars().take(SUMMARY_MAX_CHARS).collect();
    summary.push_str("...");
    summary
}
