//! Name and tagline heuristics — top-down line scans with exclusion rules
//! against everything the pattern extractors already claimed.

use std::sync::LazyLock;

use regex::Regex;

use crate::extract::patterns::{has_address_keyword, is_contact_line, matches_city_state};

pub const NAME_FALLBACK: &str = "Your Name";
pub const TAGLINE_FALLBACK: &str = "Professional with experience in industry.";

// Exclusive bounds: a plausible name is 3..=29 characters.
const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 30;

// A summary line is long enough to be a sentence, short enough to not be a
// pasted paragraph block.
const TAGLINE_MIN_CHARS: usize = 40;
const TAGLINE_MAX_CHARS: usize = 300;

/// Letters and whitespace only — no digits, no punctuation.
static NAME_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("valid name shape regex"));

/// First line that looks like a human name: short, alphabetic, not a contact
/// line, and not mistakable for a location. Falls back to a placeholder.
pub fn extract_name(lines: &[String]) -> String {
    for line in lines {
        if is_contact_line(line) {
            continue;
        }
        let len = line.chars().count();
        if len > NAME_MIN_CHARS
            && len < NAME_MAX_CHARS
            && NAME_SHAPE_RE.is_match(line)
            && !has_address_keyword(line)
            && !matches_city_state(line)
        {
            return line.clone();
        }
    }
    NAME_FALLBACK.to_string()
}

/// First line that plausibly reads as a professional summary.
///
/// Skips, in order: lines outside the length window, contact lines, lines
/// textually containing the already-extracted address or phone (defends
/// against partial overlaps the regexes miss), and location-looking lines.
pub fn extract_tagline(lines: &[String], address: &str, phone: &str) -> String {
    for line in lines {
        let len = line.chars().count();
        if len < TAGLINE_MIN_CHARS || len > TAGLINE_MAX_CHARS {
            continue;
        }
        if is_contact_line(line) {
            continue;
        }
        if !address.is_empty() && line.contains(address) {
            continue;
        }
        if !phone.is_empty() && line.contains(phone) {
            continue;
        }
        if has_address_keyword(line) || matches_city_state(line) {
            continue;
        }
        return line.clone();
    }
    TAGLINE_FALLBACK.to_string()
}
