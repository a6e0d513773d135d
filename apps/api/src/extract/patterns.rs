//! Pattern extractors — one precompiled regex per contact field, each with a
//! documented disambiguation rule for multi-match input.
//!
//! All regexes are process-wide immutable statics compiled once; the
//! extractors themselves are pure functions over the input text.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::{SocialLabel, SocialLink};

/// Loose email shape: local part and domain segments allow letters, digits,
/// `.`, `_`, `-`. Deliberately looser than RFC 5322.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[a-z0-9._-]+@[a-z0-9._-]+\.[a-z0-9._-]+").expect("valid email regex")
});

/// Phone shape: optional `+` country code (1-3 digits), optional parenthesized
/// area code, `-`/`.`/space separators, 3-digit exchange, 4-digit subscriber.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?(?:\(?\d{3}\)?[-.\s]?)?\d{3}[-.\s]?\d{4}")
        .expect("valid phone regex")
});

/// Known platform URLs, with or without scheme and `www.` prefix.
static SOCIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?(?:linkedin\.com|github\.com|twitter\.com|x\.com)/\S+")
        .expect("valid social regex")
});

/// "City, ST" or "City, ST 12345" shape.
static CITY_STATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][a-zA-Z\s]+,\s[A-Z]{2}(?:\s\d{5})?").expect("valid city/state regex")
});

/// Street and unit vocabulary, whole-word and case-insensitive.
static ADDRESS_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:Street|St|Avenue|Ave|Road|Rd|Drive|Dr|Lane|Ln|Boulevard|Blvd|Way|Circle|Cir|Court|Ct|Plaza|Plz|Square|Sq|Apartment|Apt|Suite|Ste|Unit|Box)\b",
    )
    .expect("valid address keyword regex")
});

/// Address candidates are only considered in the top of the document; further
/// down, digit-plus-keyword lines are usually experience bullets.
const ADDRESS_SCAN_WINDOW: usize = 20;

/// First email in document order, or empty string.
pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First phone match longer than 9 characters, or empty string.
/// The length gate rejects bare 7-digit fragments ("555-1234") that satisfy
/// the loose sub-pattern without an area code.
pub fn extract_phone(text: &str) -> String {
    PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|s| s.len() > 9)
        .unwrap_or_default()
        .to_string()
}

/// Every platform URL in match order, labeled and scheme-normalized.
/// Duplicates are kept: each textual occurrence is its own entry.
pub fn extract_socials(text: &str) -> Vec<SocialLink> {
    SOCIAL_RE
        .find_iter(text)
        .map(|m| {
            let raw = m.as_str().trim();
            let lower = raw.to_ascii_lowercase();
            let label = if lower.contains("linkedin") {
                SocialLabel::LinkedIn
            } else if lower.contains("github") {
                SocialLabel::GitHub
            } else if lower.contains("twitter") || lower.contains("x.com") {
                SocialLabel::Twitter
            } else {
                SocialLabel::Link
            };
            let url = if lower.starts_with("http") {
                raw.to_string()
            } else {
                format!("https://{raw}")
            };
            SocialLink { label, url }
        })
        .collect()
}

/// Scans the top of the line sequence for an address, skipping contact lines.
/// Per line, the "City, ST" shape is tried first (returning the matched
/// substring), then the digit-plus-street-keyword rule (returning the whole
/// line). First hit in iteration order wins; no match yields empty string.
pub fn extract_address(lines: &[String]) -> String {
    for line in lines.iter().take(ADDRESS_SCAN_WINDOW) {
        if is_contact_line(line) {
            continue;
        }
        if let Some(m) = CITY_STATE_RE.find(line) {
            return m.as_str().to_string();
        }
        if ADDRESS_KEYWORD_RE.is_match(line) && line.chars().any(|c| c.is_ascii_digit()) {
            return line.clone();
        }
    }
    String::new()
}

/// A line already claimed by the email, phone, or social extractors.
/// The name, tagline, and address heuristics all skip these.
pub fn is_contact_line(line: &str) -> bool {
    EMAIL_RE.is_match(line) || PHONE_RE.is_match(line) || SOCIAL_RE.is_match(line)
}

pub fn has_address_keyword(line: &str) -> bool {
    ADDRESS_KEYWORD_RE.is_match(line)
}

pub fn matches_city_state(line: &str) -> bool {
    CITY_STATE_RE.is_match(line)
}
