//! Heuristic résumé-text extraction.
//!
//! `extract` is the whole contract: one plain-text string in, one fully
//! populated `ResumeRecord` out. Every stage is total — malformed or
//! adversarial text degrades to empty values and fixed placeholders, never an
//! error — and the pipeline is a pure function of its input, safe to call
//! concurrently with no shared state beyond the precompiled regexes.

pub mod defaults;
pub mod experience;
pub mod heuristics;
pub mod normalize;
pub mod patterns;

use crate::models::resume::{ContactInfo, ResumeRecord};

/// Which optional pattern extractors run. Deployment variants that only want
/// a subset of contact fields toggle stages here instead of forking the
/// pipeline; a disabled stage contributes its empty value and the dependent
/// exclusion rules degrade gracefully.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    pub email: bool,
    pub phone: bool,
    pub socials: bool,
    pub address: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            email: true,
            phone: true,
            socials: true,
            address: true,
        }
    }
}

/// Runs the full heuristic pipeline over extracted document text.
///
/// Stage order: normalize, pattern extractors, name/tagline heuristics
/// (which consult the pattern results to avoid double-claiming lines),
/// experience summary, assembly with fixed template content.
pub fn extract(text: &str, options: &ExtractOptions) -> ResumeRecord {
    let lines = normalize::normalize_lines(text);

    let email = if options.email {
        patterns::extract_email(text)
    } else {
        String::new()
    };
    let phone = if options.phone {
        patterns::extract_phone(text)
    } else {
        String::new()
    };
    let socials = if options.socials {
        patterns::extract_socials(text)
    } else {
        Vec::new()
    };
    let address = if options.address {
        patterns::extract_address(&lines)
    } else {
        String::new()
    };

    let name = heuristics::extract_name(&lines);
    let tagline = heuristics::extract_tagline(&lines, &address, &phone);
    let description = experience::summarize_experience(&lines);

    ResumeRecord {
        name,
        title: defaults::DEFAULT_TITLE.to_string(),
        tagline,
        ticker: defaults::TICKER_HIGHLIGHTS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        contact: ContactInfo {
            email,
            phone,
            address,
            socials,
        },
        skills: defaults::default_skills(),
        projects: vec![defaults::experience_project(description)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SocialLabel;

    const SAMPLE_RESUME: &str = "\
Jane Doe
jane@example.com
(415) 555-6789
123 Main St, Springfield
linkedin.com/in/janedoe
Seasoned product leader who has shipped developer platforms at scale.
EXPERIENCE
Acme Corp, Director of Product
Led the migration of 40 enterprise accounts";

    #[test]
    fn test_empty_input_yields_full_record_of_fallbacks() {
        let record = extract("", &ExtractOptions::default());
        assert_eq!(record.name, heuristics::NAME_FALLBACK);
        assert_eq!(record.tagline, heuristics::TAGLINE_FALLBACK);
        assert_eq!(record.contact.email, "");
        assert_eq!(record.contact.phone, "");
        assert_eq!(record.contact.address, "");
        assert!(record.contact.socials.is_empty());
        assert_eq!(record.title, defaults::DEFAULT_TITLE);
        assert_eq!(record.ticker.len(), 4);
        assert_eq!(record.projects.len(), 1);
        assert_eq!(
            record.projects[0].description,
            experience::EXPERIENCE_FALLBACK
        );
    }

    #[test]
    fn test_idempotent_on_identical_input() {
        let opts = ExtractOptions::default();
        assert_eq!(extract(SAMPLE_RESUME, &opts), extract(SAMPLE_RESUME, &opts));
    }

    #[test]
    fn test_full_sample_resume() {
        let record = extract(SAMPLE_RESUME, &ExtractOptions::default());
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.contact.email, "jane@example.com");
        assert_eq!(record.contact.phone, "(415) 555-6789");
        assert_eq!(record.contact.address, "123 Main St, Springfield");
        assert_eq!(record.contact.socials.len(), 1);
        assert_eq!(record.contact.socials[0].label, SocialLabel::LinkedIn);
        assert_eq!(
            record.tagline,
            "Seasoned product leader who has shipped developer platforms at scale."
        );
        assert!(record.projects[0]
            .description
            .starts_with("Acme Corp, Director of Product"));
        assert!(record.projects[0].description.ends_with("..."));
    }

    #[test]
    fn test_email_line_excluded_from_name_and_address() {
        let record = extract(
            "Jane Doe\njane@example.com\n123 Main St, Springfield",
            &ExtractOptions::default(),
        );
        assert_eq!(record.name, "Jane Doe");
        assert!(record.contact.address.contains("123 Main St"));
    }

    #[test]
    fn test_serialized_record_has_all_keys() {
        let record = extract("", &ExtractOptions::default());
        let value = serde_json::to_value(&record).expect("record serializes");
        for key in ["name", "title", "tagline", "ticker", "contact", "skills", "projects"] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        for key in ["email", "phone", "address", "socials"] {
            assert!(value["contact"].get(key).is_some(), "missing contact.{key}");
        }
    }

    #[test]
    fn test_disabled_stages_yield_empty_fields() {
        let opts = ExtractOptions {
            email: false,
            phone: false,
            socials: false,
            address: false,
        };
        let record = extract(SAMPLE_RESUME, &opts);
        assert_eq!(record.contact.email, "");
        assert_eq!(record.contact.phone, "");
        assert_eq!(record.contact.address, "");
        assert!(record.contact.socials.is_empty());
        // The line heuristics still run and still skip contact-shaped lines.
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(
            record.tagline,
            "Seasoned product leader who has shipped developer platforms at scale."
        );
    }
}
