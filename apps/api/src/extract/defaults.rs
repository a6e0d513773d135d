//! Fixed template content merged into every assembled record.
//!
//! The heuristic pipeline makes no attempt to extract these; the renderer
//! expects them populated, so the assembler fills them with the standard
//! portfolio defaults.

use crate::models::resume::{Project, SkillGroups};

pub const DEFAULT_TITLE: &str = "Product Leader";

pub const TICKER_HIGHLIGHTS: &[&str] = &[
    "Strategic Vision",
    "Revenue Growth",
    "Team Leadership",
    "Innovation",
];

pub fn default_skills() -> SkillGroups {
    SkillGroups {
        strategic: to_owned(&["Product Strategy", "Market Analysis", "Roadmapping"]),
        technical: to_owned(&["Data Analysis", "Project Management", "Agile"]),
        leadership: to_owned(&["Team Building", "Mentorship", "Stakeholder Mgmt"]),
    }
}

/// The single synthesized project card summarizing the experience section.
pub fn experience_project(description: String) -> Project {
    Project {
        id: "1".to_string(),
        title: "Recent Experience".to_string(),
        role: "Professional".to_string(),
        metric: "Key Contributor".to_string(),
        description,
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
