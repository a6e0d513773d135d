use serde::{Deserialize, Serialize};

/// Platform label for a detected profile URL.
/// Classification priority is fixed: LinkedIn, GitHub, Twitter, then generic Link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocialLabel {
    LinkedIn,
    GitHub,
    Twitter,
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: SocialLabel,
    /// Always carries an explicit http(s) scheme after normalization.
    pub url: String,
}

/// Contact fields recovered from the document. Every field is independently
/// optional; "not found" is the empty string / empty vec, never a null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub socials: Vec<SocialLink>,
}

/// Skill lists grouped by the three portfolio categories the renderer expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroups {
    pub strategic: Vec<String>,
    pub technical: Vec<String>,
    pub leadership: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub role: String,
    pub metric: String,
    pub description: String,
}

/// The full structured record handed to the portfolio renderer.
/// Every field is always present; extraction misses degrade to empty
/// strings, empty lists, or fixed placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub ticker: Vec<String>,
    pub contact: ContactInfo,
    pub skills: SkillGroups,
    pub projects: Vec<Project>,
}
