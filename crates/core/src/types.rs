//! Core types shared across the Folio surfaces: the tag vocabulary, profile,
//! skills, projects, experience entries, and the aggregate dataset record.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Tag vocabulary
// ---------------------------------------------------------------------------

/// Category label from the fixed project vocabulary. Every project carries one
/// or more of these; the gallery offers each as a filter chip.
///
/// Serializes as the display label (`"AI"`, `"Full-stack"`), so JSON output
/// matches what the page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tag {
    #[serde(rename = "AI")]
    Ai,
    Robotics,
    Algorithms,
    Automation,
    #[serde(rename = "Full-stack")]
    FullStack,
    #[serde(rename = "NLP")]
    Nlp,
    Perception,
    Backend,
    Search,
}

impl Tag {
    /// The whole vocabulary, in chip-row display order.
    pub const ALL: [Tag; 9] = [
        Tag::Ai,
        Tag::Robotics,
        Tag::Algorithms,
        Tag::Automation,
        Tag::FullStack,
        Tag::Nlp,
        Tag::Perception,
        Tag::Backend,
        Tag::Search,
    ];

    /// Display label, exactly as rendered on chips and badges.
    pub fn label(&self) -> &'static str {
        match self {
            Tag::Ai => "AI",
            Tag::Robotics => "Robotics",
            Tag::Algorithms => "Algorithms",
            Tag::Automation => "Automation",
            Tag::FullStack => "Full-stack",
            Tag::Nlp => "NLP",
            Tag::Perception => "Perception",
            Tag::Backend => "Backend",
            Tag::Search => "Search",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A tag name outside the vocabulary. Only the string boundary (CLI arguments)
/// can produce this; in-memory state never holds an invalid tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTagError {
    input: String,
}

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = Tag::ALL.iter().map(|t| t.label()).collect();
        write!(f, "unknown tag '{}' (expected one of: {})", self.input, known.join(", "))
    }
}

impl std::error::Error for ParseTagError {}

impl FromStr for Tag {
    type Err = ParseTagError;

    /// Matches display labels case-insensitively, so `--tag ai` and
    /// `--tag full-STACK` both work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTagError { input: s.to_string() })
    }
}

// ---------------------------------------------------------------------------
// Skill groups
// ---------------------------------------------------------------------------

/// Area a skill belongs to, used to group the skill list in the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillGroup {
    Languages,
    Frameworks,
    #[serde(rename = "AI/ML")]
    AiMl,
    Robotics,
    Automation,
}

impl SkillGroup {
    /// Grouping order for listings.
    pub const ALL: [SkillGroup; 5] = [
        SkillGroup::Languages,
        SkillGroup::Frameworks,
        SkillGroup::AiMl,
        SkillGroup::Robotics,
        SkillGroup::Automation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillGroup::Languages => "Languages",
            SkillGroup::Frameworks => "Frameworks",
            SkillGroup::AiMl => "AI/ML",
            SkillGroup::Robotics => "Robotics",
            SkillGroup::Automation => "Automation",
        }
    }
}

impl fmt::Display for SkillGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Portfolio records
// ---------------------------------------------------------------------------

/// Who the page is about, plus the outbound links the hero and footer render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub location: String,
    pub summary: String,
    pub email: String,
    #[serde(rename = "resumeUrl")]
    pub resume_url: String,
    pub github: String,
    pub linkedin: String,
}

/// One skill with a 1-5 proficiency level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub group: SkillGroup,
}

/// A gallery entry. The title doubles as the identity key: titles are unique
/// within the dataset, and the tag list is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub title: String,
    pub blurb: String,
    pub tags: Vec<Tag>,
}

/// One work or education entry on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Experience {
    pub role: String,
    pub org: String,
    pub period: String,
    pub highlights: Vec<String>,
}

/// The complete dataset: everything any surface renders. Built once at
/// startup and treated as immutable from then on.
#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
}
