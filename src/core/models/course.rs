//! Course definition model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Academic level a course belongs to
///
/// Stored in curriculum files as labels such as `"First Level"` or
/// `"University Req."`; only the leading word is significant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    /// First-year courses
    First,
    /// Second-year courses
    Second,
    /// Third-year courses
    Third,
    /// Fourth-year courses
    Fourth,
    /// University-wide requirement outside the numbered levels
    UniversityRequirement,
    /// Any label the curriculum uses that is not recognized
    Other(String),
}

impl Level {
    /// Ordinal of a numbered level (1-4), or `None` for requirement/unknown levels
    #[must_use]
    pub const fn ordinal(&self) -> Option<u8> {
        match self {
            Self::First => Some(1),
            Self::Second => Some(2),
            Self::Third => Some(3),
            Self::Fourth => Some(4),
            Self::UniversityRequirement | Self::Other(_) => None,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::Other("Unknown".to_string())
    }
}

impl From<String> for Level {
    fn from(label: String) -> Self {
        let first_word = label.split_whitespace().next().unwrap_or_default();
        match first_word.to_ascii_lowercase().as_str() {
            "first" => Self::First,
            "second" => Self::Second,
            "third" => Self::Third,
            "fourth" => Self::Fourth,
            "university" => Self::UniversityRequirement,
            _ => Self::Other(label),
        }
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.to_string()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "First Level"),
            Self::Second => write!(f, "Second Level"),
            Self::Third => write!(f, "Third Level"),
            Self::Fourth => write!(f, "Fourth Level"),
            Self::UniversityRequirement => write!(f, "University Requirement"),
            Self::Other(label) => write!(f, "{label}"),
        }
    }
}

/// Whether a course is part of the fixed plan or chosen from an elective list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseType {
    /// Required course of the plan
    #[default]
    General,
    /// Course picked from an elective table
    Elective,
}

fn default_track() -> String {
    "General".to_string()
}

/// Represents one course of a curriculum, keyed externally by its code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDefinition {
    /// Course title (e.g., "Discrete Mathematics")
    pub name: String,

    /// Credit hours (can be fractional)
    pub credit_hours: f64,

    /// Prerequisite course codes (e.g., "BSD101"); may reference codes outside the curriculum
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Academic level
    #[serde(default)]
    pub level: Level,

    /// Semester slot label (e.g., "1st Semester")
    #[serde(default)]
    pub semester: String,

    /// Track label (e.g., "Computer Science", "General")
    #[serde(default = "default_track")]
    pub track: String,

    /// General or elective
    #[serde(rename = "type", default)]
    pub course_type: CourseType,
}

impl CourseDefinition {
    /// Create a general course with no prerequisites
    ///
    /// # Arguments
    /// * `name` - Course title
    /// * `credit_hours` - Credit hours (can be fractional)
    /// * `level` - Academic level
    #[must_use]
    pub fn new(name: impl Into<String>, credit_hours: f64, level: Level) -> Self {
        Self {
            name: name.into(),
            credit_hours,
            prerequisites: Vec::new(),
            level,
            semester: String::new(),
            track: default_track(),
            course_type: CourseType::General,
        }
    }

    /// Add a prerequisite by course code, ignoring duplicates
    pub fn add_prerequisite(&mut self, code: impl Into<String>) {
        let code = code.into();
        if !self.prerequisites.contains(&code) {
            self.prerequisites.push(code);
        }
    }

    /// Builder form of [`add_prerequisite`](Self::add_prerequisite)
    #[must_use]
    pub fn with_prerequisite(mut self, code: impl Into<String>) -> Self {
        self.add_prerequisite(code);
        self
    }
}
