//! Curriculum index: course code to course definition

use super::CourseDefinition;
use crate::core::error::LoadError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

const COMPUTER_SCIENCE_JSON: &str = include_str!("../../../assets/curricula/computer_science.json");
const ENGINEERING_JSON: &str = include_str!("../../../assets/curricula/engineering.json");

/// Faculties with a curriculum bundled into the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faculty {
    /// Faculty of Computer Science and Informatics
    ComputerScience,
    /// Faculty of Engineering
    Engineering,
}

impl Faculty {
    /// Full faculty title for display
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ComputerScience => "Faculty of Computer Science and Informatics",
            Self::Engineering => "Faculty of Engineering",
        }
    }
}

impl FromStr for Faculty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cs" | "computer-science" | "computer_science" | "fcsi" => Ok(Self::ComputerScience),
            "eng" | "engineering" => Ok(Self::Engineering),
            _ => Err(format!("Unknown faculty: {s}")),
        }
    }
}

impl fmt::Display for Faculty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ComputerScience => write!(f, "cs"),
            Self::Engineering => write!(f, "engineering"),
        }
    }
}

/// Read-only mapping from course code to its definition
///
/// Iteration is ordered by course code so every consumer sees the same order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curriculum {
    courses: BTreeMap<String, CourseDefinition>,
}

impl Curriculum {
    /// Create an empty curriculum
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: BTreeMap::new(),
        }
    }

    /// Parse a curriculum from its JSON representation
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or a course lacks required fields
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the curriculum bundled for a faculty
    ///
    /// # Errors
    /// Returns an error if the embedded JSON cannot be parsed
    pub fn bundled(faculty: Faculty) -> Result<Self, LoadError> {
        match faculty {
            Faculty::ComputerScience => Self::from_json_str(COMPUTER_SCIENCE_JSON),
            Faculty::Engineering => Self::from_json_str(ENGINEERING_JSON),
        }
    }

    /// Insert or replace a course definition
    pub fn insert(&mut self, code: impl Into<String>, course: CourseDefinition) {
        self.courses.insert(code.into(), course);
    }

    /// Look up a course by code
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&CourseDefinition> {
        self.courses.get(code)
    }

    /// Whether a course code is tracked by this curriculum
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.courses.contains_key(code)
    }

    /// Iterate over `(code, definition)` pairs in code order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CourseDefinition)> {
        self.courses.iter()
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the curriculum has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Sum of credit hours over every course
    #[must_use]
    pub fn total_credit_hours(&self) -> f64 {
        self.courses.values().map(|c| c.credit_hours).sum()
    }

    /// Serialize to pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_json_pretty(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromIterator<(String, CourseDefinition)> for Curriculum {
    fn from_iter<T: IntoIterator<Item = (String, CourseDefinition)>>(iter: T) -> Self {
        Self {
            courses: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Level;

    #[test]
    fn test_bundled_computer_science() {
        let curriculum = Curriculum::bundled(Faculty::ComputerScience).unwrap();
        assert!(curriculum.len() > 50);

        let calculus = curriculum.get("BSD101").expect("BSD101 should exist");
        assert_eq!(calculus.name, "Calculus");
        assert_eq!(calculus.level, Level::First);
        assert!(curriculum.total_credit_hours() > 0.0);
    }

    #[test]
    fn test_bundled_engineering() {
        let curriculum = Curriculum::bundled(Faculty::Engineering).unwrap();
        assert!(curriculum.contains("ENG101"));
    }

    #[test]
    fn test_faculty_parse() {
        assert_eq!("CS".parse::<Faculty>(), Ok(Faculty::ComputerScience));
        assert_eq!("engineering".parse::<Faculty>(), Ok(Faculty::Engineering));
        assert!("medicine".parse::<Faculty>().is_err());
    }

    #[test]
    fn test_from_json_and_totals() {
        let json = r#"{
            "A101": {"name": "Intro", "credit_hours": 3, "prerequisites": []},
            "A102": {"name": "Next", "credit_hours": 2.5, "prerequisites": ["A101"]}
        }"#;
        let curriculum = Curriculum::from_json_str(json).unwrap();

        assert_eq!(curriculum.len(), 2);
        assert!((curriculum.total_credit_hours() - 5.5).abs() < f64::EPSILON);
        let codes: Vec<&String> = curriculum.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["A101", "A102"]);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Curriculum::from_json_str("[1, 2, 3]").is_err());
    }
}
