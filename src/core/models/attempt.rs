//! Canonical attempt model produced by normalization

use super::{Level, SemesterId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classified outcome of one attempt
///
/// Produced once by the normalizer so downstream logic switches on a closed
/// set instead of re-reading marker strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No result yet (no marker, or a score that is not a number)
    Unfinished,
    /// Passed, either by a passing numeric score or a pass marker
    Passed,
    /// Failed by the override marker, whatever the numeric score says
    FailedOverride,
    /// Failed because the numeric score maps to zero grade points
    FailedNumeric,
    /// Pass/fail course failed by a non-pass marker
    FailedMarker,
}

impl Outcome {
    /// Display status derived from the outcome
    #[must_use]
    pub const fn status(self) -> Status {
        match self {
            Self::Unfinished => Status::InProgress,
            Self::Passed => Status::Passed,
            Self::FailedOverride | Self::FailedNumeric | Self::FailedMarker => Status::Failed,
        }
    }
}

/// Coarse attempt status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Outcome not yet determined
    InProgress,
    /// Passed
    Passed,
    /// Failed
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "In Progress"),
            Self::Passed => write!(f, "Passed"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// Whether a course is graded normally or pass/fail outside GPA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseCategory {
    /// Numerically graded course that counts toward GPA
    Ordinary,
    /// Pass/fail university requirement, excluded from GPA
    UniversityRequirement,
}

/// One normalized attempt; never mutated after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    /// Semester the attempt belongs to
    pub semester: SemesterId,
    /// Semester display name (e.g., "Fall")
    pub semester_name: String,
    /// Course code without disambiguation suffix
    pub code: String,
    /// Course name
    pub name: String,
    /// Credit hours
    pub credit_hours: f64,
    /// Level of the course, used for year labels
    pub level: Level,
    /// Score as shown to the student ("91", "BF", "Pass", "In Progress")
    pub display: String,
    /// Letter grade ("A+", "F", "BF", "P", "-")
    pub letter: String,
    /// Classified outcome
    pub outcome: Outcome,
    /// Grade points per credit hour (0 unless finished and not overridden)
    pub grade_points: f64,
    /// Ordinary or university requirement
    pub category: CourseCategory,
}

impl Attempt {
    /// Display status
    #[must_use]
    pub const fn status(&self) -> Status {
        self.outcome.status()
    }

    /// Whether the outcome is determined
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status() != Status::InProgress
    }

    /// Whether this is a pass/fail university requirement
    #[must_use]
    pub fn is_university_requirement(&self) -> bool {
        self.category == CourseCategory::UniversityRequirement
    }

    /// `grade_points * credit_hours`
    #[must_use]
    pub fn quality_points(&self) -> f64 {
        self.grade_points * self.credit_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_status() {
        assert_eq!(Outcome::Unfinished.status(), Status::InProgress);
        assert_eq!(Outcome::Passed.status(), Status::Passed);
        assert_eq!(Outcome::FailedOverride.status(), Status::Failed);
        assert_eq!(Outcome::FailedMarker.status(), Status::Failed);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::InProgress.to_string(), "In Progress");
        assert_eq!(Status::Failed.to_string(), "Failed");
    }
}
