//! Degree progress: earned hours and prerequisite state of remaining courses

use crate::core::error::ProgressError;
use crate::core::models::{Curriculum, Level};
use serde::Serialize;
use std::collections::BTreeSet;

/// A curriculum course the student has not completed yet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemainingCourse {
    /// Course code
    pub code: String,
    /// Course name
    pub name: String,
    /// Credit hours
    pub credit_hours: f64,
    /// Level, used for ordering
    pub level: Level,
    /// Semester slot label, used for ordering
    pub semester: String,
    /// Whether every prerequisite is completed
    pub prereqs_satisfied: bool,
    /// Prerequisites not completed yet
    pub missing_prereqs: Vec<String>,
}

/// Degree progress for one student
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    /// Credit hours of completed curriculum courses
    pub earned_hours: f64,
    /// Credit hours of the whole curriculum (always positive)
    pub total_hours: f64,
    /// Courses not completed, ordered by level, semester slot, then code
    pub remaining: Vec<RemainingCourse>,
}

impl ProgressReport {
    /// Fraction of curriculum hours earned, in `[0, 1]` for well-formed input
    #[must_use]
    pub fn completion_ratio(&self) -> f64 {
        self.earned_hours / self.total_hours
    }

    /// Remaining courses whose prerequisites are all completed
    pub fn available(&self) -> impl Iterator<Item = &RemainingCourse> {
        self.remaining.iter().filter(|c| c.prereqs_satisfied)
    }
}

/// Evaluate progress through a curriculum given the completed course codes
///
/// Prerequisites naming courses outside the curriculum can never be satisfied
/// unless the student completed that code anyway. Completed codes that are not
/// in the curriculum do not add earned hours.
///
/// # Errors
/// Returns [`ProgressError::ZeroCreditHours`] when the curriculum is empty,
/// all its courses carry zero credit hours, or the hours sum to `NaN`.
pub fn evaluate_progress(
    curriculum: &Curriculum,
    completed: &BTreeSet<String>,
) -> Result<ProgressReport, ProgressError> {
    let total_hours = curriculum.total_credit_hours();
    if total_hours.is_nan() || total_hours <= 0.0 {
        return Err(ProgressError::ZeroCreditHours);
    }

    let mut earned_hours = 0.0;
    let mut remaining = Vec::new();

    for (code, course) in curriculum.iter() {
        if completed.contains(code) {
            earned_hours += course.credit_hours;
            continue;
        }
        let missing_prereqs: Vec<String> = course
            .prerequisites
            .iter()
            .filter(|prereq| !completed.contains(*prereq))
            .cloned()
            .collect();
        remaining.push(RemainingCourse {
            code: code.clone(),
            name: course.name.clone(),
            credit_hours: course.credit_hours,
            level: course.level.clone(),
            semester: course.semester.clone(),
            prereqs_satisfied: missing_prereqs.is_empty(),
            missing_prereqs,
        });
    }

    remaining.sort_by(|a, b| {
        a.level
            .cmp(&b.level)
            .then_with(|| a.semester.cmp(&b.semester))
            .then_with(|| a.code.cmp(&b.code))
    });

    Ok(ProgressReport {
        earned_hours,
        total_hours,
        remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CourseDefinition;

    fn curriculum() -> Curriculum {
        let mut curriculum = Curriculum::new();
        curriculum.insert("A101", CourseDefinition::new("Intro", 3.0, Level::First));
        curriculum.insert(
            "A102",
            CourseDefinition::new("Next", 3.0, Level::First).with_prerequisite("A101"),
        );
        curriculum.insert(
            "B201",
            CourseDefinition::new("Ghost", 2.0, Level::Second).with_prerequisite("ZZZ000"),
        );
        curriculum
    }

    fn completed(codes: &[&str]) -> BTreeSet<String> {
        codes.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn test_hours_and_prereqs() {
        let report = evaluate_progress(&curriculum(), &completed(&["A101", "UNI-1"])).unwrap();

        assert!((report.earned_hours - 3.0).abs() < f64::EPSILON);
        assert!((report.total_hours - 8.0).abs() < f64::EPSILON);
        assert!((report.completion_ratio() - 0.375).abs() < 1e-9);

        let codes: Vec<&str> = report.remaining.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["A102", "B201"]);
        assert!(report.remaining[0].prereqs_satisfied);
        assert!(!report.remaining[1].prereqs_satisfied);
        assert_eq!(report.remaining[1].missing_prereqs, vec!["ZZZ000".to_string()]);
        assert_eq!(report.available().count(), 1);
    }

    #[test]
    fn test_nothing_completed() {
        let report = evaluate_progress(&curriculum(), &BTreeSet::new()).unwrap();
        assert!(report.earned_hours.abs() < f64::EPSILON);
        assert_eq!(report.remaining.len(), 3);
        assert!(report.remaining[0].prereqs_satisfied);
    }

    #[test]
    fn test_empty_curriculum_is_reported() {
        let result = evaluate_progress(&Curriculum::new(), &completed(&["A101"]));
        assert_eq!(result, Err(ProgressError::ZeroCreditHours));
    }

    #[test]
    fn test_zero_hour_curriculum_is_reported() {
        let mut curriculum = Curriculum::new();
        curriculum.insert("SEM000", CourseDefinition::new("Seminar", 0.0, Level::First));
        assert_eq!(
            evaluate_progress(&curriculum, &BTreeSet::new()),
            Err(ProgressError::ZeroCreditHours)
        );
    }

    #[test]
    fn test_nan_hours_are_reported() {
        let mut curriculum = Curriculum::new();
        curriculum.insert("A101", CourseDefinition::new("Intro", 3.0, Level::First));
        curriculum.insert("A102", CourseDefinition::new("Odd", f64::NAN, Level::First));
        assert_eq!(
            evaluate_progress(&curriculum, &completed(&["A101"])),
            Err(ProgressError::ZeroCreditHours)
        );
    }
}
