//! Attempt normalization: raw portal record to canonical [`Attempt`]

use crate::core::grading::GradeScale;
use crate::core::models::{
    Attempt, CourseCategory, CourseDefinition, Curriculum, Level, Outcome, RawAttempt,
};
use std::borrow::Cow;
use std::fmt;

/// Code prefix marking pass/fail university-requirement courses
pub const UNIVERSITY_PREFIX: &str = "UNI-";

/// Marker token meaning "passed" for pass/fail courses (matched case-insensitively)
pub const PASS_TOKEN: &str = "P";

/// Marker token forcing a failure regardless of the numeric score
pub const OVERRIDE_FAIL_TOKEN: &str = "BF";

/// Score shown for attempts without a result
pub const IN_PROGRESS_DISPLAY: &str = "In Progress";

/// Why a raw attempt was left out of the transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Course code is neither in the curriculum nor a university requirement
    UnknownCourse(String),
    /// The record carries no semester identifier
    MissingSemester(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCourse(code) if code.is_empty() => write!(f, "record without course code"),
            Self::UnknownCourse(code) => write!(f, "course {code} is not in the curriculum"),
            Self::MissingSemester(code) => write!(f, "course {code} has no semester id"),
        }
    }
}

/// Result of classifying one attempt's marker and score
#[derive(Debug, Clone, PartialEq)]
struct Classified {
    outcome: Outcome,
    display: String,
    letter: String,
    points: f64,
}

impl Classified {
    fn new(outcome: Outcome, display: &str, letter: &str, points: f64) -> Self {
        Self {
            outcome,
            display: display.to_string(),
            letter: letter.to_string(),
            points,
        }
    }

    fn unfinished() -> Self {
        Self::new(Outcome::Unfinished, IN_PROGRESS_DISPLAY, "-", 0.0)
    }

    /// Override failure shows the numeric score when there is one
    fn override_failure(score: Option<&str>) -> Self {
        let display = score
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(OVERRIDE_FAIL_TOKEN))
            .unwrap_or(OVERRIDE_FAIL_TOKEN);
        Self::new(Outcome::FailedOverride, display, OVERRIDE_FAIL_TOKEN, 0.0)
    }
}

fn contains_token(value: &str, token: &str) -> bool {
    value.to_ascii_uppercase().contains(token)
}

/// Pass/fail grading: the marker alone decides, and points are always zero
fn classify_pass_fail(raw: &RawAttempt) -> Classified {
    let marker = raw.marker.as_deref().map(str::trim).unwrap_or_default();
    if marker.is_empty() {
        Classified::unfinished()
    } else if contains_token(marker, PASS_TOKEN) {
        Classified::new(Outcome::Passed, "Pass", PASS_TOKEN, 0.0)
    } else if contains_token(marker, OVERRIDE_FAIL_TOKEN) {
        Classified::override_failure(raw.score.as_deref())
    } else {
        Classified::new(Outcome::FailedMarker, "Fail", "F", 0.0)
    }
}

/// Numeric grading with the override marker taking precedence
fn classify_numeric(raw: &RawAttempt, scale: &GradeScale) -> Classified {
    let marker_override = raw
        .marker
        .as_deref()
        .is_some_and(|marker| contains_token(marker, OVERRIDE_FAIL_TOKEN));
    let score = raw.score.as_deref().map(str::trim);
    let score_override = score.is_some_and(|s| s.eq_ignore_ascii_case(OVERRIDE_FAIL_TOKEN));

    if marker_override || score_override {
        return Classified::override_failure(score);
    }

    // `NaN` and `inf` parse; the scale grades them like any other number
    let Some((text, value)) = score.and_then(|s| s.parse::<f64>().ok().map(|v| (s, v))) else {
        return Classified::unfinished();
    };

    let grade = scale.scale(value);
    let outcome = if grade.points > 0.0 {
        Outcome::Passed
    } else {
        Outcome::FailedNumeric
    };
    Classified {
        outcome,
        display: text.to_string(),
        letter: grade.letter,
        points: grade.points,
    }
}

/// Course definition for a raw attempt, synthesizing one for untracked university requirements
fn resolve_course<'a>(
    raw: &RawAttempt,
    code: &str,
    curriculum: &'a Curriculum,
) -> Option<Cow<'a, CourseDefinition>> {
    if let Some(course) = curriculum.get(code) {
        return Some(Cow::Borrowed(course));
    }
    code.starts_with(UNIVERSITY_PREFIX).then(|| {
        Cow::Owned(CourseDefinition::new(
            raw.fallback_name(),
            raw.fallback_credit_hours(),
            Level::UniversityRequirement,
        ))
    })
}

/// Convert one raw attempt into a canonical [`Attempt`]
///
/// # Errors
/// Returns a [`SkipReason`] when the course is untracked and not a university
/// requirement, or when the record has no semester. Skips are expected for
/// portal data and are not failures of the pipeline.
pub fn normalize(
    raw: &RawAttempt,
    curriculum: &Curriculum,
    scale: &GradeScale,
) -> Result<Attempt, SkipReason> {
    let code = raw.course_code();
    let course = resolve_course(raw, code, curriculum)
        .ok_or_else(|| SkipReason::UnknownCourse(code.to_string()))?;
    let semester = raw
        .semester
        .clone()
        .ok_or_else(|| SkipReason::MissingSemester(code.to_string()))?;

    let category = if code.starts_with(UNIVERSITY_PREFIX) {
        CourseCategory::UniversityRequirement
    } else {
        CourseCategory::Ordinary
    };
    let classified = match category {
        CourseCategory::UniversityRequirement => classify_pass_fail(raw),
        CourseCategory::Ordinary => classify_numeric(raw, scale),
    };

    Ok(Attempt {
        semester_name: raw
            .semester_name()
            .unwrap_or_else(|| semester.as_str().to_string()),
        semester,
        code: code.to_string(),
        name: course.name.clone(),
        credit_hours: course.credit_hours,
        level: course.level.clone(),
        display: classified.display,
        letter: classified.letter,
        outcome: classified.outcome,
        grade_points: classified.points,
        category,
    })
}
