//! Transcript pipeline: normalize, resolve retakes, aggregate GPA
//!
//! [`build_transcript`] runs the whole pipeline for one student. Each stage is
//! also exposed on its own so callers can drive them separately.

pub mod aggregator;
pub mod normalizer;
pub mod resolver;

pub use aggregator::{aggregate, GpaSummary, GpaTotals};
pub use normalizer::{normalize, SkipReason};
pub use resolver::{resolve, Resolution};

use crate::core::grading::GradeScale;
use crate::core::models::{Attempt, Curriculum, SemesterId, StudentRecord};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One semester of the transcript
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterRecord {
    /// Semester identifier
    pub id: SemesterId,
    /// Semester display name (e.g., "Fall")
    pub name: String,
    /// Academic year label (e.g., "2022/2023"), when any course has a numbered level
    pub year_label: Option<String>,
    /// Attempts shown for this semester, ordered by course code
    pub attempts: Vec<Attempt>,
    /// Points and hours of the attempts this semester contributes to GPA
    pub totals: GpaTotals,
}

impl SemesterRecord {
    /// Semester GPA
    #[must_use]
    pub fn gpa(&self) -> f64 {
        self.totals.gpa()
    }

    /// Heading such as `"2022/2023 - Fall"`
    #[must_use]
    pub fn title(&self) -> String {
        match &self.year_label {
            Some(year) => format!("{year} - {}", self.name),
            None => self.name.clone(),
        }
    }
}

/// Full resolution result for one student
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transcript {
    /// Semesters in chronological order
    pub semesters: BTreeMap<SemesterId, SemesterRecord>,
    /// Course codes completed by at least one passed attempt
    pub completed: BTreeSet<String>,
    /// The attempt counted for GPA, per course code
    pub counted: BTreeMap<String, Attempt>,
    /// Highest numbered level (1-4) among the student's courses, 0 if none
    pub highest_level: u8,
    /// Totals over every semester
    pub cumulative: GpaTotals,
    /// Number of raw records left out (unknown course or no semester)
    pub skipped: usize,
}

impl Transcript {
    /// Cumulative GPA
    #[must_use]
    pub fn gpa(&self) -> f64 {
        self.cumulative.gpa()
    }

    /// Look up a semester by its identifier
    #[must_use]
    pub fn semester(&self, id: &SemesterId) -> Option<&SemesterRecord> {
        self.semesters.get(id)
    }
}

fn year_label(start_year: i32, level_ordinal: u8) -> String {
    let year = start_year + i32::from(level_ordinal) - 1;
    format!("{year}/{}", year + 1)
}

/// Run the full pipeline for one student
///
/// Unknown courses and records without a semester are skipped and counted in
/// [`Transcript::skipped`]; nothing in the pipeline fails.
#[must_use]
pub fn build_transcript(
    student: &StudentRecord,
    curriculum: &Curriculum,
    scale: &GradeScale,
) -> Transcript {
    let mut attempts = Vec::with_capacity(student.attempts.len());
    let mut skipped = 0;
    for raw in &student.attempts {
        match normalize(raw, curriculum, scale) {
            Ok(attempt) => attempts.push(attempt),
            Err(reason) => {
                crate::debug!("Skipping attempt: {reason}");
                skipped += 1;
            }
        }
    }

    let start_year = student.start_year();
    let mut semesters: BTreeMap<SemesterId, SemesterRecord> = BTreeMap::new();
    let mut highest_level = 0;
    for attempt in &attempts {
        let record = semesters
            .entry(attempt.semester.clone())
            .or_insert_with(|| SemesterRecord {
                id: attempt.semester.clone(),
                name: attempt.semester_name.clone(),
                year_label: None,
                attempts: Vec::new(),
                totals: GpaTotals::default(),
            });
        if record.name.is_empty() {
            record.name.clone_from(&attempt.semester_name);
        }
        if let Some(ordinal) = attempt.level.ordinal() {
            highest_level = highest_level.max(ordinal);
        }
    }

    // Year label follows the highest level taken in that semester
    let mut semester_levels: BTreeMap<&SemesterId, u8> = BTreeMap::new();
    for attempt in &attempts {
        if let Some(ordinal) = attempt.level.ordinal() {
            let level = semester_levels.entry(&attempt.semester).or_default();
            *level = (*level).max(ordinal);
        }
    }
    for (id, level) in semester_levels {
        if let Some(record) = semesters.get_mut(id) {
            record.year_label = Some(year_label(start_year, level));
        }
    }

    let resolution = resolve(&attempts);
    let summary = aggregate(resolution.counted.values());

    for (id, shown) in resolution.displayed {
        if let Some(record) = semesters.get_mut(&id) {
            record.attempts = shown;
        }
    }
    for (id, totals) in summary.semesters {
        if let Some(record) = semesters.get_mut(&id) {
            record.totals = totals;
        }
    }

    crate::info!(
        "Built transcript: {} attempts over {} semesters, {} skipped, {} courses completed",
        attempts.len(),
        semesters.len(),
        skipped,
        resolution.completed.len()
    );

    Transcript {
        semesters,
        completed: resolution.completed,
        counted: resolution.counted,
        highest_level,
        cumulative: summary.cumulative,
        skipped,
    }
}
