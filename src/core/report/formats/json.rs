//! JSON report generator

use crate::core::progress::ProgressReport;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::transcript::{GpaTotals, SemesterRecord};
use serde::Serialize;
use std::error::Error;

/// Serialized report shape
#[derive(Serialize)]
struct JsonReport<'a> {
    student_code: &'a str,
    semesters: Vec<&'a SemesterRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cumulative: Option<Cumulative>,
    completed: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    progress: Option<&'a ProgressReport>,
}

#[derive(Serialize)]
struct Cumulative {
    gpa: f64,
    #[serde(flatten)]
    totals: GpaTotals,
}

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let report = JsonReport {
            student_code: ctx.student_code,
            semesters: ctx.semesters().collect(),
            cumulative: ctx.shows_cumulative().then(|| Cumulative {
                gpa: ctx.transcript.gpa(),
                totals: ctx.transcript.cumulative,
            }),
            completed: ctx.transcript.completed.iter().map(String::as_str).collect(),
            progress: ctx.progress,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
