//! Plain-text report generator
//!
//! Console tables for terminals and log files. Long course names wrap inside
//! their column.

use crate::core::progress::ProgressReport;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::transcript::{SemesterRecord, Transcript};
use comfy_table::{Cell, CellAlignment, ColumnConstraint, ContentArrangement, Table, Width};
use std::error::Error;
use std::fmt::Write;

/// Widest the course name column grows before wrapping
const NAME_WIDTH: u16 = 40;

/// Table with the given header, wrapping `name_column` at [`NAME_WIDTH`]
fn table_with_header(header: &[&str], name_column: usize, right_aligned: &[usize]) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    if let Some(column) = table.column_mut(name_column) {
        column.set_constraint(ColumnConstraint::UpperBoundary(Width::Fixed(NAME_WIDTH)));
    }
    for &index in right_aligned {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

/// Plain-text report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_semester(out: &mut String, record: &SemesterRecord) {
        let mut table = table_with_header(
            &[
                "Course Name",
                "Code",
                "Credit Hours",
                "Numeric Degree",
                "Letter Grade",
                "Status",
            ],
            0,
            &[2, 3],
        );
        for attempt in &record.attempts {
            table.add_row(vec![
                Cell::new(&attempt.name),
                Cell::new(&attempt.code),
                Cell::new(format!("{:.1}", attempt.credit_hours)),
                Cell::new(&attempt.display),
                Cell::new(&attempt.letter),
                Cell::new(attempt.status()),
            ]);
        }

        let _ = writeln!(out, "{}", record.title());
        let _ = writeln!(out, "{table}");
        let _ = writeln!(out, "Semester GPA: {:.2}", record.gpa());
        out.push('\n');
    }

    fn write_cumulative(out: &mut String, transcript: &Transcript) {
        let mut table = table_with_header(
            &["Total Credit Hours", "Total Points", "Cumulative GPA"],
            0,
            &[0, 1, 2],
        );
        table.add_row(vec![
            Cell::new(format!("{:.1}", transcript.cumulative.total_hours)),
            Cell::new(format!("{:.2}", transcript.cumulative.total_points)),
            Cell::new(format!("{:.2}", transcript.gpa())),
        ]);
        let _ = writeln!(out, "{table}\n");
    }

    /// Render only the degree progress section
    #[must_use]
    pub fn render_progress(progress: &ProgressReport) -> String {
        let mut out = String::from("Degree Progress Report\n");
        let _ = writeln!(
            out,
            "Credit Hours: {} / {} ({:.1}%) Completed\n",
            progress.earned_hours,
            progress.total_hours,
            progress.completion_ratio() * 100.0
        );

        if progress.remaining.is_empty() {
            out.push_str("All curriculum courses completed.\n");
            return out;
        }

        let mut table =
            table_with_header(&["Code", "Course Name", "Hours", "Prerequisites Met?"], 1, &[2]);
        for course in &progress.remaining {
            table.add_row(vec![
                Cell::new(&course.code),
                Cell::new(&course.name),
                Cell::new(course.credit_hours),
                Cell::new(if course.prereqs_satisfied { "Yes" } else { "No" }),
            ]);
        }

        out.push_str("Remaining Courses\n");
        let _ = writeln!(out, "{table}");
        out
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        let _ = writeln!(out, "Academic Report for {}\n", ctx.student_code);

        let mut any = false;
        for record in ctx.semesters() {
            Self::write_semester(&mut out, record);
            any = true;
        }
        if !any {
            out.push_str("No semester data to display.\n\n");
        }

        if ctx.shows_cumulative() {
            Self::write_cumulative(&mut out, ctx.transcript);
        }

        if let Some(progress) = ctx.progress {
            out.push_str(&Self::render_progress(progress));
        }

        Ok(out)
    }
}
