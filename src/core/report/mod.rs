//! Report generation for transcripts and degree progress
//!
//! Renders a resolved [`Transcript`] (optionally with a [`ProgressReport`])
//! as a plain-text console report, Markdown, or JSON.

pub mod formats;

use crate::core::models::SemesterId;
use crate::core::progress::ProgressReport;
use crate::core::transcript::{SemesterRecord, Transcript};
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{JsonReporter, MarkdownReporter, ReportFormat, TextReporter};

/// Data context for report generation
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Student code shown in headers
    pub student_code: &'a str,
    /// Resolved transcript
    pub transcript: &'a Transcript,
    /// Degree progress, when requested
    pub progress: Option<&'a ProgressReport>,
    /// Restrict the semester listing to one semester
    pub semester: Option<&'a SemesterId>,
}

impl<'a> ReportContext<'a> {
    /// Create a context covering every semester, without progress
    #[must_use]
    pub const fn new(student_code: &'a str, transcript: &'a Transcript) -> Self {
        Self {
            student_code,
            transcript,
            progress: None,
            semester: None,
        }
    }

    /// Include a degree progress section
    #[must_use]
    pub const fn with_progress(mut self, progress: &'a ProgressReport) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Only list the given semester
    #[must_use]
    pub const fn with_semester(mut self, semester: &'a SemesterId) -> Self {
        self.semester = Some(semester);
        self
    }

    /// Semesters to list, in chronological order
    pub fn semesters(&self) -> impl Iterator<Item = &'a SemesterRecord> + 'a {
        let only = self.semester;
        self.transcript
            .semesters
            .values()
            .filter(move |record| match only {
                Some(id) => &record.id == id,
                None => true,
            })
    }

    /// Whether the cumulative GPA belongs in the report
    ///
    /// A single-semester view shows only that semester's GPA.
    #[must_use]
    pub const fn shows_cumulative(&self) -> bool {
        self.semester.is_none()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;

    /// Generate a report to a file, creating parent directories
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, content)?;
        Ok(())
    }
}

/// Build the generator for a format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
