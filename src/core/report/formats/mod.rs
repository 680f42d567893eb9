//! Report format implementations
//!
//! Provides exporters for plain text, Markdown, and JSON.

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use text::TextReporter;

use std::fmt;
use std::str::FromStr;

/// Supported report formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Fixed-width console tables
    #[default]
    Text,
    /// Markdown tables
    Markdown,
    /// Machine-readable JSON
    Json,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Shared fixtures for the format tests
#[cfg(test)]
pub(crate) mod fixtures {
    use crate::core::grading::GradeScale;
    use crate::core::models::{CourseDefinition, Curriculum, Level, RawAttempt, StudentRecord};
    use crate::core::progress::{evaluate_progress, ProgressReport};
    use crate::core::transcript::{build_transcript, Transcript};

    pub fn curriculum() -> Curriculum {
        let mut curriculum = Curriculum::new();
        curriculum.insert("A101", CourseDefinition::new("Intro", 3.0, Level::First));
        curriculum.insert(
            "A102",
            CourseDefinition::new("Next", 3.0, Level::First).with_prerequisite("A101"),
        );
        curriculum
    }

    pub fn transcript() -> Transcript {
        let student = StudentRecord::new(
            "21001",
            vec![
                RawAttempt::new("A101", "20211")
                    .with_score("90")
                    .with_semester_label("20211|Fall"),
                RawAttempt::new("A101", "20212")
                    .with_score("40")
                    .with_semester_label("20212|Spring"),
            ],
        );
        build_transcript(&student, &curriculum(), &GradeScale::stepped())
    }

    pub fn progress(transcript: &Transcript) -> ProgressReport {
        evaluate_progress(&curriculum(), &transcript.completed).unwrap()
    }
}
