//! Markdown report generator
//!
//! Generates transcript reports as Markdown tables that render in GitHub,
//! GitLab, and VS Code.

use crate::core::progress::ProgressReport;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::transcript::SemesterRecord;
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/transcript.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    fn render_template(ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{student_code}}", ctx.student_code);
        output = output.replace("{{semesters}}", &Self::generate_semesters(ctx));

        let cumulative = if ctx.shows_cumulative() {
            format!(
                "**Cumulative GPA:** {:.2} over {} credit hours\n",
                ctx.transcript.gpa(),
                ctx.transcript.cumulative.total_hours
            )
        } else {
            String::new()
        };
        output = output.replace("{{cumulative}}", &cumulative);

        let progress = ctx
            .progress
            .map(Self::generate_progress)
            .unwrap_or_default();
        output = output.replace("{{progress}}", &progress);

        output
    }

    fn generate_semesters(ctx: &ReportContext) -> String {
        let mut section = String::new();
        for record in ctx.semesters() {
            Self::generate_semester_table(&mut section, record);
        }
        if section.is_empty() {
            section.push_str("_No semester data to display._\n");
        }
        section
    }

    /// Generate one semester heading and course table
    fn generate_semester_table(out: &mut String, record: &SemesterRecord) {
        let _ = writeln!(out, "### {}\n", record.title());
        out.push_str("| Course | Code | Credits | Degree | Grade | Status |\n");
        out.push_str("|---|---|---|---|---|---|\n");
        for attempt in &record.attempts {
            let _ = writeln!(
                out,
                "| {} | {} | {:.1} | {} | {} | {} |",
                escape_cell(&attempt.name),
                attempt.code,
                attempt.credit_hours,
                escape_cell(&attempt.display),
                attempt.letter,
                attempt.status()
            );
        }
        let _ = writeln!(out, "\n**Semester GPA:** {:.2}\n", record.gpa());
    }

    /// Generate the degree progress section
    fn generate_progress(progress: &ProgressReport) -> String {
        let mut section = String::from("## Degree Progress\n\n");
        let _ = writeln!(
            section,
            "**Credit Hours:** {} / {} ({:.1}%) completed\n",
            progress.earned_hours,
            progress.total_hours,
            progress.completion_ratio() * 100.0
        );

        if progress.remaining.is_empty() {
            section.push_str("All curriculum courses completed.\n");
            return section;
        }

        section.push_str("| Code | Course | Hours | Level | Prerequisites Met? |\n");
        section.push_str("|---|---|---|---|---|\n");
        for course in &progress.remaining {
            let met = if course.prereqs_satisfied {
                "Yes".to_string()
            } else {
                format!("No (needs {})", course.missing_prereqs.join(", "))
            };
            let _ = writeln!(
                section,
                "| {} | {} | {} | {} | {met} |",
                course.code,
                escape_cell(&course.name),
                course.credit_hours,
                course.level
            );
        }
        section
    }
}

/// Escape pipes so cell text cannot break the table
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::formats::fixtures;
    use tempfile::TempDir;

    #[test]
    fn test_render_tables() {
        let transcript = fixtures::transcript();
        let progress = fixtures::progress(&transcript);
        let ctx = ReportContext::new("21001", &transcript).with_progress(&progress);
        let out = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(out.contains("**Student:** 21001"));
        assert!(out.contains("### 2021/2022 - Fall"));
        assert!(out.contains("| Intro | A101 | 3.0 | 90 | A- | Passed |"));
        assert!(out.contains("| Intro | A101 | 3.0 | 40 | F | Failed |"));
        assert!(out.contains("**Cumulative GPA:** 0.00"));
        assert!(out.contains("| A102 | Next | 3 | First Level | Yes |"));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
    }

    #[test]
    fn test_generate_writes_file() {
        let transcript = fixtures::transcript();
        let ctx = ReportContext::new("21001", &transcript);
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("report.md");

        MarkdownReporter::new().generate(&ctx, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Academic Report"));
    }
}
