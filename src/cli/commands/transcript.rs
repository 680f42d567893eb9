//! Transcript command handler
//!
//! Resolves a student's attempts and renders the transcript, optionally with
//! the degree progress report.

use super::{fail, load_student};
use gpa_advisor::config::Config;
use gpa_advisor::core::loader::resolve_curriculum;
use gpa_advisor::core::models::SemesterId;
use gpa_advisor::core::progress::evaluate_progress;
use gpa_advisor::core::report::{reporter_for, ReportContext, ReportFormat};
use gpa_advisor::core::transcript::{build_transcript, Transcript};
use gpa_advisor::{info, verbose, warn};
use std::path::{Path, PathBuf};

/// Options for the transcript command
#[derive(Debug)]
pub struct TranscriptOptions<'a> {
    /// Student JSON path or `-`
    pub student: &'a str,
    /// Restrict output to one semester
    pub semester: Option<&'a str>,
    /// Output format name
    pub format: &'a str,
    /// Output file, stdout when `None`
    pub output: Option<&'a Path>,
    /// Include the progress report
    pub progress: bool,
    /// Also save into the reports directory
    pub save: bool,
}

/// Run the transcript command.
pub fn run(options: &TranscriptOptions, config: &Config) {
    if let Err(message) = generate(options, config) {
        fail(&message);
    }
}

fn available_semesters(transcript: &Transcript) -> String {
    transcript
        .semesters
        .values()
        .map(|record| format!("{} ({})", record.id, record.title()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn generate(options: &TranscriptOptions, config: &Config) -> Result<(), String> {
    let format = options.format.parse::<ReportFormat>()?;

    let student =
        load_student(options.student).map_err(|e| format!("Failed to read student data: {e}"))?;
    let curriculum =
        resolve_curriculum(config).map_err(|e| format!("Failed to load curriculum: {e}"))?;
    let scheme = config.grading_scheme();
    verbose!(
        "Grading with the {scheme} scheme against {} courses",
        curriculum.len()
    );

    let transcript = build_transcript(&student, &curriculum, &scheme.scale());
    if transcript.skipped > 0 {
        verbose!(
            "{} records were not in the curriculum and were skipped",
            transcript.skipped
        );
    }

    let progress = if options.progress {
        match evaluate_progress(&curriculum, &transcript.completed) {
            Ok(progress) => Some(progress),
            Err(e) => {
                warn!("Progress report unavailable: {e}");
                eprintln!("✗ Progress report unavailable: {e}");
                None
            }
        }
    } else {
        None
    };

    let semester = options.semester.map(SemesterId::new);
    if let Some(id) = &semester {
        if transcript.semester(id).is_none() {
            return Err(format!(
                "Semester {id} not found. Available: {}",
                available_semesters(&transcript)
            ));
        }
    }

    let student_code = student.student_code.as_deref().unwrap_or("unknown");
    let mut ctx = ReportContext::new(student_code, &transcript);
    if let Some(progress) = &progress {
        ctx = ctx.with_progress(progress);
    }
    if let Some(id) = &semester {
        ctx = ctx.with_semester(id);
    }

    let reporter = reporter_for(format);
    match options.output {
        Some(path) => {
            reporter
                .generate(&ctx, path)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            println!("✓ Report written: {}", path.display());
        }
        None => {
            let content = reporter
                .render(&ctx)
                .map_err(|e| format!("Failed to render report: {e}"))?;
            print!("{content}");
        }
    }

    if options.save {
        let path = saved_report_path(config, student_code, format);
        reporter
            .generate(&ctx, &path)
            .map_err(|e| format!("Failed to save report to {}: {e}", path.display()))?;
        info!("Saved report for {student_code} to {}", path.display());
        println!("✓ Report saved: {}", path.display());
    }

    Ok(())
}

/// `<reports_dir>/<student>_transcript.<ext>`
fn saved_report_path(config: &Config, student_code: &str, format: ReportFormat) -> PathBuf {
    PathBuf::from(&config.paths.reports_dir).join(format!(
        "{student_code}_transcript.{}",
        format.extension()
    ))
}
