//! Progress command handler

use super::{fail, load_student};
use gpa_advisor::config::Config;
use gpa_advisor::core::loader::resolve_curriculum;
use gpa_advisor::core::progress::{evaluate_progress, ProgressReport};
use gpa_advisor::core::report::TextReporter;
use gpa_advisor::core::transcript::build_transcript;

/// Run the progress command.
pub fn run(student: &str, available_only: bool, config: &Config) {
    match evaluate(student, config) {
        Ok(mut report) => {
            if available_only {
                let available = report.available().cloned().collect();
                report.remaining = available;
            }
            print!("{}", TextReporter::render_progress(&report));
        }
        Err(message) => fail(&message),
    }
}

fn evaluate(student: &str, config: &Config) -> Result<ProgressReport, String> {
    let student = load_student(student).map_err(|e| format!("Failed to read student data: {e}"))?;
    let curriculum =
        resolve_curriculum(config).map_err(|e| format!("Failed to load curriculum: {e}"))?;
    let transcript = build_transcript(&student, &curriculum, &config.grading_scheme().scale());
    evaluate_progress(&curriculum, &transcript.completed).map_err(|e| e.to_string())
}
