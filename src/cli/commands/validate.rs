//! Validate command handler

use super::{fail, read_input_text};
use gpa_advisor::core::loader::validate_student_json;

/// Run the validate command.
pub fn run(student: &str) {
    let content = match read_input_text(student) {
        Ok(content) => content,
        Err(e) => fail(&format!("Failed to read student data: {e}")),
    };

    match validate_student_json(&content) {
        Ok(summary) => {
            println!("✓ Data format is valid");
            println!();
            println!("Data Summary:");
            println!("  Student Code: {}", summary.student_code);
            println!("  Total Courses: {}", summary.total_records);
            println!("  Completed Courses: {}", summary.graded);
            println!("  In Progress: {}", summary.in_progress);
        }
        Err(e) => {
            eprintln!("✗ {e}");
            eprintln!();
            eprintln!("Troubleshooting:");
            eprintln!("  - Make sure you copied the entire JSON response");
            eprintln!("  - Copy from the response body, not the headers");
            eprintln!("  - Ensure the JSON is not truncated");
            std::process::exit(1);
        }
    }
}
