//! CLI command handlers for `gpaadvisor`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod import;
pub mod progress;
pub mod transcript;
pub mod validate;

use gpa_advisor::core::error::LoadError;
use gpa_advisor::core::loader::{load_student_file, read_student};
use gpa_advisor::core::models::StudentRecord;
use std::fs;
use std::io::{self, IsTerminal, Read};

/// Argument value that selects stdin instead of a file
const STDIN_ARG: &str = "-";

fn prompt_for_paste() {
    if io::stdin().is_terminal() {
        eprintln!("Paste the JSON response from the student portal, then press Ctrl+D (Ctrl+Z on Windows):");
    }
}

/// Load a student record from a file path, or from stdin when `input` is `-`
pub fn load_student(input: &str) -> Result<StudentRecord, LoadError> {
    if input == STDIN_ARG {
        prompt_for_paste();
        read_student(io::stdin().lock())
    } else {
        load_student_file(input)
    }
}

/// Read raw text from a file path, or from stdin when `input` is `-`
pub fn read_input_text(input: &str) -> Result<String, LoadError> {
    if input == STDIN_ARG {
        prompt_for_paste();
        let mut content = String::new();
        io::stdin().lock().read_to_string(&mut content)?;
        Ok(content)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

/// Print an error line and exit non-zero
pub fn fail(message: &str) -> ! {
    gpa_advisor::error!("{message}");
    eprintln!("✗ {message}");
    std::process::exit(1);
}
