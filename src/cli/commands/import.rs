//! Import command handler

use super::fail;
use gpa_advisor::core::loader::import_markdown_file;
use std::path::Path;

/// Run the import command.
pub fn run(input: &Path, output: &Path) {
    match import_markdown_file(input, output) {
        Ok(curriculum) => {
            println!("✓ Parsed {} courses", curriculum.len());
            println!("✓ Curriculum data saved to {}", output.display());
        }
        Err(e) => fail(&format!("Failed to import {}: {e}", input.display())),
    }
}
