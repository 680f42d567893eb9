//! Core module: domain models and the transcript and progress engines

pub mod config;
pub mod error;
pub mod grading;
pub mod loader;
pub mod models;
pub mod progress;
pub mod report;
pub mod transcript;

/// Returns the current version of the `gpa_advisor` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
