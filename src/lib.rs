//! Library for `gpa_advisor`
//! Resolves course attempts into transcripts, GPAs, and degree progress

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
