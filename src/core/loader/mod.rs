//! Input loaders: student portal JSON, curriculum JSON, and markdown curricula
//!
//! These are the only parts of the core that touch the filesystem or readers.

pub mod curriculum;
pub mod markdown;
pub mod student;

pub use curriculum::{load_curriculum_file, resolve_curriculum};
pub use markdown::{import_markdown_file, parse_curriculum_markdown};
pub use student::{
    load_student_file, parse_student_json, read_student, validate_student_json, DataSummary,
};
