//! Data models for `gpa_advisor`

pub mod attempt;
pub mod course;
pub mod curriculum;
pub mod semester;
pub mod student;

pub use attempt::{Attempt, CourseCategory, Outcome, Status};
pub use course::{CourseDefinition, CourseType, Level};
pub use curriculum::{Curriculum, Faculty};
pub use semester::SemesterId;
pub use student::{RawAttempt, StudentRecord};
