//! Error types for loading and evaluating student data
//!
//! The resolution pipeline itself never fails: unknown courses are skipped and
//! unparsable scores stay in progress. Failures are limited to malformed root
//! input and to progress evaluation over a curriculum with no credit hours.

use thiserror::Error;

/// Errors raised while loading curricula or student data
#[derive(Debug, Error)]
pub enum LoadError {
    /// I/O error reading or writing files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON syntax or shape error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON root was not an object
    #[error("expected a JSON object at the root")]
    NotAnObject,

    /// A required field is absent
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A field is present but has the wrong shape
    #[error("invalid field '{field}': {reason}")]
    InvalidField {
        /// Field name as it appears in the input
        field: &'static str,
        /// Human-readable explanation
        reason: String,
    },

    /// The input produced no courses
    #[error("no courses found in curriculum source")]
    EmptyCurriculum,
}

/// Conditions reported by the progress evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProgressError {
    /// The curriculum is empty or every course carries zero credit hours
    #[error("curriculum has no credit hours; it is empty or misconfigured")]
    ZeroCreditHours,
}
