//! Student portal data ingestion and validation

use crate::core::error::LoadError;
use crate::core::models::StudentRecord;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::io::Read;
use std::path::Path;

const STUDENT_CODE: &str = "StudentCode";
const STUDENT_PROGRESS: &str = "studentProgress";

/// Fields the portal puts on every progress record
const REQUIRED_COURSE_FIELDS: [&str; 4] = ["crscode", "crsName", "creditv", "yearsem"];

/// Overview of a validated portal response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSummary {
    /// Student code as given
    pub student_code: String,
    /// Number of progress records
    pub total_records: usize,
    /// Records carrying a non-blank score
    pub graded: usize,
    /// Records without a score yet
    pub in_progress: usize,
}

/// Parse into a JSON object and check the top-level shape
fn parse_root(json: &str) -> Result<Map<String, Value>, LoadError> {
    let Value::Object(root) = serde_json::from_str::<Value>(json.trim())? else {
        return Err(LoadError::NotAnObject);
    };

    if !root.contains_key(STUDENT_CODE) {
        return Err(LoadError::MissingField(STUDENT_CODE));
    }
    match root.get(STUDENT_PROGRESS) {
        None => Err(LoadError::MissingField(STUDENT_PROGRESS)),
        Some(Value::Array(_)) => Ok(root),
        Some(other) => Err(LoadError::InvalidField {
            field: STUDENT_PROGRESS,
            reason: format!("expected an array, got {}", type_name(other)),
        }),
    }
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a student portal response
///
/// The root must be an object with `StudentCode` and a `studentProgress`
/// array. Individual records are decoded leniently; content problems inside a
/// record are left to the transcript pipeline, which skips what it cannot use.
///
/// # Errors
/// Returns a [`LoadError`] naming the problem when the JSON is malformed or
/// the top-level fields are missing or mistyped.
pub fn parse_student_json(json: &str) -> Result<StudentRecord, LoadError> {
    let root = parse_root(json)?;
    let record: StudentRecord = serde_json::from_value(Value::Object(root))?;
    crate::debug!(
        "Parsed student {} with {} records",
        record.student_code.as_deref().unwrap_or("?"),
        record.attempts.len()
    );
    Ok(record)
}

/// Load a student portal response from a file
///
/// # Errors
/// Returns an error if the file cannot be read or its content is invalid
pub fn load_student_file<P: AsRef<Path>>(path: P) -> Result<StudentRecord, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_student_json(&content)
}

/// Read a student portal response from any reader (e.g., pasted into stdin)
///
/// # Errors
/// Returns an error if reading fails, nothing was read, or the content is invalid
pub fn read_student<R: Read>(mut reader: R) -> Result<StudentRecord, LoadError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    if content.trim().is_empty() {
        return Err(LoadError::InvalidField {
            field: "input",
            reason: "no data was provided".to_string(),
        });
    }
    parse_student_json(&content)
}

/// Check that a portal response has the expected format and summarize it
///
/// Stricter than [`parse_student_json`]: the progress array must be non-empty
/// and its first record must carry the course code, name, credit hours, and
/// semester fields.
///
/// # Errors
/// Returns a [`LoadError`] describing the first problem found
pub fn validate_student_json(json: &str) -> Result<DataSummary, LoadError> {
    let root = parse_root(json)?;
    let records = root
        .get(STUDENT_PROGRESS)
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice);

    let Some(first) = records.first() else {
        return Err(LoadError::InvalidField {
            field: STUDENT_PROGRESS,
            reason: "array is empty".to_string(),
        });
    };
    let first = first.as_object().ok_or_else(|| LoadError::InvalidField {
        field: STUDENT_PROGRESS,
        reason: "records must be objects".to_string(),
    })?;
    if let Some(missing) = REQUIRED_COURSE_FIELDS
        .iter()
        .find(|field| !first.contains_key(**field))
    {
        return Err(LoadError::MissingField(*missing));
    }

    let graded = records
        .iter()
        .filter(|record| {
            record.get("Degree").is_some_and(|degree| match degree {
                Value::String(s) => !s.trim().is_empty(),
                Value::Null => false,
                _ => true,
            })
        })
        .count();

    let student_code = match &root[STUDENT_CODE] {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };

    Ok(DataSummary {
        student_code,
        total_records: records.len(),
        graded,
        in_progress: records.len() - graded,
    })
}
