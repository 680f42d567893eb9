//! Raw student data as delivered by the student portal

use super::SemesterId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Start year used when the student code carries no year prefix
pub const FALLBACK_START_YEAR: i32 = 2020;

/// Accept a JSON string, number, or bool as text.
///
/// `null`, objects, and arrays become `None`, so one odd field leaves the
/// attempt unscored instead of failing the whole response.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        other @ (Value::Number(_) | Value::Bool(_)) => Some(other.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Semester id from a string or number; any other JSON type becomes `None`
fn lenient_semester<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<SemesterId>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(SemesterId::new(s)),
        Value::Number(n) => Some(SemesterId::new(n.to_string())),
        _ => None,
    })
}

/// Decode progress records one at a time.
///
/// A record that is not an object decodes as an empty attempt, which the
/// transcript pipeline skips and counts.
fn lenient_attempts<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<RawAttempt>, D::Error> {
    let values = match Value::deserialize(deserializer)? {
        Value::Array(values) => values,
        Value::Null => Vec::new(),
        other => {
            return Err(serde::de::Error::custom(format!(
                "expected an array of records, got {other}"
            )))
        }
    };

    Ok(values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).unwrap_or_else(|e| {
                crate::debug!("Progress record {index} is unreadable ({e}); skipping");
                RawAttempt::default()
            })
        })
        .collect())
}

/// Second `|`-separated segment when present and non-empty, else the first
fn preferred_segment(value: &str) -> &str {
    let mut parts = value.split('|');
    let first = parts.next().unwrap_or_default().trim();
    match parts.next().map(str::trim) {
        Some(second) if !second.is_empty() => second,
        _ => first,
    }
}

/// One course registration event as listed by the portal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAttempt {
    /// Course code, possibly suffixed (`"CSD102|2"`)
    #[serde(rename = "crscode", default, deserialize_with = "lenient_string")]
    pub code: Option<String>,

    /// Display name, possibly bilingual (`"local|English"`)
    #[serde(rename = "crsName", default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    /// Credit hours as reported by the portal
    #[serde(rename = "creditv", default, deserialize_with = "lenient_string")]
    pub credit_hours: Option<String>,

    /// Semester identifier
    #[serde(rename = "yearsem", default, deserialize_with = "lenient_semester")]
    pub semester: Option<SemesterId>,

    /// Semester display label (`"id|Fall"`)
    #[serde(rename = "semesterCourse", default, deserialize_with = "lenient_string")]
    pub semester_label: Option<String>,

    /// Raw numeric-or-marker score
    #[serde(rename = "Degree", default, deserialize_with = "lenient_string")]
    pub score: Option<String>,

    /// Secondary grade marker (`"P"`, `"BF"`, ...)
    #[serde(rename = "gradeN", default, deserialize_with = "lenient_string")]
    pub marker: Option<String>,
}

impl RawAttempt {
    /// Create an attempt for a course code in a semester
    #[must_use]
    pub fn new(code: impl Into<String>, semester: impl Into<SemesterId>) -> Self {
        Self {
            code: Some(code.into()),
            semester: Some(semester.into()),
            ..Self::default()
        }
    }

    /// Set the raw score
    #[must_use]
    pub fn with_score(mut self, score: impl Into<String>) -> Self {
        self.score = Some(score.into());
        self
    }

    /// Set the secondary grade marker
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Set the fallback display name and credit hours
    #[must_use]
    pub fn with_fallback(mut self, name: impl Into<String>, credit_hours: f64) -> Self {
        self.name = Some(name.into());
        self.credit_hours = Some(credit_hours.to_string());
        self
    }

    /// Set the semester display label
    #[must_use]
    pub fn with_semester_label(mut self, label: impl Into<String>) -> Self {
        self.semester_label = Some(label.into());
        self
    }

    /// Course code with any trailing `|` disambiguation suffix removed
    #[must_use]
    pub fn course_code(&self) -> &str {
        self.code
            .as_deref()
            .and_then(|code| code.split('|').next())
            .map_or("", str::trim)
    }

    /// Name to use when the curriculum does not know the course
    #[must_use]
    pub fn fallback_name(&self) -> String {
        preferred_segment(self.name.as_deref().unwrap_or_default()).to_string()
    }

    /// Credit hours to use when the curriculum does not know the course (0 if unparsable)
    #[must_use]
    pub fn fallback_credit_hours(&self) -> f64 {
        self.credit_hours
            .as_deref()
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|hours| hours.is_finite() && *hours >= 0.0)
            .unwrap_or(0.0)
    }

    /// Semester name from the display label, if any
    #[must_use]
    pub fn semester_name(&self) -> Option<String> {
        let label = self.semester_label.as_deref()?;
        let name = label.split('|').nth(1).map_or(label, str::trim).trim();
        (!name.is_empty()).then(|| name.to_string())
    }
}

/// A student's portal response: identity plus the attempt list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Student code; its first two digits encode the enrollment year
    #[serde(rename = "StudentCode", default, deserialize_with = "lenient_string")]
    pub student_code: Option<String>,

    /// Course attempts in portal order
    #[serde(rename = "studentProgress", default, deserialize_with = "lenient_attempts")]
    pub attempts: Vec<RawAttempt>,
}

impl StudentRecord {
    /// Create a record from a student code and attempts
    #[must_use]
    pub fn new(student_code: impl Into<String>, attempts: Vec<RawAttempt>) -> Self {
        Self {
            student_code: Some(student_code.into()),
            attempts,
        }
    }

    /// Academic start year derived from the student code (`"21..."` → 2021)
    #[must_use]
    pub fn start_year(&self) -> i32 {
        self.student_code
            .as_deref()
            .map(str::trim)
            .and_then(|code| code.get(..2))
            .filter(|prefix| prefix.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|prefix| prefix.parse::<i32>().ok())
            .map_or(FALLBACK_START_YEAR, |yy| 2000 + yy)
    }
}
