//! Semester identifier model

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Opaque, totally ordered semester identifier
///
/// Portal data encodes semesters as values like `20231` (year + term), sent
/// either as JSON numbers or strings. Identifiers that parse as integers order
/// numerically and sort before any non-numeric identifier; the rest order
/// lexically.
#[derive(Debug, Clone, Eq)]
pub struct SemesterId {
    raw: String,
    numeric: Option<i64>,
}

impl SemesterId {
    /// Create an identifier from its textual form
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into().trim().to_string();
        let numeric = raw.parse::<i64>().ok();
        Self { raw, numeric }
    }

    /// The identifier as it appeared in the input
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl PartialEq for SemesterId {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Hash for SemesterId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.numeric {
            Some(n) => n.hash(state),
            None => self.raw.hash(state),
        }
    }
}

impl Ord for SemesterId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric, other.numeric) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.raw.cmp(&other.raw),
        }
    }
}

impl PartialOrd for SemesterId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SemesterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<&str> for SemesterId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<i64> for SemesterId {
    fn from(value: i64) -> Self {
        Self::new(value.to_string())
    }
}

impl Serialize for SemesterId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.numeric {
            Some(n) => serializer.serialize_i64(n),
            None => serializer.serialize_str(&self.raw),
        }
    }
}

impl<'de> Deserialize<'de> for SemesterId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(s) => Ok(Self::new(s)),
            serde_json::Value::Number(n) => Ok(Self::new(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "semester id must be a string or number, got {other}"
            ))),
        }
    }
}
