//! Retake resolution
//!
//! Groups attempts by course code and decides, per code, which attempts are
//! displayed, whether the course is completed, and which single attempt feeds
//! the GPA. Later attempts supersede earlier ones, but completion and GPA may
//! point at different attempts of the same course: an earlier pass keeps the
//! course completed even when a later finished retake (possibly a failure) is
//! the one counted for GPA.

use crate::core::models::{Attempt, SemesterId, Status};
use std::collections::{BTreeMap, BTreeSet};

/// Outcome of resolving every attempt of a student
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    /// The GPA-counting attempt per course code (at most one per code)
    pub counted: BTreeMap<String, Attempt>,
    /// Codes with at least one passed attempt
    pub completed: BTreeSet<String>,
    /// Attempts to show, per semester, ordered by course code
    pub displayed: BTreeMap<SemesterId, Vec<Attempt>>,
}

/// Whether an attempt belongs in its semester's display list
///
/// Finished attempts are always shown. University requirements in progress are
/// hidden. Other in-progress attempts are hidden only when a finished attempt
/// of the same course in the same semester supersedes them.
fn is_displayed(attempt: &Attempt, history: &[&Attempt]) -> bool {
    if attempt.is_finished() {
        return true;
    }
    if attempt.is_university_requirement() {
        return false;
    }
    !history
        .iter()
        .any(|other| other.semester == attempt.semester && other.is_finished())
}

/// Resolve retakes across all attempts
#[must_use]
pub fn resolve(attempts: &[Attempt]) -> Resolution {
    let mut by_code: BTreeMap<&str, Vec<&Attempt>> = BTreeMap::new();
    for attempt in attempts {
        by_code.entry(attempt.code.as_str()).or_default().push(attempt);
    }

    let mut resolution = Resolution::default();

    for (code, mut history) in by_code {
        // Stable: same-semester attempts keep their input order
        history.sort_by(|a, b| a.semester.cmp(&b.semester));

        for attempt in &history {
            if is_displayed(attempt, &history) {
                resolution
                    .displayed
                    .entry(attempt.semester.clone())
                    .or_default()
                    .push((*attempt).clone());
            }
        }

        if history
            .iter()
            .rev()
            .any(|attempt| attempt.status() == Status::Passed)
        {
            resolution.completed.insert(code.to_string());
        }

        if let Some(latest_finished) = history
            .iter()
            .rev()
            .find(|attempt| attempt.is_finished() && !attempt.is_university_requirement())
        {
            resolution
                .counted
                .insert(code.to_string(), (*latest_finished).clone());
        }
    }

    for shown in resolution.displayed.values_mut() {
        shown.sort_by(|a, b| a.code.cmp(&b.code));
    }

    resolution
}
