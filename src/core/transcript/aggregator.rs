//! GPA aggregation per semester and overall

use crate::core::models::{Attempt, SemesterId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::AddAssign;

/// Accumulated quality points and credit hours
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GpaTotals {
    /// Sum of `grade_points * credit_hours`
    pub total_points: f64,
    /// Sum of credit hours
    pub total_hours: f64,
}

impl GpaTotals {
    /// Fold one attempt into the totals
    pub fn add_attempt(&mut self, attempt: &Attempt) {
        self.total_points += attempt.quality_points();
        self.total_hours += attempt.credit_hours;
    }

    /// `total_points / total_hours`, or 0 when no hours were counted
    #[must_use]
    pub fn gpa(&self) -> f64 {
        if self.total_hours > 0.0 {
            self.total_points / self.total_hours
        } else {
            0.0
        }
    }
}

impl AddAssign for GpaTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.total_points += rhs.total_points;
        self.total_hours += rhs.total_hours;
    }
}

/// Semester and cumulative totals
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GpaSummary {
    /// Totals per semester that owns at least one counted attempt
    pub semesters: BTreeMap<SemesterId, GpaTotals>,
    /// Sum of all semester totals
    pub cumulative: GpaTotals,
}

/// Aggregate GPA-counting attempts into semester and cumulative totals
///
/// The cumulative figure sums points and hours across semesters rather than
/// averaging semester GPAs.
#[must_use]
pub fn aggregate<'a>(counted: impl IntoIterator<Item = &'a Attempt>) -> GpaSummary {
    let mut summary = GpaSummary::default();
    for attempt in counted {
        summary
            .semesters
            .entry(attempt.semester.clone())
            .or_default()
            .add_attempt(attempt);
    }
    for totals in summary.semesters.values() {
        summary.cumulative += *totals;
    }
    summary
}
