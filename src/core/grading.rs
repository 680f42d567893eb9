//! Grade scales: numeric score to letter grade and grade points
//!
//! Two schemes are supported. The stepped scheme is a descending ladder of
//! inclusive lower bounds where the first matching bound wins. The banded
//! scheme linearly interpolates points inside each band. Both are total: every
//! real input yields a grade, and non-numeric text yields `N/A` with 0 points.

use std::fmt;
use std::str::FromStr;

/// Letter reported for input that cannot be graded
pub const NOT_APPLICABLE: &str = "N/A";

/// Letter grade and grade points for one score
#[derive(Debug, Clone, PartialEq)]
pub struct Grade {
    /// Letter grade (e.g., "B+")
    pub letter: String,
    /// Grade points on a 4.0 scale
    pub points: f64,
}

impl Grade {
    fn new(letter: &str, points: f64) -> Self {
        Self {
            letter: letter.to_string(),
            points,
        }
    }

    fn not_applicable() -> Self {
        Self::new(NOT_APPLICABLE, 0.0)
    }
}

/// One rung of a stepped ladder: scores at or above `min_score` earn this grade
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Inclusive lower bound
    pub min_score: f64,
    /// Letter grade
    pub letter: String,
    /// Grade points
    pub points: f64,
}

/// One band of an interpolated table covering `[lower, upper)`
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    /// Inclusive lower bound
    pub lower: f64,
    /// Exclusive upper bound (inclusive for the topmost band)
    pub upper: f64,
    /// Points at `lower`
    pub points_at_lower: f64,
    /// Points at `upper`
    pub points_at_upper: f64,
    /// Letter grade for the whole band
    pub letter: String,
}

impl Band {
    #[allow(clippy::float_cmp)]
    fn interpolate(&self, score: f64) -> f64 {
        if self.points_at_lower == self.points_at_upper || self.upper <= self.lower {
            return self.points_at_lower;
        }
        let slope = (self.points_at_upper - self.points_at_lower) / (self.upper - self.lower);
        round2(slope.mul_add(score - self.lower, self.points_at_lower))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Named grading schemes selectable from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GradingScheme {
    /// Descending threshold ladder
    #[default]
    Stepped,
    /// Linear interpolation inside bands
    Banded,
}

impl GradingScheme {
    /// Build the default table for this scheme
    #[must_use]
    pub fn scale(self) -> GradeScale {
        match self {
            Self::Stepped => GradeScale::stepped(),
            Self::Banded => GradeScale::banded(),
        }
    }
}

impl FromStr for GradingScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stepped" | "step" | "threshold" => Ok(Self::Stepped),
            "banded" | "band" | "interpolated" => Ok(Self::Banded),
            _ => Err(format!("Unknown grading scheme: {s}")),
        }
    }
}

impl fmt::Display for GradingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stepped => write!(f, "stepped"),
            Self::Banded => write!(f, "banded"),
        }
    }
}

/// A grading table, passed explicitly to the normalizer
#[derive(Debug, Clone, PartialEq)]
pub enum GradeScale {
    /// Steps ordered from the highest bound down
    Stepped(Vec<Step>),
    /// Bands ordered from the lowest bound up
    Banded(Vec<Band>),
}

impl Default for GradeScale {
    fn default() -> Self {
        Self::stepped()
    }
}

impl GradeScale {
    /// The standard ladder (≥96 A+ 4.0 down to ≥50 D- 1.0, else F)
    #[must_use]
    pub fn stepped() -> Self {
        Self::from_steps(
            [
                (96.0, "A+", 4.0),
                (92.0, "A", 3.7),
                (88.0, "A-", 3.4),
                (84.0, "B+", 3.2),
                (80.0, "B", 3.0),
                (76.0, "B-", 2.8),
                (72.0, "C+", 2.6),
                (68.0, "C", 2.4),
                (64.0, "C-", 2.2),
                (60.0, "D+", 2.0),
                (55.0, "D", 1.5),
                (50.0, "D-", 1.0),
            ]
            .into_iter()
            .map(|(min_score, letter, points)| Step {
                min_score,
                letter: letter.to_string(),
                points,
            })
            .collect(),
        )
    }

    /// The standard interpolated table covering `[0, 100]`
    #[must_use]
    pub fn banded() -> Self {
        Self::from_bands(
            [
                (0.0, 50.0, 0.0, 0.0, "F"),
                (50.0, 55.0, 1.0, 1.3, "D"),
                (55.0, 60.0, 1.3, 1.7, "D+"),
                (60.0, 65.0, 1.7, 2.0, "C-"),
                (65.0, 70.0, 2.0, 2.3, "C"),
                (70.0, 75.0, 2.3, 2.5, "C+"),
                (75.0, 80.0, 2.5, 2.8, "B"),
                (80.0, 85.0, 2.8, 3.1, "B+"),
                (85.0, 90.0, 3.1, 3.4, "A-"),
                (90.0, 95.0, 3.4, 3.7, "A"),
                (95.0, 100.0, 3.7, 4.0, "A+"),
            ]
            .into_iter()
            .map(
                |(lower, upper, points_at_lower, points_at_upper, letter)| Band {
                    lower,
                    upper,
                    points_at_lower,
                    points_at_upper,
                    letter: letter.to_string(),
                },
            )
            .collect(),
        )
    }

    /// Build a stepped scale from arbitrary steps (sorted highest bound first)
    #[must_use]
    pub fn from_steps(mut steps: Vec<Step>) -> Self {
        steps.sort_by(|a, b| b.min_score.total_cmp(&a.min_score));
        Self::Stepped(steps)
    }

    /// Build a banded scale from arbitrary bands (sorted lowest bound first)
    #[must_use]
    pub fn from_bands(mut bands: Vec<Band>) -> Self {
        bands.sort_by(|a, b| a.lower.total_cmp(&b.lower));
        Self::Banded(bands)
    }

    /// Grade a numeric score
    ///
    /// Stepped: scores below every bound (including NaN) fall through to F.
    /// Banded: scores outside the table (or NaN) yield `N/A` with 0 points.
    #[must_use]
    pub fn scale(&self, score: f64) -> Grade {
        match self {
            Self::Stepped(steps) => steps
                .iter()
                .find(|step| score >= step.min_score)
                .map_or_else(|| Grade::new("F", 0.0), |s| Grade::new(&s.letter, s.points)),
            Self::Banded(bands) => {
                let top = bands.last();
                bands
                    .iter()
                    .find(|band| score >= band.lower && score < band.upper)
                    .or_else(|| top.filter(|band| (score - band.upper).abs() < f64::EPSILON))
                    .map_or_else(Grade::not_applicable, |band| {
                        Grade::new(&band.letter, band.interpolate(score))
                    })
            }
        }
    }

    /// Grade a raw score string; non-numeric text yields `N/A` with 0 points
    #[must_use]
    pub fn scale_text(&self, raw: &str) -> Grade {
        raw.trim()
            .parse::<f64>()
            .map_or_else(|_| Grade::not_applicable(), |score| self.scale(score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(scale: &GradeScale, score: f64) -> f64 {
        scale.scale(score).points
    }

    #[test]
    fn test_stepped_boundaries() {
        let scale = GradeScale::stepped();
        assert_eq!(scale.scale(96.0), Grade::new("A+", 4.0));
        assert_eq!(scale.scale(95.9).letter, "A");
        assert_eq!(scale.scale(84.0), Grade::new("B+", 3.2));
        assert_eq!(scale.scale(55.0), Grade::new("D", 1.5));
        assert_eq!(scale.scale(50.0), Grade::new("D-", 1.0));
        assert_eq!(scale.scale(49.99), Grade::new("F", 0.0));
        assert_eq!(scale.scale(40.0), Grade::new("F", 0.0));
    }

    #[test]
    fn test_stepped_out_of_range_is_total() {
        let scale = GradeScale::stepped();
        assert_eq!(scale.scale(120.0).letter, "A+");
        assert_eq!(scale.scale(-5.0).letter, "F");
        assert_eq!(scale.scale(f64::NAN).letter, "F");
    }

    #[test]
    fn test_banded_interpolation() {
        let scale = GradeScale::banded();
        let grade = scale.scale(82.5);
        assert_eq!(grade.letter, "B+");
        assert!((grade.points - 2.95).abs() < 1e-9);
    }

    #[test]
    fn test_banded_edges() {
        let scale = GradeScale::banded();
        assert_eq!(scale.scale(100.0), Grade::new("A+", 4.0));
        assert_eq!(scale.scale(80.0), Grade::new("B+", 2.8));
        assert_eq!(scale.scale(0.0), Grade::new("F", 0.0));
        assert_eq!(scale.scale(49.0), Grade::new("F", 0.0));
    }

    #[test]
    fn test_banded_out_of_range() {
        let scale = GradeScale::banded();
        assert_eq!(scale.scale(100.5).letter, NOT_APPLICABLE);
        assert_eq!(scale.scale(-1.0).letter, NOT_APPLICABLE);
        assert!(scale.scale(f64::NAN).points.abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_numeric_text() {
        for scale in [GradeScale::stepped(), GradeScale::banded()] {
            assert_eq!(scale.scale_text("abc").letter, NOT_APPLICABLE);
            assert_eq!(scale.scale_text("").letter, NOT_APPLICABLE);
            assert_eq!(scale.scale_text(" 91 ").letter, scale.scale(91.0).letter);
        }
    }

    #[test]
    fn test_monotonic_over_range() {
        for scale in [GradeScale::stepped(), GradeScale::banded()] {
            let mut previous = points(&scale, 0.0);
            for tenth in 1..=1000 {
                let score = f64::from(tenth) / 10.0;
                let current = points(&scale, score);
                assert!(
                    current + 1e-9 >= previous,
                    "points decreased at {score}: {previous} -> {current}"
                );
                previous = current;
            }
        }
    }

    #[test]
    fn test_custom_steps_are_sorted() {
        let scale = GradeScale::from_steps(vec![
            Step {
                min_score: 50.0,
                letter: "P".to_string(),
                points: 1.0,
            },
            Step {
                min_score: 90.0,
                letter: "H".to_string(),
                points: 4.0,
            },
        ]);
        assert_eq!(scale.scale(95.0).letter, "H");
        assert_eq!(scale.scale(60.0).letter, "P");
    }

    #[test]
    fn test_scheme_parse() {
        assert_eq!("Banded".parse::<GradingScheme>(), Ok(GradingScheme::Banded));
        assert_eq!(GradingScheme::Stepped.to_string(), "stepped");
        assert!("curve".parse::<GradingScheme>().is_err());
    }
}
