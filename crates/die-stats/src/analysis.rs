//! Chi-squared goodness-of-fit against a uniform die.
//!
//! The expected count per face is `total / faces` with integer truncation,
//! so totals that are not a multiple of the face count bias the statistic
//! slightly upwards. Rolling a multiple of the face count avoids this.

use serde::Serialize;

use crate::die::{CriticalValues, Die};
use crate::error::{StatsError, StatsResult};

/// Outcome of one chi-squared computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChiSquaredResult {
    /// Expected count per face (truncated).
    pub expected: u32,
    /// `(observed - expected)^2 / expected` for each face, face 1 first.
    pub contributions: Vec<f64>,
    /// Sum of all contributions.
    pub statistic: f64,
}

impl ChiSquaredResult {
    /// Classify the statistic against a die's critical values.
    pub fn verdict(&self, die: Die) -> Verdict {
        Verdict::classify(self.statistic, &die.critical_values())
    }
}

/// Compute the chi-squared statistic for a table of observed counts.
///
/// `observed` must hold exactly `faces` entries. Fails with
/// [`StatsError::InsufficientRolls`] when `total < faces`, since the
/// expected count would be zero.
pub fn compute_chi_squared(
    observed: &[u32],
    total: u32,
    faces: u32,
) -> StatsResult<ChiSquaredResult> {
    if faces == 0 {
        return Err(StatsError::UnsupportedFaceCount(faces));
    }
    if observed.len() != faces as usize {
        return Err(StatsError::TableSizeMismatch {
            faces,
            len: observed.len(),
        });
    }
    if total < faces {
        return Err(StatsError::InsufficientRolls { total, faces });
    }

    let expected = total / faces;
    let e = f64::from(expected);
    let contributions: Vec<f64> = observed
        .iter()
        .map(|&o| (f64::from(o) - e).powi(2) / e)
        .collect();
    let statistic: f64 = contributions.iter().sum();

    Ok(ChiSquaredResult {
        expected,
        contributions,
        statistic,
    })
}

/// How worried to be about a die, given its chi-squared statistic.
///
/// Bands use the 90% and 97% thresholds; the 95% and 99% values are
/// informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// Below the 90% threshold.
    NoConcern,
    /// Between the 90% and 97% thresholds (inclusive).
    MaybeConcern,
    /// Above the 97% threshold.
    ProbablyUnfair,
}

impl Verdict {
    /// Place a statistic in one of the three bands.
    pub fn classify(statistic: f64, critical: &CriticalValues) -> Self {
        if statistic < critical.p90 {
            Self::NoConcern
        } else if statistic <= critical.p97 {
            Self::MaybeConcern
        } else {
            Self::ProbablyUnfair
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoConcern => write!(f, "No concern"),
            Self::MaybeConcern => write!(f, "Maybe concern?"),
            Self::ProbablyUnfair => write!(f, "Probably unfair."),
        }
    }
}
