//! Supported dice and their chi-squared critical values.
//!
//! A die is only testable if its face count has a row in the critical-value
//! table. The rows are reference constants for `faces - 1` degrees of
//! freedom and are never computed at runtime.

use serde::Serialize;

use crate::error::{StatsError, StatsResult};

/// A die whose fairness can be tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Die {
    /// Three-sided die.
    D3,
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
}

impl Die {
    /// Every supported die, smallest first.
    pub fn all() -> &'static [Self] {
        &[
            Self::D3,
            Self::D4,
            Self::D6,
            Self::D8,
            Self::D10,
            Self::D12,
            Self::D20,
        ]
    }

    /// Returns the number of faces on this die.
    pub fn faces(self) -> u32 {
        match self {
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
        }
    }

    /// Look up a die by its face count.
    pub fn from_faces(faces: u32) -> StatsResult<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.faces() == faces)
            .ok_or(StatsError::UnsupportedFaceCount(faces))
    }

    /// Parse a die from a string like "d20", "D6" or a bare "12".
    ///
    /// A well-formed tag for a face count with no table row is
    /// [`StatsError::UnsupportedFaceCount`]; anything else is
    /// [`StatsError::InvalidFaceCount`].
    pub fn from_str_tag(s: &str) -> StatsResult<Self> {
        let tag = s.trim();
        let digits = tag
            .strip_prefix('d')
            .or_else(|| tag.strip_prefix('D'))
            .unwrap_or(tag);
        let faces = digits
            .parse::<u32>()
            .map_err(|_| StatsError::InvalidFaceCount(tag.to_string()))?;
        Self::from_faces(faces)
    }

    /// Number of characters in one roll entry: two for d10 and up
    /// (zero-padded, e.g. "03"), one otherwise.
    pub fn entry_width(self) -> usize {
        if self.faces() >= 10 { 2 } else { 1 }
    }

    /// The critical-value row for this die.
    pub fn critical_values(self) -> CriticalValues {
        let [p90, p95, p97, p99] = match self {
            Self::D3 => [4.6, 5.9, 7.3, 9.2],
            Self::D4 => [6.2, 7.8, 9.3, 11.3],
            Self::D6 => [9.2, 11.0, 12.8, 15.1],
            Self::D8 => [12.1, 14.1, 16.1, 18.4],
            Self::D10 => [14.6, 16.9, 19.1, 21.6],
            Self::D12 => [17.2, 19.6, 21.9, 24.7],
            Self::D20 => [27.2, 30.1, 32.8, 36.1],
        };
        CriticalValues {
            p90,
            p95,
            p97,
            p99,
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.faces())
    }
}

/// Chi-squared thresholds a fair die stays under with the given confidence.
///
/// Values ascend: `p90 < p95 < p97 < p99`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriticalValues {
    /// Threshold at 90% confidence.
    pub p90: f64,
    /// Threshold at 95% confidence.
    pub p95: f64,
    /// Threshold at 97% confidence.
    pub p97: f64,
    /// Threshold at 99% confidence.
    pub p99: f64,
}

impl CriticalValues {
    /// The four thresholds in ascending order.
    pub fn as_array(&self) -> [f64; 4] {
        [self.p90, self.p95, self.p97, self.p99]
    }
}
