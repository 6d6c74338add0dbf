//! Fairness statistics for physical dice.
//!
//! Tallies observed roll frequencies and runs a chi-squared goodness-of-fit
//! test against a uniform distribution. Critical values come from a fixed
//! lookup table for the supported dice: d3, d4, d6, d8, d10, d12 and d20.

pub mod analysis;
pub mod die;
pub mod error;
pub mod frequency;

pub use analysis::{ChiSquaredResult, Verdict, compute_chi_squared};
pub use die::{CriticalValues, Die};
pub use error::{StatsError, StatsResult};
pub use frequency::FrequencyTable;
