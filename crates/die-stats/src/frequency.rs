//! Observed roll frequencies.

use serde::Serialize;

use crate::analysis::{ChiSquaredResult, compute_chi_squared};
use crate::die::Die;
use crate::error::{StatsError, StatsResult};

/// How often each face of a die has come up.
///
/// Slot `i` counts face `i + 1`. The sum of all slots always equals
/// [`total`](Self::total).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    die: Die,
    counts: Vec<u32>,
    total: u32,
}

impl FrequencyTable {
    /// Create an empty table for the given die.
    pub fn new(die: Die) -> Self {
        Self {
            die,
            counts: vec![0; die.faces() as usize],
            total: 0,
        }
    }

    /// Build a table from a list of face values.
    ///
    /// Fails on the first value outside `1..=faces`.
    pub fn from_rolls(die: Die, rolls: &[u32]) -> StatsResult<Self> {
        let mut table = Self::new(die);
        for &face in rolls {
            table.record(face)?;
        }
        Ok(table)
    }

    /// Record one roll of `face` (1-based).
    pub fn record(&mut self, face: u32) -> StatsResult<()> {
        let faces = self.die.faces();
        if !(1..=faces).contains(&face) {
            return Err(StatsError::FaceOutOfRange { face, faces });
        }
        self.counts[(face - 1) as usize] += 1;
        self.total += 1;
        log::debug!("recorded {face} on {} (roll {})", self.die, self.total);
        Ok(())
    }

    /// The die this table tallies.
    pub fn die(&self) -> Die {
        self.die
    }

    /// Per-face counts, face 1 first.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// How many times `face` (1-based) was rolled, or 0 if out of range.
    pub fn count(&self, face: u32) -> u32 {
        face.checked_sub(1)
            .and_then(|i| self.counts.get(i as usize))
            .copied()
            .unwrap_or(0)
    }

    /// Total rolls recorded.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// The highest count of any face, or 0 if nothing was recorded.
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Whether no roll has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Run the chi-squared test over the current counts.
    pub fn chi_squared(&self) -> StatsResult<ChiSquaredResult> {
        compute_chi_squared(&self.counts, self.total, self.die.faces())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_table_is_empty() {
        let t = FrequencyTable::new(Die::D6);
        assert!(t.is_empty());
        assert_eq!(t.counts(), &[0, 0, 0, 0, 0, 0]);
        assert_eq!(t.max_count(), 0);
    }

    #[test]
    fn record_counts_faces() {
        let mut t = FrequencyTable::new(Die::D4);
        t.record(1).unwrap();
        t.record(4).unwrap();
        t.record(4).unwrap();
        assert_eq!(t.counts(), &[1, 0, 0, 2]);
        assert_eq!(t.count(4), 2);
        assert_eq!(t.total(), 3);
        assert_eq!(t.max_count(), 2);
    }

    #[test]
    fn record_rejects_out_of_range() {
        let mut t = FrequencyTable::new(Die::D6);
        assert_eq!(
            t.record(7),
            Err(StatsError::FaceOutOfRange { face: 7, faces: 6 })
        );
        assert_eq!(
            t.record(0),
            Err(StatsError::FaceOutOfRange { face: 0, faces: 6 })
        );
        assert!(t.is_empty());
    }

    #[test]
    fn count_out_of_range_is_zero() {
        let t = FrequencyTable::from_rolls(Die::D3, &[1, 2, 3]).unwrap();
        assert_eq!(t.count(0), 0);
        assert_eq!(t.count(4), 0);
    }

    #[test]
    fn from_rolls_stops_at_bad_face() {
        let err = FrequencyTable::from_rolls(Die::D3, &[1, 2, 9]).unwrap_err();
        assert_eq!(err, StatsError::FaceOutOfRange { face: 9, faces: 3 });
    }

    #[test]
    fn serializes_counts() {
        let t = FrequencyTable::from_rolls(Die::D3, &[1, 1, 3]).unwrap();
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["die"], "D3");
        assert_eq!(json["counts"], serde_json::json!([2, 0, 1]));
        assert_eq!(json["total"], 3);
    }

    proptest! {
        #[test]
        fn sum_of_counts_equals_total(rolls in prop::collection::vec(1u32..=20, 0..200)) {
            let t = FrequencyTable::from_rolls(Die::D20, &rolls).unwrap();
            prop_assert_eq!(t.counts().iter().sum::<u32>(), t.total());
            prop_assert_eq!(t.total() as usize, rolls.len());
        }

        #[test]
        fn rejected_faces_leave_table_untouched(face in 7u32..1000) {
            let mut t = FrequencyTable::from_rolls(Die::D6, &[1, 2, 3]).unwrap();
            let before = t.clone();
            prop_assert!(t.record(face).is_err());
            prop_assert_eq!(t, before);
        }
    }
}
