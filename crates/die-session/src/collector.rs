//! Roll entry parsing and recording.
//!
//! Each entry is a fixed-width run of digits: one character for dice with
//! fewer than ten faces, two zero-padded characters otherwise ("03", "12").
//! A value above the face count is the stop signal and is never recorded.

use die_stats::{Die, FrequencyTable, StatsError, StatsResult};

/// What a single roll entry asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollEntry {
    /// A face value in `1..=faces`.
    Face(u32),
    /// A value above the face count: stop collecting.
    Stop,
}

/// Reads roll entries for one die.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollCollector {
    die: Die,
}

impl RollCollector {
    /// Create a collector for the given die.
    pub fn new(die: Die) -> Self {
        Self { die }
    }

    /// The die being collected for.
    pub fn die(&self) -> Die {
        self.die
    }

    /// The prompt for roll number `n` (1-based).
    pub fn prompt(n: u32) -> String {
        format!("Roll {n}: ")
    }

    /// Parse one entry without recording it.
    pub fn parse(&self, input: &str) -> StatsResult<RollEntry> {
        let entry = input.trim();
        let invalid = || StatsError::InvalidRollInput(entry.to_string());

        if entry.len() != self.die.entry_width() || !entry.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value: u32 = entry.parse().map_err(|_| invalid())?;

        match value {
            0 => Err(invalid()),
            v if v > self.die.faces() => Ok(RollEntry::Stop),
            v => Ok(RollEntry::Face(v)),
        }
    }

    /// Parse one entry and, if it is a face, record it in `table`.
    ///
    /// The table is left untouched on error or on [`RollEntry::Stop`].
    pub fn collect(&self, table: &mut FrequencyTable, input: &str) -> StatsResult<RollEntry> {
        let entry = self.parse(input)?;
        if let RollEntry::Face(face) = entry {
            table.record(face)?;
        }
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_text() {
        assert_eq!(RollCollector::prompt(1), "Roll 1: ");
        assert_eq!(RollCollector::prompt(42), "Roll 42: ");
    }

    #[test]
    fn single_digit_faces() {
        let c = RollCollector::new(Die::D6);
        assert_eq!(c.parse("1"), Ok(RollEntry::Face(1)));
        assert_eq!(c.parse("6\n"), Ok(RollEntry::Face(6)));
        assert_eq!(c.parse(" 3 "), Ok(RollEntry::Face(3)));
    }

    #[test]
    fn stop_above_face_count() {
        let c = RollCollector::new(Die::D6);
        assert_eq!(c.parse("7"), Ok(RollEntry::Stop));
        assert_eq!(c.parse("9"), Ok(RollEntry::Stop));

        let c = RollCollector::new(Die::D20);
        assert_eq!(c.parse("21"), Ok(RollEntry::Stop));
        assert_eq!(c.parse("99"), Ok(RollEntry::Stop));
    }

    #[test]
    fn two_digit_faces_need_padding() {
        let c = RollCollector::new(Die::D12);
        assert_eq!(c.parse("03"), Ok(RollEntry::Face(3)));
        assert_eq!(c.parse("12"), Ok(RollEntry::Face(12)));
        assert_eq!(c.parse("10"), Ok(RollEntry::Face(10)));
        assert!(c.parse("3").is_err());
        assert!(c.parse("003").is_err());
    }

    #[test]
    fn rejects_malformed_entries() {
        let c = RollCollector::new(Die::D6);
        for bad in ["", "x", "12", "-1", "+1", "0", " "] {
            assert_eq!(
                c.parse(bad),
                Err(StatsError::InvalidRollInput(bad.trim().to_string())),
                "{bad:?}"
            );
        }
        let c = RollCollector::new(Die::D10);
        assert!(c.parse("00").is_err());
        assert!(c.parse("1a").is_err());
    }

    #[test]
    fn malformed_entry_message() {
        let err = RollCollector::new(Die::D6).parse("x").unwrap_err();
        assert_eq!(err.to_string(), "Not a valid input! Try again.");
    }

    #[test]
    fn collect_records_faces() {
        let c = RollCollector::new(Die::D4);
        let mut t = FrequencyTable::new(Die::D4);
        assert_eq!(c.collect(&mut t, "2"), Ok(RollEntry::Face(2)));
        assert_eq!(c.collect(&mut t, "2"), Ok(RollEntry::Face(2)));
        assert_eq!(t.counts(), &[0, 2, 0, 0]);
        assert_eq!(t.total(), 2);
    }

    #[test]
    fn stop_and_errors_do_not_mutate() {
        let c = RollCollector::new(Die::D4);
        let mut t = FrequencyTable::from_rolls(Die::D4, &[1, 2]).unwrap();
        let before = t.clone();

        assert_eq!(c.collect(&mut t, "5"), Ok(RollEntry::Stop));
        assert!(c.collect(&mut t, "x").is_err());
        assert!(c.collect(&mut t, "0").is_err());
        assert_eq!(t, before);
    }
}
