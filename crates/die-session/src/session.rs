//! Die-testing session state machine.
//!
//! `DieSession` walks through choosing a die, collecting rolls, reporting,
//! and asking whether to keep rolling. Rolls accumulate across cycles; only
//! the end of the session discards them.

use die_stats::{Die, FrequencyTable, StatsError};

use crate::collector::{RollCollector, RollEntry};
use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::guidance::{BANNER, guidance, resume_hint};
use crate::report::render_report;

/// Where a session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the number of faces.
    ChoosingDie,
    /// Reading roll entries.
    Collecting,
    /// A report was shown; waiting for a yes/no to continue.
    Deciding,
    /// The session is over.
    Finished,
}

/// An interactive die-testing session.
pub struct DieSession {
    config: SessionConfig,
    phase: Phase,
    table: Option<FrequencyTable>,
    cycles: u32,
}

impl DieSession {
    /// Create a session. If the config names a die, collection starts
    /// immediately.
    pub fn new(config: SessionConfig) -> Self {
        let (phase, table) = match config.die {
            Some(die) => (Phase::Collecting, Some(FrequencyTable::new(die))),
            None => (Phase::ChoosingDie, None),
        };
        Self {
            config,
            phase,
            table,
            cycles: 0,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the session has ended.
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// The die under test, once chosen.
    pub fn die(&self) -> Option<Die> {
        self.table.as_ref().map(FrequencyTable::die)
    }

    /// The accumulated frequencies, once a die is chosen.
    pub fn table(&self) -> Option<&FrequencyTable> {
        self.table.as_ref()
    }

    /// Total rolls recorded so far.
    pub fn rolls(&self) -> u32 {
        self.table.as_ref().map_or(0, FrequencyTable::total)
    }

    /// Number of reports shown so far.
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Text to show before the first prompt.
    pub fn intro(&self) -> String {
        let mut out = format!("{BANNER}\n");
        if let Some(die) = self.die() {
            out.push_str(&guidance(die));
        }
        out
    }

    /// The prompt for the next line of input.
    pub fn prompt(&self) -> String {
        match self.phase {
            Phase::ChoosingDie => {
                "How many faces does the die you want to test have?: ".to_string()
            }
            Phase::Collecting => RollCollector::prompt(self.rolls() + 1),
            Phase::Deciding => "Would you like to roll this die some more?(Y/N): ".to_string(),
            Phase::Finished => String::new(),
        }
    }

    /// Process one line of input and return the text to show.
    ///
    /// Errors are recoverable: the phase and the recorded rolls are
    /// unchanged, and the same prompt applies again.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        match self.phase {
            Phase::ChoosingDie => self.choose_die(input),
            Phase::Collecting => self.collect(input),
            Phase::Deciding => Ok(self.decide(input)),
            Phase::Finished => Err(SessionError::Finished),
        }
    }

    /// Render the report for the rolls so far.
    ///
    /// Fails with [`SessionError::NoDie`] before a die is chosen, and with
    /// [`StatsError::InsufficientRolls`] until there are at least as many
    /// rolls as faces.
    pub fn report(&self) -> SessionResult<String> {
        let table = self.table.as_ref().ok_or(SessionError::NoDie)?;
        let result = table.chi_squared()?;
        log::info!(
            "{}: x2 = {:.2} over {} rolls ({}), report {}",
            table.die(),
            result.statistic,
            table.total(),
            result.verdict(table.die()),
            self.cycles,
        );
        Ok(render_report(table, &result))
    }

    /// End the session, e.g. on end of input.
    pub fn finish(&mut self) {
        if self.phase != Phase::Finished {
            log::info!(
                "session finished after {} rolls and {} reports",
                self.rolls(),
                self.cycles
            );
            self.phase = Phase::Finished;
        }
    }

    fn choose_die(&mut self, input: &str) -> SessionResult<String> {
        let die = Die::from_str_tag(input)?;

        log::info!("testing a {die}");
        self.table = Some(FrequencyTable::new(die));
        self.phase = Phase::Collecting;
        Ok(guidance(die))
    }

    fn collect(&mut self, input: &str) -> SessionResult<String> {
        let Some(table) = self.table.as_mut() else {
            return Err(SessionError::NoDie);
        };
        match RollCollector::new(table.die()).collect(table, input)? {
            RollEntry::Face(_) => Ok(String::new()),
            RollEntry::Stop => {
                self.cycles += 1;
                self.phase = Phase::Deciding;
                let mut out = String::from("Thank you!\n\nHere are the results:\n");
                match self.report() {
                    Ok(report) => out.push_str(&report),
                    Err(SessionError::Stats(e @ StatsError::InsufficientRolls { .. })) => {
                        log::warn!("{e}");
                        out.push_str(&format!("{e}. Roll some more to get a result.\n"));
                    }
                    Err(e) => return Err(e),
                }
                Ok(out)
            }
        }
    }

    fn decide(&mut self, input: &str) -> String {
        if input.trim().eq_ignore_ascii_case("y") {
            self.phase = Phase::Collecting;
            match self.die() {
                Some(die) => resume_hint(die, self.rolls() + 1),
                None => String::new(),
            }
        } else {
            self.finish();
            match self.die() {
                Some(die) => format!("Finished testing the {die} after {} rolls.", self.rolls()),
                None => String::new(),
            }
        }
    }
}
