//! Configuration for a die-testing session.

use die_stats::Die;

/// Configuration for a session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Die chosen up front; `None` asks for the face count first.
    pub die: Option<Die>,
    /// Erase each accepted roll line on an interactive terminal.
    pub overwrite: bool,
}

impl SessionConfig {
    /// Skip the face-count prompt and test this die.
    pub fn with_die(mut self, die: Die) -> Self {
        self.die = Some(die);
        self
    }

    /// Set whether accepted roll lines are erased.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}
