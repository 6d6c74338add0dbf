//! Error types for a die-testing session.

use thiserror::Error;

use die_stats::StatsError;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur during a die-testing session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// No die has been chosen yet.
    #[error("no die chosen yet")]
    NoDie,

    /// Input arrived after the session ended.
    #[error("session has finished")]
    Finished,

    /// Statistics error (bad die tag, bad roll entry, too few rolls).
    #[error("{0}")]
    Stats(#[from] StatsError),
}
