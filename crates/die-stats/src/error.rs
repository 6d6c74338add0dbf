//! Error types for the statistics engine.

/// Errors that can occur while recording rolls or testing a die.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// The face count has no critical-value row.
    #[error("unsupported die: {0} faces (supported: 3, 4, 6, 8, 10, 12, 20)")]
    UnsupportedFaceCount(u32),

    /// A die tag was neither a number nor `d` followed by a number.
    #[error("not a face count: {0:?}")]
    InvalidFaceCount(String),

    /// A roll entry was not a well-formed face value.
    #[error("Not a valid input! Try again.")]
    InvalidRollInput(String),

    /// A face value outside 1..=faces was recorded.
    #[error("face {face} is out of range for a {faces}-sided die")]
    FaceOutOfRange {
        /// The rejected face value.
        face: u32,
        /// Number of faces on the die.
        faces: u32,
    },

    /// Fewer rolls than faces, so the expected count per face is zero.
    #[error("not enough rolls yet: {total} recorded, at least {faces} needed")]
    InsufficientRolls {
        /// Rolls recorded so far.
        total: u32,
        /// Number of faces on the die.
        faces: u32,
    },

    /// An observed-count slice does not have one entry per face.
    #[error("expected {faces} observed counts, got {len}")]
    TableSizeMismatch {
        /// Number of faces on the die.
        faces: u32,
        /// Length of the slice that was passed in.
        len: usize,
    },
}

/// Convenience result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;
