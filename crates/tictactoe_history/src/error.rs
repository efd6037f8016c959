//! Engine error types.

/// Error returned when a caller breaks the engine's contract.
///
/// Moves on occupied squares or on a won board are not errors; they are
/// ignored and the state comes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(usize),

    /// The step does not exist in the history.
    #[display("Step {} is out of range (history has {} snapshots)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the call.
        len: usize,
    },

    /// A board string could not be parsed.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(String),

    /// A history invariant was violated.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}
