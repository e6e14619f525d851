//! Rejected transitions.
//!
//! A rejection is an ordinary outcome, not a failure: the game is left
//! exactly as it was and the caller decides how to report it.

use thiserror::Error;

use crate::board::{BreakError, MoveError};
use crate::core::Phase;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleError {
    #[error("invalid move: {0}")]
    Move(#[from] MoveError),
    #[error("invalid break: {0}")]
    Break(#[from] BreakError),
    #[error("{expected} attempted during {actual} phase")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error("game is over")]
    GameOver,
}

impl RuleError {
    /// True for a move click outside the piece's 3x3 neighborhood.
    #[must_use]
    pub const fn is_out_of_reach(&self) -> bool {
        matches!(self, RuleError::Move(MoveError::NotAdjacent(_)))
    }
}
