//! Cell state.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// State of one board cell. Exactly one variant holds at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Never broken and not occupied.
    #[default]
    Intact,
    /// Broken ice. Nothing may stand here for the rest of the game.
    Broken,
    /// Holds the given side's piece.
    Occupied(Side),
}

impl CellState {
    #[must_use]
    pub const fn is_intact(self) -> bool {
        matches!(self, CellState::Intact)
    }

    #[must_use]
    pub const fn is_broken(self) -> bool {
        matches!(self, CellState::Broken)
    }

    /// The occupying side, if any.
    #[must_use]
    pub const fn occupant(self) -> Option<Side> {
        match self {
            CellState::Occupied(side) => Some(side),
            CellState::Intact | CellState::Broken => None,
        }
    }
}
