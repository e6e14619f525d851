//! A side's piece on the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::Board;
use crate::core::{Coord, Side};

/// One side's piece. Its position always matches the single board cell
/// marked `Occupied(side)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    side: Side,
    position: Coord,
}

impl Player {
    #[must_use]
    pub const fn new(side: Side, position: Coord) -> Self {
        Self { side, position }
    }

    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub const fn position(&self) -> Coord {
        self.position
    }

    /// Neighboring cells the piece could step onto.
    pub fn legal_moves(&self, board: &Board) -> SmallVec<[Coord; 8]> {
        self.position
            .neighbors()
            .into_iter()
            .filter(|&at| board.is_valid_move(at))
            .collect()
    }

    /// True if any of the 8 neighbors is a valid move.
    #[must_use]
    pub fn can_move(&self, board: &Board) -> bool {
        self.position
            .neighbors()
            .into_iter()
            .any(|at| board.is_valid_move(at))
    }

    /// Step by a row/column delta and return the new position.
    ///
    /// The caller has checked the destination with `Board::is_valid_move`.
    pub fn move_by(&mut self, board: &mut Board, d_row: i32, d_col: i32) -> Coord {
        let to = self.position.offset(d_row, d_col);
        board.relocate(self.side, self.position, to);
        self.position = to;
        to
    }

    /// Put the piece back on `at`. Used on reset, after the board has
    /// already re-seated it.
    pub(crate) fn place(&mut self, at: Coord) {
        self.position = at;
    }
}
