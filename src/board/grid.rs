//! The ice grid.
//!
//! ## Validity
//!
//! - A cell can be moved onto if it is on the board, not broken and not
//!   occupied.
//! - A cell can be broken if it is on the board and intact. Occupied
//!   cells are never intact, so a piece's cell cannot be broken.
//!
//! Out-of-bounds coordinates fail both checks; they are never an error
//! condition for the board itself.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cell::CellState;
use crate::core::{Coord, Side, SideMap};

/// Why a cell cannot be moved onto.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("{0} is not next to the piece")]
    NotAdjacent(Coord),
    #[error("{0} is off the board")]
    OutOfBounds(Coord),
    #[error("{0} is broken ice")]
    Broken(Coord),
    #[error("{0} is occupied by {1}")]
    Occupied(Coord, Side),
}

/// Why a cell cannot be broken.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakError {
    #[error("{0} is off the board")]
    OutOfBounds(Coord),
    #[error("{0} is already broken")]
    AlreadyBroken(Coord),
    #[error("{0} is occupied by {1}")]
    Occupied(Coord, Side),
}

/// Row-major grid of cell states.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: i32,
    cols: i32,
    cells: Vec<CellState>,
}

impl Board {
    /// Create an all-intact board.
    ///
    /// Sizes are expected to come from a validated `GameConfig`; a
    /// non-positive dimension, or a cell count past `i32::MAX`, yields an
    /// empty board on which every cell is out of bounds.
    #[must_use]
    pub fn new(rows: i32, cols: i32) -> Self {
        let len = rows
            .checked_mul(cols)
            .filter(|_| rows > 0 && cols > 0)
            .and_then(|n| usize::try_from(n).ok());
        match len {
            Some(len) => Self {
                rows,
                cols,
                cells: vec![CellState::Intact; len],
            },
            None => Self {
                rows: rows.min(0),
                cols: cols.min(0),
                cells: Vec::new(),
            },
        }
    }

    /// Create an intact board with both pieces seated.
    #[must_use]
    pub fn with_pieces(rows: i32, cols: i32, starts: &SideMap<Coord>) -> Self {
        let mut board = Self::new(rows, cols);
        board.reset(starts);
        board
    }

    #[must_use]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[must_use]
    pub fn in_bounds(&self, at: Coord) -> bool {
        (0..self.rows).contains(&at.row) && (0..self.cols).contains(&at.col)
    }

    fn index(&self, at: Coord) -> Option<usize> {
        if self.in_bounds(at) {
            usize::try_from(at.row * self.cols + at.col).ok()
        } else {
            None
        }
    }

    /// State of a cell, `None` if off the board.
    #[must_use]
    pub fn cell(&self, at: Coord) -> Option<CellState> {
        self.index(at).map(|i| self.cells[i])
    }

    /// Iterate over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        let cols = self.cols.max(1);
        self.cells.iter().enumerate().map(move |(i, &state)| {
            let i = i as i32;
            (Coord::new(i / cols, i % cols), state)
        })
    }

    /// Number of broken cells.
    #[must_use]
    pub fn broken_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_broken()).count()
    }

    /// Where a side's piece is, found by scanning the cells.
    #[must_use]
    pub fn find(&self, side: Side) -> Option<Coord> {
        self.iter()
            .find(|&(_, state)| state.occupant() == Some(side))
            .map(|(at, _)| at)
    }

    // === Validity ===

    /// Check that a piece may step onto `at`, ignoring adjacency.
    pub fn check_move(&self, at: Coord) -> Result<(), MoveError> {
        match self.cell(at) {
            None => Err(MoveError::OutOfBounds(at)),
            Some(CellState::Broken) => Err(MoveError::Broken(at)),
            Some(CellState::Occupied(side)) => Err(MoveError::Occupied(at, side)),
            Some(CellState::Intact) => Ok(()),
        }
    }

    /// Check that `at` may be broken.
    pub fn check_break(&self, at: Coord) -> Result<(), BreakError> {
        match self.cell(at) {
            None => Err(BreakError::OutOfBounds(at)),
            Some(CellState::Broken) => Err(BreakError::AlreadyBroken(at)),
            Some(CellState::Occupied(side)) => Err(BreakError::Occupied(at, side)),
            Some(CellState::Intact) => Ok(()),
        }
    }

    /// In bounds, not broken, not occupied.
    #[must_use]
    pub fn is_valid_move(&self, at: Coord) -> bool {
        self.check_move(at).is_ok()
    }

    /// In bounds, intact, not occupied.
    #[must_use]
    pub fn is_valid_break(&self, at: Coord) -> bool {
        self.check_break(at).is_ok()
    }

    // === Mutation ===

    /// Turn an intact cell into broken ice.
    ///
    /// Leaves the board unchanged if the cell cannot be broken.
    pub fn break_ice(&mut self, at: Coord) -> Result<(), BreakError> {
        self.check_break(at)?;
        if let Some(i) = self.index(at) {
            self.cells[i] = CellState::Broken;
        }
        Ok(())
    }

    /// Move `side`'s piece from `from` to `to`.
    ///
    /// The caller has already validated `to`; `from` goes back to intact.
    pub(crate) fn relocate(&mut self, side: Side, from: Coord, to: Coord) {
        if let Some(i) = self.index(from) {
            self.cells[i] = CellState::Intact;
        }
        if let Some(i) = self.index(to) {
            self.cells[i] = CellState::Occupied(side);
        }
    }

    /// Clear all broken ice and seat both pieces on their start cells.
    pub fn reset(&mut self, starts: &SideMap<Coord>) {
        self.cells.fill(CellState::Intact);
        for (side, &at) in starts.iter() {
            if let Some(i) = self.index(at) {
                self.cells[i] = CellState::Occupied(side);
            }
        }
    }
}
