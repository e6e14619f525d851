//! Game configuration.
//!
//! `GameConfig` fixes the board size and the start cell of each side.
//! The default is the standard 6x7 board with the two pieces in
//! opposite corners.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coord::Coord;
use super::player::{Side, SideMap};

/// Standard board height.
pub const DEFAULT_ROWS: i32 = 6;

/// Standard board width.
pub const DEFAULT_COLS: i32 = 7;

/// Largest supported number of cells.
pub const MAX_CELLS: i32 = 1 << 20;

/// Invalid configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must have at least one row and one column, got {rows}x{cols}")]
    EmptyBoard { rows: i32, cols: i32 },
    #[error("a {rows}x{cols} board exceeds {max} cells", max = MAX_CELLS)]
    TooLarge { rows: i32, cols: i32 },
    #[error("{side} starts at {at}, outside the {rows}x{cols} board")]
    StartOutOfBounds {
        side: Side,
        at: Coord,
        rows: i32,
        cols: i32,
    },
    #[error("both sides start on {at}")]
    SharedStart { at: Coord },
}

/// Board size and start positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows.
    pub rows: i32,

    /// Number of columns.
    pub cols: i32,

    /// Start cell of each side. Pieces return here on reset.
    pub starts: SideMap<Coord>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            starts: SideMap::new(|side| match side {
                Side::First => Coord::new(0, 0),
                Side::Second => Coord::new(DEFAULT_ROWS - 1, DEFAULT_COLS - 1),
            }),
        }
    }
}

impl GameConfig {
    /// The standard 6x7 configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    ///
    /// Start positions are left alone; call `with_start` to move them.
    #[must_use]
    pub fn with_size(mut self, rows: i32, cols: i32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set a side's start cell.
    #[must_use]
    pub fn with_start(mut self, side: Side, at: Coord) -> Self {
        self.starts[side] = at;
        self
    }

    /// True if `at` lies on a board of this size.
    #[must_use]
    pub fn contains(&self, at: Coord) -> bool {
        (0..self.rows).contains(&at.row) && (0..self.cols).contains(&at.col)
    }

    /// Check the board is non-empty and both starts are distinct cells on it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }

        if self.rows.checked_mul(self.cols).map_or(true, |n| n > MAX_CELLS) {
            return Err(ConfigError::TooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }

        for (side, &at) in self.starts.iter() {
            if !self.contains(at) {
                return Err(ConfigError::StartOutOfBounds {
                    side,
                    at,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
        }

        if self.starts[Side::First] == self.starts[Side::Second] {
            return Err(ConfigError::SharedStart {
                at: self.starts[Side::First],
            });
        }

        Ok(())
    }
}
