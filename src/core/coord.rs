//! Grid coordinates and the 8-neighborhood.
//!
//! Coordinates are signed so that input mapped from pixels outside the
//! board (left of or above the margin, or past the last cell) is still
//! representable. Such coordinates are never in bounds and every
//! validity check rejects them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A cell position on the board, `row` first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

/// Offsets of the 8 cells surrounding a position.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset this coordinate by a row/column delta, saturating at the
    /// `i32` limits.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// Row/column delta from `self` to `other`, saturating at the `i32`
    /// limits.
    #[must_use]
    pub const fn delta_to(self, other: Coord) -> (i32, i32) {
        (
            other.row.saturating_sub(self.row),
            other.col.saturating_sub(self.col),
        )
    }

    /// True if `other` is `self` or one of the 8 cells around it.
    #[must_use]
    pub const fn within_reach(self, other: Coord) -> bool {
        self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    /// True if `other` is one of the 8 cells around `self`.
    ///
    /// A coordinate is not adjacent to itself.
    ///
    /// ```
    /// use icebreaker::core::Coord;
    ///
    /// let origin = Coord::new(2, 2);
    /// assert!(origin.is_adjacent(Coord::new(3, 3)));
    /// assert!(!origin.is_adjacent(Coord::new(2, 2)));
    /// assert!(!origin.is_adjacent(Coord::new(4, 2)));
    /// ```
    #[must_use]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self != other && self.within_reach(other)
    }

    /// The 8 surrounding coordinates, including ones off the board.
    pub fn neighbors(self) -> SmallVec<[Coord; 8]> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(d_row, d_col)| self.offset(d_row, d_col))
            .collect()
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
