//! Board and pieces.
//!
//! The board owns the state of every cell; pieces remember where they
//! stand. Moving a piece updates both so that a cell is occupied exactly
//! when a piece stands on it.

mod cell;
mod grid;
mod piece;

pub use cell::CellState;
pub use grid::{Board, BreakError, MoveError};
pub use piece::Player;
