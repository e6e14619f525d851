//! # icebreaker
//!
//! Rules and turn control for Icebreaker, a two-player game on a 6x7
//! grid of ice.
//!
//! ## Rules
//!
//! Each side has one piece, starting in opposite corners. A turn is:
//!
//! 1. **Move**: step the piece to one of the 8 neighboring cells, which
//!    must be on the board, unbroken and unoccupied.
//! 2. **Break ice**: break any intact, unoccupied cell on the board.
//!
//! A side that must act but has no cell to step onto loses.
//!
//! ## Design Principles
//!
//! 1. **State is data**: every cell is an explicit `CellState`; nothing
//!    is inferred from how a front end draws it.
//!
//! 2. **Rejections are values**: illegal clicks return a `RuleError` and
//!    leave the game untouched.
//!
//! 3. **No globals**: scores live in a `Session` passed by reference.
//!
//! 4. **Event boundary**: front ends feed `InputEvent`s to a
//!    `Controller` and draw from the returned `Update` or an `Observer`.
//!
//! ## Modules
//!
//! - `core`: coordinates, sides, phases, actions, configuration
//! - `board`: cell states, the grid, pieces
//! - `rules`: the turn state machine
//! - `session`: win counters across rounds
//! - `input`: input events and pixel layout
//! - `controller`: event handling, status line, notices
//! - `render`: plain-text board
//! - `telemetry`: logging setup

pub mod board;
pub mod controller;
pub mod core;
pub mod input;
pub mod render;
pub mod rules;
pub mod session;
pub mod telemetry;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{Action, ActionRecord, ConfigError, Coord, GameConfig, Phase, Side, SideMap};

pub use crate::board::{Board, BreakError, CellState, MoveError, Player};

pub use crate::rules::{Game, GameResult, RuleError, Transition};

pub use crate::session::{Session, Summary};

pub use crate::input::{InputEvent, Layout, Point, Rect};

pub use crate::controller::{Controller, Notice, Observer, Outcome, Status, Update};
