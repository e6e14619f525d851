//! Core game types: coordinates, sides, phases, actions, configuration.
//!
//! Nothing in here knows about board contents or turn order; those live
//! in `board` and `rules`.

pub mod action;
pub mod config;
pub mod coord;
pub mod player;

pub use action::{Action, ActionRecord, Phase};
pub use config::{ConfigError, GameConfig, DEFAULT_COLS, DEFAULT_ROWS, MAX_CELLS};
pub use coord::{Coord, NEIGHBOR_OFFSETS};
pub use player::{Side, SideMap};
