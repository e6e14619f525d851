//! Input events consumed by the controller.

use serde::{Deserialize, Serialize};

use crate::core::Coord;

/// One user interaction, already mapped from raw input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// A board cell was picked. May be off the board.
    Select(Coord),
    /// Start the round over.
    Reset,
    /// Stop playing.
    Quit,
}

impl From<Coord> for InputEvent {
    fn from(at: Coord) -> Self {
        InputEvent::Select(at)
    }
}
