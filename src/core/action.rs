//! Phases, actions and the per-game action history.
//!
//! A turn is always one `Move` followed by one `Break`. The phase tells
//! which of the two the side to act owes next.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::Side;

/// What the side to act must do next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Step the piece to an adjacent cell.
    #[default]
    Move,
    /// Break one intact, unoccupied cell anywhere on the board.
    BreakIce,
}

impl Phase {
    /// Label shown on the status line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Phase::Move => "MOVE",
            Phase::BreakIce => "BREAK ICE",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An accepted game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Move { from: Coord, to: Coord },
    Break { at: Coord },
}

impl Action {
    /// The phase in which this action is played.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Action::Move { .. } => Phase::Move,
            Action::Break { .. } => Phase::BreakIce,
        }
    }
}

/// An accepted action with the side and turn it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that acted.
    pub side: Side,

    /// The action taken.
    pub action: Action,

    /// Turn number (starts at 1, one turn per side-move-and-break).
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(side: Side, action: Action, turn: u32) -> Self {
        Self { side, action, turn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_labels() {
        assert_eq!(Phase::Move.label(), "MOVE");
        assert_eq!(format!("{}", Phase::BreakIce), "BREAK ICE");
        assert_eq!(Phase::default(), Phase::Move);
    }

    #[test]
    fn test_action_phase() {
        let mv = Action::Move {
            from: Coord::new(0, 0),
            to: Coord::new(1, 1),
        };
        assert_eq!(mv.phase(), Phase::Move);
        assert_eq!(Action::Break { at: Coord::new(2, 2) }.phase(), Phase::BreakIce);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(Side::Second, Action::Break { at: Coord::new(3, 4) }, 2);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
