//! Text shown to the players.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Phase, Side};
use crate::rules::Game;

/// The status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InPlay {
        side: Side,
        position: Coord,
        phase: Phase,
    },
    GameOver {
        winner: Side,
    },
}

impl Status {
    /// Current status of a game.
    #[must_use]
    pub fn of(game: &Game) -> Self {
        match game.result() {
            Some(result) => Status::GameOver {
                winner: result.winner,
            },
            None => {
                let side = game.current();
                Status::InPlay {
                    side,
                    position: game.player(side).position(),
                    phase: game.phase(),
                }
            }
        }
    }
}

impl std::fmt::Display for Status {
    /// Positions are shown column first, as x,y on screen.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::InPlay {
                side,
                position,
                phase,
            } => write!(
                f,
                "PLAYER {}: [{},{}]\n\n{}",
                side.index(),
                position.col,
                position.row,
                phase
            ),
            Status::GameOver { winner } => write!(f, "GAME OVER !!\n{} HAS WON", winner),
        }
    }
}

/// Transient message on the title line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notice {
    NotValid,
    Reset,
    Bye,
}

impl Notice {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Notice::NotValid => "NOT VALID",
            Notice::Reset => "RESET",
            Notice::Bye => "BYE BYE !!",
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_status() {
        let status = Status::of(&Game::standard());
        assert_eq!(
            status,
            Status::InPlay {
                side: Side::First,
                position: Coord::new(0, 0),
                phase: Phase::Move
            }
        );
        assert_eq!(status.to_string(), "PLAYER 0: [0,0]\n\nMOVE");
    }

    #[test]
    fn test_column_first() {
        let status = Status::InPlay {
            side: Side::Second,
            position: Coord::new(5, 6),
            phase: Phase::BreakIce,
        };
        assert_eq!(status.to_string(), "PLAYER 1: [6,5]\n\nBREAK ICE");
    }

    #[test]
    fn test_game_over_text() {
        let status = Status::GameOver { winner: Side::Second };
        assert_eq!(status.to_string(), "GAME OVER !!\nPlayer 1 HAS WON");
    }

    #[test]
    fn test_notice_text() {
        assert_eq!(Notice::NotValid.to_string(), "NOT VALID");
        assert_eq!(Notice::Bye.text(), "BYE BYE !!");
    }
}
