//! Win counters across a sequence of games.
//!
//! A `Session` lives as long as the process wants the score kept. It is
//! passed by reference to whatever finishes games; nothing about it is
//! global.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Side, SideMap};
use crate::rules::GameResult;

/// Score across rounds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    wins: SideMap<u32>,
    rounds: u32,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game.
    pub fn record(&mut self, result: GameResult) {
        self.wins[result.winner] += 1;
        self.rounds += 1;
        info!(
            winner = %result.winner,
            first = self.wins[Side::First],
            second = self.wins[Side::Second],
            "round recorded"
        );
    }

    #[must_use]
    pub fn wins(&self, side: Side) -> u32 {
        self.wins[side]
    }

    /// Number of finished games.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Snapshot for the between-rounds screen.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            rounds: self.rounds,
            wins: self.wins,
        }
    }
}

/// What the summary screen shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub rounds: u32,
    pub wins: SideMap<u32>,
}

impl Summary {
    /// The side with more wins, `None` on a tie.
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        let (first, second) = (self.wins[Side::First], self.wins[Side::Second]);
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(Side::First),
            std::cmp::Ordering::Less => Some(Side::Second),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ROUNDS PLAYED: {}", self.rounds)?;
        for (side, wins) in self.wins.iter() {
            writeln!(f, "{} WINS: {}", side.to_string().to_uppercase(), wins)?;
        }
        Ok(())
    }
}
