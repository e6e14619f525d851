//! The Icebreaker turn state machine.
//!
//! ## Turn structure
//!
//! The side to act first moves its piece one step (`Phase::Move`), then
//! breaks one intact cell anywhere on the board (`Phase::BreakIce`).
//! After the break the other side acts. `First` always opens.
//!
//! ## Game over
//!
//! After every accepted action the side that must act next is checked:
//! if none of its neighboring cells can be moved onto, its opponent wins.
//! After a move that is the mover itself (who can always step back onto
//! the cell just vacated), after a break it is the opponent. The result
//! is latched until `reset`.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::RuleError;
use crate::board::{Board, MoveError, Player};
use crate::core::{Action, ActionRecord, ConfigError, Coord, GameConfig, Phase, Side, SideMap};

/// Result of a completed game. There are no draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Side,
}

impl GameResult {
    #[must_use]
    pub const fn new(winner: Side) -> Self {
        Self { winner }
    }

    /// The side left without a move.
    #[must_use]
    pub const fn loser(&self) -> Side {
        self.winner.opponent()
    }

    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner == side
    }
}

/// An accepted action and, if it ended the game, the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub record: ActionRecord,
    pub result: Option<GameResult>,
}

/// One game of Icebreaker.
///
/// Cloning is cheap apart from the board cells: history is an `im`
/// vector.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    board: Board,
    players: SideMap<Player>,
    current: Side,
    phase: Phase,
    turn: u32,
    result: Option<GameResult>,
    history: Vector<ActionRecord>,
}

impl Game {
    /// Start a game on a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Start a game on the standard 6x7 board.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_valid_config(GameConfig::default())
    }

    fn from_valid_config(config: GameConfig) -> Self {
        let board = Board::with_pieces(config.rows, config.cols, &config.starts);
        let players = SideMap::new(|side| Player::new(side, config.starts[side]));

        let mut game = Self {
            config,
            board,
            players,
            current: Side::First,
            phase: Phase::Move,
            turn: 1,
            result: None,
            history: Vector::new(),
        };
        game.check_terminal();
        game
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side]
    }

    /// The side to act.
    #[must_use]
    pub fn current(&self) -> Side {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True between a successful move and the break that follows it.
    #[must_use]
    pub fn move_made(&self) -> bool {
        match self.phase {
            Phase::Move => false,
            Phase::BreakIce => true,
        }
    }

    /// Current turn number, starting at 1. Each side's move-and-break is
    /// one turn.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    /// Every accepted action since the last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn can_move(&self, side: Side) -> bool {
        self.players[side].can_move(&self.board)
    }

    // === Transitions ===

    /// Apply a click on `at` according to the current phase.
    pub fn select(&mut self, at: Coord) -> Result<Transition, RuleError> {
        match self.phase {
            Phase::Move => self.try_move(at),
            Phase::BreakIce => self.try_break(at),
        }
    }

    /// Step the current side's piece onto the adjacent cell `at`.
    pub fn try_move(&mut self, at: Coord) -> Result<Transition, RuleError> {
        self.expect_phase(Phase::Move)?;

        let side = self.current;
        let from = self.players[side].position();
        if !from.within_reach(at) {
            return Err(MoveError::NotAdjacent(at).into());
        }
        // The piece's own cell fails here as occupied.
        self.board.check_move(at)?;

        let (d_row, d_col) = from.delta_to(at);
        self.players[side].move_by(&mut self.board, d_row, d_col);
        self.phase = Phase::BreakIce;
        debug!(%side, %from, to = %at, turn = self.turn, "piece moved");

        Ok(self.commit(side, Action::Move { from, to: at }))
    }

    /// Break the intact, unoccupied cell `at` and pass the turn.
    pub fn try_break(&mut self, at: Coord) -> Result<Transition, RuleError> {
        self.expect_phase(Phase::BreakIce)?;

        let side = self.current;
        self.board.break_ice(at)?;
        debug!(%side, %at, turn = self.turn, "ice broken");

        Ok(self.commit(side, Action::Break { at }))
    }

    /// Back to the opening position: all ice intact, pieces on their
    /// start cells, `First` to move.
    pub fn reset(&mut self) {
        self.board.reset(&self.config.starts);
        for (side, player) in self.players.iter_mut() {
            player.place(self.config.starts[side]);
        }
        self.current = Side::First;
        self.phase = Phase::Move;
        self.turn = 1;
        self.result = None;
        self.history.clear();
        info!("game reset");
        self.check_terminal();
    }

    /// True if every piece stands on a cell marked as occupied by it and
    /// no other cell is marked occupied.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let occupied = self
            .board
            .iter()
            .filter(|(_, state)| state.occupant().is_some())
            .count();

        occupied == self.players.iter().count()
            && self.players.iter().all(|(side, player)| {
                self.board
                    .cell(player.position())
                    .and_then(|state| state.occupant())
                    == Some(side)
            })
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), RuleError> {
        if self.result.is_some() {
            return Err(RuleError::GameOver);
        }
        if self.phase != expected {
            return Err(RuleError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    /// Record an accepted action, hand the turn over after a break and
    /// check whether the side to act next is stuck.
    fn commit(&mut self, side: Side, action: Action) -> Transition {
        let record = ActionRecord::new(side, action, self.turn);
        self.history.push_back(record);

        match action {
            Action::Move { .. } => {}
            Action::Break { .. } => {
                self.current = side.opponent();
                self.phase = Phase::Move;
                self.turn += 1;
            }
        }

        Transition {
            record,
            result: self.check_terminal(),
        }
    }

    fn check_terminal(&mut self) -> Option<GameResult> {
        if self.result.is_none() && !self.can_move(self.current) {
            let result = GameResult::new(self.current.opponent());
            info!(winner = %result.winner, turn = self.turn, "game over");
            self.result = Some(result);
            return self.result;
        }
        None
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::standard()
    }
}
