//! Event boundary between input sources and the game.
//!
//! `Controller::handle` takes one `InputEvent`, applies it to the game,
//! records a finished game in the `Session`, tells every `Observer` and
//! returns the resulting `Update`. Nothing blocks and nothing is shared:
//! the caller decides where events come from and when to stop.

use serde::Serialize;
use tracing::{debug, info};

use super::status::{Notice, Status};
use crate::core::{Action, Coord, Phase};
use crate::input::{InputEvent, Layout, Point};
use crate::rules::{Game, GameResult, RuleError, Transition};
use crate::session::Session;

/// Whether the front end should keep feeding events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Continue,
    Quit,
}

/// What one handled event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Update {
    /// Status line after the event.
    pub status: Status,
    /// Title line after the event, `None` when blank.
    pub notice: Option<Notice>,
    /// Accepted action, if any.
    pub accepted: Option<Transition>,
    /// Rejected attempt, if any. Rejections never change the game.
    #[serde(skip)]
    pub rejected: Option<RuleError>,
    /// Set on the one update in which a game's result was recorded.
    pub ended: Option<GameResult>,
    pub outcome: Outcome,
}

/// Receives every update, e.g. to redraw a board.
pub trait Observer {
    fn on_update(&mut self, game: &Game, update: &Update);
}

impl<F> Observer for F
where
    F: FnMut(&Game, &Update),
{
    fn on_update(&mut self, game: &Game, update: &Update) {
        self(game, update)
    }
}

/// Drives one game from input events.
pub struct Controller {
    game: Game,
    layout: Layout,
    notice: Option<Notice>,
    /// Rejected moves onto neighboring cells in the current turn.
    failed_moves: u32,
    /// The current game's result has been added to a session.
    recorded: bool,
    observers: Vec<Box<dyn Observer>>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Game::standard())
    }
}

impl Controller {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            layout: Layout::default(),
            notice: None,
            failed_moves: 0,
            recorded: false,
            observers: Vec::new(),
        }
    }

    /// Use a different screen layout for `click`.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Register an observer, notified after every handled event.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    #[must_use]
    pub fn status(&self) -> Status {
        Status::of(&self.game)
    }

    /// Handle a pointer click at pixel position `p`.
    pub fn click(&mut self, p: Point, session: &mut Session) -> Update {
        let event = self.layout.classify(p);
        self.handle(event, session)
    }

    /// Handle one input event.
    pub fn handle(&mut self, event: InputEvent, session: &mut Session) -> Update {
        let mut accepted = None;
        let mut rejected = None;
        let mut outcome = Outcome::Continue;

        match event {
            InputEvent::Quit => {
                info!("quit requested");
                self.notice = Some(Notice::Bye);
                outcome = Outcome::Quit;
            }
            InputEvent::Reset => {
                self.game.reset();
                self.recorded = false;
                self.failed_moves = 0;
                self.notice = Some(Notice::Reset);
            }
            InputEvent::Select(at) => match self.select(at) {
                Ok(transition) => accepted = transition,
                Err(err) => rejected = Some(err),
            },
        }

        let ended = match (outcome, self.game.result()) {
            (Outcome::Continue, Some(result)) if !self.recorded => {
                session.record(result);
                self.recorded = true;
                Some(result)
            }
            _ => None,
        };

        let update = Update {
            status: self.status(),
            notice: self.notice,
            accepted,
            rejected,
            ended,
            outcome,
        };

        for observer in &mut self.observers {
            observer.on_update(&self.game, &update);
        }

        update
    }

    /// Clicks on a finished game are ignored until reset.
    fn select(&mut self, at: Coord) -> Result<Option<Transition>, RuleError> {
        if self.game.is_terminal() {
            debug!(%at, "click ignored, game over");
            return Ok(None);
        }

        let phase = self.game.phase();
        match self.game.select(at) {
            Ok(transition) => {
                match transition.record.action {
                    Action::Move { .. } => self.notice = None,
                    Action::Break { .. } => {}
                }
                self.failed_moves = 0;
                Ok(Some(transition))
            }
            Err(err) => {
                debug!(side = %self.game.current(), %at, %phase, error = %err, "rejected");
                match phase {
                    Phase::Move if err.is_out_of_reach() => self.notice = Some(Notice::NotValid),
                    Phase::Move => {
                        // The first blocked neighbor in a turn only refreshes the status.
                        if self.failed_moves > 0 {
                            self.notice = Some(Notice::NotValid);
                        }
                        self.failed_moves += 1;
                    }
                    Phase::BreakIce => self.notice = Some(Notice::NotValid),
                }
                Err(err)
            }
        }
    }
}
