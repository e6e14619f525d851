//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::controller::{Controller, Update};
use crate::core::{Coord, GameConfig, Side};
use crate::input::{InputEvent, Point};
use crate::render::glyph;
use crate::rules::Game;
use crate::session::Session;

/// A controller plus the session keeping score across resets.
#[pyclass(name = "Icebreaker", unsendable)]
pub struct PyIcebreaker {
    controller: Controller,
    session: Session,
}

impl PyIcebreaker {
    fn apply(&mut self, event: InputEvent) -> bool {
        let update = self.controller.handle(event, &mut self.session);
        accepted(&update)
    }
}

fn accepted(update: &Update) -> bool {
    update.accepted.is_some()
}

#[pymethods]
impl PyIcebreaker {
    /// Create a game.
    ///
    /// # Arguments
    /// - rows, cols: board size (default 6x7)
    /// - first, second: start cells as (row, col); default opposite corners
    #[new]
    #[pyo3(signature = (rows = 6, cols = 7, first = None, second = None))]
    fn new(
        rows: i32,
        cols: i32,
        first: Option<(i32, i32)>,
        second: Option<(i32, i32)>,
    ) -> PyResult<Self> {
        let config = GameConfig::new()
            .with_size(rows, cols)
            .with_start(Side::First, first.map_or(Coord::new(0, 0), Coord::from))
            .with_start(
                Side::Second,
                second.map_or(
                    Coord::new(rows.saturating_sub(1), cols.saturating_sub(1)),
                    Coord::from,
                ),
            );
        let game = Game::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok(Self {
            controller: Controller::new(game),
            session: Session::new(),
        })
    }

    /// Pick a cell. Returns True if the move or break was accepted.
    fn select(&mut self, row: i32, col: i32) -> bool {
        self.apply(InputEvent::Select(Coord::new(row, col)))
    }

    /// Click at a pixel position using the default layout.
    fn click(&mut self, x: i32, y: i32) -> bool {
        let update = self.controller.click(Point::new(x, y), &mut self.session);
        accepted(&update)
    }

    /// Restart the round. Scores are kept.
    fn reset(&mut self) {
        self.apply(InputEvent::Reset);
    }

    /// The status line.
    fn status(&self) -> String {
        self.controller.status().to_string()
    }

    /// The title-line notice, or None.
    fn notice(&self) -> Option<String> {
        self.controller.notice().map(|n| n.to_string())
    }

    /// Winner index (0 or 1) if the game is over.
    fn winner(&self) -> Option<usize> {
        self.controller.game().result().map(|r| r.winner.index())
    }

    /// Wins so far as (first, second).
    fn scores(&self) -> (u32, u32) {
        (
            self.session.wins(Side::First),
            self.session.wins(Side::Second),
        )
    }

    /// Board rows as strings of `.`, `~`, `A`, `B`.
    fn board(&self) -> Vec<String> {
        let board = self.controller.game().board();
        (0..board.rows())
            .map(|row| {
                (0..board.cols())
                    .map(|col| glyph(board.cell(Coord::new(row, col)).unwrap_or_default()))
                    .collect()
            })
            .collect()
    }

    fn __repr__(&self) -> String {
        format!("Icebreaker({:?})", self.status())
    }
}
