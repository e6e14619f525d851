//! Screen layout: pixel points to board cells and buttons.
//!
//! Cells are `cell_size` pixels square with `margin` pixels before each
//! one, so cell `(row, col)` starts at
//! `(col * (cell_size + margin) + margin, row * (cell_size + margin) + margin)`.

use serde::{Deserialize, Serialize};

use super::event::InputEvent;
use crate::core::Coord;

/// A pixel position, `x` to the right and `y` down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given by two opposite corners in any order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub a: Point,
    pub b: Point,
}

impl Rect {
    #[must_use]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Strictly inside; points on the border do not count.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        let (x0, x1) = (self.a.x.min(self.b.x), self.a.x.max(self.b.x));
        let (y0, y1) = (self.a.y.min(self.b.y), self.a.y.max(self.b.y));
        x0 < p.x && p.x < x1 && y0 < p.y && p.y < y1
    }
}

/// Cell geometry and button placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub cell_size: i32,
    pub margin: i32,
    pub quit_button: Rect,
    pub reset_button: Rect,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            cell_size: 80,
            margin: 8,
            quit_button: Rect::new(Point::new(540, 550), Point::new(620, 600)),
            reset_button: Rect::new(Point::new(540, 640), Point::new(620, 690)),
        }
    }
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_cell_size(mut self, cell_size: i32) -> Self {
        self.cell_size = cell_size;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: i32) -> Self {
        self.margin = margin;
        self
    }

    fn pitch(&self) -> i32 {
        self.cell_size.saturating_add(self.margin).max(1)
    }

    /// Floor-divide a pixel offset into a cell index, clamped to `i32`.
    fn cell_index(&self, pixel: i32) -> i32 {
        let cell =
            (i64::from(pixel) - i64::from(self.margin)).div_euclid(i64::from(self.pitch()));
        i32::try_from(cell).unwrap_or(if cell < 0 { i32::MIN } else { i32::MAX })
    }

    /// The cell under a point, using floor division.
    ///
    /// Points above or left of the first margin give negative rows or
    /// columns; the result is not clamped to any board.
    ///
    /// ```
    /// use icebreaker::core::Coord;
    /// use icebreaker::input::{Layout, Point};
    ///
    /// let layout = Layout::default();
    /// assert_eq!(layout.cell_at(Point::new(100, 100)), Coord::new(1, 1));
    /// assert_eq!(layout.cell_at(Point::new(3, 3)), Coord::new(-1, -1));
    /// ```
    #[must_use]
    pub fn cell_at(&self, p: Point) -> Coord {
        Coord::new(self.cell_index(p.y), self.cell_index(p.x))
    }

    /// Screen rectangle of a cell. Pixel values saturate at the `i32`
    /// limits.
    #[must_use]
    pub fn cell_rect(&self, at: Coord) -> Rect {
        let x = at.col.saturating_mul(self.pitch()).saturating_add(self.margin);
        let y = at.row.saturating_mul(self.pitch()).saturating_add(self.margin);
        Rect::new(
            Point::new(x, y),
            Point::new(x.saturating_add(self.cell_size), y.saturating_add(self.cell_size)),
        )
    }

    /// Classify a click. Buttons take precedence over the grid.
    #[must_use]
    pub fn classify(&self, p: Point) -> InputEvent {
        if self.quit_button.contains(p) {
            InputEvent::Quit
        } else if self.reset_button.contains(p) {
            InputEvent::Reset
        } else {
            InputEvent::Select(self.cell_at(p))
        }
    }
}
