//! Plain-text board for terminal front ends.
//!
//! ```text
//!     0 1 2 3 4 5 6
//!  0  A . . . . . .
//!  1  . . ~ . . . .
//! ```
//!
//! `A` and `B` are the First and Second pieces, `~` is broken ice.

use std::fmt::Write;

use crate::board::{Board, CellState};
use crate::core::{Coord, Side};

/// Glyph for one cell.
#[must_use]
pub const fn glyph(cell: CellState) -> char {
    match cell {
        CellState::Intact => '.',
        CellState::Broken => '~',
        CellState::Occupied(Side::First) => 'A',
        CellState::Occupied(Side::Second) => 'B',
    }
}

/// Render the board with row and column indices.
#[must_use]
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("   ");
    for col in 0..board.cols() {
        let _ = write!(out, " {}", col);
    }
    out.push('\n');

    for row in 0..board.rows() {
        let _ = write!(out, "{:>2} ", row);
        for col in 0..board.cols() {
            let cell = board.cell(Coord::new(row, col)).unwrap_or_default();
            out.push(' ');
            out.push(glyph(cell));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Game;

    #[test]
    fn test_render_opening() {
        let text = render_board(Game::standard().board());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "    0 1 2 3 4 5 6");
        assert_eq!(lines[1], " 0  A . . . . . .");
        assert_eq!(lines[6], " 5  . . . . . . B");
    }

    #[test]
    fn test_render_broken() {
        let mut game = Game::standard();
        game.select(Coord::new(1, 1)).unwrap();
        game.select(Coord::new(0, 0)).unwrap();
        let text = render_board(game.board());
        assert_eq!(text.lines().nth(1), Some(" 0  ~ . . . . . ."));
        assert_eq!(text.lines().nth(2), Some(" 1  . A . . . . ."));
    }
}
