//! Python bindings for the Icebreaker controller.
//!
//! # Quick Start
//!
//! ```python
//! import icebreaker
//!
//! game = icebreaker.Icebreaker()
//! game.select(1, 1)      # First moves to (1, 1)
//! game.select(2, 2)      # ... and breaks (2, 2)
//! print(game.status())   # "PLAYER 1: [6,5]\n\nMOVE"
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// icebreaker: two-player Icebreaker rules with score keeping.
#[pymodule]
fn icebreaker(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyIcebreaker>()?;
    Ok(())
}
