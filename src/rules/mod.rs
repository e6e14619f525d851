//! Turn rules for Icebreaker.
//!
//! `Game` is the only place board and pieces are mutated during play.
//! Every transition either succeeds and returns a `Transition`, or is
//! rejected with a `RuleError` and leaves the game untouched.

pub mod engine;
pub mod error;

pub use engine::{Game, GameResult, Transition};
pub use error::RuleError;
