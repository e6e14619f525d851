//! Controller: input events in, status and notices out.
//!
//! Front ends own the event source and any drawing. They feed
//! `InputEvent`s to a `Controller` together with the `Session` keeping
//! score, and either read the returned `Update` or subscribe an
//! `Observer`.

mod driver;
mod status;

pub use driver::{Controller, Observer, Outcome, Update};
pub use status::{Notice, Status};
