//! Input side of the controller boundary.
//!
//! Front ends turn whatever they receive (mouse clicks, typed
//! coordinates) into `InputEvent`s. `Layout` does the pixel mapping for
//! pointer-driven front ends.

mod event;
mod layout;

pub use event::InputEvent;
pub use layout::{Layout, Point, Rect};
