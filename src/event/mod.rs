//! Input: event types, crossterm conversion, per-frame routing.

pub mod input;
pub mod router;

pub use input::{InputEvent, Key, MouseButton};
pub use router::{InputRouter, InputSnapshot, MouseInput};
