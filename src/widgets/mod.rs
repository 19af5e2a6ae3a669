//! Built-in widgets: Text, Buffer, Input, Button, Toggle, Gauge, List.
//!
//! Every widget is a method on [`Ui`](crate::Ui) that places its box, reacts
//! to the frame's input, and draws itself in one call.

pub mod buffer;
pub mod button;
pub mod frame;
pub mod gauge;
pub mod input;
pub mod list;
pub mod text;
pub mod toggle;
pub mod wrap;

pub use buffer::{Grid, GridError};
pub use input::{apply_key, index_at, layout_glyphs};
pub use wrap::wrap;
