//! Headless testing helpers: Pilot, text snapshots.
//!
//! Use the [`Pilot`] to drive a [`Ui`](crate::Ui) without a real terminal and
//! [`screen_to_string`] to capture what it drew as plain text.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::{buffer_to_string, mark_flag, screen_to_string};
