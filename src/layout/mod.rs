//! Layout: the per-frame cursor that positions widgets.

pub mod cursor;

pub use cursor::LayoutCursor;
