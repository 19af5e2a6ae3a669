//! The drawing surface the engine renders into.
//!
//! [`Screen`] is the whole contract between the widget engine and a display:
//! write one styled cell, report the size, clear, and present. The engine never
//! emits escape sequences itself. [`MemoryScreen`](crate::render::MemoryScreen)
//! and [`TerminalScreen`](crate::render::TerminalScreen) are the two
//! implementations shipped with the crate.

use std::io;

use crate::geometry::Size;
use crate::style::Attribute;

/// A character-cell display.
///
/// The engine clips every write to [`size`](Screen::size) before calling
/// [`set_cell`](Screen::set_cell), so implementations may assume in-bounds,
/// non-negative coordinates.
pub trait Screen {
    /// Write one character with the given attributes.
    fn set_cell(&mut self, x: i32, y: i32, ch: char, fg: Attribute, bg: Attribute);

    /// Current surface size in cells.
    fn size(&self) -> Size;

    /// Blank every cell using `bg` as the background.
    fn clear(&mut self, bg: Attribute);

    /// Make the frame built since the last clear visible.
    fn present(&mut self) -> io::Result<()>;
}

impl<S: Screen + ?Sized> Screen for &mut S {
    fn set_cell(&mut self, x: i32, y: i32, ch: char, fg: Attribute, bg: Attribute) {
        (**self).set_cell(x, y, ch, fg, bg);
    }

    fn size(&self) -> Size {
        (**self).size()
    }

    fn clear(&mut self, bg: Attribute) {
        (**self).clear(bg);
    }

    fn present(&mut self) -> io::Result<()> {
        (**self).present()
    }
}

impl<S: Screen + ?Sized> Screen for Box<S> {
    fn set_cell(&mut self, x: i32, y: i32, ch: char, fg: Attribute, bg: Attribute) {
        (**self).set_cell(x, y, ch, fg, bg);
    }

    fn size(&self) -> Size {
        (**self).size()
    }

    fn clear(&mut self, bg: Attribute) {
        (**self).clear(bg);
    }

    fn present(&mut self) -> io::Result<()> {
        (**self).present()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
