//! Headless screen backed by memory.
//!
//! [`MemoryScreen`] records every cell write so frames can be inspected without a
//! terminal. The testing [`Pilot`](crate::testing::Pilot) drives a `Ui` over one.

use std::io;

use super::buffer::CellBuffer;
use super::cell::Cell;
use crate::geometry::Size;
use crate::screen::Screen;
use crate::style::Attribute;

/// An in-memory [`Screen`].
#[derive(Debug, Clone)]
pub struct MemoryScreen {
    back: CellBuffer,
    front: CellBuffer,
    presents: usize,
}

impl MemoryScreen {
    /// Create a blank screen of the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            back: CellBuffer::new(width, height),
            front: CellBuffer::new(width, height),
            presents: 0,
        }
    }

    /// Change the reported size. Both buffers are reset.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.back.resize(width, height);
        self.front.resize(width, height);
    }

    /// The cell at (x, y) in the frame being drawn.
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.back.get(x, y)
    }

    /// The frame being drawn.
    pub fn buffer(&self) -> &CellBuffer {
        &self.back
    }

    /// The last presented frame.
    pub fn presented(&self) -> &CellBuffer {
        &self.front
    }

    /// How many times [`present`](Screen::present) has been called.
    pub fn presents(&self) -> usize {
        self.presents
    }

    /// The characters of row `y` of the frame being drawn.
    pub fn row_text(&self, y: u16) -> String {
        self.back.row(y).iter().map(|c| c.ch).collect()
    }
}

impl Screen for MemoryScreen {
    fn set_cell(&mut self, x: i32, y: i32, ch: char, fg: Attribute, bg: Attribute) {
        self.back.set(x, y, Cell::new(ch, fg, bg));
    }

    fn size(&self) -> Size {
        self.back.size()
    }

    fn clear(&mut self, bg: Attribute) {
        self.back.fill(Cell::blank_on(bg));
    }

    fn present(&mut self) -> io::Result<()> {
        self.front = self.back.clone();
        self.presents += 1;
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_land_in_back_buffer() {
        let mut s = MemoryScreen::new(5, 2);
        s.set_cell(0, 0, 'h', Attribute::UNSET, Attribute::UNSET);
        s.set_cell(1, 0, 'i', Attribute::UNSET, Attribute::UNSET);
        assert_eq!(s.row_text(0), "hi   ");
        assert_eq!(s.presented().get(0, 0), Some(&Cell::blank()));
    }

    #[test]
    fn present_copies_to_front() {
        let mut s = MemoryScreen::new(2, 1);
        s.set_cell(1, 0, 'k', Attribute::BOLD, Attribute::UNSET);
        s.present().unwrap();
        assert_eq!(s.presents(), 1);
        assert_eq!(s.presented().get(1, 0).map(|c| c.ch), Some('k'));
    }

    #[test]
    fn clear_uses_background() {
        let mut s = MemoryScreen::new(2, 2);
        s.set_cell(0, 0, 'a', Attribute::UNSET, Attribute::UNSET);
        s.clear(Attribute::CYAN);
        assert_eq!(s.cell(0, 0), Some(&Cell::blank_on(Attribute::CYAN)));
    }

    #[test]
    fn resize_changes_size() {
        let mut s = MemoryScreen::new(2, 2);
        s.resize(6, 4);
        assert_eq!(Screen::size(&s), Size::new(6, 4));
        assert_eq!(s.buffer().size(), Size::new(6, 4));
    }
}
