//! A single styled terminal cell.

use crate::style::Attribute;

/// One character with its foreground and background attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub fg: Attribute,
    pub bg: Attribute,
}

impl Cell {
    /// Create a new cell.
    pub const fn new(ch: char, fg: Attribute, bg: Attribute) -> Self {
        Self { ch, fg, bg }
    }

    /// A space with unset attributes.
    pub const fn blank() -> Self {
        Self::new(' ', Attribute::UNSET, Attribute::UNSET)
    }

    /// A space drawn on the given background.
    pub const fn blank_on(bg: Attribute) -> Self {
        Self::new(' ', Attribute::UNSET, bg)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

/// A cell that changed between two frames, with its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellUpdate {
    pub x: u16,
    pub y: u16,
    pub cell: Cell,
}
