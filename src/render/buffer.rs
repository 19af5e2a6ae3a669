//! A 2D grid of cells with frame-to-frame diffing.
//!
//! [`CellBuffer`] is the storage behind both shipped screens. The terminal
//! screen keeps two of them (back and front) and sends only the cells that
//! [`diff`](CellBuffer::diff) reports.

use super::cell::{Cell, CellUpdate};
use crate::geometry::Size;

/// Row-major cell storage of a fixed size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBuffer {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl CellBuffer {
    /// Create a blank buffer of the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![Cell::blank(); width as usize * height as usize],
            width,
            height,
        }
    }

    /// Buffer width in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Dimensions as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    /// Resize the buffer. All cells are reset to blank.
    pub fn resize(&mut self, width: u16, height: u16) {
        *self = Self::new(width, height);
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// The cell at (x, y), or `None` if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Overwrite the cell at (x, y). Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Overwrite every cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// One row of cells, left to right.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Compare against the previous frame and return the cells that changed.
    ///
    /// When the sizes differ every cell of `self` is reported, since the
    /// previous frame no longer describes what is on the display.
    pub fn diff(&self, previous: &CellBuffer) -> Vec<CellUpdate> {
        let same_size = self.width == previous.width && self.height == previous.height;
        let mut updates = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let i = y as usize * self.width as usize + x as usize;
                let cell = self.cells[i];
                if !same_size || previous.cells[i] != cell {
                    updates.push(CellUpdate { x, y, cell });
                }
            }
        }
        updates
    }
}

// ===========================================================================
// Tests
// ===========================================================================
