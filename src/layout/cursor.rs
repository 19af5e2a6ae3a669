//! Per-frame layout cursor with auto-fill boxes, same-line placement, and columns.
//!
//! Widgets are placed top to bottom. Each [`place_box`](LayoutCursor::place_box)
//! returns the rectangle for one widget and moves the cursor to the left edge of
//! the active column, just below the tallest box on the current row.
//! [`same_line`](LayoutCursor::same_line) moves the cursor back up, to the right
//! of the box just placed.
//!
//! Columns narrow the horizontal span widgets may fill:
//!
//! ```text
//! start_columns(20)   next_column(0)       finish_columns()
//! ┌────────┐          ┌────────┬──────┐     ┌────────┬──────┐
//! │ col 1  │          │ col 1  │col 2 │     │ col 1  │col 2 │
//! └────────┘          │        └──────┘     │        │      │
//!                     └────────┘            ├────────┴──────┤ <- y
//! ```

use crate::geometry::{Offset, Region, Size};

/// Horizontal span of the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Column {
    left: i32,
    right: i32,
}

/// Saved state for one `start_columns` .. `finish_columns` group.
#[derive(Debug, Clone, Copy)]
struct ColumnFrame {
    parent: Column,
    top: i32,
    max_bottom: i32,
    saved_next_row: i32,
}

/// Tracks where the next widget goes.
#[derive(Debug, Clone)]
pub struct LayoutCursor {
    term: Size,
    column: Column,
    x: i32,
    y: i32,
    /// Lowest row reached on the current visual row; `y` never moves above it.
    next_row: i32,
    same_line_anchor: Offset,
    last_box: Region,
    stack: Vec<ColumnFrame>,
}

impl LayoutCursor {
    /// Create a cursor for a surface of the given size.
    pub fn new(term: Size) -> Self {
        Self {
            term,
            column: Column {
                left: 0,
                right: term.width,
            },
            x: 0,
            y: 0,
            next_row: 0,
            same_line_anchor: Offset::ZERO,
            last_box: Region::EMPTY,
            stack: Vec::new(),
        }
    }

    /// Return to the top-left corner of a surface of size `term`.
    ///
    /// Returns the number of column groups that were still open, which are
    /// discarded.
    pub fn reset(&mut self, term: Size) -> usize {
        let open = self.stack.len();
        *self = Self::new(term);
        open
    }

    /// Resolve and place a `w`×`h` box at the cursor.
    ///
    /// `w <= 0` means "to the right edge of the column, plus `w`"; `h <= 0`
    /// means "to the bottom of the surface, plus `h`". Both clamp to zero.
    pub fn place_box(&mut self, w: i32, h: i32) -> Region {
        let w = if w <= 0 { self.column.right - self.x + w } else { w };
        let h = if h <= 0 { self.term.height - self.y + h } else { h };
        let region = Region::new(self.x, self.y, w.max(0), h.max(0));

        self.last_box = region;
        self.same_line_anchor = Offset::new(region.right(), region.y);
        self.x = self.column.left;
        self.y = region.bottom().max(self.next_row);
        region
    }

    /// Place the next box to the right of the last one, on the same top row.
    pub fn same_line(&mut self) {
        self.next_row = self.next_row.max(self.y);
        self.x = self.same_line_anchor.x;
        self.y = self.same_line_anchor.y;
    }

    /// Begin a group of side-by-side columns; the first one is `w` wide.
    ///
    /// `w <= 0` fills the remaining width of the active column, plus `w`.
    pub fn start_columns(&mut self, w: i32) {
        self.stack.push(ColumnFrame {
            parent: self.column,
            top: self.y,
            max_bottom: self.y,
            saved_next_row: self.next_row,
        });
        let left = self.x;
        let width = if w <= 0 { self.column.right - left + w } else { w };
        self.column = Column {
            left,
            right: left + width.max(0),
        };
        self.next_row = self.y;
    }

    /// Move to the next column of the current group; it is `w` wide.
    ///
    /// `w <= 0` fills what is left of the parent column, plus `w`.
    ///
    /// # Panics
    ///
    /// Panics if no column group is open.
    pub fn next_column(&mut self, w: i32) {
        let bottom = self.y.max(self.next_row);
        let Some(frame) = self.stack.last_mut() else {
            panic!("next_column called without start_columns");
        };
        frame.max_bottom = frame.max_bottom.max(bottom);

        let left = self.column.right;
        let width = if w <= 0 { frame.parent.right - left + w } else { w };
        let top = frame.top;
        self.column = Column {
            left,
            right: left + width.max(0),
        };
        self.x = left;
        self.y = top;
        self.next_row = top;
    }

    /// Close the current column group.
    ///
    /// The cursor lands at the parent column's left edge, below the tallest
    /// column of the group.
    ///
    /// # Panics
    ///
    /// Panics if no column group is open.
    pub fn finish_columns(&mut self) {
        let Some(frame) = self.stack.pop() else {
            panic!("finish_columns called without start_columns");
        };
        let bottom = frame.max_bottom.max(self.y).max(self.next_row);
        self.column = frame.parent;
        self.x = self.column.left;
        self.y = bottom.max(frame.saved_next_row);
        self.next_row = frame.saved_next_row;
    }

    /// The last box placed this frame.
    pub fn last_box(&self) -> Region {
        self.last_box
    }

    /// Where the next box goes.
    pub fn position(&self) -> Offset {
        Offset::new(self.x, self.y)
    }

    /// Surface size captured at the last reset.
    pub fn term_size(&self) -> Size {
        self.term
    }

    /// Left and right edge of the active column.
    pub fn column_span(&self) -> (i32, i32) {
        (self.column.left, self.column.right)
    }

    /// Number of open column groups.
    pub fn column_depth(&self) -> usize {
        self.stack.len()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
