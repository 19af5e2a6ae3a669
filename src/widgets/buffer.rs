//! Buffer widget: a scrollable view over a caller-supplied grid of cells.

use thiserror::Error;

use crate::event::MouseButton;
use crate::geometry::{Offset, Region, Size};
use crate::render::Cell;
use crate::screen::Screen;
use crate::style::ResolvedStyle;
use crate::ui::Ui;
use crate::widget::{BufferState, ScrollState};

use super::frame::{Arrows, ARROW_LEFT, ARROW_RIGHT};

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// Error building a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A rectangular block of styled cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A blank grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::blank(); width * height],
        }
    }

    /// Build a grid from rows, which must all have the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, cells_in_row) in rows.into_iter().enumerate() {
            if cells_in_row.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: cells_in_row.len(),
                });
            }
            cells.extend(cells_in_row);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from lines of text in one style, padding short lines.
    pub fn from_text(text: &str, style: ResolvedStyle) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(width, lines.len());
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                grid.cells[y * width + x] = Cell::new(ch, style.fg, style.bg);
            }
            for x in line.chars().count()..width {
                grid.cells[y * width + x] = Cell::blank_on(style.bg);
            }
        }
        grid
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Dimensions as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    /// The cell at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    /// Overwrite the cell at (x, y). Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// The cell of the left glyph on the bottom border.
fn left_cell(region: Region) -> Region {
    Region::new(region.x + 1, region.bottom() - 1, 1, 1)
}

/// The cell of the right glyph on the bottom border.
fn right_cell(region: Region) -> Region {
    Region::new(region.right() - 2, region.bottom() - 1, 1, 1)
}

impl<S: Screen> Ui<S> {
    /// Draw `grid` inside a `w`×`h` box labelled `label`, scrollable on both
    /// axes.
    ///
    /// Scroll offsets are clamped so the grid never scrolls fully out of
    /// view. `▲`/`▼` on the right border and `◄`/`►` on the bottom border show
    /// which directions can scroll and scroll one step when clicked; the
    /// wheel scrolls vertically.
    ///
    /// Returns the button and grid coordinates of a click that landed on a
    /// grid cell this frame.
    pub fn buffer(
        &mut self,
        w: i32,
        h: i32,
        grid: &Grid,
        label: &str,
    ) -> Option<(MouseButton, Offset)> {
        let placed = self.place(label, w, h);
        let region = placed.region;
        let inner = region.shrink(1);
        let content = grid.size();
        let viewport = inner.size();

        let mut state = *self.state_mut(&placed.id, BufferState::default());
        state.scroll.clamp(content, viewport);
        let max = ScrollState::max_scroll(content, viewport);
        let arrows_for = |offset: Offset| Arrows {
            up: offset.y > 0,
            down: offset.y < max.y,
        };
        let horizontal_for = |offset: Offset| (offset.x > 0, offset.x < max.x);

        let mut dx = 0;
        let (left, right) = horizontal_for(state.scroll.offset);
        if region.width >= 4 && region.height >= 2 {
            if left && self.check_click(left_cell(region)) == Some(MouseButton::Left) {
                dx = -1;
            } else if right && self.check_click(right_cell(region)) == Some(MouseButton::Left) {
                dx = 1;
            }
        }
        let dy = self.vertical_scroll_input(region, arrows_for(state.scroll.offset));
        state.scroll.scroll_by(dx, dy, content, viewport);
        *self.state_mut(&placed.id, BufferState::default()) = state;

        let offset = state.scroll.offset;
        let click = self.get_click(inner).and_then(|(button, at)| {
            let at = at + offset;
            (!button.is_wheel() && content.contains(at.x, at.y)).then_some((button, at))
        });

        self.draw_frame(region, label, "buffer.border");
        for row in 0..viewport.height {
            for col in 0..viewport.width {
                let (gx, gy) = ((col + offset.x) as usize, (row + offset.y) as usize);
                if let Some(cell) = grid.get(gx, gy) {
                    let style = ResolvedStyle {
                        fg: cell.fg,
                        bg: cell.bg,
                    };
                    self.put(inner.x + col, inner.y + row, cell.ch, style);
                }
            }
        }

        let scroll_style = self.style("buffer.scroll");
        self.draw_arrows(region, arrows_for(offset), scroll_style);
        let (left, right) = horizontal_for(offset);
        if region.width >= 4 && region.height >= 2 {
            if left {
                let c = left_cell(region);
                self.put(c.x, c.y, ARROW_LEFT, scroll_style);
            }
            if right {
                let c = right_cell(region);
                self.put(c.x, c.y, ARROW_RIGHT, scroll_style);
            }
        }
        click
    }
}
