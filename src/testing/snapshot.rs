//! Text rendering of screens for assertions and snapshots.

use crate::render::{CellBuffer, MemoryScreen};
use crate::style::Attribute;

/// Convert a cell buffer to plain text.
///
/// Each row becomes one line with trailing spaces trimmed. Lines are joined
/// with `'\n'` and the last line has no trailing newline.
pub fn buffer_to_string(buffer: &CellBuffer) -> String {
    (0..buffer.height())
        .map(|y| {
            let row: String = buffer.row(y).iter().map(|c| c.ch).collect();
            row.trim_end().to_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The frame being drawn on `screen`, as text.
pub fn screen_to_string(screen: &MemoryScreen) -> String {
    buffer_to_string(screen.buffer())
}

/// One row of `screen` as text, with each cell whose foreground contains
/// `flag` wrapped in `[` `]`.
///
/// Useful for checking where a cursor or highlight landed.
pub fn mark_flag(screen: &MemoryScreen, y: u16, flag: Attribute) -> String {
    let mut out = String::new();
    for cell in screen.buffer().row(y) {
        if cell.fg.contains(flag) {
            out.push('[');
            out.push(cell.ch);
            out.push(']');
        } else {
            out.push(cell.ch);
        }
    }
    out.trim_end().to_owned()
}
