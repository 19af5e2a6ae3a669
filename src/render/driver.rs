//! Crossterm terminal output backend.
//!
//! [`TerminalScreen`] wraps a writer (stdout by default) and implements
//! [`Screen`] with a back and a front [`CellBuffer`]. Widgets draw into the
//! back buffer; [`present`](Screen::present) sends only the cells that changed
//! since the previous frame and then swaps.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{
        Attribute as TermAttribute, Color as TermColor, Print, ResetColor, SetAttribute,
        SetBackgroundColor, SetForegroundColor,
    },
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::buffer::CellBuffer;
use super::cell::{Cell, CellUpdate};
use crate::geometry::Size;
use crate::screen::Screen;
use crate::style::{Attribute, Color};

// ---------------------------------------------------------------------------
// TerminalScreen
// ---------------------------------------------------------------------------

/// A [`Screen`] drawing to a real terminal through crossterm.
///
/// Creating one does NOT enter the alternate screen; call
/// [`enter`](TerminalScreen::enter) explicitly and [`leave`](TerminalScreen::leave)
/// before exiting.
pub struct TerminalScreen<W: Write = BufWriter<Stdout>> {
    writer: W,
    back: CellBuffer,
    front: CellBuffer,
    /// Set after a resize or clear of the physical display; the next present
    /// repaints every cell.
    full_redraw: bool,
}

impl TerminalScreen<BufWriter<Stdout>> {
    /// Create a screen over stdout, sized to the current terminal.
    pub fn stdout() -> io::Result<Self> {
        let (w, h) = terminal::size()?;
        Ok(Self::with_writer(BufWriter::new(io::stdout()), w, h))
    }
}

impl<W: Write> TerminalScreen<W> {
    /// Create a screen over an arbitrary writer with a fixed initial size.
    pub fn with_writer(writer: W, width: u16, height: u16) -> Self {
        Self {
            writer,
            back: CellBuffer::new(width, height),
            front: CellBuffer::new(width, height),
            full_redraw: true,
        }
    }

    /// Enter the alternate screen, enable raw mode and mouse capture, hide the cursor.
    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.writer,
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        self.full_redraw = true;
        Ok(())
    }

    /// Undo everything [`enter`](TerminalScreen::enter) did.
    pub fn leave(&mut self) -> io::Result<()> {
        execute!(
            self.writer,
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    /// Resize both buffers, forcing a full repaint on the next present.
    ///
    /// Call this when crossterm reports `Event::Resize`.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.back.width() == width && self.back.height() == height {
            return;
        }
        self.back.resize(width, height);
        self.front.resize(width, height);
        self.full_redraw = true;
    }

    /// The underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Queue the given updates. Call `flush` afterward to send them.
    fn apply_updates(&mut self, updates: &[CellUpdate]) -> io::Result<()> {
        for update in updates {
            queue!(self.writer, cursor::MoveTo(update.x, update.y))?;
            self.apply_cell_style(&update.cell)?;
            queue!(self.writer, Print(update.cell.ch), ResetColor)?;
            if has_flags(&update.cell) {
                queue!(self.writer, SetAttribute(TermAttribute::Reset))?;
            }
        }
        Ok(())
    }

    fn apply_cell_style(&mut self, cell: &Cell) -> io::Result<()> {
        if let Some(fg) = term_color(cell.fg) {
            queue!(self.writer, SetForegroundColor(fg))?;
        }
        if let Some(bg) = term_color(cell.bg) {
            queue!(self.writer, SetBackgroundColor(bg))?;
        }
        let flags = cell.fg.flags() | cell.bg.flags();
        if flags.contains(Attribute::BOLD) {
            queue!(self.writer, SetAttribute(TermAttribute::Bold))?;
        }
        if flags.contains(Attribute::UNDERLINE) {
            queue!(self.writer, SetAttribute(TermAttribute::Underlined))?;
        }
        if flags.contains(Attribute::REVERSE) {
            queue!(self.writer, SetAttribute(TermAttribute::Reverse))?;
        }
        Ok(())
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
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
        let updates = if self.full_redraw {
            self.back.diff(&CellBuffer::new(0, 0))
        } else {
            self.back.diff(&self.front)
        };
        self.apply_updates(&updates)?;
        self.writer.flush()?;
        self.front.clone_from(&self.back);
        self.full_redraw = false;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Attribute mapping
// ---------------------------------------------------------------------------

/// Map the color part of an attribute to a crossterm color.
///
/// Unset and `Default` leave the terminal's own color in place.
pub fn term_color(attr: Attribute) -> Option<TermColor> {
    match attr.color() {
        Color::Default => None,
        Color::Black => Some(TermColor::Black),
        Color::Red => Some(TermColor::DarkRed),
        Color::Green => Some(TermColor::DarkGreen),
        Color::Yellow => Some(TermColor::DarkYellow),
        Color::Blue => Some(TermColor::DarkBlue),
        Color::Magenta => Some(TermColor::DarkMagenta),
        Color::Cyan => Some(TermColor::DarkCyan),
        Color::White => Some(TermColor::Grey),
    }
}

fn has_flags(cell: &Cell) -> bool {
    !(cell.fg.flags() | cell.bg.flags()).is_unset()
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(w: u16, h: u16) -> TerminalScreen<Vec<u8>> {
        TerminalScreen::with_writer(Vec::new(), w, h)
    }

    #[test]
    fn colors_map_to_ansi_palette() {
        assert_eq!(term_color(Attribute::UNSET), None);
        assert_eq!(term_color(Attribute::RED), Some(TermColor::DarkRed));
        assert_eq!(term_color(Attribute::WHITE | Attribute::BOLD), Some(TermColor::Grey));
        assert_eq!(term_color(Attribute::BOLD), None);
    }

    #[test]
    fn first_present_paints_every_cell() {
        let mut s = screen(3, 2);
        s.present().unwrap();
        let out = String::from_utf8_lossy(s.writer()).into_owned();
        assert_eq!(out.matches(' ').count(), 6);
    }

    #[test]
    fn second_present_sends_only_changes() {
        let mut s = screen(4, 2);
        s.present().unwrap();
        let before = s.writer().len();

        s.set_cell(2, 1, 'z', Attribute::GREEN, Attribute::UNSET);
        s.present().unwrap();
        let sent = String::from_utf8_lossy(&s.writer()[before..]).into_owned();
        assert!(sent.contains('z'));
        assert!(!sent.contains(' '));
    }

    #[test]
    fn unchanged_frame_sends_nothing() {
        let mut s = screen(2, 2);
        s.present().unwrap();
        let before = s.writer().len();
        s.present().unwrap();
        assert_eq!(s.writer().len(), before);
    }

    #[test]
    fn resize_forces_full_redraw() {
        let mut s = screen(2, 1);
        s.present().unwrap();
        s.resize(3, 1);
        assert_eq!(s.size(), Size::new(3, 1));
        let before = s.writer().len();
        s.present().unwrap();
        let sent = String::from_utf8_lossy(&s.writer()[before..]).into_owned();
        assert_eq!(sent.matches(' ').count(), 3);
    }
}
