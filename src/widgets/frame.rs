//! Shared drawing routines: box borders, labels, scroll affordances.

use crate::event::MouseButton;
use crate::geometry::Region;
use crate::screen::Screen;
use crate::style::ResolvedStyle;
use crate::ui::Ui;

const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';
const LABEL_OPEN: char = '◄';
const LABEL_CLOSE: char = '►';

pub(crate) const ARROW_UP: char = '▲';
pub(crate) const ARROW_DOWN: char = '▼';
pub(crate) const ARROW_LEFT: char = '◄';
pub(crate) const ARROW_RIGHT: char = '►';

/// Which scroll glyphs a vertical scroller shows this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Arrows {
    pub up: bool,
    pub down: bool,
}

impl Arrows {
    pub(crate) const BOTH: Arrows = Arrows { up: true, down: true };
}

/// The cell of the up glyph on the right border.
fn up_cell(region: Region) -> Region {
    Region::new(region.right() - 1, region.y + 1, 1, 1)
}

/// The cell of the down glyph on the right border.
fn down_cell(region: Region) -> Region {
    Region::new(region.right() - 1, region.bottom() - 2, 1, 1)
}

impl<S: Screen> Ui<S> {
    /// Draw a box border around `region` in style `class`, with an optional
    /// `◄label►` on the top edge styled as `<class>.label`.
    ///
    /// Boxes narrower or shorter than 2 cells have no border. Labels need at
    /// least 4 columns and are truncated to `width - 4` characters.
    pub fn draw_frame(&mut self, region: Region, label: &str, class: &str) {
        if region.width < 2 || region.height < 2 {
            return;
        }
        let s = self.style(class);
        let (left, top) = (region.x, region.y);
        let (right, bottom) = (region.right() - 1, region.bottom() - 1);

        for x in left + 1..right {
            self.put(x, top, HORIZONTAL, s);
            self.put(x, bottom, HORIZONTAL, s);
        }
        for y in top + 1..bottom {
            self.put(left, y, VERTICAL, s);
            self.put(right, y, VERTICAL, s);
        }
        self.put(left, top, TOP_LEFT, s);
        self.put(right, top, TOP_RIGHT, s);
        self.put(left, bottom, BOTTOM_LEFT, s);
        self.put(right, bottom, BOTTOM_RIGHT, s);

        if !label.is_empty() && region.width >= 4 {
            let label_style = self.style(&format!("{class}.label"));
            self.put(left + 1, top, LABEL_OPEN, s);
            let n = self.print(left + 2, top, region.width - 4, label, label_style);
            self.put(left + 2 + n, top, LABEL_CLOSE, s);
        }
    }

    /// Draw the lines of already wrapped or truncated text into `inner`,
    /// starting at line `first`.
    pub(crate) fn draw_lines<T: AsRef<str>>(
        &mut self,
        inner: Region,
        lines: &[T],
        first: usize,
        style: ResolvedStyle,
    ) {
        if inner.is_empty() {
            return;
        }
        let rows = lines.iter().skip(first).take(inner.height as usize);
        for (row, line) in (0..).zip(rows) {
            self.print(inner.x, inner.y + row, inner.width, line.as_ref(), style);
        }
    }

    /// Draw the up and down glyphs on the right border of `region`.
    pub(crate) fn draw_arrows(&mut self, region: Region, arrows: Arrows, style: ResolvedStyle) {
        if region.height < 3 || region.width < 1 {
            return;
        }
        if arrows.up {
            let c = up_cell(region);
            self.put(c.x, c.y, ARROW_UP, style);
        }
        if arrows.down {
            let c = down_cell(region);
            self.put(c.x, c.y, ARROW_DOWN, style);
        }
    }

    /// Rows to scroll this frame: -1 or +1 for a primary click on a shown
    /// glyph, the wheel step for a wheel tick anywhere in `region`, else 0.
    pub(crate) fn vertical_scroll_input(&self, region: Region, arrows: Arrows) -> i32 {
        if region.height < 3 || region.width < 1 {
            return 0;
        }
        if arrows.up && self.check_click(up_cell(region)) == Some(MouseButton::Left) {
            return -1;
        }
        if arrows.down && self.check_click(down_cell(region)) == Some(MouseButton::Left) {
            return 1;
        }
        match self.check_click(region) {
            Some(button) => self.wheel_delta(button),
            None => 0,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MemoryScreen;
    use crate::style::{Attribute, Style};
    use crate::testing::screen_to_string;
    use crate::ui::UiConfig;

    fn ui(w: u16, h: u16) -> Ui<MemoryScreen> {
        let mut ui = Ui::new(MemoryScreen::new(w, h));
        ui.start();
        ui
    }

    #[test]
    fn frame_with_label() {
        let mut ui = ui(10, 3);
        ui.draw_frame(Region::new(0, 0, 10, 3), "abc", "text.border");
        insta::assert_snapshot!(ui.screen().row_text(0), @"┌◄abc►───┐");
        assert_eq!(
            screen_to_string(ui.screen()),
            "┌◄abc►───┐\n│        │\n└────────┘"
        );
    }

    #[test]
    fn long_label_is_truncated() {
        let mut ui = ui(8, 2);
        ui.draw_frame(Region::new(0, 0, 8, 2), "abcdefgh", "x");
        assert_eq!(ui.screen().row_text(0), "┌◄abcd►┐");
    }

    #[test]
    fn narrow_box_has_no_label() {
        let mut ui = ui(3, 2);
        ui.draw_frame(Region::new(0, 0, 3, 2), "abc", "x");
        assert_eq!(ui.screen().row_text(0), "┌─┐");
    }

    #[test]
    fn degenerate_box_draws_nothing() {
        let mut ui = ui(4, 4);
        ui.draw_frame(Region::new(0, 0, 1, 4), "a", "x");
        ui.draw_frame(Region::new(0, 0, 4, 1), "a", "x");
        assert_eq!(screen_to_string(ui.screen()), "\n\n\n");
    }

    #[test]
    fn label_uses_label_class() {
        let config = UiConfig::new()
            .with_style("box.label", Style::new().fg(Attribute::YELLOW))
            .with_style("box", Style::new().fg(Attribute::BLUE));
        let mut ui = Ui::with_config(MemoryScreen::new(8, 2), config);
        ui.start();
        ui.draw_frame(Region::new(0, 0, 8, 2), "ab", "box");
        let fg = |x| ui.screen().cell(x, 0).map(|c| c.fg);
        assert_eq!(fg(0), Some(Attribute::BLUE));
        assert_eq!(fg(1), Some(Attribute::BLUE));
        assert_eq!(fg(2), Some(Attribute::YELLOW));
        assert_eq!(fg(4), Some(Attribute::BLUE));
    }

    #[test]
    fn arrows_sit_on_right_border() {
        let mut ui = ui(4, 4);
        let region = Region::new(0, 0, 4, 4);
        ui.draw_arrows(region, Arrows::BOTH, ResolvedStyle::default());
        assert_eq!(ui.screen().cell(3, 1).map(|c| c.ch), Some(ARROW_UP));
        assert_eq!(ui.screen().cell(3, 2).map(|c| c.ch), Some(ARROW_DOWN));
    }

    #[test]
    fn scroll_input_from_glyphs_and_wheel() {
        let region = Region::new(0, 0, 5, 5);
        let mut ui = Ui::new(MemoryScreen::new(5, 5));

        ui.mouse(4, 1, MouseButton::Left);
        ui.start();
        assert_eq!(ui.vertical_scroll_input(region, Arrows::BOTH), -1);
        let hidden = Arrows { up: false, down: true };
        assert_eq!(ui.vertical_scroll_input(region, hidden), 0);

        ui.mouse(4, 3, MouseButton::Release);
        ui.mouse(4, 3, MouseButton::Left);
        ui.start();
        assert_eq!(ui.vertical_scroll_input(region, Arrows::BOTH), 1);

        ui.mouse(2, 2, MouseButton::WheelUp);
        ui.start();
        assert_eq!(ui.vertical_scroll_input(region, Arrows::BOTH), -1);
    }
}
