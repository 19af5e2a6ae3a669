//! Text widget: a word-wrapped, vertically scrollable read-only view.

use crate::screen::Screen;
use crate::ui::Ui;
use crate::widget::TextState;

use super::frame::Arrows;
use super::wrap::wrap;

impl<S: Screen> Ui<S> {
    /// Draw `text` word-wrapped inside a `w`×`h` box labelled `label`.
    ///
    /// `▲` and `▼` appear on the right border while there is text above or
    /// below the view; clicking them or turning the wheel over the box
    /// scrolls. Scrolling stops at the top but not at the bottom.
    pub fn text(&mut self, w: i32, h: i32, text: &str, label: &str) {
        let placed = self.place(label, w, h);
        let region = placed.region;
        let inner = region.shrink(1);

        let lines = wrap(text, inner.width as usize);
        let arrows_for = |scroll: i32| Arrows {
            up: scroll > 0,
            down: scroll + inner.height < lines.len() as i32,
        };

        let mut state = *self.state_mut(&placed.id, TextState::default());
        let delta = self.vertical_scroll_input(region, arrows_for(state.scroll.offset.y));
        state.scroll.scroll_rows(delta);
        *self.state_mut(&placed.id, TextState::default()) = state;

        let scroll = state.scroll.offset.y;
        self.draw_frame(region, label, "text.border");
        let text_style = self.style("text.text");
        self.draw_lines(inner, &lines, scroll as usize, text_style);
        let scroll_style = self.style("text.scroll");
        self.draw_arrows(region, arrows_for(scroll), scroll_style);
    }
}
