//! Toggle widget: a button with a persisted on/off flag.

use crate::event::MouseButton;
use crate::screen::Screen;
use crate::ui::Ui;
use crate::widget::ToggleState;

use super::wrap::wrap;

impl<S: Screen> Ui<S> {
    /// A `w`×`h` box showing `label` that flips between off and on with each
    /// primary click, and returns the flag after this frame's click.
    ///
    /// While on, the border and text resolve under `toggle.active` instead of
    /// `toggle`.
    pub fn toggle(&mut self, w: i32, h: i32, label: &str) -> bool {
        let placed = self.place(label, w, h);
        let region = placed.region;

        let clicked = self.check_click(region) == Some(MouseButton::Left);
        if clicked {
            self.set_focus(placed.id.as_str());
        }
        let state = self.state_mut(&placed.id, ToggleState::default());
        if clicked {
            state.on = !state.on;
        }
        let on = state.on;

        let class = if on { "toggle.active" } else { "toggle" };
        self.draw_frame(region, "", &format!("{class}.border"));
        let inner = region.shrink(1);
        let lines = wrap(label, inner.width.max(0) as usize);
        let style = self.style(&format!("{class}.text"));
        self.draw_lines(inner, &lines, 0, style);
        on
    }
}
