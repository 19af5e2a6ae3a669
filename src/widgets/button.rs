//! Button widget: reports primary clicks and claims focus.

use crate::event::MouseButton;
use crate::screen::Screen;
use crate::ui::Ui;

use super::wrap::wrap;

impl<S: Screen> Ui<S> {
    /// A clickable `w`×`h` box showing `label` word-wrapped inside an
    /// unlabelled border.
    ///
    /// Returns `true` on the frame a primary click lands in the box. The
    /// click also focuses the button.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellui::testing::Pilot;
    ///
    /// let mut pilot = Pilot::new(10, 3);
    /// pilot.click(2, 1);
    /// assert!(pilot.frame(|ui| ui.button(10, 3, "Quit")));
    /// assert!(!pilot.frame(|ui| ui.button(10, 3, "Quit")));
    /// ```
    pub fn button(&mut self, w: i32, h: i32, label: &str) -> bool {
        let placed = self.place(label, w, h);
        let region = placed.region;

        let clicked = self.check_click(region) == Some(MouseButton::Left);
        if clicked {
            self.set_focus(placed.id.as_str());
        }

        self.draw_frame(region, "", "button.border");
        let inner = region.shrink(1);
        let lines = wrap(label, inner.width.max(0) as usize);
        let style = self.style("button.text");
        self.draw_lines(inner, &lines, 0, style);
        clicked
    }
}
