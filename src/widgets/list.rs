//! List widgets: a read-only scrolling list and a multi-select variant.
//!
//! Items are truncated at the interior width, one per row. Both variants show
//! `▲` and `▼` on the right border at all times; clicking them or turning the
//! wheel over the box scrolls, clamped to `0..=max(0, items - rows)`.

use crate::event::MouseButton;
use crate::geometry::{Region, Size};
use crate::screen::Screen;
use crate::style::Attribute;
use crate::ui::Ui;
use crate::widget::{ListState, ScrollState, SelectionState};

use super::frame::Arrows;

impl<S: Screen> Ui<S> {
    /// Scroll `scroll` by this frame's arrow click or wheel tick over a list
    /// of `items` rows in `region`, clamping before and after.
    fn scroll_list(&self, region: Region, items: usize, scroll: &mut ScrollState) {
        let content = Size::new(0, items as i32);
        let viewport = region.shrink(1).size();
        scroll.clamp(content, viewport);
        let delta = self.vertical_scroll_input(region, Arrows::BOTH);
        scroll.scroll_by(0, delta, content, viewport);
    }

    /// Draw `items` inside a `w`×`h` box labelled `label`.
    pub fn list<T: AsRef<str>>(&mut self, w: i32, h: i32, label: &str, items: &[T]) {
        let placed = self.place(label, w, h);
        let region = placed.region;

        let mut state = *self.state_mut(&placed.id, ListState::default());
        self.scroll_list(region, items.len(), &mut state.scroll);
        *self.state_mut(&placed.id, ListState::default()) = state;

        self.draw_frame(region, label, "list.border");
        let style = self.style("list.items");
        self.draw_lines(region.shrink(1), items, state.scroll.offset.y as usize, style);
        let scroll_style = self.style("list.scroll");
        self.draw_arrows(region, Arrows::BOTH, scroll_style);
    }

    /// Draw `items` inside a `w`×`h` box labelled `label`, where a primary
    /// click on a row adds it to or removes it from the selection.
    ///
    /// A primary click anywhere in the box focuses the list. Selected rows
    /// are drawn in reverse video across the full interior width. Returns the
    /// selected item indices in ascending order; indices past the end of
    /// `items` are dropped from the selection.
    pub fn selectable_list<T: AsRef<str>>(
        &mut self,
        w: i32,
        h: i32,
        label: &str,
        items: &[T],
    ) -> Vec<usize> {
        let placed = self.place(label, w, h);
        let region = placed.region;
        let inner = region.shrink(1);

        if self.check_click(region) == Some(MouseButton::Left) {
            self.set_focus(placed.id.as_str());
        }

        let mut state = self
            .state_mut(&placed.id, SelectionState::default())
            .clone();
        self.scroll_list(region, items.len(), &mut state.scroll);
        state.selected.retain(|&row| row < items.len());

        let first = state.scroll.offset.y.max(0) as usize;
        let rows = (inner.height.max(0) as usize).min(items.len().saturating_sub(first));
        for row in 0..rows {
            let hit = Region::new(inner.x, inner.y + row as i32, inner.width, 1);
            if self.check_click(hit) == Some(MouseButton::Left) {
                state.toggle(first + row);
            }
        }
        let selected: Vec<usize> = state.selected.iter().copied().collect();
        *self.state_mut(&placed.id, SelectionState::default()) = state;

        self.draw_frame(region, label, "list.border");
        let style = self.style("list.items");
        let reversed = style.with_flags(Attribute::REVERSE);
        for row in 0..rows {
            let index = first + row;
            let y = inner.y + row as i32;
            if selected.binary_search(&index).is_ok() {
                self.fill(Region::new(inner.x, y, inner.width, 1), ' ', reversed);
                self.print(inner.x, y, inner.width, items[index].as_ref(), reversed);
            } else {
                self.print(inner.x, y, inner.width, items[index].as_ref(), style);
            }
        }
        let scroll_style = self.style("list.scroll");
        self.draw_arrows(region, Arrows::BOTH, scroll_style);
        selected
    }
}

#[cfg(test)]
mod tests {
    use crate::event::MouseButton;
    use crate::style::Attribute;
    use crate::testing::{mark_flag, Pilot};
    use crate::widget::{ListState, SelectionState};
    use pretty_assertions::assert_eq;

    const FRUIT: [&str; 5] = ["apple", "banana", "cherry", "damson", "elderberry"];

    #[test]
    fn draws_items_truncated_with_arrows() {
        let mut pilot = Pilot::new(8, 4);
        pilot.frame(|ui| ui.list(8, 4, "", &FRUIT));
        assert_eq!(pilot.text(), "┌──────┐\n│apple ▲\n│banana▼\n└──────┘");
    }

    #[test]
    fn scroll_stops_at_last_page() {
        let mut pilot = Pilot::new(8, 4);
        for _ in 0..6 {
            pilot.click(7, 2);
            pilot.frame(|ui| ui.list(8, 4, "", &FRUIT));
        }
        let scroll = pilot.ui_mut().state_mut("", ListState::default()).scroll;
        assert_eq!(scroll.offset.y, 3);
        assert_eq!(pilot.ui().screen().row_text(2), "│elderb▼");

        pilot.scroll(3, 1, MouseButton::WheelUp);
        pilot.frame(|ui| ui.list(8, 4, "", &FRUIT));
        let scroll = pilot.ui_mut().state_mut("", ListState::default()).scroll;
        assert_eq!(scroll.offset.y, 2);
    }

    #[test]
    fn short_list_never_scrolls() {
        let mut pilot = Pilot::new(8, 6);
        pilot.scroll(3, 2, MouseButton::WheelDown);
        pilot.frame(|ui| ui.list(8, 6, "", &FRUIT[..2]));
        let scroll = pilot.ui_mut().state_mut("", ListState::default()).scroll;
        assert_eq!(scroll.offset.y, 0);
    }

    #[test]
    fn click_toggles_row_selection() {
        let mut pilot = Pilot::new(10, 7);
        pilot.click(2, 3);
        let selected = pilot.frame(|ui| ui.selectable_list(10, 7, "fruit", &FRUIT));
        assert_eq!(selected, vec![2]);
        assert_eq!(pilot.ui().focused_id(), Some("fruit"));
        insta::assert_snapshot!(mark_flag(pilot.ui().screen(), 3, Attribute::REVERSE), @"│[c][h][e][r][r][y][ ][ ]│");

        pilot.click(2, 3);
        let selected = pilot.frame(|ui| ui.selectable_list(10, 7, "fruit", &FRUIT));
        assert_eq!(selected, Vec::<usize>::new());
    }

    #[test]
    fn selection_is_sorted_and_follows_scroll() {
        let mut pilot = Pilot::new(10, 4);
        pilot.click(2, 1);
        pilot.frame(|ui| ui.selectable_list(10, 4, "l", &FRUIT));
        pilot.scroll(2, 1, MouseButton::WheelDown);
        pilot.frame(|ui| ui.selectable_list(10, 4, "l", &FRUIT));
        pilot.click(2, 2);
        let selected = pilot.frame(|ui| ui.selectable_list(10, 4, "l", &FRUIT));
        assert_eq!(selected, vec![0, 2]);

        pilot.click(2, 1);
        let selected = pilot.frame(|ui| ui.selectable_list(10, 4, "l", &FRUIT));
        assert_eq!(selected, vec![0, 1, 2]);
    }

    #[test]
    fn selection_past_end_is_pruned() {
        let mut pilot = Pilot::new(10, 7);
        pilot.ui_mut().state_mut(
            "l",
            SelectionState {
                selected: [1, 4].into_iter().collect(),
                ..SelectionState::default()
            },
        );
        let selected = pilot.frame(|ui| ui.selectable_list(10, 7, "l", &FRUIT[..3]));
        assert_eq!(selected, vec![1]);
    }
}
