//! Input widget: an editable, word-wrapped text field.
//!
//! The caller owns the text; the widget keeps only the cursor, as a character
//! index in [`EditState`]. Layout is recomputed from the text every frame by
//! [`layout_glyphs`], and the same pass maps clicks back to indices.

use tracing::trace;

use crate::event::{Key, MouseButton};
use crate::geometry::Offset;
use crate::screen::Screen;
use crate::style::Attribute;
use crate::ui::Ui;
use crate::widget::EditState;

// ---------------------------------------------------------------------------
// Wrap pass
// ---------------------------------------------------------------------------

/// Visual (column, row) of every character of `chars`, plus one trailing
/// entry for the end-of-text cursor position.
///
/// Words move to the next row when they do not fit in what is left of the
/// current one; words wider than `width` are broken. A newline occupies the
/// cell where it appears and ends the row.
pub fn layout_glyphs(chars: &[char], width: i32) -> Vec<Offset> {
    let width = width.max(1);
    let mut out = Vec::with_capacity(chars.len() + 1);
    let (mut cx, mut cy) = (0, 0);
    for (i, &ch) in chars.iter().enumerate() {
        if ch == '\n' {
            if cx >= width {
                cx = 0;
                cy += 1;
            }
            out.push(Offset::new(cx, cy));
            cx = 0;
            cy += 1;
            continue;
        }
        let word_start = !ch.is_whitespace() && (i == 0 || chars[i - 1].is_whitespace());
        if word_start && cx > 0 {
            let word_len = chars[i..].iter().take_while(|c| !c.is_whitespace()).count() as i32;
            if cx + word_len > width {
                cx = 0;
                cy += 1;
            }
        }
        if cx >= width {
            cx = 0;
            cy += 1;
        }
        out.push(Offset::new(cx, cy));
        cx += 1;
    }
    if cx >= width {
        cx = 0;
        cy += 1;
    }
    out.push(Offset::new(cx, cy));
    out
}

/// The text index a click at `at` (relative to the text area) lands on.
///
/// Picks the last character on the clicked row starting at or left of the
/// click. Clicking the character itself or a newline selects it; clicking
/// past the end of a row selects the position after its last character.
/// Rows with no characters select the end of the text.
pub fn index_at(chars: &[char], width: i32, at: Offset) -> usize {
    let glyphs = layout_glyphs(chars, width);
    let hit = chars
        .iter()
        .zip(&glyphs)
        .enumerate()
        .filter(|(_, (_, pos))| pos.y == at.y && pos.x <= at.x)
        .last();
    match hit {
        Some((i, (_, pos))) if pos.x == at.x => i,
        Some((i, ('\n', _))) => i,
        Some((i, _)) => i + 1,
        None => chars.len(),
    }
}

fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(b, _)| b)
}

/// Apply one key to `text` with the cursor at `cursor`.
///
/// Returns whether the text changed. The cursor stays within
/// `0..=text.chars().count()`.
pub fn apply_key(text: &mut String, cursor: &mut usize, key: Key) -> bool {
    let len = text.chars().count();
    *cursor = (*cursor).min(len);
    match key {
        Key::Char(ch) => {
            text.insert(byte_index(text, *cursor), ch);
            *cursor += 1;
            true
        }
        Key::Enter => apply_key(text, cursor, Key::Char('\n')),
        Key::Backspace if *cursor > 0 => {
            *cursor -= 1;
            text.remove(byte_index(text, *cursor));
            true
        }
        Key::Delete if *cursor < len => {
            text.remove(byte_index(text, *cursor));
            true
        }
        Key::Left => {
            *cursor = cursor.saturating_sub(1);
            false
        }
        Key::Right => {
            *cursor = (*cursor + 1).min(len);
            false
        }
        Key::Home => {
            *cursor = 0;
            false
        }
        Key::End => {
            *cursor = len;
            false
        }
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

impl<S: Screen> Ui<S> {
    /// An editable text field in a `w`×`h` box labelled `label`.
    ///
    /// A primary click focuses the field and moves the cursor to the clicked
    /// character; clicks on the border count as the nearest interior cell. While focused, the frame's key edits `text`. Returns
    /// whether `text` changed this frame.
    pub fn input(&mut self, w: i32, h: i32, text: &mut String, label: &str) -> bool {
        let placed = self.place(label, w, h);
        let region = placed.region;
        let inner = region.shrink(1);

        let len = text.chars().count();
        let state = self.state_mut(&placed.id, EditState::default());
        let mut cursor = state.cursor.unwrap_or(len).min(len);

        if let Some((MouseButton::Left, at)) = self.get_click(region) {
            self.set_focus(placed.id.as_str());
            if !inner.is_empty() {
                let at = Offset::new(
                    (at.x - 1).clamp(0, inner.width - 1),
                    (at.y - 1).clamp(0, inner.height - 1),
                );
                let chars: Vec<char> = text.chars().collect();
                cursor = index_at(&chars, inner.width, at);
            }
        }

        let mut changed = false;
        if let Some(key) = self.take_focused_key() {
            trace!(id = %placed.id, ?key, "input key");
            changed = apply_key(text, &mut cursor, key);
        }
        self.state_mut(&placed.id, EditState::default()).cursor = Some(cursor);

        self.draw_frame(region, label, "input.border");
        if inner.is_empty() {
            return changed;
        }
        let style = self.style("input.text");
        let chars: Vec<char> = text.chars().collect();
        let glyphs = layout_glyphs(&chars, inner.width);
        let visible = |pos: Offset| pos.y < inner.height;
        for (&ch, &pos) in chars.iter().zip(&glyphs) {
            if ch != '\n' && visible(pos) {
                self.put(inner.x + pos.x, inner.y + pos.y, ch, style);
            }
        }
        if self.has_focus() {
            let pos = glyphs[cursor];
            if visible(pos) {
                let ch = match chars.get(cursor) {
                    Some(&c) if c != '\n' => c,
                    _ => ' ',
                };
                self.put(
                    inner.x + pos.x,
                    inner.y + pos.y,
                    ch,
                    style.with_flags(Attribute::UNDERLINE),
                );
            }
        }
        changed
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{mark_flag, Pilot};
    use pretty_assertions::assert_eq;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn positions(s: &str, width: i32) -> Vec<(i32, i32)> {
        layout_glyphs(&chars(s), width)
            .into_iter()
            .map(|o| (o.x, o.y))
            .collect()
    }

    #[test]
    fn layout_moves_word_that_does_not_fit() {
        assert_eq!(
            positions("ab cd", 4),
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn layout_breaks_long_word_in_place() {
        assert_eq!(
            positions("abcde", 3),
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn layout_newline_ends_row() {
        assert_eq!(positions("a\nb", 5), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn layout_end_cursor_wraps_at_full_row() {
        assert_eq!(positions("abc", 3).last(), Some(&(0, 1)));
    }

    #[test]
    fn layout_newline_after_full_row_starts_next_row() {
        assert_eq!(
            positions("abc\nd", 3),
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (0, 2), (1, 2)]
        );
        assert_eq!(index_at(&chars("abc\nd"), 3, Offset::new(0, 1)), 3);
    }

    #[test]
    fn index_at_maps_clicks() {
        let text = chars("hi\nthere");
        assert_eq!(index_at(&text, 8, Offset::new(1, 0)), 1);
        assert_eq!(index_at(&text, 8, Offset::new(5, 0)), 2);
        assert_eq!(index_at(&text, 8, Offset::new(7, 1)), 8);
        assert_eq!(index_at(&text, 8, Offset::new(0, 4)), 8);
    }

    #[test]
    fn apply_key_edits() {
        let mut text = String::from("ac");
        let mut cursor = 1;
        assert!(apply_key(&mut text, &mut cursor, Key::Char('b')));
        assert_eq!((text.as_str(), cursor), ("abc", 2));
        assert!(apply_key(&mut text, &mut cursor, Key::Backspace));
        assert_eq!((text.as_str(), cursor), ("ac", 1));
        assert!(apply_key(&mut text, &mut cursor, Key::Delete));
        assert_eq!((text.as_str(), cursor), ("a", 1));
        assert!(!apply_key(&mut text, &mut cursor, Key::Delete));
        assert!(!apply_key(&mut text, &mut cursor, Key::Home));
        assert!(!apply_key(&mut text, &mut cursor, Key::Backspace));
        assert_eq!((text.as_str(), cursor), ("a", 0));
        assert!(!apply_key(&mut text, &mut cursor, Key::Tab));
    }

    #[test]
    fn apply_key_handles_multibyte() {
        let mut text = String::from("äö");
        let mut cursor = 1;
        apply_key(&mut text, &mut cursor, Key::Char('ß'));
        assert_eq!(text, "äßö");
        apply_key(&mut text, &mut cursor, Key::Delete);
        assert_eq!(text, "äß");
        apply_key(&mut text, &mut cursor, Key::End);
        assert_eq!(cursor, 2);
    }

    #[test]
    fn cursor_is_clamped_when_text_shrinks() {
        let mut text = String::from("x");
        let mut cursor = 9;
        apply_key(&mut text, &mut cursor, Key::Left);
        assert_eq!(cursor, 0);
    }

    #[test]
    fn unfocused_input_ignores_keys() {
        let mut pilot = Pilot::new(10, 3);
        let mut text = String::new();
        pilot.key(Key::Char('a'));
        let changed = pilot.frame(|ui| ui.input(10, 3, &mut text, "in"));
        assert!(!changed);
        assert_eq!(text, "");
    }

    #[test]
    fn click_focuses_and_places_cursor() {
        let mut pilot = Pilot::new(10, 3);
        let mut text = String::from("hello");
        pilot.click(3, 1);
        pilot.frame(|ui| ui.input(10, 3, &mut text, "in"));
        assert_eq!(pilot.ui().focused_id(), Some("in"));
        insta::assert_snapshot!(mark_flag(pilot.ui().screen(), 1, Attribute::UNDERLINE), @"│he[l]lo   │");

        pilot.key(Key::Char('X'));
        pilot.frame(|ui| ui.input(10, 3, &mut text, "in"));
        assert_eq!(text, "heXllo");
    }

    #[test]
    fn cursor_on_newline_after_full_row_stays_inside() {
        let mut pilot = Pilot::new(5, 4);
        let mut text = String::from("abc\nd");
        pilot.ui_mut().set_focus("in");
        pilot.ui_mut().state_mut("in", EditState { cursor: Some(3) });
        pilot.frame(|ui| ui.input(5, 4, &mut text, "in"));
        insta::assert_snapshot!(mark_flag(pilot.ui().screen(), 1, Attribute::UNDERLINE), @"│abc│");
        insta::assert_snapshot!(mark_flag(pilot.ui().screen(), 2, Attribute::UNDERLINE), @"│[ ]  │");
    }

    #[test]
    fn click_on_border_clamps_into_text_area() {
        let mut pilot = Pilot::new(10, 3);
        let mut text = String::from("hello");
        pilot.click(0, 1);
        pilot.frame(|ui| ui.input(10, 3, &mut text, "in"));
        assert_eq!(pilot.ui().focused_id(), Some("in"));
        insta::assert_snapshot!(mark_flag(pilot.ui().screen(), 1, Attribute::UNDERLINE), @"│[h]ello   │");

        pilot.click(3, 2);
        pilot.frame(|ui| ui.input(10, 3, &mut text, "in"));
        insta::assert_snapshot!(mark_flag(pilot.ui().screen(), 1, Attribute::UNDERLINE), @"│he[l]lo   │");
    }

    #[test]
    fn cursor_at_end_draws_trailing_cell() {
        let mut pilot = Pilot::new(10, 3);
        let mut text = String::from("ab");
        pilot.ui_mut().set_focus("in");
        pilot.frame(|ui| ui.input(10, 3, &mut text, "in"));
        insta::assert_snapshot!(mark_flag(pilot.ui().screen(), 1, Attribute::UNDERLINE), @"│ab[ ]     │");
    }
}
