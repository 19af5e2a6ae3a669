//! The immediate-mode UI context.
//!
//! [`Ui`] owns everything the engine keeps between calls: the style cascade,
//! the layout cursor, buffered input, persisted widget state, and the focused
//! identity. A frame is `start()`, any number of widget calls, `finish()`.
//!
//! ```no_run
//! use cellui::render::TerminalScreen;
//! use cellui::Ui;
//!
//! # fn main() -> std::io::Result<()> {
//! let mut ui = Ui::new(TerminalScreen::stdout()?);
//! ui.start();
//! ui.text(0, 3, "hello", "greeting");
//! if ui.button(10, 3, "Quit") {
//!     // ...
//! }
//! ui.finish()?;
//! # Ok(())
//! # }
//! ```

use std::io;

use tracing::{debug, trace, warn};

use crate::event::{InputEvent, InputRouter, Key, MouseButton};
use crate::geometry::{Offset, Region, Size};
use crate::layout::LayoutCursor;
use crate::screen::Screen;
use crate::style::{ResolvedStyle, Style, StyleCascade, StyleRule, StyleTable};
use crate::widget::{StateKind, StateStore};

// ---------------------------------------------------------------------------
// UiConfig
// ---------------------------------------------------------------------------

/// Construction-time configuration for a [`Ui`].
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Base style rules.
    pub styles: StyleTable,
    /// Class whose background clears the screen at frame start.
    pub background_class: String,
    /// Rows scrolled per mouse wheel tick.
    pub wheel_step: i32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            styles: StyleTable::defaults(),
            background_class: String::new(),
            wheel_step: 1,
        }
    }
}

impl UiConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the base style rules (builder).
    pub fn with_styles(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }

    /// Add or replace one base rule (builder).
    pub fn with_style(mut self, name: impl Into<String>, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Set the background class (builder).
    pub fn with_background_class(mut self, class: impl Into<String>) -> Self {
        self.background_class = class.into();
        self
    }

    /// Set the wheel step (builder).
    pub fn with_wheel_step(mut self, rows: i32) -> Self {
        self.wheel_step = rows;
        self
    }
}

// ---------------------------------------------------------------------------
// Ui
// ---------------------------------------------------------------------------

/// A widget placed by [`Ui::place`]: its identity and its box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placed {
    pub id: String,
    pub region: Region,
}

/// One UI context bound to one screen.
pub struct Ui<S: Screen> {
    screen: S,
    styles: StyleCascade,
    background_class: String,
    wheel_step: i32,
    layout: LayoutCursor,
    input: InputRouter,
    state: StateStore,
    focus_id: Option<String>,
    last_id: String,
    next_id: Option<String>,
    frames: u64,
}

impl<S: Screen> Ui<S> {
    /// Create a context with the default configuration.
    pub fn new(screen: S) -> Self {
        Self::with_config(screen, UiConfig::default())
    }

    /// Create a context with the given configuration.
    pub fn with_config(screen: S, config: UiConfig) -> Self {
        let size = screen.size();
        Self {
            screen,
            styles: StyleCascade::new(config.styles),
            background_class: config.background_class,
            wheel_step: config.wheel_step,
            layout: LayoutCursor::new(size),
            input: InputRouter::new(),
            state: StateStore::new(),
            focus_id: None,
            last_id: String::new(),
            next_id: None,
            frames: 0,
        }
    }

    // -- screen ------------------------------------------------------------

    /// The screen being drawn to.
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Mutable access to the screen, e.g. to resize a terminal backend.
    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    /// Give the screen back.
    pub fn into_screen(self) -> S {
        self.screen
    }

    /// Surface size captured at the last [`start`](Ui::start).
    pub fn size(&self) -> Size {
        self.layout.term_size()
    }

    // -- frame -------------------------------------------------------------

    /// Begin a frame.
    ///
    /// Refreshes the surface size, resets the layout cursor, promotes buffered
    /// input, drops leftover style overrides and clears the screen to the
    /// background of the configured background class.
    pub fn start(&mut self) {
        self.frames += 1;
        let size = self.screen.size();

        let open = self.layout.reset(size);
        if open > 0 {
            warn!(open, "column groups still open at frame start were discarded");
        }
        let stale = self.styles.clear_overrides();
        if stale > 0 {
            warn!(stale, "style overrides still pushed at frame start were discarded");
        }

        self.input.start();
        self.next_id = None;
        self.last_id.clear();

        let bg = self.styles.resolve(&self.background_class, false).bg;
        self.screen.clear(bg);
        trace!(
            frame = self.frames,
            width = size.width,
            height = size.height,
            input = ?self.input.current(),
            "frame started"
        );
    }

    /// Present the frame.
    pub fn finish(&mut self) -> io::Result<()> {
        trace!(frame = self.frames, "frame finished");
        self.screen.present()
    }

    /// Number of frames started so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    // -- layout ------------------------------------------------------------

    /// Place the next widget to the right of the previous one.
    pub fn same_line(&mut self) {
        self.layout.same_line();
    }

    /// Begin a group of columns; the first is `w` wide (`<= 0` fills).
    pub fn start_columns(&mut self, w: i32) {
        self.layout.start_columns(w);
    }

    /// Move to the next column; it is `w` wide (`<= 0` fills).
    ///
    /// # Panics
    ///
    /// Panics if no column group is open.
    pub fn next_column(&mut self, w: i32) {
        self.layout.next_column(w);
    }

    /// Close the column group, continuing below its tallest column.
    ///
    /// # Panics
    ///
    /// Panics if no column group is open.
    pub fn finish_columns(&mut self) {
        self.layout.finish_columns();
    }

    /// The box of the last placed widget.
    pub fn last_region(&self) -> Region {
        self.layout.last_box()
    }

    // -- identity and focus ------------------------------------------------

    /// Use `id` instead of the label as the identity of the next widget.
    pub fn id(&mut self, id: impl Into<String>) {
        self.next_id = Some(id.into());
    }

    /// Give keyboard focus to the widget with identity `id`.
    pub fn set_focus(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.focus_id.as_deref() != Some(id.as_str()) {
            debug!(from = ?self.focus_id, to = %id, "focus changed");
        }
        self.focus_id = Some(id);
    }

    /// Remove keyboard focus from every widget.
    pub fn clear_focus(&mut self) {
        if let Some(id) = self.focus_id.take() {
            debug!(from = %id, "focus cleared");
        }
    }

    /// The identity holding focus, if any.
    pub fn focused_id(&self) -> Option<&str> {
        self.focus_id.as_deref()
    }

    /// Whether the last placed widget holds focus.
    pub fn has_focus(&self) -> bool {
        self.focus_id.as_deref() == Some(self.last_id.as_str())
    }

    /// Identity of the last placed widget.
    pub fn last_id(&self) -> &str {
        &self.last_id
    }

    // -- styles ------------------------------------------------------------

    /// Push a style override for the rest of the frame or until popped.
    pub fn push_style(&mut self, name: impl Into<String>, style: Style) {
        self.styles.push(StyleRule::new(name, style));
    }

    /// Pop the most recent override.
    ///
    /// # Panics
    ///
    /// Panics if nothing is pushed.
    pub fn pop_style(&mut self) {
        self.styles.pop();
    }

    /// Pop the `n` most recent overrides.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `n` are pushed.
    pub fn pop_styles(&mut self, n: usize) {
        self.styles.pop_n(n);
    }

    /// The base rule table.
    pub fn base_styles(&self) -> &StyleTable {
        self.styles.base()
    }

    /// Mutable access to the base rule table.
    pub fn base_styles_mut(&mut self) -> &mut StyleTable {
        self.styles.base_mut()
    }

    /// Resolve `class` for the last placed widget's focus state.
    pub fn style(&self, class: &str) -> ResolvedStyle {
        self.styles.resolve(class, self.has_focus())
    }

    // -- state -------------------------------------------------------------

    /// Drop all persisted widget state.
    pub fn clear_state(&mut self) {
        let dropped = self.state.clear();
        debug!(dropped, "widget state cleared");
    }

    /// The persisted widget state.
    pub fn state(&self) -> &StateStore {
        &self.state
    }

    /// The state of kind `T` for `id`, created from `default` on first use.
    ///
    /// # Panics
    ///
    /// Panics if `id` holds state of another kind.
    pub fn state_mut<T: StateKind>(&mut self, id: &str, default: T) -> &mut T {
        self.state.get_or_insert(id, default)
    }

    // -- input -------------------------------------------------------------

    /// Buffer a mouse event for the next frame.
    pub fn mouse(&mut self, x: i32, y: i32, button: MouseButton) {
        self.input.mouse(x, y, button);
    }

    /// Buffer a key event for the next frame.
    pub fn keyboard(&mut self, key: Key) {
        self.input.keyboard(key);
    }

    /// Buffer a converted host event.
    ///
    /// Resize events are not buffered: the size is read from the screen at
    /// every [`start`](Ui::start), so the host only has to resize its screen.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(key) => self.keyboard(key),
            InputEvent::Mouse { x, y, button } => self.mouse(x, y, button),
            InputEvent::Resize { .. } => {}
        }
    }

    /// The current frame's button if the pointer is inside `region`.
    pub fn check_click(&self, region: Region) -> Option<MouseButton> {
        self.input.check_click(region)
    }

    /// The current frame's button and the pointer position relative to
    /// `region`, if the pointer is inside it.
    pub fn get_click(&self, region: Region) -> Option<(MouseButton, Offset)> {
        self.input.get_click(region)
    }

    /// Take the current frame's key if the last placed widget holds focus.
    ///
    /// Once taken, no later widget in the frame sees the key.
    pub fn take_focused_key(&mut self) -> Option<Key> {
        if self.has_focus() {
            self.input.take_key()
        } else {
            None
        }
    }

    /// Rows scrolled by `button` if it is a wheel tick.
    pub fn wheel_delta(&self, button: MouseButton) -> i32 {
        button.wheel_delta(self.wheel_step)
    }

    // -- drawing primitives -------------------------------------------------

    /// Resolve the identity of the next widget and place its box.
    ///
    /// The identity is the one set by [`id`](Ui::id), or `label`. It becomes
    /// the last identity, so [`has_focus`](Ui::has_focus) and
    /// [`style`](Ui::style) refer to this widget afterwards.
    pub fn place(&mut self, label: &str, w: i32, h: i32) -> Placed {
        let id = self.next_id.take().unwrap_or_else(|| label.to_owned());
        self.last_id.clone_from(&id);
        let region = self.layout.place_box(w, h);
        Placed { id, region }
    }

    /// Write one cell, dropping writes outside the surface.
    pub fn put(&mut self, x: i32, y: i32, ch: char, style: ResolvedStyle) {
        if self.layout.term_size().contains(x, y) {
            self.screen.set_cell(x, y, ch, style.fg, style.bg);
        }
    }

    /// Write `text` from (x, y) rightwards, at most `max` characters.
    ///
    /// Returns the number of characters written.
    pub fn print(&mut self, x: i32, y: i32, max: i32, text: &str, style: ResolvedStyle) -> i32 {
        let mut n = 0;
        for ch in text.chars() {
            if n >= max {
                break;
            }
            self.put(x + n, y, ch, style);
            n += 1;
        }
        n
    }

    /// Paint every cell of `region` with `ch`.
    pub fn fill(&mut self, region: Region, ch: char, style: ResolvedStyle) {
        for y in region.y..region.bottom() {
            for x in region.x..region.right() {
                self.put(x, y, ch, style);
            }
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
    use crate::style::Attribute;
    use pretty_assertions::assert_eq;

    fn ui() -> Ui<MemoryScreen> {
        Ui::new(MemoryScreen::new(20, 6))
    }

    #[test]
    fn config_builders() {
        let config = UiConfig::new()
            .with_style("", Style::new().bg(Attribute::BLUE))
            .with_background_class("app")
            .with_wheel_step(3);
        assert_eq!(config.background_class, "app");
        assert_eq!(config.wheel_step, 3);
        assert_eq!(config.styles.len(), StyleTable::defaults().len() + 1);
        assert_eq!(UiConfig::new().with_styles(StyleTable::new()).styles.len(), 0);
    }

    #[test]
    fn start_clears_to_root_background() {
        let config = UiConfig::new().with_style("", Style::new().bg(Attribute::BLUE));
        let mut ui = Ui::with_config(MemoryScreen::new(4, 2), config);
        ui.start();
        assert_eq!(ui.screen().cell(3, 1).map(|c| c.bg), Some(Attribute::BLUE));
        assert_eq!(ui.frame_count(), 1);
    }

    #[test]
    fn start_drops_leftover_overrides() {
        let mut ui = ui();
        ui.push_style("x", Style::new().fg(Attribute::RED));
        ui.start();
        assert_eq!(ui.style("x").fg, Attribute::UNSET);
    }

    #[test]
    fn finish_presents() {
        let mut ui = ui();
        ui.start();
        ui.finish().unwrap();
        assert_eq!(ui.screen().presents(), 1);
    }

    #[test]
    fn identity_override_is_consumed_once() {
        let mut ui = ui();
        ui.start();
        ui.id("custom");
        assert_eq!(ui.place("Label", 5, 1).id, "custom");
        assert_eq!(ui.place("Label", 5, 1).id, "Label");
        assert_eq!(ui.last_id(), "Label");
    }

    #[test]
    fn focus_follows_last_placed_identity() {
        let mut ui = ui();
        ui.start();
        assert!(!ui.has_focus());
        ui.set_focus("b");
        ui.place("a", 3, 1);
        assert!(!ui.has_focus());
        ui.place("b", 3, 1);
        assert!(ui.has_focus());
        ui.clear_focus();
        assert!(!ui.has_focus());
        assert_eq!(ui.focused_id(), None);
    }

    #[test]
    fn empty_identity_can_be_focused_explicitly() {
        let mut ui = ui();
        assert!(!ui.has_focus());
        ui.set_focus("");
        assert!(ui.has_focus());
        ui.clear_focus();
        assert!(!ui.has_focus());
    }

    #[test]
    fn focused_key_is_taken_once() {
        let mut ui = ui();
        ui.keyboard(Key::Char('k'));
        ui.set_focus("w");
        ui.start();
        ui.place("v", 1, 1);
        assert_eq!(ui.take_focused_key(), None);
        ui.place("w", 1, 1);
        assert_eq!(ui.take_focused_key(), Some(Key::Char('k')));
        assert_eq!(ui.take_focused_key(), None);
    }

    #[test]
    fn handle_event_buffers_keys_and_mouse() {
        let mut ui = ui();
        ui.handle_event(InputEvent::Key(Key::Enter));
        ui.handle_event(InputEvent::Mouse {
            x: 1,
            y: 1,
            button: MouseButton::Left,
        });
        ui.handle_event(InputEvent::Resize {
            width: 1,
            height: 1,
        });
        ui.start();
        assert_eq!(
            ui.check_click(Region::new(0, 0, 2, 2)),
            Some(MouseButton::Left)
        );
        assert_eq!(
            ui.get_click(Region::new(1, 0, 2, 2)),
            Some((MouseButton::Left, Offset::new(0, 1)))
        );
        assert_eq!(ui.size(), Size::new(20, 6));
    }

    #[test]
    fn writes_are_clipped_to_surface() {
        let mut ui = Ui::new(MemoryScreen::new(3, 2));
        ui.start();
        let s = ResolvedStyle::default();
        ui.put(-1, 0, 'x', s);
        ui.put(3, 0, 'x', s);
        ui.fill(Region::new(1, 1, 10, 10), '#', s);
        assert_eq!(ui.screen().row_text(0), "   ");
        assert_eq!(ui.screen().row_text(1), " ##");
    }

    #[test]
    fn print_stops_at_max() {
        let mut ui = ui();
        ui.start();
        assert_eq!(ui.print(0, 0, 3, "abcdef", ResolvedStyle::default()), 3);
        assert_eq!(ui.print(0, 1, 10, "ab", ResolvedStyle::default()), 2);
        assert_eq!(ui.screen().row_text(0).trim_end(), "abc");
    }

    #[test]
    fn clear_state_drops_everything() {
        let mut ui = ui();
        ui.state_mut("t", crate::widget::ToggleState { on: true });
        assert_eq!(ui.state().len(), 1);
        ui.clear_state();
        assert!(ui.state().is_empty());
    }

    #[test]
    fn base_table_edits_and_override_pops() {
        let mut ui = ui();
        ui.base_styles_mut().insert("note", Style::new().fg(Attribute::GREEN));
        assert!(ui.base_styles().get("note").is_some());
        ui.push_style("x", Style::new().fg(Attribute::RED));
        ui.push_style("x", Style::new().fg(Attribute::BLUE));
        ui.pop_styles(2);
        assert_eq!(ui.style("x").fg, Attribute::UNSET);
        assert_eq!(ui.style("note").fg, Attribute::GREEN);
    }

    #[test]
    fn screen_is_handed_back() {
        let mut ui = ui();
        ui.start();
        ui.screen_mut().resize(7, 2);
        assert_eq!(ui.into_screen().size(), Size::new(7, 2));
    }

    #[test]
    #[should_panic(expected = "popped while empty")]
    fn pop_style_without_push_panics() {
        ui().pop_style();
    }

    #[test]
    fn wheel_delta_uses_step() {
        let ui = Ui::with_config(MemoryScreen::new(1, 1), UiConfig::new().with_wheel_step(2));
        assert_eq!(ui.wheel_delta(MouseButton::WheelDown), 2);
        assert_eq!(ui.wheel_delta(MouseButton::Left), 0);
    }
}
