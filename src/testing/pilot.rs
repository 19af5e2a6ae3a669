//! Pilot: drive a headless `Ui` frame by frame.
//!
//! The [`Pilot`] owns a [`Ui`] over a [`MemoryScreen`] and provides methods to
//! feed input the way a host event loop would, run frames, and read back what
//! was drawn.

use crate::event::{Key, MouseButton};
use crate::render::MemoryScreen;
use crate::ui::{Ui, UiConfig};

use super::snapshot::screen_to_string;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless UI driver for testing.
///
/// # Examples
///
/// ```
/// use cellui::testing::Pilot;
///
/// let mut pilot = Pilot::new(20, 3);
/// pilot.frame(|ui| ui.toggle(0, 3, "Sound"));
/// pilot.click(1, 1);
/// let on = pilot.frame(|ui| ui.toggle(0, 3, "Sound"));
/// assert!(on);
/// ```
pub struct Pilot {
    ui: Ui<MemoryScreen>,
    pending_release: Option<(i32, i32)>,
}

impl Pilot {
    /// Create a pilot over a blank screen of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_config(width, height, UiConfig::default())
    }

    /// Create a pilot with a custom configuration.
    pub fn with_config(width: u16, height: u16, config: UiConfig) -> Self {
        Self {
            ui: Ui::with_config(MemoryScreen::new(width, height), config),
            pending_release: None,
        }
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Press the primary button at (x, y) for the next frame.
    ///
    /// The button is released again after that frame, so consecutive clicks
    /// each register.
    pub fn click(&mut self, x: i32, y: i32) {
        self.press(x, y, MouseButton::Left);
    }

    /// Press `button` at (x, y) for the next frame, releasing it afterwards.
    pub fn press(&mut self, x: i32, y: i32, button: MouseButton) {
        self.ui.mouse(x, y, button);
        self.pending_release = Some((x, y));
    }

    /// Send one wheel tick at (x, y).
    pub fn scroll(&mut self, x: i32, y: i32, wheel: MouseButton) {
        self.ui.mouse(x, y, wheel);
    }

    /// Press a key for the next frame.
    pub fn key(&mut self, key: Key) {
        self.ui.keyboard(key);
    }

    /// Type `text`, one character per frame, drawing each frame with `draw`.
    ///
    /// A frame carries at most one key, so every character needs its own.
    pub fn type_text(&mut self, text: &str, mut draw: impl FnMut(&mut Ui<MemoryScreen>)) {
        for ch in text.chars() {
            self.key(Key::Char(ch));
            self.frame(&mut draw);
        }
    }

    // ── Frames ───────────────────────────────────────────────────────

    /// Run one frame: start, `draw`, finish. Returns what `draw` returned.
    pub fn frame<R>(&mut self, draw: impl FnOnce(&mut Ui<MemoryScreen>) -> R) -> R {
        self.ui.start();
        let result = draw(&mut self.ui);
        if let Err(err) = self.ui.finish() {
            panic!("presenting a memory screen failed: {err}");
        }
        if let Some((x, y)) = self.pending_release.take() {
            self.ui.mouse(x, y, MouseButton::Release);
        }
        result
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Borrow the UI.
    pub fn ui(&self) -> &Ui<MemoryScreen> {
        &self.ui
    }

    /// Borrow the UI mutably.
    pub fn ui_mut(&mut self) -> &mut Ui<MemoryScreen> {
        &mut self.ui
    }

    /// The last frame as text, one line per row, trailing spaces trimmed.
    pub fn text(&self) -> String {
        screen_to_string(self.ui.screen())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
