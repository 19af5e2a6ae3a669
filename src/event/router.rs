//! Per-frame input buffering and hit-testing.
//!
//! The host feeds events into [`InputRouter::mouse`] and
//! [`InputRouter::keyboard`] at any time. They land in the `next` snapshot.
//! [`InputRouter::start`] freezes that snapshot as `current` for the frame and
//! starts a fresh `next`, so every widget in a frame sees the same input.

use crate::geometry::{Offset, Region};

use super::input::{Key, MouseButton};

/// Pointer position with the button that changed there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseInput {
    pub x: i32,
    pub y: i32,
    pub button: MouseButton,
}

/// The input visible to one frame: at most one mouse and one key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InputSnapshot {
    pub mouse: Option<MouseInput>,
    pub key: Option<Key>,
}

impl InputSnapshot {
    /// Whether the snapshot holds no event.
    pub fn is_empty(&self) -> bool {
        self.mouse.is_none() && self.key.is_none()
    }
}

/// Double-buffered input state.
#[derive(Debug, Clone)]
pub struct InputRouter {
    next: InputSnapshot,
    current: InputSnapshot,
    last_button: MouseButton,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self {
            next: InputSnapshot::default(),
            current: InputSnapshot::default(),
            last_button: MouseButton::Release,
        }
    }
}

impl InputRouter {
    /// Create a router with no pending input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer a mouse event for the next frame.
    ///
    /// Ordinary buttons are only recorded when they differ from the last
    /// recorded button, so a held button is delivered once. Wheel ticks are
    /// always recorded and do not affect that edge filter.
    pub fn mouse(&mut self, x: i32, y: i32, button: MouseButton) {
        if !button.is_wheel() {
            if button == self.last_button {
                return;
            }
            self.last_button = button;
        }
        self.next.mouse = Some(MouseInput { x, y, button });
    }

    /// Buffer a key event for the next frame.
    pub fn keyboard(&mut self, key: Key) {
        self.next.key = Some(key);
    }

    /// Promote buffered input to the current frame and start a fresh buffer.
    pub fn start(&mut self) {
        self.current = std::mem::take(&mut self.next);
    }

    /// The input of the current frame.
    pub fn current(&self) -> &InputSnapshot {
        &self.current
    }

    /// The input buffered for the next frame.
    pub fn pending(&self) -> &InputSnapshot {
        &self.next
    }

    /// The current frame's key, leaving it in place.
    pub fn key(&self) -> Option<Key> {
        self.current.key
    }

    /// Take the current frame's key so no later widget sees it.
    pub fn take_key(&mut self) -> Option<Key> {
        self.current.key.take()
    }

    /// The current frame's button if the pointer is inside `region`.
    ///
    /// A release is not a click and yields `None`.
    pub fn check_click(&self, region: Region) -> Option<MouseButton> {
        self.get_click(region).map(|(button, _)| button)
    }

    /// Like [`check_click`](Self::check_click), also returning the pointer
    /// position relative to the region's top-left corner.
    pub fn get_click(&self, region: Region) -> Option<(MouseButton, Offset)> {
        let mouse = self.current.mouse?;
        if mouse.button == MouseButton::Release || !region.contains(mouse.x, mouse.y) {
            return None;
        }
        Some((mouse.button, region.relative(mouse.x, mouse.y)))
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BOX: Region = Region::new(2, 2, 4, 3);

    #[test]
    fn buffered_input_is_invisible_until_start() {
        let mut r = InputRouter::new();
        r.keyboard(Key::Char('a'));
        r.mouse(3, 3, MouseButton::Left);
        assert!(r.current().is_empty());

        r.start();
        assert_eq!(r.key(), Some(Key::Char('a')));
        assert_eq!(r.check_click(BOX), Some(MouseButton::Left));
        assert!(r.pending().is_empty());
    }

    #[test]
    fn input_during_frame_waits_for_next_start() {
        let mut r = InputRouter::new();
        r.start();
        r.keyboard(Key::Enter);
        assert_eq!(r.key(), None);
        r.start();
        assert_eq!(r.key(), Some(Key::Enter));
        r.start();
        assert_eq!(r.key(), None);
    }

    #[test]
    fn held_button_is_delivered_once() {
        let mut r = InputRouter::new();
        r.mouse(3, 3, MouseButton::Left);
        r.start();
        r.mouse(4, 3, MouseButton::Left);
        r.start();
        assert_eq!(r.current().mouse, None);

        r.mouse(4, 3, MouseButton::Release);
        r.mouse(4, 3, MouseButton::Left);
        r.start();
        assert_eq!(r.check_click(BOX), Some(MouseButton::Left));
    }

    #[test]
    fn wheel_ticks_bypass_edge_filter() {
        let mut r = InputRouter::new();
        r.mouse(3, 3, MouseButton::Left);
        r.start();
        for _ in 0..2 {
            r.mouse(3, 3, MouseButton::WheelDown);
            r.start();
            assert_eq!(r.check_click(BOX), Some(MouseButton::WheelDown));
        }
        // Wheel did not reset the held-left state.
        r.mouse(3, 3, MouseButton::Left);
        r.start();
        assert_eq!(r.current().mouse, None);
    }

    #[test]
    fn release_is_not_a_click() {
        let mut r = InputRouter::new();
        r.mouse(3, 3, MouseButton::Left);
        r.mouse(3, 3, MouseButton::Release);
        r.start();
        assert!(r.current().mouse.is_some());
        assert_eq!(r.check_click(BOX), None);
    }

    #[test]
    fn hit_test_bounds_are_half_open() {
        let mut r = InputRouter::new();
        r.mouse(6, 2, MouseButton::Left);
        r.start();
        assert_eq!(r.check_click(BOX), None);
        assert_eq!(
            r.check_click(Region::new(2, 2, 5, 1)),
            Some(MouseButton::Left)
        );
    }

    #[test]
    fn get_click_is_relative() {
        let mut r = InputRouter::new();
        r.mouse(5, 4, MouseButton::Right);
        r.start();
        assert_eq!(
            r.get_click(BOX),
            Some((MouseButton::Right, Offset::new(3, 2)))
        );
    }

    #[test]
    fn take_key_consumes() {
        let mut r = InputRouter::new();
        r.keyboard(Key::Tab);
        r.start();
        assert_eq!(r.take_key(), Some(Key::Tab));
        assert_eq!(r.take_key(), None);
    }

    #[test]
    fn later_key_overwrites_earlier() {
        let mut r = InputRouter::new();
        r.keyboard(Key::Char('a'));
        r.keyboard(Key::Char('b'));
        r.start();
        assert_eq!(r.key(), Some(Key::Char('b')));
    }
}
