//! Input event types, decoupled from crossterm.
//!
//! Defines [`Key`], [`MouseButton`] and [`InputEvent`]. Crossterm events are
//! converted with [`InputEvent::from_crossterm`] so the rest of the engine
//! never depends on crossterm directly.

use crossterm::event as ct;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key. Printable input arrives as `Char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

// ---------------------------------------------------------------------------
// MouseButton
// ---------------------------------------------------------------------------

/// Mouse button state reported with a pointer position.
///
/// `WheelUp` and `WheelDown` are one-shot pseudo-buttons for wheel ticks.
/// `Release` means no button is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    WheelUp,
    WheelDown,
    Release,
}

impl MouseButton {
    /// Whether this is a wheel tick rather than a held button.
    pub fn is_wheel(self) -> bool {
        matches!(self, MouseButton::WheelUp | MouseButton::WheelDown)
    }

    /// Rows to scroll for this wheel tick, scaled by `step`; zero otherwise.
    pub fn wheel_delta(self, step: i32) -> i32 {
        match self {
            MouseButton::WheelUp => -step,
            MouseButton::WheelDown => step,
            _ => 0,
        }
    }
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// One event from the host's event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Key(Key),
    Mouse { x: i32, y: i32, button: MouseButton },
    Resize { width: u16, height: u16 },
}

impl InputEvent {
    /// Convert a crossterm event.
    ///
    /// Returns `None` for events the engine does not handle: key releases and
    /// repeats reported by enhanced keyboard protocols, pointer motion without
    /// a button change, horizontal wheel, focus and paste events, and key
    /// codes without a [`Key`] counterpart.
    pub fn from_crossterm(event: ct::Event) -> Option<Self> {
        match event {
            ct::Event::Key(ke) if ke.kind == ct::KeyEventKind::Release => None,
            ct::Event::Key(ke) => convert_key(ke.code).map(InputEvent::Key),
            ct::Event::Mouse(me) => {
                let button = match me.kind {
                    ct::MouseEventKind::Down(b) | ct::MouseEventKind::Drag(b) => {
                        convert_mouse_button(b)
                    }
                    ct::MouseEventKind::Up(_) => MouseButton::Release,
                    ct::MouseEventKind::ScrollUp => MouseButton::WheelUp,
                    ct::MouseEventKind::ScrollDown => MouseButton::WheelDown,
                    _ => return None,
                };
                Some(InputEvent::Mouse {
                    x: i32::from(me.column),
                    y: i32::from(me.row),
                    button,
                })
            }
            ct::Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
            _ => None,
        }
    }
}

fn convert_key(code: ct::KeyCode) -> Option<Key> {
    let key = match code {
        ct::KeyCode::Char(c) => Key::Char(c),
        ct::KeyCode::Enter => Key::Enter,
        ct::KeyCode::Esc => Key::Escape,
        ct::KeyCode::Tab => Key::Tab,
        ct::KeyCode::BackTab => Key::BackTab,
        ct::KeyCode::Backspace => Key::Backspace,
        ct::KeyCode::Delete => Key::Delete,
        ct::KeyCode::Left => Key::Left,
        ct::KeyCode::Right => Key::Right,
        ct::KeyCode::Up => Key::Up,
        ct::KeyCode::Down => Key::Down,
        ct::KeyCode::Home => Key::Home,
        ct::KeyCode::End => Key::End,
        ct::KeyCode::PageUp => Key::PageUp,
        ct::KeyCode::PageDown => Key::PageDown,
        ct::KeyCode::F(n) => Key::F(n),
        _ => return None,
    };
    Some(key)
}

fn convert_mouse_button(b: ct::MouseButton) -> MouseButton {
    match b {
        ct::MouseButton::Left => MouseButton::Left,
        ct::MouseButton::Right => MouseButton::Right,
        ct::MouseButton::Middle => MouseButton::Middle,
    }
}

// ===========================================================================
// Tests
// ===========================================================================
