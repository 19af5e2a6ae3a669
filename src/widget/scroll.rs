//! Scroll offsets for scrolling widgets.
//!
//! [`ScrollState`] is the persisted part of a scrolling view: only the offset
//! survives between frames. Content and viewport sizes are recomputed every
//! frame by the widget and passed in, so clamping always reflects what is
//! currently on screen.

use crate::geometry::{Offset, Size};

/// Scroll position of a scrollable widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScrollState {
    /// Current scroll offset (cells on x, rows on y).
    pub offset: Offset,
}

impl ScrollState {
    /// Create a scroll state at the given offset.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            offset: Offset::new(x, y),
        }
    }

    /// The maximum scroll offset for each axis.
    ///
    /// Each component is `max(0, content - viewport)`.
    pub fn max_scroll(content: Size, viewport: Size) -> Offset {
        Offset::new(
            (content.width - viewport.width).max(0),
            (content.height - viewport.height).max(0),
        )
    }

    /// Scroll to an absolute position, clamping to the valid range.
    pub fn scroll_to(&mut self, x: i32, y: i32, content: Size, viewport: Size) {
        let max = Self::max_scroll(content, viewport);
        self.offset = Offset::new(x.clamp(0, max.x), y.clamp(0, max.y));
    }

    /// Scroll by a relative delta, clamping to the valid range.
    pub fn scroll_by(&mut self, dx: i32, dy: i32, content: Size, viewport: Size) {
        self.scroll_to(self.offset.x + dx, self.offset.y + dy, content, viewport);
    }

    /// Re-clamp the current offset after the content or viewport changed.
    pub fn clamp(&mut self, content: Size, viewport: Size) {
        self.scroll_to(self.offset.x, self.offset.y, content, viewport);
    }

    /// Scroll vertically with only the top edge enforced.
    ///
    /// Used by views whose content length is not known until drawn.
    pub fn scroll_rows(&mut self, dy: i32) {
        self.offset.y = (self.offset.y + dy).max(0);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
