//! # cellui
//!
//! An immediate-mode widget engine for character-cell terminal displays.
//!
//! Callers describe the whole UI every frame as a sequence of widget calls on a
//! [`Ui`] context. The engine places each widget with a layout cursor, resolves
//! its colors through a class-based style cascade, routes the frame's single
//! mouse and key event to the right widget, and keeps the little state that has
//! to survive between frames (scroll offsets, cursors, toggles, selections)
//! keyed by the widget's identity.
//!
//! ## Core Systems
//!
//! - **[`screen`]**: the `Screen` trait every display implements
//! - **[`style`]**: attributes, rule tables, and the cascade resolver
//! - **[`layout`]**: the per-frame layout cursor with auto-fill and columns
//! - **[`widget`]**: persisted widget state and scroll arithmetic
//! - **[`event`]**: input events, crossterm conversion, and the input router
//! - **[`ui`]**: the `Ui` context tying the above together
//! - **[`widgets`]**: Text, Buffer, Input, Button, Toggle, Gauge, List
//! - **[`render`]**: cell buffers, a crossterm terminal screen, a memory screen
//! - **[`testing`]**: the headless `Pilot` and text snapshot helpers
//! - **[`geometry`]**: Offset, Size, Region primitives

// Foundation
pub mod geometry;
pub mod screen;

// Core systems
pub mod layout;
pub mod style;
pub mod widget;

// Input
pub mod event;

// Context and widgets
pub mod ui;
pub mod widgets;

// Rendering
pub mod render;

// Testing
pub mod testing;

pub use geometry::{Offset, Region, Size};
pub use screen::Screen;
pub use style::{Attribute, Color, ResolvedStyle, Style, StyleTable};
pub use ui::{Ui, UiConfig};

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use cellui_macros::{style, styles};
