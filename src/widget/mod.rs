//! Widget support: persisted per-widget state and scrolling.

pub mod scroll;
pub mod state;

pub use scroll::ScrollState;
pub use state::{
    BufferState, EditState, ListState, SelectionState, StateKind, StateKindId, StateStore,
    TextState, ToggleState, WidgetState,
};
