//! Persistent per-widget state keyed by widget identity.
//!
//! Immediate-mode widgets are plain function calls, so anything that must
//! outlive a frame (scroll offsets, the edit cursor, a toggle flag, the set of
//! selected rows) lives in a [`StateStore`] owned by the `Ui`. Entries are
//! created on first use and only removed by [`StateStore::clear`].
//!
//! Each widget kind has its own state type. The store keeps them in the
//! [`WidgetState`] sum type; looking an identity up as a different kind than
//! the one stored is a caller bug and panics.

use std::collections::{BTreeSet, HashMap};

use super::scroll::ScrollState;

// ---------------------------------------------------------------------------
// State kinds
// ---------------------------------------------------------------------------

/// Vertical scroll of a word-wrapped text view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextState {
    pub scroll: ScrollState,
}

/// Two-axis scroll of a cell grid view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferState {
    pub scroll: ScrollState,
}

/// Cursor of an editable text field, in characters.
///
/// `None` until the field is first drawn, at which point the cursor is placed
/// at the end of the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditState {
    pub cursor: Option<usize>,
}

/// On/off flag of a toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub on: bool,
}

/// Scroll of a read-only list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListState {
    pub scroll: ScrollState,
}

/// Scroll and selected row indices of a selectable list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub scroll: ScrollState,
    pub selected: BTreeSet<usize>,
}

impl SelectionState {
    /// Add `row` to the selection if absent, remove it otherwise.
    pub fn toggle(&mut self, row: usize) {
        if !self.selected.remove(&row) {
            self.selected.insert(row);
        }
    }
}

/// Discriminant of a [`WidgetState`], used in mismatch panics and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKindId {
    Text,
    Buffer,
    Edit,
    Toggle,
    List,
    Selection,
}

/// Every kind of state a widget can persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetState {
    Text(TextState),
    Buffer(BufferState),
    Edit(EditState),
    Toggle(ToggleState),
    List(ListState),
    Selection(SelectionState),
}

impl WidgetState {
    /// Which kind of state this is.
    pub fn kind(&self) -> StateKindId {
        match self {
            WidgetState::Text(_) => StateKindId::Text,
            WidgetState::Buffer(_) => StateKindId::Buffer,
            WidgetState::Edit(_) => StateKindId::Edit,
            WidgetState::Toggle(_) => StateKindId::Toggle,
            WidgetState::List(_) => StateKindId::List,
            WidgetState::Selection(_) => StateKindId::Selection,
        }
    }
}

/// A concrete state type that can live in a [`StateStore`].
pub trait StateKind: Sized {
    /// The variant this type is stored as.
    const KIND: StateKindId;

    /// Borrow `Self` out of a stored state, if the kinds match.
    fn from_state(state: &mut WidgetState) -> Option<&mut Self>;

    /// Shared-borrow counterpart of [`from_state`](Self::from_state).
    fn from_state_ref(state: &WidgetState) -> Option<&Self>;

    /// Wrap `self` for storage.
    fn into_state(self) -> WidgetState;
}

macro_rules! state_kind {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl StateKind for $ty {
                const KIND: StateKindId = StateKindId::$variant;

                fn from_state(state: &mut WidgetState) -> Option<&mut Self> {
                    match state {
                        WidgetState::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_state_ref(state: &WidgetState) -> Option<&Self> {
                    match state {
                        WidgetState::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn into_state(self) -> WidgetState {
                    WidgetState::$variant(self)
                }
            }
        )*
    };
}

state_kind! {
    TextState => Text,
    BufferState => Buffer,
    EditState => Edit,
    ToggleState => Toggle,
    ListState => List,
    SelectionState => Selection,
}

// ---------------------------------------------------------------------------
// StateStore
// ---------------------------------------------------------------------------

/// Widget identity → persisted state.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    entries: HashMap<String, WidgetState>,
}

impl StateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The state for `id`, inserting `default` if there is none yet.
    ///
    /// Mutations through the returned reference persist across frames.
    ///
    /// # Panics
    ///
    /// Panics if `id` already holds state of a different kind.
    pub fn get_or_insert<T: StateKind>(&mut self, id: &str, default: T) -> &mut T {
        let entry = self
            .entries
            .entry(id.to_owned())
            .or_insert_with(|| default.into_state());
        let found = entry.kind();
        match T::from_state(entry) {
            Some(state) => state,
            None => panic!(
                "widget identity `{id}` holds {found:?} state but was used as {:?}",
                T::KIND
            ),
        }
    }

    /// Run `f` on the state for `id` (inserting `default` first if needed)
    /// and return its result.
    ///
    /// # Panics
    ///
    /// Panics on a kind mismatch, like [`get_or_insert`](Self::get_or_insert).
    pub fn update<T: StateKind, R>(
        &mut self,
        id: &str,
        default: T,
        f: impl FnOnce(&mut T) -> R,
    ) -> R {
        f(self.get_or_insert(id, default))
    }

    /// The state for `id`, if present and of kind `T`.
    pub fn get<T: StateKind>(&self, id: &str) -> Option<&T> {
        self.entries.get(id).and_then(T::from_state_ref)
    }

    /// Whether any state is stored for `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Drop the state for a single identity.
    pub fn remove(&mut self, id: &str) -> Option<WidgetState> {
        self.entries.remove(id)
    }

    /// Drop every entry, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        n
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
