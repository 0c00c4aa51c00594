//! Global Application State Store
//!
//! The note board lives in one reactive signal backed by localStorage.

use leptos::prelude::*;
use leptos_dragdrop::Point;

use crate::board::NoteBoard;
use crate::config::BoardConfig;
use crate::models::NoteId;
use crate::storage::BrowserStorage;

/// Type alias for the store
pub type BoardStore = RwSignal<NoteBoard<BrowserStorage>>;

/// Load the board from localStorage
pub fn create_board_store() -> BoardStore {
    RwSignal::new(NoteBoard::load(BrowserStorage, BoardConfig::default(), js_sys::Math::random))
}

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a note, returning its id
pub fn store_add_note(store: &BoardStore) -> Option<NoteId> {
    store.try_update(|board| board.add_note().id.clone())
}

/// Remove a note by ID
pub fn store_remove_note(store: &BoardStore, note_id: &str) {
    store.update(|board| {
        board.remove_note(note_id);
    });
}

pub fn store_update_text(store: &BoardStore, note_id: &str, text: String) {
    store.update(|board| board.update_text(note_id, text));
}

pub fn store_move_note(store: &BoardStore, note_id: &str, position: Point) {
    store.update(|board| board.move_note(note_id, position));
}

/// Raise a note above all others (focus or drag start)
pub fn store_bring_to_front(store: &BoardStore, note_id: &str) {
    store.update(|board| {
        board.bring_to_front(note_id);
    });
}
