//! Sticky Notes Frontend App
//!
//! Root component: owns the board store and the global drag listeners.

use leptos::prelude::*;
use leptos_dragdrop::bind_global_drag;

use crate::components::{AddNoteButton, NotesCanvas};
use crate::context::AppContext;
use crate::models::NoteId;
use crate::store::{create_board_store, store_move_note};
use crate::style::STYLESHEET;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = create_board_store();
    let ctx = AppContext::new();

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Every move of an active drag commits the clamped position
    bind_global_drag(ctx.drag, ctx.canvas, move |id: NoteId, position| {
        store_move_note(&store, &id, position);
    });

    store.with_untracked(|board| {
        log::info!("[APP] Mounted with {} notes, top z {}", board.notes().len(), board.top_z());
    });

    view! {
        <style>{STYLESHEET}</style>
        <div class="sn-app">
            <NotesCanvas />
            <AddNoteButton />
        </div>
    }
}
