//! Sticky Note Component
//!
//! One draggable card: close button in the header, textarea in the body.

use leptos::prelude::*;
use leptos_dragdrop::make_on_mousedown;

use crate::components::CloseButton;
use crate::context::AppContext;
use crate::models::{Note, NoteId};
use crate::store::{store_bring_to_front, store_remove_note, store_update_text, use_board_store};

/// A single note on the canvas
#[component]
pub fn StickyNote(note_id: NoteId) -> impl IntoView {
    let store = use_board_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let note = Memo::new({
        let id = note_id.clone();
        move |_| store.with(|board| board.get(&id).cloned())
    });
    let size = store.with_untracked(|board| {
        board.get(&note_id).map(Note::size).unwrap_or(board.config().note_size)
    });

    // Drag starts on the card body; pickup raises the note
    let on_mousedown = make_on_mousedown(ctx.drag, note_id.clone(), size, ctx.canvas, move |id: NoteId| {
        log::debug!("[DRAG] Picked up {}", id);
        store_bring_to_front(&store, &id);
    });

    let note_class = {
        let id = note_id.clone();
        move || if ctx.drag.is_dragging(&id) { "sn-note dragging" } else { "sn-note" }
    };
    let note_style = move || note.with(|n| n.as_ref().map(Note::style).unwrap_or_default());
    let text = move || note.with(|n| n.as_ref().map(|n| n.text.clone()).unwrap_or_default());

    let remove_id = note_id.clone();
    let input_id = note_id.clone();
    let focus_id = note_id;

    view! {
        <div
            data-testid="sticky-note"
            class=note_class
            style=note_style
            on:mousedown=on_mousedown
        >
            <div class="note-header">
                <CloseButton on_close=move |_| store_remove_note(&store, &remove_id) />
            </div>
            <div class="note-body">
                <textarea
                    data-testid="note-textarea"
                    placeholder="Enter Text"
                    prop:value=text
                    on:input=move |ev| store_update_text(&store, &input_id, event_target_value(&ev))
                    on:focus=move |_| store_bring_to_front(&store, &focus_id)
                    on:mousedown=|ev| ev.stop_propagation()
                ></textarea>
            </div>
        </div>
    }
}
