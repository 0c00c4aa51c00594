//! Notes Canvas Component
//!
//! The scrollable area that holds every note.

use leptos::prelude::*;

use crate::components::StickyNote;
use crate::context::AppContext;
use crate::store::use_board_store;

#[component]
pub fn NotesCanvas() -> impl IntoView {
    let store = use_board_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Keyed by id; each note tracks its own fields
    let note_ids = move || store.with(|board| board.notes().iter().map(|n| n.id.clone()).collect::<Vec<_>>());

    view! {
        <div class="sn-container-wrap">
            <div node_ref=ctx.canvas data-testid="sticky-notes-container" class="sn-container">
                <For
                    each=note_ids
                    key=|id| id.clone()
                    children=move |id| view! { <StickyNote note_id=id /> }
                />
            </div>
        </div>
    }
}
