//! Add Note Button Component
//!
//! Floating action button; scrolls the canvas down so the new note is in view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::SCROLL_AFTER_ADD_MS;
use crate::context::AppContext;
use crate::store::{store_add_note, use_board_store};

#[component]
pub fn AddNoteButton() -> impl IntoView {
    let store = use_board_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let add_note = move |_| {
        if let Some(id) = store_add_note(&store) {
            log::info!("[APP] Added note {}", id);
        }
        // Wait for the new card to render before measuring scrollHeight
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SCROLL_AFTER_ADD_MS).await;
            ctx.scroll_to_bottom();
        });
    };

    view! {
        <button
            data-testid="add-note-button"
            class="sn-add-btn"
            on:click=add_note
        >
            <span data-testid="icon-add" class="sn-icon">"+"</span>
        </button>
    }
}
