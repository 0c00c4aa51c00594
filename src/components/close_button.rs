//! Close Button Component

use leptos::prelude::*;

/// × button in a note header
#[component]
pub fn CloseButton(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <button
            data-testid="close-button"
            class="sn-close-btn"
            on:click=move |ev| {
                ev.stop_propagation();
                on_close.run(());
            }
        >
            <span data-testid="icon-close" class="sn-icon">"×"</span>
        </button>
    }
}
