//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_dragdrop::{create_drag_signals, DragSignals};

use crate::models::NoteId;

/// Canvas element and drag state, shared by the canvas and every note
#[derive(Clone, Copy)]
pub struct AppContext {
    pub drag: DragSignals<NoteId>,
    /// The scrollable canvas element
    pub canvas: NodeRef<Div>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            drag: create_drag_signals(),
            canvas: NodeRef::new(),
        }
    }

    /// Scroll the canvas to its bottom edge
    pub fn scroll_to_bottom(&self) {
        if let Some(canvas) = self.canvas.get_untracked() {
            canvas.set_scroll_top(canvas.scroll_height());
        }
    }
}
