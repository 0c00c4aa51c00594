//! UI Components
//!
//! Leptos components for the notes board.

mod add_note_button;
mod close_button;
mod notes_canvas;
mod sticky_note;

pub use add_note_button::AddNoteButton;
pub use close_button::CloseButton;
pub use notes_canvas::NotesCanvas;
pub use sticky_note::StickyNote;
