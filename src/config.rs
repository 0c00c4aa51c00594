//! Board Configuration
//!
//! Constants for one board: where it persists and how new notes are laid out.

use leptos_dragdrop::Size;

/// localStorage key for the notes snapshot
pub const STORAGE_KEY: &str = "sticky_notes_app_v1";

/// Pastel palette for new notes
pub const PASTEL_COLORS: &[&str] = &[
    "#FFEDD5",
    "#FDE68A",
    "#D1FAE5",
    "#DBEAFE",
    "#FCE7F3",
    "#E6E6FA",
];

pub const NOTE_WIDTH: f64 = 220.0;
pub const NOTE_HEIGHT: f64 = 160.0;
pub const GRID_GAP: f64 = 20.0;
pub const GRID_COLUMNS: usize = 3;

/// Delay before scrolling the canvas to a freshly added note
pub const SCROLL_AFTER_ADD_MS: u32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct BoardConfig {
    pub storage_key: String,
    pub note_size: Size,
    /// Horizontal and vertical gap between grid cells
    pub gap: Size,
    pub columns: usize,
    pub palette: &'static [&'static str],
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            note_size: Size::new(NOTE_WIDTH, NOTE_HEIGHT),
            gap: Size::new(GRID_GAP, GRID_GAP),
            columns: GRID_COLUMNS,
            palette: PASTEL_COLORS,
        }
    }
}
