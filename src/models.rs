//! Frontend Models
//!
//! The note record, in the exact shape it is persisted.

use leptos_dragdrop::{Point, Size};
use serde::{Deserialize, Serialize};

/// Opaque note identifier, e.g. `note_k3j9x0a`
pub type NoteId = String;

const ID_PREFIX: &str = "note_";
const ID_DIGITS: usize = 7;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A single sticky note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub text: String,
    pub color: String,
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    #[serde(rename = "zIndex")]
    pub z_index: u32,
}

impl Note {
    pub fn position(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Inline CSS for the card
    pub fn style(&self) -> String {
        format!(
            "left: {}px; top: {}px; background: {}; z-index: {};",
            self.left, self.top, self.color, self.z_index
        )
    }
}

/// Build an id from a random number in `[0, 1)` by expanding its fraction in base 36.
pub fn generate_id(random: f64) -> NoteId {
    let mut frac = random.clamp(0.0, 1.0).fract();
    let mut id = String::with_capacity(ID_PREFIX.len() + ID_DIGITS);
    id.push_str(ID_PREFIX);
    for _ in 0..ID_DIGITS {
        frac *= 36.0;
        let digit = frac.floor();
        frac -= digit;
        id.push(BASE36[(digit as usize).min(35)] as char);
    }
    id
}

/// Pick a palette entry from a random number in `[0, 1)`
pub fn pick_color(palette: &[&str], random: f64) -> String {
    if palette.is_empty() {
        return String::new();
    }
    let idx = ((random * palette.len() as f64).floor() as usize).min(palette.len() - 1);
    palette[idx].to_string()
}
