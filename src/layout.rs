//! Grid Layout
//!
//! Initial placement for new notes: row-major cells, `columns` wide.

use leptos_dragdrop::Point;

use crate::config::BoardConfig;

/// Top-left corner of grid cell `index`
pub fn grid_position(index: usize, config: &BoardConfig) -> Point {
    let columns = config.columns.max(1);
    let column = (index % columns) as f64;
    let row = (index / columns) as f64;
    Point::new(
        column * (config.note_size.width + config.gap.width),
        row * (config.note_size.height + config.gap.height),
    )
}
