//! Note Board
//!
//! The ordered note collection and its z-order counter. Every mutation
//! rewrites the whole snapshot to storage before returning.

use std::collections::HashSet;

use leptos_dragdrop::Point;

use crate::config::BoardConfig;
use crate::layout::grid_position;
use crate::models::{generate_id, pick_color, Note, NoteId};
use crate::storage::{load_snapshot, save_snapshot, SnapshotStorage, StorageResult};

/// Initial value of the z-order counter; the first assignment yields 2
const BASE_Z: u32 = 1;

/// Random ids drawn before falling back to a numbered suffix
const MAX_ID_DRAWS: usize = 8;

/// Source of random numbers in `[0, 1)`
pub type RandomFn = fn() -> f64;

pub struct NoteBoard<S: SnapshotStorage> {
    notes: Vec<Note>,
    top_z: u32,
    storage: S,
    config: BoardConfig,
    random: RandomFn,
}

impl<S: SnapshotStorage> NoteBoard<S> {
    /// Rehydrate from storage, falling back to a single default note.
    pub fn load(storage: S, config: BoardConfig, random: RandomFn) -> Self {
        let restored = match load_snapshot::<_, Vec<Note>>(&storage, &config.storage_key) {
            Ok(notes) => notes,
            Err(e) => {
                log::warn!("[STORAGE] Ignoring stored notes: {}", e);
                None
            }
        };

        let mut board = Self {
            notes: Vec::new(),
            top_z: BASE_Z,
            storage,
            config,
            random,
        };

        match restored {
            Some(notes) => {
                board.top_z = notes.iter().map(|n| n.z_index).max().unwrap_or(BASE_Z).max(BASE_Z);
                board.notes = notes;
                board.reassign_duplicate_ids();
                log::debug!("[BOARD] Restored {} notes, top z {}", board.notes.len(), board.top_z);
            }
            None => {
                let note = board.new_note(0);
                board.notes.push(note);
                log::debug!("[BOARD] Started with a default note");
            }
        }

        board.save();
        board
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn top_z(&self) -> u32 {
        self.top_z
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a note in the next grid cell
    pub fn add_note(&mut self) -> &Note {
        let note = self.new_note(self.notes.len());
        log::debug!("[BOARD] Added {} at {:?}", note.id, note.position());
        self.notes.push(note);
        self.save();
        &self.notes[self.notes.len() - 1]
    }

    pub fn remove_note(&mut self, id: &str) -> Option<Note> {
        let idx = self.notes.iter().position(|n| n.id == id)?;
        let removed = self.notes.remove(idx);
        log::debug!("[BOARD] Removed {}", id);
        self.save();
        Some(removed)
    }

    pub fn update_text(&mut self, id: &str, text: impl Into<String>) {
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
            note.text = text.into();
            self.save();
        }
    }

    /// Set the note's top-left corner; callers clamp
    pub fn move_note(&mut self, id: &str, position: Point) {
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
            note.left = position.x;
            note.top = position.y;
            self.save();
        }
    }

    /// Give the note a z-index above every other note
    pub fn bring_to_front(&mut self, id: &str) -> Option<u32> {
        let idx = self.notes.iter().position(|n| n.id == id)?;
        let z = self.next_z();
        self.notes[idx].z_index = z;
        self.save();
        Some(z)
    }

    /// Write the full snapshot
    pub fn persist(&self) -> StorageResult<()> {
        save_snapshot(&self.storage, &self.config.storage_key, &self.notes)
    }

    fn save(&self) {
        if let Err(e) = self.persist() {
            log::warn!("[STORAGE] Failed to save {} notes: {}", self.notes.len(), e);
        }
    }

    fn next_z(&mut self) -> u32 {
        if self.top_z == u32::MAX {
            self.compact_z();
        }
        self.top_z = self.top_z.saturating_add(1);
        self.top_z
    }

    /// Renumber z-indices from the bottom, keeping the stacking order
    fn compact_z(&mut self) {
        let mut order: Vec<usize> = (0..self.notes.len()).collect();
        order.sort_by_key(|&i| self.notes[i].z_index);
        for (rank, i) in order.into_iter().enumerate() {
            self.notes[i].z_index = BASE_Z.saturating_add(1).saturating_add(rank as u32);
        }
        self.top_z = BASE_Z.saturating_add(self.notes.len() as u32);
        log::info!("[BOARD] Renumbered z-order, top z {}", self.top_z);
    }

    fn unique_id(&self) -> NoteId {
        let mut id = generate_id((self.random)());
        for _ in 1..MAX_ID_DRAWS {
            if self.get(&id).is_none() {
                return id;
            }
            id = generate_id((self.random)());
        }
        if self.get(&id).is_none() {
            return id;
        }
        let mut n = 1;
        loop {
            let candidate = format!("{}_{}", id, n);
            if self.get(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }

    /// Later notes that repeat an earlier id get a fresh one
    fn reassign_duplicate_ids(&mut self) {
        let mut seen = HashSet::new();
        for i in 0..self.notes.len() {
            if seen.insert(self.notes[i].id.clone()) {
                continue;
            }
            let id = self.unique_id();
            log::warn!("[BOARD] Duplicate id {} restored as {}", self.notes[i].id, id);
            seen.insert(id.clone());
            self.notes[i].id = id;
        }
    }

    fn new_note(&mut self, index: usize) -> Note {
        let position = grid_position(index, &self.config);
        let id = self.unique_id();
        let color = pick_color(self.config.palette, (self.random)());
        Note {
            id,
            text: String::new(),
            color,
            top: position.y,
            left: position.x,
            width: self.config.note_size.width,
            height: self.config.note_size.height,
            z_index: self.next_z(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::config::STORAGE_KEY;
    use crate::storage::MemoryStorage;

    thread_local! {
        static SEED: Cell<u64> = Cell::new(1);
        static CALLS: Cell<u32> = Cell::new(0);
    }

    /// Deterministic LCG so ids differ between calls
    fn test_random() -> f64 {
        SEED.with(|seed| {
            let next = seed.get().wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            seed.set(next);
            (next >> 11) as f64 / (1u64 << 53) as f64
        })
    }

    fn fixed_random() -> f64 {
        0.5
    }

    /// 0.5 for the first four calls, 0.25 afterwards
    fn repeating_random() -> f64 {
        CALLS.with(|calls| {
            let n = calls.get();
            calls.set(n + 1);
            if n < 4 { 0.5 } else { 0.25 }
        })
    }

    fn snapshot_board(raw: &str) -> NoteBoard<MemoryStorage> {
        NoteBoard::load(MemoryStorage::with_entry(STORAGE_KEY, raw), BoardConfig::default(), test_random)
    }

    fn empty_board() -> NoteBoard<MemoryStorage> {
        NoteBoard::load(MemoryStorage::default(), BoardConfig::default(), test_random)
    }

    fn stored_notes(board: &NoteBoard<MemoryStorage>) -> Vec<Note> {
        let raw = board.storage().get(STORAGE_KEY).expect("snapshot written");
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_load_empty_storage_creates_default_note() {
        let board = empty_board();
        assert_eq!(board.notes().len(), 1);
        let note = &board.notes()[0];
        assert_eq!(note.text, "");
        assert_eq!(note.position(), Point::new(0.0, 0.0));
        assert_eq!((note.width, note.height), (220.0, 160.0));
        assert_eq!(note.z_index, 2);
        assert!(crate::config::PASTEL_COLORS.contains(&note.color.as_str()));
        // Default note is written back immediately
        assert_eq!(stored_notes(&board), board.notes());
    }

    #[test]
    fn test_load_malformed_snapshot_falls_back() {
        let storage = MemoryStorage::with_entry(STORAGE_KEY, "[{\"id\":");
        let board = NoteBoard::load(storage, BoardConfig::default(), test_random);
        assert_eq!(board.notes().len(), 1);
        assert_eq!(board.notes()[0].position(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_load_unreadable_storage_falls_back() {
        let storage = MemoryStorage::default();
        storage.fail_reads.set(true);
        let board = NoteBoard::load(storage, BoardConfig::default(), test_random);
        assert_eq!(board.notes().len(), 1);
    }

    #[test]
    fn test_load_empty_array_stays_empty() {
        let storage = MemoryStorage::with_entry(STORAGE_KEY, "[]");
        let board = NoteBoard::load(storage, BoardConfig::default(), test_random);
        assert!(board.notes().is_empty());
        assert_eq!(board.top_z(), 1);
    }

    #[test]
    fn test_add_note_uses_next_grid_cell() {
        let mut board = empty_board();
        for _ in 0..4 {
            board.add_note();
        }
        let positions: Vec<Point> = board.notes().iter().map(Note::position).collect();
        assert_eq!(positions[3], Point::new(0.0, 180.0));
        assert_eq!(positions[4], Point::new(240.0, 180.0));
    }

    #[test]
    fn test_add_note_assigns_increasing_z() {
        let mut board = empty_board();
        let first = board.notes()[0].z_index;
        let second = board.add_note().z_index;
        assert!(second > first);
        assert_eq!(board.top_z(), second);
    }

    #[test]
    fn test_ids_stay_unique_over_many_adds() {
        let storage = MemoryStorage::with_entry(STORAGE_KEY, "[]");
        let mut board = NoteBoard::load(storage, BoardConfig::default(), test_random);
        for _ in 0..50 {
            board.add_note();
        }
        let mut ids: Vec<&str> = board.notes().iter().map(|n| n.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_repeated_random_redraws_id() {
        CALLS.with(|calls| calls.set(0));
        // Default note takes calls 0 (id) and 1 (color)
        let mut board = NoteBoard::load(MemoryStorage::default(), BoardConfig::default(), repeating_random);
        assert_eq!(board.notes()[0].id, "note_i000000");

        // Calls 2 and 3 repeat that id, call 4 changes
        let id = board.add_note().id.clone();
        assert_eq!(id, "note_9000000");
        assert_ne!(id, board.notes()[0].id);
    }

    #[test]
    fn test_constant_random_falls_back_to_suffix() {
        let mut board = NoteBoard::load(MemoryStorage::default(), BoardConfig::default(), fixed_random);
        let second = board.add_note().id.clone();
        let third = board.add_note().id.clone();
        assert_eq!(second, "note_i000000_1");
        assert_eq!(third, "note_i000000_2");
        assert_eq!(board.notes().len(), 3);
    }

    #[test]
    fn test_load_reassigns_duplicate_ids() {
        let raw = r##"[
            {"id":"note_a","text":"first","color":"#FDE68A","top":0,"left":0,"width":220,"height":160,"zIndex":2},
            {"id":"note_a","text":"second","color":"#FDE68A","top":0,"left":240,"width":220,"height":160,"zIndex":3},
            {"id":"note_b","text":"third","color":"#FDE68A","top":0,"left":480,"width":220,"height":160,"zIndex":4}
        ]"##;
        let board = snapshot_board(raw);
        let notes = board.notes();
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[0].id, "note_a");
        assert_eq!(notes[0].text, "first");
        assert_ne!(notes[1].id, "note_a");
        assert_ne!(notes[1].id, "note_b");
        assert_eq!(notes[1].text, "second");
        assert_eq!(notes[2].id, "note_b");
        // The repaired ids are what gets written back
        assert_eq!(stored_notes(&board), notes);
    }

    #[test]
    fn test_bring_to_front_at_max_z_does_not_overflow() {
        let raw = r##"[{"id":"note_a","text":"","color":"#FDE68A","top":0,"left":0,"width":220,"height":160,"zIndex":4294967295}]"##;
        let mut board = snapshot_board(raw);
        assert_eq!(board.top_z(), u32::MAX);

        let z = board.bring_to_front("note_a").expect("note exists");
        assert_eq!(z, board.top_z());
        assert!(z < u32::MAX);
    }

    #[test]
    fn test_renumbering_keeps_stacking_order() {
        let raw = r##"[
            {"id":"note_a","text":"","color":"#FDE68A","top":0,"left":0,"width":220,"height":160,"zIndex":4294967295},
            {"id":"note_b","text":"","color":"#FDE68A","top":0,"left":240,"width":220,"height":160,"zIndex":9},
            {"id":"note_c","text":"","color":"#FDE68A","top":0,"left":480,"width":220,"height":160,"zIndex":500}
        ]"##;
        let mut board = snapshot_board(raw);

        board.bring_to_front("note_b");
        let z = |board: &NoteBoard<MemoryStorage>, id: &str| board.get(id).unwrap().z_index;
        assert!(z(&board, "note_b") > z(&board, "note_a"));
        assert!(z(&board, "note_a") > z(&board, "note_c"));
        assert_eq!(z(&board, "note_b"), board.top_z());

        // New notes keep stacking above
        let added = board.add_note().z_index;
        assert!(added > z(&board, "note_b"));
    }

    #[test]
    fn test_fixed_random_is_deterministic() {
        let board = NoteBoard::load(MemoryStorage::default(), BoardConfig::default(), fixed_random);
        assert_eq!(board.notes()[0].id, "note_i000000");
        assert_eq!(board.notes()[0].color, "#DBEAFE");
    }

    #[test]
    fn test_remove_note_keeps_others_unchanged() {
        let mut board = empty_board();
        board.add_note();
        board.add_note();
        let third = board.notes()[2].id.clone();
        board.update_text(&third, "third");
        let before = board.notes().to_vec();

        let removed = board.remove_note(&before[1].id).expect("note exists");
        assert_eq!(removed, before[1]);
        assert_eq!(board.notes(), &[before[0].clone(), before[2].clone()][..]);
        assert!(board.get(&before[1].id).is_none());
        assert_eq!(stored_notes(&board), board.notes());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut board = empty_board();
        let before = board.notes().to_vec();
        assert!(board.remove_note("note_missing").is_none());
        assert_eq!(board.notes(), &before[..]);
    }

    #[test]
    fn test_update_text_touches_only_target() {
        let mut board = empty_board();
        board.add_note();
        board.add_note();
        let before = board.notes().to_vec();
        let target = before[1].id.clone();

        board.update_text(&target, "buy milk");

        for (old, new) in before.iter().zip(board.notes()) {
            if old.id == target {
                assert_eq!(new.text, "buy milk");
                assert_eq!(Note { text: old.text.clone(), ..new.clone() }, *old);
            } else {
                assert_eq!(old, new);
            }
        }
        assert_eq!(stored_notes(&board)[1].text, "buy milk");
    }

    #[test]
    fn test_move_note() {
        let mut board = empty_board();
        let id = board.notes()[0].id.clone();
        board.move_note(&id, Point::new(33.5, 12.0));
        assert_eq!(board.get(&id).unwrap().position(), Point::new(33.5, 12.0));
        assert_eq!(stored_notes(&board)[0].left, 33.5);
    }

    #[test]
    fn test_bring_to_front_orders_last_focused_highest() {
        let mut board = empty_board();
        board.add_note();
        let a = board.notes()[0].id.clone();
        let b = board.notes()[1].id.clone();

        board.bring_to_front(&b);
        board.bring_to_front(&a);
        assert!(board.get(&a).unwrap().z_index > board.get(&b).unwrap().z_index);

        board.bring_to_front(&b);
        assert!(board.get(&b).unwrap().z_index > board.get(&a).unwrap().z_index);
        assert_eq!(board.get(&b).unwrap().z_index, board.top_z());
    }

    #[test]
    fn test_bring_to_front_does_not_move_note() {
        let mut board = empty_board();
        let before = board.notes()[0].clone();
        board.bring_to_front(&before.id);
        let after = board.get(&before.id).unwrap();
        assert_eq!(after.position(), before.position());
        assert_eq!(after.text, before.text);
    }

    #[test]
    fn test_bring_to_front_unknown_id() {
        let mut board = empty_board();
        let z = board.top_z();
        assert_eq!(board.bring_to_front("note_missing"), None);
        assert_eq!(board.top_z(), z);
    }

    #[test]
    fn test_reload_round_trips_and_restores_counter() {
        let mut board = empty_board();
        board.add_note();
        board.add_note();
        let id = board.notes()[1].id.clone();
        board.update_text(&id, "hello");
        board.move_note(&id, Point::new(400.25, 90.0));
        board.bring_to_front(&id);
        let saved = board.notes().to_vec();
        let top = board.top_z();
        let raw = board.storage().get(STORAGE_KEY).unwrap();

        let reloaded = NoteBoard::load(MemoryStorage::with_entry(STORAGE_KEY, &raw), BoardConfig::default(), test_random);
        assert_eq!(reloaded.notes(), &saved[..]);
        assert_eq!(reloaded.top_z(), top);
    }

    #[test]
    fn test_focus_after_reload_beats_persisted_z() {
        let raw = r##"[
            {"id":"note_a","text":"","color":"#FDE68A","top":0,"left":0,"width":220,"height":160,"zIndex":40},
            {"id":"note_b","text":"","color":"#FDE68A","top":0,"left":240,"width":220,"height":160,"zIndex":7}
        ]"##;
        let mut board = NoteBoard::load(MemoryStorage::with_entry(STORAGE_KEY, raw), BoardConfig::default(), test_random);
        assert_eq!(board.top_z(), 40);
        assert_eq!(board.bring_to_front("note_b"), Some(41));
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let storage = MemoryStorage::default();
        storage.fail_writes.set(true);
        let mut board = NoteBoard::load(storage, BoardConfig::default(), test_random);
        board.add_note();
        let id = board.notes()[1].id.clone();
        board.update_text(&id, "still works");
        assert_eq!(board.notes().len(), 2);
        assert_eq!(board.get(&id).unwrap().text, "still works");
        assert!(board.persist().is_err());
        assert_eq!(board.storage().writes.get(), 0);
    }

    #[test]
    fn test_every_mutation_saves() {
        let mut board = empty_board();
        let base = board.storage().writes.get();
        let id = board.add_note().id.clone();
        board.update_text(&id, "x");
        board.move_note(&id, Point::new(1.0, 1.0));
        board.bring_to_front(&id);
        board.remove_note(&id);
        assert_eq!(board.storage().writes.get(), base + 5);
    }
}
