//! Transposition Table for caching search results
//!
//! Entries are keyed by the exact board content plus the side to move.
//! The Zobrist hash only picks the slot; a hit requires the full key to
//! match, so two different positions can never share a score.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Stone};
//! use othello::search::{EntryType, TTKey, TranspositionTable, ZobristTable};
//!
//! let zt = ZobristTable::new();
//! let mut tt = TranspositionTable::new(1 << 12);
//!
//! let board = Board::new();
//! let hash = zt.hash(&board, Stone::Black);
//! let key = TTKey::new(&board, Stone::Black);
//!
//! tt.store(hash, key, 5, 100, EntryType::Exact);
//! assert_eq!(tt.probe(hash, &key, 5, -1000, 1000), Some(100));
//! assert_eq!(tt.probe(hash, &key, 6, -1000, 1000), None);
//! ```

use crate::board::{Board, Stone};

/// Smallest table the constructor will build
pub const MIN_SLOTS: usize = 1024;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed inside the window
    Exact,
    /// Lower bound - score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - score <= stored value (alpha fail-low)
    UpperBound,
}

/// Exact position key: both bitboards and the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TTKey {
    black: u64,
    white: u64,
    side: Stone,
}

impl TTKey {
    #[inline]
    pub fn new(board: &Board, side: Stone) -> Self {
        Self {
            black: board.black.bits(),
            white: board.white.bits(),
            side,
        }
    }
}

/// Transposition table entry
#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    pub key: TTKey,
    /// Remaining search depth this score was computed with
    pub depth: i8,
    pub score: i32,
    pub entry_type: EntryType,
    /// Search generation that wrote the entry
    generation: u8,
}

/// Transposition table for caching search results.
///
/// Direct-mapped with a fixed number of slots, so memory stays bounded for
/// the whole game. A slot holding a different position is replaced when it
/// was written by an earlier search, or when the new result is at least as
/// deep. The same position is always overwritten.
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    size: usize,
    generation: u8,
}

impl TranspositionTable {
    /// Create a table with `slots` entries (at least [`MIN_SLOTS`]).
    #[must_use]
    pub fn new(slots: usize) -> Self {
        let size = slots.max(MIN_SLOTS);
        Self {
            entries: vec![None; size],
            size,
            generation: 0,
        }
    }

    #[inline]
    fn index(&self, hash: u64) -> usize {
        (hash % self.size as u64) as usize
    }

    /// Probe the table for a position.
    ///
    /// Returns a score only when an entry for exactly this key exists, its
    /// depth is at least `depth`, and its bound type lets it decide the
    /// `[alpha, beta]` window. Exact entries always qualify.
    #[must_use]
    pub fn probe(&self, hash: u64, key: &TTKey, depth: i8, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entries[self.index(hash)]?;

        if entry.key != *key || entry.depth < depth {
            return None;
        }

        match entry.entry_type {
            EntryType::Exact => Some(entry.score),
            EntryType::LowerBound if entry.score >= beta => Some(entry.score),
            EntryType::UpperBound if entry.score <= alpha => Some(entry.score),
            _ => None,
        }
    }

    /// Raw entry lookup, regardless of depth or bounds.
    #[must_use]
    pub fn get(&self, hash: u64, key: &TTKey) -> Option<TTEntry> {
        self.entries[self.index(hash)].filter(|e| e.key == *key)
    }

    /// Store a search result.
    pub fn store(&mut self, hash: u64, key: TTKey, depth: i8, score: i32, entry_type: EntryType) {
        let idx = self.index(hash);
        let generation = self.generation;

        let should_replace = match &self.entries[idx] {
            None => true,
            Some(e) => e.key == key || e.generation != generation || e.depth <= depth,
        };

        if should_replace {
            self.entries[idx] = Some(TTEntry {
                key,
                depth,
                score,
                entry_type,
                generation,
            });
        }
    }

    /// Mark the start of a new move search. Older entries stay usable but
    /// become replaceable regardless of depth.
    pub fn new_search(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Clear all entries in the table.
    ///
    /// Called when starting a new game.
    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.generation = 0;
    }

    /// Number of slots
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.size
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        let used = self.entries.iter().filter(|e| e.is_some()).count();
        TTStats {
            size: self.size,
            used,
            usage_percent: (used as f64 / self.size as f64 * 100.0) as u8,
        }
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy)]
pub struct TTStats {
    /// Total number of slots in the table
    pub size: usize,
    /// Number of slots currently occupied
    pub used: usize,
    /// Percentage of table in use (0-100)
    pub usage_percent: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn key_for(board: &Board) -> TTKey {
        TTKey::new(board, Stone::Black)
    }

    #[test]
    fn test_tt_store_probe_exact() {
        let mut tt = TranspositionTable::new(1024);
        let board = Board::new();
        let key = key_for(&board);

        tt.store(42, key, 5, 100, EntryType::Exact);

        assert_eq!(tt.probe(42, &key, 5, -1000, 1000), Some(100));
        // Shallower requests may use the deeper entry
        assert_eq!(tt.probe(42, &key, 3, -1000, 1000), Some(100));
    }

    #[test]
    fn test_tt_depth_requirement() {
        let mut tt = TranspositionTable::new(1024);
        let key = key_for(&Board::new());

        tt.store(42, key, 3, 100, EntryType::Exact);

        // Deeper search must not use the shallow entry
        assert_eq!(tt.probe(42, &key, 5, -1000, 1000), None);
        assert_eq!(tt.get(42, &key).map(|e| e.depth), Some(3));
    }

    #[test]
    fn test_tt_side_to_move_is_part_of_key() {
        let mut tt = TranspositionTable::new(1024);
        let board = Board::new();
        let black = TTKey::new(&board, Stone::Black);
        let white = TTKey::new(&board, Stone::White);

        tt.store(42, black, 5, 100, EntryType::Exact);
        assert_eq!(tt.probe(42, &white, 1, -1000, 1000), None);
    }

    #[test]
    fn test_tt_slot_collision_needs_full_key() {
        let mut tt = TranspositionTable::new(1024);
        let board1 = Board::new();
        let mut board2 = Board::new();
        board2.place_stone(Pos::new(0, 0), Stone::Black);

        // Same slot (same hash), different positions
        tt.store(7, key_for(&board1), 5, 100, EntryType::Exact);
        assert_eq!(tt.probe(7, &key_for(&board2), 1, -1000, 1000), None);
    }

    #[test]
    fn test_tt_lower_bound_cutoff() {
        let mut tt = TranspositionTable::new(1024);
        let key = key_for(&Board::new());

        tt.store(42, key, 5, 200, EntryType::LowerBound);

        assert_eq!(tt.probe(42, &key, 5, -1000, 150), Some(200));
        assert_eq!(tt.probe(42, &key, 5, -1000, 300), None);
    }

    #[test]
    fn test_tt_upper_bound_cutoff() {
        let mut tt = TranspositionTable::new(1024);
        let key = key_for(&Board::new());

        tt.store(42, key, 5, 50, EntryType::UpperBound);

        assert_eq!(tt.probe(42, &key, 5, 100, 1000), Some(50));
        assert_eq!(tt.probe(42, &key, 5, 30, 1000), None);
    }

    #[test]
    fn test_tt_same_key_always_overwrites() {
        let mut tt = TranspositionTable::new(1024);
        let key = key_for(&Board::new());

        tt.store(42, key, 5, 100, EntryType::Exact);
        tt.store(42, key, 3, 200, EntryType::Exact);

        let entry = tt.get(42, &key).unwrap();
        assert_eq!((entry.depth, entry.score), (3, 200));
    }

    #[test]
    fn test_tt_depth_preferred_for_other_positions() {
        let mut tt = TranspositionTable::new(1024);
        let board1 = Board::new();
        let mut board2 = Board::new();
        board2.place_stone(Pos::new(0, 0), Stone::Black);

        tt.store(7, key_for(&board1), 5, 100, EntryType::Exact);
        tt.store(7, key_for(&board2), 3, 200, EntryType::Exact);
        // Shallower result for a different position does not evict
        assert!(tt.get(7, &key_for(&board1)).is_some());

        // After a new search starts the old entry is fair game
        tt.new_search();
        tt.store(7, key_for(&board2), 3, 200, EntryType::Exact);
        assert!(tt.get(7, &key_for(&board1)).is_none());
        assert_eq!(tt.probe(7, &key_for(&board2), 3, -1000, 1000), Some(200));
    }

    #[test]
    fn test_tt_clear() {
        let mut tt = TranspositionTable::new(1024);
        let key = key_for(&Board::new());

        tt.store(42, key, 5, 100, EntryType::Exact);
        tt.clear();

        assert_eq!(tt.probe(42, &key, 5, -1000, 1000), None);
        assert_eq!(tt.stats().used, 0);
    }

    #[test]
    fn test_tt_stats() {
        let mut tt = TranspositionTable::new(1024);

        let stats = tt.stats();
        assert_eq!(stats.used, 0);
        assert_eq!(stats.usage_percent, 0);

        tt.store(0x111, key_for(&Board::new()), 5, 100, EntryType::Exact);
        tt.store(0x222, key_for(&Board::empty()), 5, 100, EntryType::Exact);

        let stats = tt.stats();
        assert_eq!(stats.used, 2);
        assert_eq!(stats.size, 1024);
    }

    #[test]
    fn test_tt_minimum_size() {
        let tt = TranspositionTable::new(0);
        assert_eq!(tt.capacity(), MIN_SLOTS);
    }
}
