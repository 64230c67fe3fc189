//! Zobrist hashing for transposition table indexing
//!
//! An Othello move changes many cells at once, so the incremental update
//! takes the flipped bitboard as well as the placed disc.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Stone, Pos};
//! use othello::rules::{flips_for, apply_move};
//! use othello::search::ZobristTable;
//!
//! let zt = ZobristTable::new();
//! let board = Board::new();
//! let hash1 = zt.hash(&board, Stone::Black);
//!
//! let pos = Pos::new(2, 3);
//! let flips = flips_for(&board, pos, Stone::Black);
//! let next = apply_move(&board, pos, Stone::Black).unwrap();
//!
//! // Incremental update is equivalent to full recomputation
//! let hash_incremental = zt.update_move(hash1, pos, Stone::Black, flips);
//! assert_eq!(hash_incremental, zt.hash(&next, Stone::White));
//! ```

use crate::board::{Bitboard, Board, Pos, Stone, TOTAL_CELLS};

/// Zobrist hash table for position hashing.
///
/// Precomputed random values for each (cell, color) pair; XOR makes every
/// update its own inverse.
pub struct ZobristTable {
    /// Random values for black discs at each cell
    black: [u64; TOTAL_CELLS],
    /// Random values for white discs at each cell
    white: [u64; TOTAL_CELLS],
    /// Random value XORed when black is to move
    black_to_move: u64,
}

impl ZobristTable {
    /// Create a new Zobrist table with deterministic random values.
    ///
    /// Uses a linear congruential generator with a fixed seed so hashes are
    /// reproducible across runs.
    #[must_use]
    pub fn new() -> Self {
        // Constants from Knuth's MMIX LCG
        let mut seed: u64 = 0x0717_E110_5EED_0008;
        let mut next_rand = || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            // High bits of an LCG are the well-mixed ones
            seed ^ (seed >> 29)
        };

        let mut black = [0u64; TOTAL_CELLS];
        let mut white = [0u64; TOTAL_CELLS];

        for i in 0..TOTAL_CELLS {
            black[i] = next_rand();
            white[i] = next_rand();
        }

        Self {
            black,
            white,
            black_to_move: next_rand(),
        }
    }

    /// Compute the full hash for a board position.
    #[must_use]
    pub fn hash(&self, board: &Board, side_to_move: Stone) -> u64 {
        let mut h = 0u64;

        for pos in board.black.iter_ones() {
            h ^= self.black[pos.to_index()];
        }

        for pos in board.white.iter_ones() {
            h ^= self.white[pos.to_index()];
        }

        if side_to_move == Stone::Black {
            h ^= self.black_to_move;
        }

        h
    }

    /// Hash after `color` plays at `pos` flipping `flips`.
    ///
    /// Toggles the side to move as well.
    #[inline]
    #[must_use]
    pub fn update_move(&self, hash: u64, pos: Pos, color: Stone, flips: Bitboard) -> u64 {
        let idx = pos.to_index();
        let mut h = hash ^ self.black_to_move;
        h ^= match color {
            Stone::Black => self.black[idx],
            Stone::White => self.white[idx],
            Stone::Empty => 0,
        };
        // A flipped disc swaps colors: remove one key, add the other
        for p in flips.iter_ones() {
            let i = p.to_index();
            h ^= self.black[i] ^ self.white[i];
        }
        h
    }

    /// Toggle the side-to-move component of the hash (a pass).
    #[inline]
    #[must_use]
    pub fn toggle_side(&self, hash: u64) -> u64 {
        hash ^ self.black_to_move
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{apply_move, flips_for, legal_moves};

    #[test]
    fn test_zobrist_empty_board() {
        let zt = ZobristTable::new();
        let board = Board::empty();

        let hash1 = zt.hash(&board, Stone::Black);
        let hash2 = zt.hash(&board, Stone::White);

        // Different side to move = different hash
        assert_ne!(hash1, hash2);
        assert_eq!(hash2, 0);
        assert_eq!(hash1, zt.black_to_move);
    }

    #[test]
    fn test_zobrist_deterministic() {
        let zt1 = ZobristTable::new();
        let zt2 = ZobristTable::new();
        let board = Board::new();

        assert_eq!(
            zt1.hash(&board, Stone::Black),
            zt2.hash(&board, Stone::Black)
        );
    }

    #[test]
    fn test_zobrist_incremental_along_a_game() {
        let zt = ZobristTable::new();
        let mut board = Board::new();
        let mut color = Stone::Black;
        let mut hash = zt.hash(&board, color);

        for _ in 0..20 {
            let moves = legal_moves(&board, color);
            let Some(&mov) = moves.last() else {
                hash = zt.toggle_side(hash);
                color = color.opponent();
                assert_eq!(hash, zt.hash(&board, color));
                continue;
            };
            let flips = flips_for(&board, mov, color);
            hash = zt.update_move(hash, mov, color, flips);
            board = apply_move(&board, mov, color).unwrap();
            color = color.opponent();
            assert_eq!(hash, zt.hash(&board, color));
        }
    }

    #[test]
    fn test_zobrist_same_position_different_path() {
        let zt = ZobristTable::new();
        let mut board1 = Board::empty();
        let mut board2 = Board::empty();

        board1.place_stone(Pos::new(2, 2), Stone::Black);
        board1.place_stone(Pos::new(5, 5), Stone::White);

        board2.place_stone(Pos::new(5, 5), Stone::White);
        board2.place_stone(Pos::new(2, 2), Stone::Black);

        assert_eq!(
            zt.hash(&board1, Stone::Black),
            zt.hash(&board2, Stone::Black)
        );
    }

    #[test]
    fn test_zobrist_color_matters() {
        let zt = ZobristTable::new();
        let mut board1 = Board::empty();
        let mut board2 = Board::empty();

        board1.place_stone(Pos::new(0, 0), Stone::Black);
        board2.place_stone(Pos::new(0, 0), Stone::White);

        assert_ne!(
            zt.hash(&board1, Stone::Black),
            zt.hash(&board2, Stone::Black)
        );
    }

    #[test]
    fn test_zobrist_keys_distinct() {
        let zt = ZobristTable::new();
        let mut all: Vec<u64> = zt.black.iter().chain(zt.white.iter()).copied().collect();
        all.push(zt.black_to_move);
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 2 * TOTAL_CELLS + 1);
    }
}
