//! Scoring constants for Othello evaluation
//!
//! Corners are worth the most; the cells next to them are penalized since
//! taking them tends to hand the corner to the opponent.

use crate::board::{Pos, BOARD_SIZE};

/// Positional weight table, indexed `[y][x]`
pub const SQUARE_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, 5, 1, 1, 5, -2, 10],
    [5, -2, 1, 0, 0, 1, -2, 5],
    [5, -2, 1, 0, 0, 1, -2, 5],
    [10, -2, 5, 1, 1, 5, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// Scoring weights for evaluation
pub struct EvalWeights;

impl EvalWeights {
    /// Weight for any cell outside the canonical table
    pub const FALLBACK_SQUARE: i32 = 5;
    /// Per legal-move difference
    pub const MOBILITY: i32 = 15;
    /// Per disc difference, only once few empties remain
    pub const MATERIAL: i32 = 50;
    /// Material counts when fewer than this many cells are empty
    pub const ENDGAME_EMPTIES: u32 = 10;
}

/// Weight of the cell at column `x`, row `y`
#[inline]
#[must_use]
pub fn square_weight(x: usize, y: usize) -> i32 {
    SQUARE_WEIGHTS
        .get(y)
        .and_then(|row| row.get(x))
        .copied()
        .unwrap_or(EvalWeights::FALLBACK_SQUARE)
}

/// Weight of a board position
#[inline]
#[must_use]
pub fn pos_weight(pos: Pos) -> i32 {
    square_weight(pos.x as usize, pos.y as usize)
}
