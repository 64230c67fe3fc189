//! Othello rules
//!
//! This module implements the rule set:
//! - Legal move generation (bracketing opponent runs)
//! - Move application with disc flipping
//! - End-of-game detection (neither side can move)

pub mod apply;
pub mod moves;
pub mod outcome;

// Re-exports for convenient access
pub use apply::{apply_flips, apply_move, apply_move_at, apply_move_unchecked};
pub use moves::{count_legal_moves, flips_for, has_legal_move, is_legal_move, legal_moves};
pub use outcome::{is_game_over, outcome, Outcome};
