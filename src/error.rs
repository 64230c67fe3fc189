//! Error types for caller-facing operations.
//!
//! Running out of moves and reaching the end of the game are ordinary
//! states, so they are not represented here.

use thiserror::Error;

use crate::board::{Pos, Stone};

/// Why a requested move could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("coordinates ({x}, {y}) are off the board")]
    OutOfBounds { x: i32, y: i32 },
    #[error("a move needs a black or white disc, got {0:?}")]
    NoColor(Stone),
    #[error("cell {0} is already occupied")]
    Occupied(Pos),
    #[error("placing {color:?} at {pos} flips no discs")]
    NoFlips { pos: Pos, color: Stone },
}

/// Failure to read a board from its text grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),
    #[error("row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },
    #[error("invalid cell {ch:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, ch: char },
}

/// Errors raised by the turn-tracking [`crate::game::Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,
    #[error("{0:?} has no legal move and must pass")]
    MustPass(Stone),
    #[error("{0:?} has a legal move and cannot pass")]
    CannotPass(Stone),
    #[error(transparent)]
    Move(#[from] MoveError),
}
