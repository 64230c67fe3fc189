//! Move application: place a disc and flip every bracketed run
//!
//! Both entry points take the board by reference and return a new value;
//! the input board is never modified.

use crate::board::{Bitboard, Board, Pos, Stone};
use crate::error::MoveError;

use super::moves::flips_for;

/// Apply a move after checking that it is legal.
///
/// # Errors
///
/// - [`MoveError::OutOfBounds`] if `pos` is off the board
/// - [`MoveError::NoColor`] if `color` is `Stone::Empty`
/// - [`MoveError::Occupied`] if the target cell holds a disc
/// - [`MoveError::NoFlips`] if the move brackets no opponent disc
pub fn apply_move(board: &Board, pos: Pos, color: Stone) -> Result<Board, MoveError> {
    if !pos.is_on_board() {
        return Err(MoveError::OutOfBounds {
            x: pos.x as i32,
            y: pos.y as i32,
        });
    }
    if color == Stone::Empty {
        return Err(MoveError::NoColor(color));
    }
    if !board.is_empty(pos) {
        return Err(MoveError::Occupied(pos));
    }
    let flips = flips_for(board, pos, color);
    if flips.is_empty() {
        return Err(MoveError::NoFlips { pos, color });
    }
    Ok(apply_flips(board, pos, color, flips))
}

/// Apply a move taken from [`super::legal_moves`] without re-validating it.
///
/// Precondition: the move is legal. If it is not, the disc is still placed
/// (an occupied or off-board cell is left unchanged) and only bracketed runs flip, so no
/// disc is ever removed.
#[inline]
#[must_use]
pub fn apply_move_unchecked(board: &Board, pos: Pos, color: Stone) -> Board {
    if color == Stone::Empty || !pos.is_on_board() || !board.is_empty(pos) {
        return *board;
    }
    let flips = flips_for(board, pos, color);
    apply_flips(board, pos, color, flips)
}

/// Checked variant for raw coordinates from outside the engine.
///
/// # Errors
///
/// [`MoveError::OutOfBounds`] for off-board coordinates, otherwise as
/// [`apply_move`].
pub fn apply_move_at(board: &Board, x: i32, y: i32, color: Stone) -> Result<Board, MoveError> {
    let pos = Pos::try_new(x, y).ok_or(MoveError::OutOfBounds { x, y })?;
    apply_move(board, pos, color)
}

/// Place `color` at `pos` and flip `flips`, as computed by [`flips_for`].
///
/// Lets the search reuse one flip computation for both the child board and
/// its hash. `color` must be Black or White.
#[inline]
#[must_use]
pub fn apply_flips(board: &Board, pos: Pos, color: Stone, flips: Bitboard) -> Board {
    let mut next = *board;
    let (mine, theirs) = match color {
        Stone::Black => (&mut next.black, &mut next.white),
        _ => (&mut next.white, &mut next.black),
    };
    *mine = mine.union(flips);
    mine.set(pos);
    *theirs = theirs.without(flips);
    next
}
