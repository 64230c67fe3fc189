//! Legal move generation (the "sandwich" rule)
//!
//! A move is legal when the target cell is empty and, in at least one of the
//! 8 directions, a run of one or more opponent discs is closed off by a disc
//! of the mover's color.

use crate::board::{Bitboard, Board, Pos, Stone, DIRECTIONS, TOTAL_CELLS};

/// Discs flipped by a single direction from `pos`, or an empty bitboard.
#[inline]
fn flips_in_direction(board: &Board, pos: Pos, color: Stone, dx: i32, dy: i32) -> Bitboard {
    let opponent = color.opponent();
    let mut run = Bitboard::new();
    let mut cur = pos.step(dx, dy);

    while let Some(p) = cur {
        match board.get(p) {
            s if s == opponent => run.set(p),
            s if s == color => return run,
            _ => break,
        }
        cur = p.step(dx, dy);
    }

    // Ran off the board or hit an empty cell: no bracket
    Bitboard::new()
}

/// All discs that placing `color` at `pos` would flip.
///
/// Empty result means the move is illegal (occupied or off-board cell, no
/// bracket, or `color` is `Empty`).
#[must_use]
pub fn flips_for(board: &Board, pos: Pos, color: Stone) -> Bitboard {
    if color == Stone::Empty || !pos.is_on_board() || !board.is_empty(pos) {
        return Bitboard::new();
    }
    DIRECTIONS
        .iter()
        .fold(Bitboard::new(), |acc, &(dx, dy)| {
            acc.union(flips_in_direction(board, pos, color, dx, dy))
        })
}

/// Check if `color` may play at `pos`
#[inline]
#[must_use]
pub fn is_legal_move(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty || !pos.is_on_board() || !board.is_empty(pos) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dx, dy)| !flips_in_direction(board, pos, color, dx, dy).is_empty())
}

/// Legal moves for `color` in row-major order (top to bottom, left to right).
#[must_use]
pub fn legal_moves(board: &Board, color: Stone) -> Vec<Pos> {
    (0..TOTAL_CELLS)
        .map(Pos::from_index)
        .filter(|&pos| is_legal_move(board, pos, color))
        .collect()
}

/// Number of legal moves (mobility)
#[must_use]
pub fn count_legal_moves(board: &Board, color: Stone) -> usize {
    (0..TOTAL_CELLS)
        .map(Pos::from_index)
        .filter(|&pos| is_legal_move(board, pos, color))
        .count()
}

/// Whether `color` has any legal move; stops at the first one found
#[must_use]
pub fn has_legal_move(board: &Board, color: Stone) -> bool {
    (0..TOTAL_CELLS)
        .map(Pos::from_index)
        .any(|pos| is_legal_move(board, pos, color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_moves_black() {
        let board = Board::new();
        let moves = legal_moves(&board, Stone::Black);

        // Row-major: (3,2) comes before (2,3)
        assert_eq!(
            moves,
            vec![Pos::new(3, 2), Pos::new(2, 3), Pos::new(5, 4), Pos::new(4, 5)]
        );
    }

    #[test]
    fn test_opening_moves_white() {
        let board = Board::new();
        let moves = legal_moves(&board, Stone::White);
        assert_eq!(
            moves,
            vec![Pos::new(4, 2), Pos::new(5, 3), Pos::new(2, 4), Pos::new(3, 5)]
        );
    }

    #[test]
    fn test_occupied_cell_is_illegal() {
        let board = Board::new();
        assert!(!is_legal_move(&board, Pos::new(3, 3), Stone::Black));
        assert!(flips_for(&board, Pos::new(3, 3), Stone::Black).is_empty());
    }

    #[test]
    fn test_empty_color_has_no_moves() {
        let board = Board::new();
        assert!(legal_moves(&board, Stone::Empty).is_empty());
    }

    #[test]
    fn test_run_without_bracket_is_illegal() {
        let mut board = Board::empty();
        board.place_stone(Pos::new(1, 0), Stone::White);
        board.place_stone(Pos::new(2, 0), Stone::White);
        // No black disc anywhere: nothing can be bracketed
        assert!(!is_legal_move(&board, Pos::new(0, 0), Stone::Black));
        assert!(!is_legal_move(&board, Pos::new(3, 0), Stone::Black));

        board.place_stone(Pos::new(3, 0), Stone::Black);
        assert!(is_legal_move(&board, Pos::new(0, 0), Stone::Black));
        let flips = flips_for(&board, Pos::new(0, 0), Stone::Black);
        assert_eq!(flips.count(), 2);
        assert!(flips.get(Pos::new(1, 0)));
        assert!(flips.get(Pos::new(2, 0)));
    }

    #[test]
    fn test_edge_terminates_scan() {
        // White run running into the right edge is never bracketed
        let mut board = Board::empty();
        board.place_stone(Pos::new(6, 4), Stone::White);
        board.place_stone(Pos::new(7, 4), Stone::White);
        assert!(!is_legal_move(&board, Pos::new(5, 4), Stone::Black));
    }

    #[test]
    fn test_multi_direction_flips() {
        let board: Board = "
            X.......
            O.......
            ........
            ........
            ........
            ........
            ........
            ........
        "
        .parse()
        .unwrap();
        // Only the vertical run is bracketed
        let flips = flips_for(&board, Pos::new(0, 2), Stone::Black);
        assert_eq!(flips.count(), 1);
        assert!(flips.get(Pos::new(0, 1)));

        let board: Board = "
            X.X.X...
            .OOO....
            XO.OX...
            .OOO....
            X.X.X...
            ........
            ........
            ........
        "
        .parse()
        .unwrap();
        let flips = flips_for(&board, Pos::new(2, 2), Stone::Black);
        assert_eq!(flips.count(), 8);
    }

    #[test]
    fn test_counts_agree_with_list() {
        let board = Board::new();
        assert_eq!(count_legal_moves(&board, Stone::Black), 4);
        assert!(has_legal_move(&board, Stone::White));
        assert!(!has_legal_move(&Board::empty(), Stone::Black));
    }

    #[test]
    fn test_off_board_positions_are_never_legal() {
        let board: Board = "
            ........
            ........
            ......XO
            ........
            ........
            ........
            ........
            ........
        "
        .parse()
        .unwrap();
        for pos in [Pos { x: 8, y: 2 }, Pos { x: 200, y: 200 }] {
            assert!(!is_legal_move(&board, pos, Stone::Black));
            assert!(flips_for(&board, pos, Stone::Black).is_empty());
        }
    }
}
