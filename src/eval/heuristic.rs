//! Heuristic evaluation function for Othello positions
//!
//! This module provides the static evaluation used at search leaves.
//! It scores board positions on:
//! - Positional weights (corners good, corner-adjacent cells bad)
//! - Mobility (own legal moves minus opponent's)
//! - Disc material, but only near the end of the game

use crate::board::{Board, Stone};
use crate::rules::count_legal_moves;

use super::weights::{pos_weight, EvalWeights};

/// Evaluate the board from the perspective of the given color.
///
/// Positive values favour `color`. The score is symmetric:
/// `evaluate(board, Black) == -evaluate(board, White)`, which negamax relies on.
///
/// # Arguments
/// * `board` - The current board state
/// * `color` - The color to evaluate for (must not be `Empty`)
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    let opponent = color.opponent();

    let positional = positional_score(board, color) - positional_score(board, opponent);

    let mobility = (count_legal_moves(board, color) as i32
        - count_legal_moves(board, opponent) as i32)
        * EvalWeights::MOBILITY;

    let material = if board.empty_count() < EvalWeights::ENDGAME_EMPTIES {
        board.disc_diff(color) * EvalWeights::MATERIAL
    } else {
        0
    };

    positional + mobility + material
}

/// Sum of square weights over `color`'s discs
#[must_use]
pub fn positional_score(board: &Board, color: Stone) -> i32 {
    board
        .stones(color)
        .map_or(0, |bb| bb.iter_ones().map(pos_weight).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_evaluate_opening_is_balanced() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Stone::Black), 0);
        assert_eq!(evaluate(&board, Stone::White), 0);
    }

    #[test]
    fn test_evaluate_negamax_symmetry() {
        let board: Board = "
            X.....O.
            .XO.....
            ..XXO...
            ...XOO..
            ...OXX..
            ....O...
            ........
            ........
        "
        .parse()
        .unwrap();
        assert_eq!(evaluate(&board, Stone::Black), -evaluate(&board, Stone::White));
    }

    #[test]
    fn test_corner_scores_high() {
        let mut with_corner = Board::new();
        with_corner.place_stone(Pos::new(0, 0), Stone::Black);
        let mut with_x_square = Board::new();
        with_x_square.place_stone(Pos::new(1, 1), Stone::Black);

        assert!(
            positional_score(&with_corner, Stone::Black)
                > positional_score(&with_x_square, Stone::Black)
        );
        assert_eq!(positional_score(&with_corner, Stone::Black), 100);
        assert_eq!(positional_score(&with_x_square, Stone::Black), -50);
    }

    #[test]
    fn test_mobility_term() {
        let board = crate::rules::apply_move(&Board::new(), Pos::new(2, 3), Stone::Black).unwrap();
        let mobility_black = count_legal_moves(&board, Stone::Black) as i32;
        let mobility_white = count_legal_moves(&board, Stone::White) as i32;
        let positional =
            positional_score(&board, Stone::Black) - positional_score(&board, Stone::White);
        assert_eq!(
            evaluate(&board, Stone::Black),
            positional + (mobility_black - mobility_white) * EvalWeights::MOBILITY
        );
    }

    #[test]
    fn test_material_only_in_endgame() {
        // 56 discs, 8 empties: material applies
        let endgame: Board = "
            XXXXXXXX
            XXXXXXXX
            XXXXXXXX
            XXXXXXXX
            OOOOOOOO
            OOOOOOOO
            OOOOOOOO
            ........
        "
        .parse()
        .unwrap();
        let positional =
            positional_score(&endgame, Stone::Black) - positional_score(&endgame, Stone::White);
        let mobility = (count_legal_moves(&endgame, Stone::Black) as i32
            - count_legal_moves(&endgame, Stone::White) as i32)
            * EvalWeights::MOBILITY;
        assert_eq!(
            evaluate(&endgame, Stone::Black),
            positional + mobility + 8 * EvalWeights::MATERIAL
        );

        // Two fewer white discs, 10 empties: no material term
        let mut midgame = endgame;
        midgame.remove_stone(Pos::new(0, 6));
        midgame.remove_stone(Pos::new(1, 6));
        let positional =
            positional_score(&midgame, Stone::Black) - positional_score(&midgame, Stone::White);
        let mobility = (count_legal_moves(&midgame, Stone::Black) as i32
            - count_legal_moves(&midgame, Stone::White) as i32)
            * EvalWeights::MOBILITY;
        assert_eq!(midgame.empty_count(), 10);
        assert_eq!(evaluate(&midgame, Stone::Black), positional + mobility);
    }
}
