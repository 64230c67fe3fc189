//! End-of-game detection

use crate::board::{Board, Stone};

use super::moves::has_legal_move;

/// Final (or current) disc tally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// `None` on a draw
    pub winner: Option<Stone>,
    pub black: u32,
    pub white: u32,
}

/// Neither side can move (this includes a full board)
#[must_use]
pub fn is_game_over(board: &Board) -> bool {
    !has_legal_move(board, Stone::Black) && !has_legal_move(board, Stone::White)
}

/// Score the board by disc count, regardless of whether play can continue
#[must_use]
pub fn outcome(board: &Board) -> Outcome {
    let black = board.count(Stone::Black);
    let white = board.count(Stone::White);
    let winner = match black.cmp(&white) {
        std::cmp::Ordering::Greater => Some(Stone::Black),
        std::cmp::Ordering::Less => Some(Stone::White),
        std::cmp::Ordering::Equal => None,
    };
    Outcome {
        winner,
        black,
        white,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_opening_not_over() {
        assert!(!is_game_over(&Board::new()));
        assert_eq!(outcome(&Board::new()).winner, None);
    }

    #[test]
    fn test_one_color_only_is_over() {
        let mut board = Board::empty();
        board.place_stone(Pos::new(0, 0), Stone::White);
        board.place_stone(Pos::new(5, 5), Stone::White);
        assert!(is_game_over(&board));
        let o = outcome(&board);
        assert_eq!(o.winner, Some(Stone::White));
        assert_eq!((o.black, o.white), (0, 2));
    }

    #[test]
    fn test_full_board_is_over() {
        let text = "XXXXXXXX\n".repeat(4) + &"OOOOOOOO\n".repeat(4);
        let board: Board = text.parse().unwrap();
        assert!(is_game_over(&board));
        assert_eq!(outcome(&board).winner, None);
    }
}
