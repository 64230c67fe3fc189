//! Game session: board, side to move and move history
//!
//! Keeps turn order honest for callers that play full games (the CLI, the
//! integration tests). Passes are handled automatically after each move.

use log::trace;

use crate::board::{Board, Pos, Stone};
use crate::error::GameError;
use crate::rules::{apply_move, has_legal_move, is_game_over, outcome, Outcome};

/// What happens after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The given color moves next
    Next(Stone),
    /// The given color had no move and passed; the other color moves again
    Pass(Stone),
    /// Neither side can move
    GameOver(Outcome),
}

/// A game in progress
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Stone,
    move_history: Vec<(Pos, Stone)>,
}

impl Game {
    /// Standard opening, Black to move
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Stone::Black)
    }

    /// Resume from an arbitrary position
    #[must_use]
    pub fn from_board(board: Board, side_to_move: Stone) -> Self {
        Self {
            board,
            side_to_move,
            move_history: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Stone {
        self.side_to_move
    }

    #[must_use]
    pub fn move_history(&self) -> &[(Pos, Stone)] {
        &self.move_history
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        is_game_over(&self.board)
    }

    /// Final result, once neither side can move
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_over().then(|| outcome(&self.board))
    }

    /// Current disc counts as (black, white)
    #[must_use]
    pub fn score(&self) -> (u32, u32) {
        (self.board.count(Stone::Black), self.board.count(Stone::White))
    }

    /// Play `pos` for the side to move.
    ///
    /// # Errors
    ///
    /// `GameOver` once neither side can move, `MustPass` when the side to
    /// move has no legal move, and `Move` when `pos` itself is illegal.
    pub fn play(&mut self, pos: Pos) -> Result<Turn, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let color = self.side_to_move;
        if !has_legal_move(&self.board, color) {
            return Err(GameError::MustPass(color));
        }

        self.board = apply_move(&self.board, pos, color)?;
        self.move_history.push((pos, color));
        Ok(self.advance(color))
    }

    /// Pass for a side to move that has no legal move.
    ///
    /// # Errors
    ///
    /// `GameOver` once neither side can move, `CannotPass` while a legal
    /// move exists.
    pub fn pass(&mut self) -> Result<Turn, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let color = self.side_to_move;
        if has_legal_move(&self.board, color) {
            return Err(GameError::CannotPass(color));
        }
        self.side_to_move = color.opponent();
        Ok(Turn::Next(self.side_to_move))
    }

    /// Back to the opening position
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn advance(&mut self, mover: Stone) -> Turn {
        let opponent = mover.opponent();
        if has_legal_move(&self.board, opponent) {
            self.side_to_move = opponent;
            Turn::Next(opponent)
        } else if has_legal_move(&self.board, mover) {
            trace!("{opponent:?} has no move and passes");
            self.side_to_move = mover;
            Turn::Pass(opponent)
        } else {
            self.side_to_move = opponent;
            Turn::GameOver(outcome(&self.board))
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
