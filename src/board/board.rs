//! Board structure: two bitboards, copied on every move

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::BoardParseError;

/// Game board.
///
/// A plain `Copy` value: applying a move yields a new board, so sibling
/// branches of the search never see each other's changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Black discs bitboard
    pub black: Bitboard,
    /// White discs bitboard
    pub white: Bitboard,
}

impl Board {
    /// Standard opening position: White on (3,3) and (4,4), Black on (4,3) and (3,4)
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place_stone(Pos::new(3, 3), Stone::White);
        board.place_stone(Pos::new(4, 4), Stone::White);
        board.place_stone(Pos::new(4, 3), Stone::Black);
        board.place_stone(Pos::new(3, 4), Stone::Black);
        board
    }

    /// Board without any discs
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get disc at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Put a disc on a cell, replacing whatever was there.
    /// No flipping; use `rules::apply_move` for game moves.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        self.remove_stone(pos);
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a disc
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Occupied cells of either color
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black.union(self.white)
    }

    /// Number of discs of one color; for `Empty` this is the number of empty cells
    #[inline]
    pub fn count(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black.count(),
            Stone::White => self.white.count(),
            Stone::Empty => self.empty_count(),
        }
    }

    /// Total discs on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn empty_count(&self) -> u32 {
        TOTAL_CELLS as u32 - self.stone_count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Disc differential from `color`'s side
    #[inline]
    pub fn disc_diff(&self, color: Stone) -> i32 {
        self.count(color) as i32 - self.count(color.opponent()) as i32
    }

    /// Build a board from a signed grid, `grid[y][x]`: 1 black, -1 white, 0 empty.
    pub fn from_signed(grid: &[[i8; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::empty();
        for (y, row) in grid.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                board.place_stone(Pos::new(x as u8, y as u8), Stone::from_sign(v));
            }
        }
        board
    }

    /// Inverse of [`Board::from_signed`]
    pub fn to_signed(&self) -> [[i8; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[0i8; BOARD_SIZE]; BOARD_SIZE];
        for (y, row) in grid.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = self.get(Pos::new(x as u8, y as u8)).sign();
            }
        }
        grid
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE as u8 {
            let row: String = (0..BOARD_SIZE as u8)
                .map(|x| self.get(Pos::new(x, y)).symbol())
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Parses 8 lines of 8 cells. Spaces inside a line are ignored, blank lines skipped.
///
/// Empty: `.` `-` `0`. Black: `X` `x` `B` `b` `1`. White: `O` `o` `W` `w` `2`.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(BoardParseError::RowLength {
                    row: y,
                    len: row.len(),
                });
            }
            for (x, &ch) in row.iter().enumerate() {
                let stone = match ch {
                    '.' | '-' | '0' => Stone::Empty,
                    'X' | 'x' | 'B' | 'b' | '1' => Stone::Black,
                    'O' | 'o' | 'W' | 'w' | '2' => Stone::White,
                    _ => return Err(BoardParseError::InvalidCell { row: y, col: x, ch }),
                };
                board.place_stone(Pos::new(x as u8, y as u8), stone);
            }
        }
        Ok(board)
    }
}
