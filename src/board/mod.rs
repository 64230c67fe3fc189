//! Board representation for Othello

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// The 8 compass directions as (dx, dy)
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Disc colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Signed encoding: Black = 1, White = -1, Empty = 0
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Stone::Black => 1,
            Stone::White => -1,
            Stone::Empty => 0,
        }
    }

    /// Inverse of [`Stone::sign`]. Any positive value is Black, any negative White.
    #[inline]
    pub fn from_sign(v: i8) -> Stone {
        match v.signum() {
            1 => Stone::Black,
            -1 => Stone::White,
            _ => Stone::Empty,
        }
    }

    /// Display symbol used by the text board format
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
            Stone::Empty => '.',
        }
    }
}

/// Position on the board: `x` is the column, `y` the row, both 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE as u8 && y < BOARD_SIZE as u8);
        Self { x, y }
    }

    /// Checked constructor for coordinates coming from outside the engine
    #[inline]
    pub fn try_new(x: i32, y: i32) -> Option<Self> {
        if Self::is_valid(x, y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx % BOARD_SIZE) as u8,
            y: (idx / BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    /// Whether this position lies on the board.
    ///
    /// The fields are public, so a `Pos` built by hand may not.
    #[inline]
    pub fn is_on_board(self) -> bool {
        Self::is_valid(self.x as i32, self.y as i32)
    }

    /// Step one cell in direction (dx, dy), or None when leaving the board
    #[inline]
    pub fn step(self, dx: i32, dy: i32) -> Option<Pos> {
        Self::try_new(self.x as i32 + dx, self.y as i32 + dy)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major ordering, matching move enumeration order
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
