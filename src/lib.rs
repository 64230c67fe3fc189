//! Othello (Reversi) AI Engine
//!
//! A compact Othello engine on an 8x8 board:
//! - Bitboard board representation, copied on every move
//! - Standard sandwich rule for legal moves and flips
//! - Static evaluation from square weights, mobility and (late) material
//! - Negamax with alpha-beta pruning and a transposition table
//! - Iterative deepening with depth chosen by game stage
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards and text/grid I/O
//! - [`rules`]: Move generation, move application, end of game
//! - [`eval`]: Square weights and the heuristic evaluation
//! - [`search`]: Negamax, transposition table and Zobrist hashing
//! - [`engine`]: Main AI engine integrating all components
//! - [`game`]: Turn-tracking game session
//!
//! # Quick Start
//!
//! ```
//! use othello::{AIEngine, Board, Stone, apply_move};
//! use othello::config::{DepthPolicy, EngineConfig};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(EngineConfig {
//!     depth_policy: DepthPolicy::fixed(3),
//!     ..EngineConfig::default()
//! });
//!
//! // AI plays Black's first move
//! if let Some(pos) = engine.choose_move(&board, Stone::Black) {
//!     board = apply_move(&board, pos, Stone::Black).unwrap();
//!     println!("AI plays at ({}, {})", pos.x, pos.y);
//! }
//! assert_eq!(board.stone_count(), 5);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::{DepthPolicy, EngineConfig};
pub use engine::{AIEngine, MoveResult};
pub use error::{BoardParseError, GameError, MoveError};
pub use game::{Game, Turn};
pub use rules::{apply_move, legal_moves, Outcome};
