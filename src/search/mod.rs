//! Search module for the Othello AI
//!
//! Contains:
//! - Zobrist hashing for table indexing
//! - Transposition table for caching search results
//! - Negamax alpha-beta search with iterative deepening

pub mod negamax;
pub mod tt;
pub mod zobrist;

pub use negamax::{terminal_score, SearchResult, SearchStats, Searcher, INF, WIN_SCORE};
pub use tt::{EntryType, TTEntry, TTKey, TTStats, TranspositionTable};
pub use zobrist::ZobristTable;
