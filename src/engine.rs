//! Main AI engine: the single entry point for choosing a move
//!
//! The engine picks a search depth from how full the board is, then runs
//! iterative-deepening negamax over every legal move and returns the one
//! with the highest score.
//!
//! # Example
//!
//! ```
//! use othello::{AIEngine, Board, Stone};
//! use othello::config::{DepthPolicy, EngineConfig};
//!
//! let config = EngineConfig {
//!     depth_policy: DepthPolicy::fixed(3),
//!     ..EngineConfig::default()
//! };
//! let mut engine = AIEngine::with_config(config);
//! let board = Board::new();
//!
//! let result = engine.choose_move_with_stats(&board, Stone::Black);
//! println!("Best move: {:?}", result.best_move);
//! println!("Depth: {}", result.depth);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::{Duration, Instant};

use log::info;

use crate::board::{Board, Pos, Stone};
use crate::config::{DepthPolicy, EngineConfig};
use crate::search::{SearchResult, SearchStats, Searcher, TTStats};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found; `None` when the side to move cannot play
    pub best_move: Option<Pos>,
    /// Score of the position after the move, from the mover's side
    pub score: i32,
    /// Deepest completed iteration
    pub depth: i8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    pub stats: SearchStats,
}

impl MoveResult {
    /// Create a result from a search
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
            stats: result.stats,
        }
    }

    /// Create a result indicating there is nothing to play
    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            time_ms,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }
}

/// Main AI Engine for Othello.
///
/// Owns the searcher (and with it the transposition table), so cached
/// positions carry over from one move to the next within a game. Call
/// [`AIEngine::new_game`] between games.
///
/// # Example
///
/// ```
/// use othello::{AIEngine, Board, Stone};
///
/// let mut engine = AIEngine::new();
/// let board = Board::new();
/// if let Some(pos) = engine.choose_move(&board, Stone::Black) {
///     println!("Play at ({}, {})", pos.x, pos.y);
/// }
/// ```
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
}

impl AIEngine {
    /// Create a new AI engine with default settings.
    ///
    /// Default configuration:
    /// - 2^18 transposition table slots
    /// - Depth 4, 6 with at most 13 empties, 8 with at most 10 empties
    /// - No time limit
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an AI engine with custom configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(config.tt_slots),
            config,
        }
    }

    /// Choose a move for `color`, or `None` when it has no legal move.
    ///
    /// Use `choose_move_with_stats` if you need search statistics.
    #[must_use]
    pub fn choose_move(&mut self, board: &Board, color: Stone) -> Option<Pos> {
        self.choose_move_with_stats(board, color).best_move
    }

    /// Choose a move and report how the search went.
    ///
    /// A full board (or `Stone::Empty` as the mover) returns immediately
    /// without searching.
    #[must_use]
    pub fn choose_move_with_stats(&mut self, board: &Board, color: Stone) -> MoveResult {
        let start = Instant::now();

        if board.is_full() || color == Stone::Empty {
            return MoveResult::no_move(start.elapsed().as_millis() as u64);
        }

        let depth = self.max_depth_for(board);
        let deadline = self.config.time_limit.map(|limit| start + limit);
        let result = self.searcher.search_until(board, color, depth, deadline);
        let result = MoveResult::from_search(result, start.elapsed().as_millis() as u64);

        info!(
            "{:?} to move, {} empties: move {:?} score {} depth {}/{} nodes {} ({}ms, tt hits {:.1}%, first-move cutoffs {:.1}%)",
            color,
            board.empty_count(),
            result.best_move,
            result.score,
            result.depth,
            depth,
            result.nodes,
            result.time_ms,
            result.stats.tt_score_rate(),
            result.stats.first_move_rate()
        );
        result
    }

    /// Depth the engine will search on this board
    #[must_use]
    pub fn max_depth_for(&self, board: &Board) -> i8 {
        self.config.depth_policy.depth_for(board.empty_count())
    }

    /// Forget cached positions from the previous game.
    pub fn new_game(&mut self) {
        self.searcher.clear_tt();
    }

    /// Alias for [`AIEngine::new_game`]
    pub fn clear_cache(&mut self) {
        self.new_game();
    }

    pub fn set_depth_policy(&mut self, policy: DepthPolicy) {
        self.config.depth_policy = policy;
    }

    /// Set the soft time limit; `None` disables it
    pub fn set_time_limit(&mut self, limit: Option<Duration>) {
        self.config.time_limit = limit;
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get statistics about the transposition table.
    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.searcher.tt_stats()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
