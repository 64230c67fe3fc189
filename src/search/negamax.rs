//! Negamax search with alpha-beta pruning and transposition table
//!
//! This module implements the core search algorithm for the Othello AI.
//!
//! # Features
//!
//! - Negamax formulation: a child's score negated is the parent's score
//! - Alpha-beta pruning with corner-first move ordering
//! - Transposition table keyed by exact position and side to move
//! - Pass handling and exact scoring of finished games
//! - Iterative deepening at the root, with an optional deadline checked
//!   between depths
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Stone};
//! use othello::search::Searcher;
//!
//! let mut searcher = Searcher::new(1 << 14);
//! let board = Board::new();
//!
//! let result = searcher.search(&board, Stone::Black, 3);
//! assert!(result.best_move.is_some());
//! assert_eq!(result.depth, 3);
//! ```

use std::cmp::Reverse;
use std::time::Instant;

use log::{debug, trace};

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate, pos_weight};
use crate::rules::{apply_flips, apply_move_unchecked, flips_for, has_legal_move, legal_moves};

use super::{EntryType, TTKey, TTStats, TranspositionTable, ZobristTable};

/// Base score of a finished game; the disc differential is added on top
pub const WIN_SCORE: i32 = 1_000_000;

/// Infinity score for alpha-beta bounds, beyond any finished-game score
pub const INF: i32 = WIN_SCORE + 1_000;

/// Depth recorded for finished-game entries: valid for any request
const TERMINAL_DEPTH: i8 = i8::MAX;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Total beta cutoffs (fail-high)
    pub beta_cutoffs: u64,
    /// Beta cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Total TT probes
    pub tt_probes: u64,
    /// TT probes that returned a usable score
    pub tt_score_hits: u64,
    /// Nodes where the side to move had to pass
    pub passes: u64,
    /// Finished games reached inside the tree
    pub terminal_nodes: u64,
}

impl SearchStats {
    /// First-move cutoff rate
    pub fn first_move_rate(&self) -> f64 {
        if self.beta_cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.beta_cutoffs as f64 * 100.0
        }
    }

    /// TT score hit rate
    pub fn tt_score_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_score_hits as f64 / self.tt_probes as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` when the side to move has no legal move
    pub best_move: Option<Pos>,
    /// Score of the best move from the mover's side
    pub score: i32,
    /// Deepest completed iteration
    pub depth: i8,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

impl SearchResult {
    fn empty() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }
}

/// Score of a finished game from `color`'s side.
///
/// `WIN_SCORE + diff` for a win, `-WIN_SCORE + diff` for a loss, 0 for a draw.
#[must_use]
pub fn terminal_score(board: &Board, color: Stone) -> i32 {
    let diff = board.disc_diff(color);
    match diff.signum() {
        1 => WIN_SCORE + diff,
        -1 => -WIN_SCORE + diff,
        _ => 0,
    }
}

/// Negamax searcher owning its transposition table.
///
/// The table persists across searches; call [`Searcher::clear_tt`] for a
/// new game.
pub struct Searcher {
    zobrist: ZobristTable,
    tt: TranspositionTable,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Create a new searcher with a transposition table of `tt_slots` entries.
    #[must_use]
    pub fn new(tt_slots: usize) -> Self {
        Self {
            zobrist: ZobristTable::new(),
            tt: TranspositionTable::new(tt_slots),
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// Score `board` for `color` to move, searching `depth` plies.
    ///
    /// Returns the negamax value within the `[alpha, beta]` window.
    pub fn negamax(&mut self, board: &Board, color: Stone, depth: i8, alpha: i32, beta: i32) -> i32 {
        let hash = self.zobrist.hash(board, color);
        self.negamax_hashed(board, color, depth, alpha, beta, hash)
    }

    fn negamax_hashed(
        &mut self,
        board: &Board,
        color: Stone,
        depth: i8,
        mut alpha: i32,
        beta: i32,
        hash: u64,
    ) -> i32 {
        self.nodes += 1;
        debug_assert_eq!(hash, self.zobrist.hash(board, color));

        let key = TTKey::new(board, color);
        self.stats.tt_probes += 1;
        if let Some(score) = self.tt.probe(hash, &key, depth, alpha, beta) {
            self.stats.tt_score_hits += 1;
            return score;
        }

        let alpha_orig = alpha;
        let opponent = color.opponent();
        let mut moves = legal_moves(board, color);

        if moves.is_empty() {
            if !has_legal_move(board, opponent) {
                self.stats.terminal_nodes += 1;
                let score = terminal_score(board, color);
                self.tt
                    .store(hash, key, TERMINAL_DEPTH, score, EntryType::Exact);
                return score;
            }

            // Pass: same board, opponent to move
            self.stats.passes += 1;
            let score = -self.negamax_hashed(
                board,
                opponent,
                depth - 1,
                -beta,
                -alpha,
                self.zobrist.toggle_side(hash),
            );
            self.tt
                .store(hash, key, depth, score, Self::bound(score, alpha_orig, beta));
            return score;
        }

        if depth <= 0 {
            return evaluate(board, color);
        }

        // Corners first; the sort is stable so equal weights keep row-major order
        moves.sort_by_key(|&m| Reverse(pos_weight(m)));

        let mut best = -INF;
        for (i, &mov) in moves.iter().enumerate() {
            let flips = flips_for(board, mov, color);
            let child = apply_flips(board, mov, color, flips);
            let child_hash = self.zobrist.update_move(hash, mov, color, flips);

            let score = -self.negamax_hashed(&child, opponent, depth - 1, -beta, -alpha, child_hash);

            best = best.max(score);
            alpha = alpha.max(best);
            if alpha >= beta {
                self.stats.beta_cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        self.tt
            .store(hash, key, depth, best, Self::bound(best, alpha_orig, beta));
        best
    }

    #[inline]
    fn bound(score: i32, alpha_orig: i32, beta: i32) -> EntryType {
        if score <= alpha_orig {
            EntryType::UpperBound
        } else if score >= beta {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        }
    }

    /// Evaluate every root move at a fixed depth.
    ///
    /// Each candidate is scored with a full window as the negated value of
    /// its successor; the first strictly greatest wins.
    pub fn search_root(&mut self, board: &Board, color: Stone, depth: i8) -> SearchResult {
        let moves = legal_moves(board, color);
        let mut result = SearchResult::empty();
        result.depth = depth;

        if moves.is_empty() {
            result.score = self.negamax(board, color, depth, -INF, INF);
            return result;
        }

        let opponent = color.opponent();
        let mut best_score = -INF;
        for mov in moves {
            let child = apply_move_unchecked(board, mov, color);
            let score = -self.negamax(&child, opponent, depth - 1, -INF, INF);
            trace!("depth {depth}: {mov} scores {score}");
            if score > best_score {
                best_score = score;
                result.best_move = Some(mov);
            }
        }
        result.score = best_score;
        result
    }

    /// Search for the best move using iterative deepening.
    #[must_use]
    pub fn search(&mut self, board: &Board, color: Stone, max_depth: i8) -> SearchResult {
        self.search_until(board, color, max_depth, None)
    }

    /// Iterative deepening over depths `1..=max_depth`.
    ///
    /// The deadline is only checked between depths: a started iteration
    /// always completes, and depth 1 always runs. The result of the deepest
    /// completed iteration is returned.
    #[must_use]
    pub fn search_until(
        &mut self,
        board: &Board,
        color: Stone,
        max_depth: i8,
        deadline: Option<Instant>,
    ) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();
        self.tt.new_search();

        let mut best_result = SearchResult::empty();

        for depth in 1..=max_depth.max(1) {
            if depth > 1 && deadline.is_some_and(|d| Instant::now() >= d) {
                debug!("deadline reached before depth {depth}");
                break;
            }

            let result = self.search_root(board, color, depth);
            debug!(
                "depth {} done: move {:?} score {} nodes {}",
                depth, result.best_move, result.score, self.nodes
            );
            best_result = result;

            // No choice to make: deeper iterations cannot change the answer
            if best_result.best_move.is_none() {
                break;
            }
        }

        best_result.nodes = self.nodes;
        best_result.stats = self.stats.clone();
        best_result
    }

    /// Nodes visited since the last `search` call began
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Reset the node counter (for callers driving `negamax` directly)
    pub fn reset_nodes(&mut self) {
        self.nodes = 0;
    }

    /// Get statistics about the transposition table.
    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.tt.stats()
    }

    /// Clear the transposition table.
    pub fn clear_tt(&mut self) {
        trace!("clearing transposition table");
        self.tt.clear();
    }
}
