//! Engine configuration
//!
//! Search depth grows as the board fills: early positions branch widely and
//! are cheap to misjudge, late positions branch little and are decided by
//! exact disc counts.

use std::time::Duration;

/// Default transposition table size in slots
pub const DEFAULT_TT_SLOTS: usize = 1 << 18;

/// Maps the number of empty cells to a search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthPolicy {
    /// Depth while more than `midgame_empties` cells are empty
    pub opening_depth: i8,
    /// Depth once at most `midgame_empties` cells are empty
    pub midgame_depth: i8,
    pub midgame_empties: u32,
    /// Depth once at most `endgame_empties` cells are empty
    pub endgame_depth: i8,
    pub endgame_empties: u32,
}

impl DepthPolicy {
    /// Same depth at every stage of the game
    #[must_use]
    pub fn fixed(depth: i8) -> Self {
        Self {
            opening_depth: depth,
            midgame_depth: depth,
            midgame_empties: 0,
            endgame_depth: depth,
            endgame_empties: 0,
        }
    }

    /// Search depth for a board with `empties` empty cells.
    ///
    /// Never deeper than the number of empties (the game cannot last
    /// longer), never below 1.
    #[must_use]
    pub fn depth_for(&self, empties: u32) -> i8 {
        let depth = if empties <= self.endgame_empties {
            self.endgame_depth
        } else if empties <= self.midgame_empties {
            self.midgame_depth
        } else {
            self.opening_depth
        };
        let cap = i8::try_from(empties).unwrap_or(i8::MAX);
        depth.min(cap).max(1)
    }
}

impl Default for DepthPolicy {
    fn default() -> Self {
        Self {
            opening_depth: 4,
            midgame_depth: 6,
            midgame_empties: 13,
            endgame_depth: 8,
            endgame_empties: 10,
        }
    }
}

/// Tunable engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Transposition table size in slots
    pub tt_slots: usize,
    pub depth_policy: DepthPolicy,
    /// Soft limit checked between iterative-deepening depths
    pub time_limit: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tt_slots: DEFAULT_TT_SLOTS,
            depth_policy: DepthPolicy::default(),
            time_limit: None,
        }
    }
}
