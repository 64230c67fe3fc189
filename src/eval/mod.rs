//! Position evaluation
//!
//! Static scoring of Othello positions for the search leaves.

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, positional_score};
pub use weights::{pos_weight, square_weight, EvalWeights, SQUARE_WEIGHTS};
