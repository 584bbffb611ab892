//! Static evaluation of non-terminal positions.
//!
//! Used by heuristic rollouts when a playout is cut off before the game
//! ends. Scores are from the goats' point of view: higher is better for
//! goats.

pub mod heuristic;

pub use heuristic::{evaluate, evaluate_with, HeuristicWeights};
