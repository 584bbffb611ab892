//! # baghchal-mcts
//!
//! Bagh-Chal (tigers and goats) rules engine with a Monte Carlo Tree Search
//! opponent.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: Every transition returns a new `GameState`.
//!    States are fixed-size values, so cloning never allocates.
//!
//! 2. **Scores Are Goat-Perspective**: Heuristics and rollouts report how
//!    good a position is for the goats; the tree flips the sign per node.
//!
//! 3. **Reproducible Search**: All randomness flows through a seeded
//!    `GameRng`, so the same config and position give the same move.
//!
//! ## Modules
//!
//! - `core`: Coordinates, board lines, state, moves, RNG, errors
//! - `rules`: Legal moves, successors, captures, win and draw detection
//! - `eval`: Static heuristic used at rollout cutoffs
//! - `mcts`: Monte Carlo Tree Search
//!
//! ## Example
//!
//! ```rust
//! use baghchal_mcts::{Coord, GameState, MCTSConfig};
//!
//! let state = GameState::new();
//! let after_goat = state.place(Coord::new(2, 2)?)?;
//!
//! let config = MCTSConfig::default().with_iterations(300);
//! let reply = baghchal_mcts::mcts::search(&after_goat, config);
//! assert!(reply.is_some());
//! # Ok::<(), baghchal_mcts::MoveError>(())
//! ```

pub mod core;
pub mod eval;
pub mod mcts;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardKey, Coord, GameRng, GameState, LayoutError, Move, MoveError, ProgressWindow, Side,
};

pub use crate::rules::GameResult;

pub use crate::eval::{evaluate, HeuristicWeights};

pub use crate::mcts::{
    HeuristicRollout, MCTSConfig, MCTSNode, MCTSSearch, MCTSTree, NodeId, RandomRollout,
    SearchBudget, SearchStats, SelectionPolicy, SimulationKind, SimulationPolicy, TreeStats, UCT,
};
