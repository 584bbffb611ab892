//! Monte Carlo Tree Search for Bagh-Chal.
//!
//! ## Overview
//!
//! - **Arena tree**: nodes addressed by `NodeId`, children deduplicated by
//!   `BoardKey`, rebuilt for every search
//! - **UCT selection** with uniform random tie-breaking
//! - **Configurable rollouts**: heuristic cutoff (default) or full random
//! - **Robust child**: the most visited root child is played
//!
//! ## Usage
//!
//! ```rust
//! use baghchal_mcts::core::GameState;
//! use baghchal_mcts::mcts::{MCTSConfig, MCTSSearch};
//!
//! let state = GameState::new();
//! let config = MCTSConfig::default().with_iterations(500);
//! let mut search = MCTSSearch::new(config);
//!
//! if let Some(next) = search.search(&state) {
//!     assert_eq!(next.placed(), 1);
//! }
//!
//! for (successor, visits) in search.child_visits() {
//!     println!("{}: {visits}", successor.key());
//! }
//! ```
//!
//! ## Custom Policies
//!
//! ```rust
//! use baghchal_mcts::mcts::{MCTSConfig, MCTSSearch, RandomRollout};
//!
//! let search = MCTSSearch::new(MCTSConfig::default())
//!     .with_simulation(RandomRollout { max_plies: 200 });
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::{MCTSConfig, SearchBudget, SimulationKind};
pub use node::{Expansion, MCTSNode, NodeId};
pub use policy::{
    most_visited, HeuristicRollout, RandomRollout, SelectionPolicy, SimulationPolicy,
    TERMINAL_SCORE, UCT,
};
pub use search::{search, MCTSSearch};
pub use stats::SearchStats;
pub use tree::{MCTSTree, TreeStats};
