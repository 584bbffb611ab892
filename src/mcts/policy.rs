//! MCTS policies for selection, simulation and final move choice.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: How to choose which child to descend into (UCT)
//! - `SimulationPolicy`: How to score a leaf (heuristic cutoff, full random)
//!
//! All scores are from the goats' point of view.

use smallvec::SmallVec;

use crate::core::{GameRng, GameState};
use crate::eval::{evaluate_with, HeuristicWeights};

use super::node::{MCTSNode, NodeId};
use super::tree::MCTSTree;

/// Score of a decided game in heuristic rollouts.
pub const TERMINAL_SCORE: f64 = 10_000.0;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for selecting which child node to explore.
pub trait SelectionPolicy: Send + Sync {
    /// Pick a child of `node`, or `None` if it has no children.
    fn select(
        &self,
        tree: &MCTSTree,
        node: NodeId,
        exploration: f64,
        rng: &mut GameRng,
    ) -> Option<NodeId>;
}

/// UCT (UCB1 applied to trees).
///
/// Formula: -S(c)/n(c) + C * sqrt(ln(N) / n(c))
///
/// A child's score is stored from the view of the side to move at the
/// child, so it is negated to get the value for the side that chose it.
/// Ties are broken uniformly at random among every maximal child.
#[derive(Clone, Debug, Default)]
pub struct UCT;

impl UCT {
    /// UCT value of `child` under a parent with `ln(N) = ln_parent`.
    #[must_use]
    pub fn value(child: &MCTSNode, ln_parent: f64, exploration: f64) -> f64 {
        if child.visits == 0 {
            return f64::INFINITY;
        }
        let visits = f64::from(child.visits);
        -child.score / visits + exploration * (ln_parent / visits).sqrt()
    }
}

impl SelectionPolicy for UCT {
    fn select(
        &self,
        tree: &MCTSTree,
        node: NodeId,
        exploration: f64,
        rng: &mut GameRng,
    ) -> Option<NodeId> {
        let parent = tree.get(node);
        let ln_parent = f64::from(parent.visits.max(1)).ln();
        best_by(parent.children(), rng, |id| {
            UCT::value(tree.get(id), ln_parent, exploration)
        })
    }
}

// =============================================================================
// Final Selection
// =============================================================================

/// Most visited child ("robust child"), ties broken at random.
pub fn most_visited(tree: &MCTSTree, node: NodeId, rng: &mut GameRng) -> Option<NodeId> {
    best_by(tree.get(node).children(), rng, |id| f64::from(tree.get(id).visits))
}

/// Uniform choice among the ids whose key is maximal.
fn best_by(
    ids: &[NodeId],
    rng: &mut GameRng,
    mut key: impl FnMut(NodeId) -> f64,
) -> Option<NodeId> {
    let mut best = f64::NEG_INFINITY;
    let mut ties: SmallVec<[NodeId; 8]> = SmallVec::new();
    for &id in ids {
        let value = key(id);
        if value > best {
            best = value;
            ties.clear();
            ties.push(id);
        } else if value == best {
            ties.push(id);
        }
    }
    rng.choose(&ties).copied()
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Policy for running simulations (rollouts) from a leaf node.
pub trait SimulationPolicy: Send + Sync {
    /// Play out from `state` and return a goat-perspective score.
    fn simulate(&self, state: &GameState, rng: &mut GameRng) -> f64;
}

/// Random plies up to a depth cutoff, then the static heuristic.
///
/// A decided game scores `±TERMINAL_SCORE` (0 for a draw); a side with no
/// legal move before any outcome scores 0.
#[derive(Clone, Debug)]
pub struct HeuristicRollout {
    pub depth: u32,
    pub weights: HeuristicWeights,
}

impl Default for HeuristicRollout {
    fn default() -> Self {
        Self {
            depth: 15,
            weights: HeuristicWeights::default(),
        }
    }
}

impl SimulationPolicy for HeuristicRollout {
    fn simulate(&self, state: &GameState, rng: &mut GameRng) -> f64 {
        let mut current = state.clone();
        let mut plies = 0;

        loop {
            if let Some(result) = current.outcome() {
                return result.score() * TERMINAL_SCORE;
            }
            if plies >= self.depth {
                return evaluate_with(&current, &self.weights);
            }
            let moves = current.legal_moves();
            let Some(&mv) = rng.choose(&moves) else {
                return 0.0;
            };
            current = current.apply(mv);
            plies += 1;
        }
    }
}

/// Random plies until the game is decided.
///
/// Scores `+1` / `-1` / `0`. Stuck sides and the `max_plies` safety cap
/// both score as a draw.
#[derive(Clone, Debug)]
pub struct RandomRollout {
    pub max_plies: u32,
}

impl Default for RandomRollout {
    fn default() -> Self {
        Self { max_plies: 400 }
    }
}

impl SimulationPolicy for RandomRollout {
    fn simulate(&self, state: &GameState, rng: &mut GameRng) -> f64 {
        let mut current = state.clone();

        for _ in 0..self.max_plies {
            if let Some(result) = current.outcome() {
                return result.score();
            }
            let moves = current.legal_moves();
            let Some(&mv) = rng.choose(&moves) else {
                return 0.0;
            };
            current = current.apply(mv);
        }
        current.outcome().map_or(0.0, |r| r.score())
    }
}
