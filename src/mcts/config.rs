//! Search settings.

use serde::{Deserialize, Serialize};

use crate::eval::HeuristicWeights;

/// When a search stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchBudget {
    /// Fixed number of select/simulate/backpropagate cycles.
    Iterations(u32),
    /// Wall-clock limit in milliseconds.
    Time(u64),
}

/// Which rollout policy a search uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationKind {
    /// Random plies up to `rollout_depth`, then the static heuristic.
    #[default]
    Heuristic,
    /// Random plies until the game ends (capped by `max_rollout_plies`).
    Random,
}

/// Everything one search needs besides the position.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSConfig {
    /// Weight of the exploration term in UCT.
    pub exploration_constant: f64,

    /// Iteration count or time limit.
    pub budget: SearchBudget,

    /// Hard cap on tree size; reaching it ends the search.
    pub max_nodes: usize,

    /// Plies played by a heuristic rollout before it falls back to the
    /// static evaluation.
    pub rollout_depth: u32,

    /// Safety cap for random rollouts; hitting it scores as a draw.
    pub max_rollout_plies: u32,

    /// Seed for tree policy and rollouts.
    pub seed: u64,

    /// Rollout policy.
    pub simulation: SimulationKind,

    /// Heuristic term weights used at the rollout cutoff.
    pub weights: HeuristicWeights,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            exploration_constant: 2.0,
            budget: SearchBudget::Iterations(60_000),
            max_nodes: 250_000,
            rollout_depth: 15,
            max_rollout_plies: 400,
            seed: 42,
            simulation: SimulationKind::Heuristic,
            weights: HeuristicWeights::default(),
        }
    }
}

impl MCTSConfig {
    /// Override the UCT exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Stop after `iterations` rounds.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.budget = SearchBudget::Iterations(iterations);
        self
    }

    /// Stop once `millis` milliseconds have passed.
    pub fn with_time_limit(mut self, millis: u64) -> Self {
        self.budget = SearchBudget::Time(millis);
        self
    }

    /// Override the node cap.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Override the heuristic rollout depth.
    pub fn with_rollout_depth(mut self, depth: u32) -> Self {
        self.rollout_depth = depth;
        self
    }

    /// Override the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_simulation(mut self, kind: SimulationKind) -> Self {
        self.simulation = kind;
        self
    }

    pub fn with_weights(mut self, weights: HeuristicWeights) -> Self {
        self.weights = weights;
        self
    }
}
