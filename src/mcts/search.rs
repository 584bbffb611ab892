//! The search loop.
//!
//! Each iteration selects a leaf with UCT, expands exactly one new child
//! (unless it reached a terminal node), runs one rollout from it and
//! backpropagates the goat-perspective score to the root. The move played
//! is the most visited root child.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::core::{GameRng, GameState};

use super::config::{MCTSConfig, SearchBudget, SimulationKind};
use super::node::NodeId;
use super::policy::{
    most_visited, HeuristicRollout, RandomRollout, SelectionPolicy, SimulationPolicy, UCT,
};
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// Reusable searcher.
///
/// Keeps its RNG between searches, so consecutive searches with one
/// searcher draw different numbers while staying reproducible.
pub struct MCTSSearch {
    config: MCTSConfig,

    /// Tree built by the last search.
    tree: Option<MCTSTree>,

    /// RNG for tree policy; rollouts use forks of it.
    rng: GameRng,

    selection: Box<dyn SelectionPolicy>,

    simulation: Box<dyn SimulationPolicy>,

    /// Counters for the last search.
    stats: SearchStats,
}

impl MCTSSearch {
    /// Searcher using UCT and the rollout named by `config.simulation`.
    pub fn new(config: MCTSConfig) -> Self {
        let simulation: Box<dyn SimulationPolicy> = match config.simulation {
            SimulationKind::Heuristic => Box::new(HeuristicRollout {
                depth: config.rollout_depth,
                weights: config.weights.clone(),
            }),
            SimulationKind::Random => Box::new(RandomRollout {
                max_plies: config.max_rollout_plies,
            }),
        };

        Self {
            rng: GameRng::new(config.seed),
            config,
            tree: None,
            selection: Box::new(UCT),
            simulation,
            stats: SearchStats::default(),
        }
    }

    /// Replace UCT.
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Replace the configured rollout.
    pub fn with_simulation<S: SimulationPolicy + 'static>(mut self, simulation: S) -> Self {
        self.simulation = Box::new(simulation);
        self
    }

    /// Search from `root` and return the chosen successor.
    ///
    /// Returns `None` when `root` is terminal or has no legal move. A root
    /// with a single successor returns it without searching. Otherwise at
    /// least one iteration runs, then more until the budget or the node cap
    /// is exhausted.
    pub fn search(&mut self, root: &GameState) -> Option<GameState> {
        let start = Instant::now();
        self.stats.reset();

        let capacity = self.config.max_nodes.min(1 << 16);
        let tree = self.tree.insert(MCTSTree::with_capacity(root.clone(), capacity));

        if tree.root_node().is_terminal {
            debug!(outcome = ?root.outcome(), "search root is terminal");
            return None;
        }

        let mut successors = root.successors();
        if successors.len() == 1 {
            debug!("single legal successor, skipping search");
            return successors.pop();
        }

        loop {
            self.iteration();
            self.stats.iterations += 1;

            if self.tree_len() >= self.config.max_nodes {
                warn!(
                    nodes = self.tree_len(),
                    max_nodes = self.config.max_nodes,
                    "node cap reached, stopping search early"
                );
                break;
            }
            if !self.within_budget(start) {
                break;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        let tree = self.tree.as_ref()?;
        let best = most_visited(tree, tree.root(), &mut self.rng)?;
        let chosen = tree.get(best);
        debug!(
            iterations = self.stats.iterations,
            nodes = tree.len(),
            max_depth = self.stats.max_depth,
            elapsed_us = self.stats.time_us,
            visits = chosen.visits,
            mean = chosen.mean_score(),
            "search finished"
        );
        Some(chosen.state.clone())
    }

    fn within_budget(&self, start: Instant) -> bool {
        match self.config.budget {
            SearchBudget::Iterations(n) => self.stats.iterations < n,
            SearchBudget::Time(ms) => start.elapsed() < Duration::from_millis(ms),
        }
    }

    fn tree_len(&self) -> usize {
        self.tree.as_ref().map_or(0, MCTSTree::len)
    }

    /// One round: descend, grow one node, roll out, push the score up.
    fn iteration(&mut self) {
        let Some(tree) = self.tree.as_mut() else {
            return;
        };
        let exploration = self.config.exploration_constant;
        let mut current = tree.root();

        // === SELECTION / EXPANSION ===
        loop {
            let node = tree.get(current);
            if node.is_terminal {
                self.stats.terminal_hits += 1;
                break;
            }
            if !node.is_fully_expanded() {
                if let Some(child) = tree.expand(current, &mut self.rng) {
                    self.stats.nodes_expanded += 1;
                    self.stats.max_depth = self.stats.max_depth.max(tree.get(child).depth);
                    current = child;
                    break;
                }
            }
            match self.selection.select(tree, current, exploration, &mut self.rng) {
                Some(child) => current = child,
                None => break,
            }
        }

        // === SIMULATION ===
        let mut sim_rng = self.rng.fork();
        let score = self.simulation.simulate(&tree.get(current).state, &mut sim_rng);
        self.stats.simulations += 1;

        // === BACKPROPAGATION ===
        backpropagate(tree, current, score);
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Tree of the last search, if any.
    #[must_use]
    pub fn tree(&self) -> Option<&MCTSTree> {
        self.tree.as_ref()
    }

    /// Root successors and their visit counts from the last search.
    pub fn child_visits(&self) -> Vec<(GameState, u32)> {
        let Some(tree) = self.tree.as_ref() else {
            return Vec::new();
        };
        tree.root_node()
            .children()
            .iter()
            .map(|&id| {
                let node = tree.get(id);
                (node.state.clone(), node.visits)
            })
            .collect()
    }

    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }
}

/// Add one visit and `score` along the path from `leaf` to the root.
///
/// `score` is goat-perspective; each node stores it from the view of the
/// side to move there.
fn backpropagate(tree: &mut MCTSTree, leaf: NodeId, score: f64) {
    let mut current = leaf;
    while !current.is_none() {
        let node = tree.get_mut(current);
        node.visits += 1;
        node.score += node.state.to_move().perspective() * score;
        current = node.parent;
    }
}

/// One-shot search with a fresh context.
pub fn search(state: &GameState, config: MCTSConfig) -> Option<GameState> {
    MCTSSearch::new(config).search(state)
}
