//! Search tree nodes.
//!
//! Uses arena-based allocation with index references (NodeId) so a child
//! can point back at its parent without ownership cycles.
//!
//! ## Expansion
//!
//! A node goes `Unexpanded -> Partial -> Full`. The first expansion step
//! generates every successor (deduplicated by [`BoardKey`]) into a pending
//! list; each step then materializes one of them as a child. A terminal
//! node is `Full` from construction and never changes.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::core::{BoardKey, GameRng, GameState};

/// Position of a node in its tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Marker for "no node".
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// True for the parent link of a root.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// Where a node stands in its expansion lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expansion {
    /// Successors not generated yet.
    Unexpanded,
    /// Some successors still waiting to become children.
    Partial,
    /// Every successor is a child, or the node is terminal.
    Full,
}

/// One position in the search tree.
#[derive(Clone, Debug)]
pub struct MCTSNode {
    /// Position this node stands for.
    pub state: GameState,

    /// `NodeId::NONE` at the root.
    pub parent: NodeId,

    /// Plies below the root.
    pub depth: u16,

    /// Rollouts that passed through this node.
    pub visits: u32,

    /// Accumulated rollout score, from the view of the side to move here.
    pub score: f64,

    /// Game over or no legal move. Fixed at construction.
    pub is_terminal: bool,

    children: SmallVec<[NodeId; 8]>,
    child_index: FxHashMap<BoardKey, NodeId>,
    pending: Option<Vec<GameState>>,
}

impl MCTSNode {
    /// Node for `state`, with its successors not yet generated.
    pub fn new(state: GameState, parent: NodeId, depth: u16) -> Self {
        let is_terminal = state.is_terminal();
        Self {
            state,
            parent,
            depth,
            visits: 0,
            score: 0.0,
            is_terminal,
            children: SmallVec::new(),
            child_index: FxHashMap::default(),
            pending: is_terminal.then(Vec::new),
        }
    }

    /// Parentless node at depth 0.
    pub fn root(state: GameState) -> Self {
        Self::new(state, NodeId::NONE, 0)
    }

    #[must_use]
    pub fn expansion(&self) -> Expansion {
        match &self.pending {
            None => Expansion::Unexpanded,
            Some(p) if p.is_empty() => Expansion::Full,
            Some(_) => Expansion::Partial,
        }
    }

    /// Check if every successor has become a child.
    #[must_use]
    pub fn is_fully_expanded(&self) -> bool {
        self.expansion() == Expansion::Full
    }

    /// Children in creation order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Child reached by the position with this key.
    #[must_use]
    pub fn child(&self, key: BoardKey) -> Option<NodeId> {
        self.child_index.get(&key).copied()
    }

    /// Mean score from the view of the side to move here.
    #[must_use]
    pub fn mean_score(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.score / f64::from(self.visits)
        }
    }

    /// Remove one random successor that is not a child yet.
    ///
    /// Generates the pending list on first use. Returns `None` once the node
    /// is fully expanded.
    pub(crate) fn take_pending(&mut self, rng: &mut GameRng) -> Option<GameState> {
        if self.pending.is_none() {
            self.pending = Some(self.fresh_successors());
        }
        rng.take(self.pending.as_mut()?)
    }

    fn fresh_successors(&self) -> Vec<GameState> {
        let mut seen = FxHashSet::default();
        self.state
            .successors()
            .into_iter()
            .filter(|s| {
                let key = s.key();
                !self.child_index.contains_key(&key) && seen.insert(key)
            })
            .collect()
    }

    pub(crate) fn link_child(&mut self, key: BoardKey, child: NodeId) {
        self.child_index.insert(key, child);
        self.children.push(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GOAT_COUNT;
    use crate::core::{Coord, Side};

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert_eq!(id.index(), 5);
        assert!(!id.is_none());
        assert_eq!(format!("{}", id), "NodeId(5)");

        assert!(NodeId::NONE.is_none());
        assert_eq!(format!("{}", NodeId::NONE), "NodeId(NONE)");
    }

    #[test]
    fn test_node_root() {
        let node = MCTSNode::root(GameState::new());

        assert!(node.parent.is_none());
        assert_eq!(node.depth, 0);
        assert_eq!(node.visits, 0);
        assert!(!node.is_terminal);
        assert!(node.children().is_empty());
        assert_eq!(node.expansion(), Expansion::Unexpanded);
        assert_eq!(node.mean_score(), 0.0);
    }

    #[test]
    fn test_terminal_node_is_fully_expanded() {
        let tigers = [(0, 0), (0, 4), (4, 0), (4, 4)].map(|(r, c)| Coord::new(r, c).unwrap());
        let state = GameState::from_layout(&tigers, &[], Side::Goat, GOAT_COUNT, 5).unwrap();
        let node = MCTSNode::root(state);

        assert!(node.is_terminal);
        assert!(node.is_fully_expanded());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_take_pending_drains_successors() {
        let mut node = MCTSNode::root(GameState::new());
        let mut rng = GameRng::new(3);

        let mut keys = Vec::new();
        while let Some(child) = node.take_pending(&mut rng) {
            if keys.is_empty() {
                assert_eq!(node.expansion(), Expansion::Partial);
            }
            let key = child.key();
            node.link_child(key, NodeId::new(keys.len() as u32 + 1));
            keys.push(key);
        }

        assert_eq!(keys.len(), 21);
        assert!(node.is_fully_expanded());
        assert_eq!(node.children().len(), 21);
        assert_eq!(node.child(keys[0]), Some(NodeId::new(1)));
    }
}
