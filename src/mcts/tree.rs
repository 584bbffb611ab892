//! Search tree stored as an arena.
//!
//! Nodes live in one `Vec` and point at each other through [`NodeId`]s. A
//! tree belongs to a single search; the next search starts a fresh one.

use tracing::trace;

use super::node::{MCTSNode, NodeId};
use crate::core::{GameRng, GameState};

/// Node arena rooted at the searched position.
#[derive(Clone, Debug)]
pub struct MCTSTree {
    nodes: Vec<MCTSNode>,
    /// Always index 0.
    root: NodeId,
}

impl MCTSTree {
    pub fn new(root_state: GameState) -> Self {
        Self::with_capacity(root_state, 1024)
    }

    /// Tree holding only `root_state`, with room reserved for `capacity` nodes.
    pub fn with_capacity(root_state: GameState, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(MCTSNode::root(root_state));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Node behind `id`. Panics on an id from another tree.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MCTSNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode {
        &mut self.nodes[id.index()]
    }

    fn push(&mut self, node: MCTSNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Materialize one pending successor of `parent` as a new child.
    ///
    /// Returns `None` when `parent` is already fully expanded.
    pub fn expand(&mut self, parent: NodeId, rng: &mut GameRng) -> Option<NodeId> {
        let state = self.get_mut(parent).take_pending(rng)?;
        let key = state.key();
        let depth = self.get(parent).depth + 1;
        let child = self.push(MCTSNode::new(state, parent, depth));
        self.get_mut(parent).link_child(key, child);
        trace!(%parent, %child, depth, key = %key, "expanded");
        Some(child)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true: a tree always holds its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn root_node(&self) -> &MCTSNode {
        self.get(self.root)
    }

    /// Nodes in allocation order, so parents precede their children.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MCTSNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Shape summary, computed in one pass per field.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            node_count: self.nodes.len(),
            max_depth: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
            terminal_count: self.nodes.iter().filter(|n| n.is_terminal).count(),
            fully_expanded: self.nodes.iter().filter(|n| n.is_fully_expanded()).count(),
            total_children: self.nodes.iter().map(|n| n.children().len()).sum(),
            leaf_count: self.nodes.iter().filter(|n| n.children().is_empty()).count(),
        }
    }
}

/// Shape of a search tree.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    pub node_count: usize,

    /// Deepest node, in plies below the root.
    pub max_depth: u16,

    /// Nodes holding a decided or stuck position.
    pub terminal_count: usize,

    /// Nodes with no pending successors left (terminal nodes included).
    pub fully_expanded: usize,

    /// Parent-child links.
    pub total_children: usize,

    /// Nodes without children.
    pub leaf_count: usize,
}

impl TreeStats {
    /// Average children per non-leaf node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let inner = self.node_count.saturating_sub(self.leaf_count);
        if inner == 0 {
            0.0
        } else {
            self.total_children as f64 / inner as f64
        }
    }
}
