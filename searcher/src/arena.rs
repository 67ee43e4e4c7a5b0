//! Node storage shared by the search algorithms.
//!
//! Every candidate generated during a search lives in a single
//! append-only arena. A node refers to the node which generated
//! it by index, so the search tree can be walked back to its
//! root without any shared ownership.

use std::fmt::Debug;
use std::ops::Index;

/// Handle to a node stored in a [NodeArena].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single candidate in the search tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<S> {
    pub state: S,
    pub parent: Option<NodeId>,

    /// Cost of the moves from the root to this node.
    pub g: usize,

    /// Estimated cost from this node to the goal.
    pub h: usize,

    /// Total estimated cost, `g + h`.
    pub f: usize,
}

impl<S> SearchNode<S> {
    /// The node every search starts from, with all costs at zero.
    pub fn root(state: S) -> Self {
        Self {
            state,
            parent: None,
            g: 0,
            h: 0,
            f: 0,
        }
    }

    /// A node one move away from `parent`.
    pub fn child(state: S, parent: NodeId, g: usize, h: usize) -> Self {
        Self {
            state,
            parent: Some(parent),
            g,
            h,
            f: g + h,
        }
    }
}

/// Append-only storage for search nodes.
#[derive(Debug)]
pub struct NodeArena<S> {
    nodes: Vec<SearchNode<S>>,
}

impl<S> Default for NodeArena<S> {
    fn default() -> Self {
        NodeArena { nodes: Vec::new() }
    }
}

impl<S> NodeArena<S>
where
    S: Debug + Clone,
{
    pub fn insert(&mut self, node: SearchNode<S>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode<S>> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk the parent links from `id` back to the root, and return
    /// the states in root-first order.
    pub fn trace(&self, id: NodeId) -> Vec<S> {
        let mut states = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current.and_then(|i| self.get(i)) {
            states.push(node.state.clone());
            current = node.parent;
        }
        states.reverse();
        states
    }
}

impl<S> Index<NodeId> for NodeArena<S> {
    type Output = SearchNode<S>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}
