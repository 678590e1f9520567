//! Graph Nodes
//!
//! This module defines the node type that lives in the dependency graph and
//! the handle used to address it.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Edge list storage. Most nodes have a handful of neighbours.
pub(crate) type EdgeList = SmallVec<[NodeId; 4]>;

/// Handle to a node in a [`Graph`](super::Graph).
///
/// Handles are dense indices into the graph that created them. They are
/// only meaningful for that graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Get the raw index value.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the dependency graph.
///
/// The payload is fixed at construction. Edges are only added through
/// [`Graph::add_dependency`](super::Graph::add_dependency), which keeps both
/// directions in sync.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// The payload carried by this node.
    value: T,

    /// Nodes that this node depends on. These must be ordered before it.
    /// Duplicates are kept, one entry per `add_dependency` call.
    dependencies: EdgeList,

    /// Nodes that depend on this node. These must be ordered after it.
    dependents: EdgeList,
}

impl<T> Node<T> {
    /// Create a new node with no edges.
    pub fn new(value: T) -> Self {
        Self {
            value,
            dependencies: EdgeList::new(),
            dependents: EdgeList::new(),
        }
    }

    /// Get the node's payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the node and return its payload.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Get all dependencies, in the order they were added.
    pub fn dependencies(&self) -> &[NodeId] {
        &self.dependencies
    }

    /// Get all dependents, in the order they were added.
    pub fn dependents(&self) -> &[NodeId] {
        &self.dependents
    }

    /// Check whether the node has no edges in either direction.
    pub fn is_isolated(&self) -> bool {
        self.dependencies.is_empty() && self.dependents.is_empty()
    }

    pub(crate) fn push_dependency(&mut self, id: NodeId) {
        self.dependencies.push(id);
    }

    pub(crate) fn push_dependent(&mut self, id: NodeId) {
        self.dependents.push(id);
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node: {}", self.value)
    }
}
