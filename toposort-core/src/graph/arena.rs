//! Graph Storage
//!
//! The graph owns every node in a dense vector and hands out [`NodeId`]
//! handles. Edges are stored on the nodes as handle lists, so the graph may
//! be cyclic as data without any ownership cycles.

use std::ops::Index;

use tracing::trace;

use super::node::{Node, NodeId};
use crate::error::{Error, Result};

/// An arena of nodes connected by dependency edges.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// All nodes in the graph, indexed by handle.
    nodes: Vec<Node<T>>,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a node to the graph.
    ///
    /// Only the payload is kept. Edges a node carries from another graph
    /// refer to that graph's handles, so they are dropped; wire edges with
    /// [`add_dependency`](Self::add_dependency).
    pub fn add_node(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId::from(self.nodes.len());
        self.nodes.push(Node::new(node.into_value()));
        id
    }

    /// Add a new edgeless node carrying `value`.
    pub fn insert(&mut self, value: T) -> NodeId {
        self.add_node(Node::new(value))
    }

    /// Record that `node` depends on `dependency`.
    ///
    /// `dependency` is appended to `node`'s dependencies and `node` to
    /// `dependency`'s dependents. Cycles, self loops and repeated edges are
    /// accepted here; cycles are reported when sorting.
    pub fn add_dependency(&mut self, node: NodeId, dependency: NodeId) -> Result<()> {
        self.check(node)?;
        self.check(dependency)?;

        trace!(%node, %dependency, "adding dependency edge");
        self.nodes[node.index()].push_dependency(dependency);
        self.nodes[dependency.index()].push_dependent(node);
        Ok(())
    }

    /// Record that `node` depends on each of `dependencies`, in order.
    ///
    /// Stops at the first handle that does not belong to the graph. Edges
    /// added before that point are kept.
    pub fn add_dependencies<I>(&mut self, node: NodeId, dependencies: I) -> Result<()>
    where
        I: IntoIterator<Item = NodeId>,
    {
        for dependency in dependencies {
            self.add_dependency(node, dependency)?;
        }
        Ok(())
    }

    /// Get a reference to a node.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.index())
    }

    /// Get a node's payload.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(Node::value)
    }

    /// Check whether the handle belongs to this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Get the total number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the total number of dependency edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.dependencies().len()).sum()
    }

    /// Iterate over every handle in insertion order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::from)
    }

    /// Iterate over every node with its handle, in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (NodeId, &Node<T>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::from(index), node))
    }

    /// Fail with [`Error::UnknownNode`] if the handle is not ours.
    pub(crate) fn check(&self, id: NodeId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(Error::UnknownNode(id))
        }
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for Graph<T> {
    type Output = Node<T>;

    /// Panics if the handle does not belong to this graph.
    fn index(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }
}

impl<T> FromIterator<T> for Graph<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            nodes: values.into_iter().map(Node::new).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortMode;

    #[test]
    fn add_nodes() {
        let mut graph = Graph::new();
        let a = graph.insert("a");
        let b = graph.add_node(Node::new("b"));

        assert_eq!(graph.len(), 2);
        assert_ne!(a, b);
        assert_eq!(graph.value(a), Some(&"a"));
        assert_eq!(graph[b].value(), &"b");
        assert_eq!(graph.ids().collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn add_node_drops_foreign_edges() {
        let mut source = Graph::new();
        let x = source.insert("x");
        let y = source.insert("y");
        source.add_dependency(y, x).unwrap();

        // The clone still lists `x`, a handle that belongs to `source`
        let mut target = Graph::new();
        let copy = target.add_node(source[y].clone());
        assert!(target[copy].is_isolated());
        assert_eq!(target.edge_count(), 0);

        for mode in SortMode::ALL {
            assert_eq!(target.sort_all(mode), Ok(vec![copy]), "{mode}");
        }

        let x2 = target.insert("x");
        target.add_dependency(copy, x2).unwrap();
        for mode in SortMode::ALL {
            assert_eq!(target.sort_all(mode), Ok(vec![x2, copy]), "{mode}");
        }
    }

    #[test]
    fn iter_pairs_handles_with_nodes() {
        let graph: Graph<_> = ["a", "b"].into_iter().collect();
        let pairs: Vec<_> = graph.iter().map(|(id, node)| (id, *node.value())).collect();
        assert_eq!(pairs, vec![(NodeId::from(0), "a"), (NodeId::from(1), "b")]);
    }

    #[test]
    fn equal_values_are_distinct_nodes() {
        let mut graph = Graph::new();
        let first = graph.insert(42);
        let second = graph.insert(42);

        assert_ne!(first, second);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn add_dependency_updates_both_sides() {
        let mut graph = Graph::new();
        let a = graph.insert("a");
        let b = graph.insert("b");

        graph.add_dependency(b, a).unwrap();

        assert_eq!(graph[b].dependencies(), &[a]);
        assert_eq!(graph[a].dependents(), &[b]);
        assert!(graph[a].dependencies().is_empty());
        assert!(graph[b].dependents().is_empty());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn duplicate_edges_are_kept() {
        let mut graph = Graph::new();
        let a = graph.insert("a");
        let b = graph.insert("b");

        graph.add_dependency(b, a).unwrap();
        graph.add_dependency(b, a).unwrap();

        assert_eq!(graph[b].dependencies(), &[a, a]);
        assert_eq!(graph[a].dependents(), &[b, b]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn self_loop_is_accepted() {
        let mut graph = Graph::new();
        let a = graph.insert("a");

        graph.add_dependency(a, a).unwrap();

        assert_eq!(graph[a].dependencies(), &[a]);
        assert_eq!(graph[a].dependents(), &[a]);
    }

    #[test]
    fn add_dependencies_in_order() {
        let mut graph: Graph<_> = ["a", "b", "c", "d"].into_iter().collect();
        let ids: Vec<_> = graph.ids().collect();

        graph.add_dependencies(ids[3], [ids[0], ids[2], ids[1]]).unwrap();

        assert_eq!(graph[ids[3]].dependencies(), &[ids[0], ids[2], ids[1]]);
        for &dep in &ids[..3] {
            assert_eq!(graph[dep].dependents(), &[ids[3]]);
        }
    }

    #[test]
    fn foreign_handle_is_rejected() {
        let mut graph = Graph::new();
        let a = graph.insert("a");
        let stray = NodeId::from(5);

        assert_eq!(graph.add_dependency(a, stray), Err(Error::UnknownNode(stray)));
        assert_eq!(graph.add_dependency(stray, a), Err(Error::UnknownNode(stray)));
        assert!(graph[a].is_isolated());
        assert!(graph.node(stray).is_none());
    }
}
