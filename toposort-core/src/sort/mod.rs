//! Topological Ordering
//!
//! This module turns a [`Graph`] into a sequence in which every node comes
//! after all of its dependencies.
//!
//! # Algorithm
//!
//! Every strategy starts with the same discovery step:
//!
//! 1. Take the caller's nodes in iteration order
//! 2. Add everything reachable from them through dependency *or* dependent
//!    edges, breadth first
//!
//! The discovered set is what gets ordered, so a subset of the graph still
//! pulls in the nodes it is connected to. Two strategies are provided:
//!
//! - [`DepthFirst`]: post-order traversal over dependencies
//! - [`Kahn`]: in-degree reduction with a FIFO ready queue
//!
//! Both fail with [`Error::CycleDetected`](crate::Error::CycleDetected)
//! when the discovered nodes contain a cycle. When several valid orders
//! exist, each strategy returns one of them; the two need not agree.

mod depth_first;
mod kahn;
mod mode;

use std::collections::VecDeque;

use indexmap::IndexSet;

use crate::error::Result;
use crate::graph::{Graph, NodeId};

pub use depth_first::DepthFirst;
pub use kahn::Kahn;
pub use mode::{SortMode, Sorter};

/// A strategy that produces a topological order.
pub trait TopologicalSort {
    /// Order the nodes connected to `nodes` so that dependencies come first.
    ///
    /// The result holds each discovered node exactly once. The graph is
    /// only read.
    fn sort<T, I>(&self, graph: &Graph<T>, nodes: I) -> Result<Vec<NodeId>>
    where
        I: IntoIterator<Item = NodeId>;
}

/// Collect the input nodes and everything connected to them.
///
/// Input nodes come first in the order given, followed by the remaining
/// nodes in breadth-first discovery order.
pub(crate) fn discover<T, I>(graph: &Graph<T>, nodes: I) -> Result<IndexSet<NodeId>>
where
    I: IntoIterator<Item = NodeId>,
{
    let mut seen = IndexSet::new();
    for id in nodes {
        graph.check(id)?;
        seen.insert(id);
    }

    let mut queue: VecDeque<NodeId> = seen.iter().copied().collect();
    while let Some(id) = queue.pop_front() {
        let node = &graph[id];
        for &next in node.dependencies().iter().chain(node.dependents()) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    Ok(seen)
}

impl<T> Graph<T> {
    /// Order `nodes` and everything connected to them using `mode`.
    pub fn sort<I>(&self, mode: SortMode, nodes: I) -> Result<Vec<NodeId>>
    where
        I: IntoIterator<Item = NodeId>,
    {
        mode.sorter().sort(self, nodes)
    }

    /// Order every node in the graph using `mode`.
    pub fn sort_all(&self, mode: SortMode) -> Result<Vec<NodeId>> {
        self.sort(mode, self.ids())
    }
}
