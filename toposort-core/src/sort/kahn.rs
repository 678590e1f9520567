//! Kahn Ordering
//!
//! Iterative in-degree reduction:
//!
//! 1. Count, for every discovered node, how many dependency edges it has
//! 2. Queue every node whose count is zero, in discovery order
//! 3. Pop a node, emit it, and decrement each of its dependents
//! 4. A dependent whose count drops to zero joins the back of the queue
//!
//! If the queue drains before every node is emitted, the leftovers are stuck
//! behind a cycle.
//!
//! Counts are per edge, not per distinct neighbour. A duplicated edge adds
//! one to the count and is also listed twice among the dependents, so it is
//! decremented twice and the two stay balanced.

use std::collections::VecDeque;

use indexmap::IndexMap;
use tracing::debug;

use super::{discover, TopologicalSort};
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Kahn's algorithm with a FIFO ready queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Kahn;

impl TopologicalSort for Kahn {
    fn sort<T, I>(&self, graph: &Graph<T>, nodes: I) -> Result<Vec<NodeId>>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let discovered = discover(graph, nodes)?;
        debug!(nodes = discovered.len(), "kahn sort");

        // Discovery is closed under both edge directions, so every
        // dependent looked up below has an entry.
        let mut in_degree: IndexMap<NodeId, usize> = discovered
            .iter()
            .map(|&id| (id, graph[id].dependencies().len()))
            .collect();

        let mut queue: VecDeque<NodeId> = in_degree
            .iter()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(&id, _)| id)
            .collect();

        let mut order = Vec::with_capacity(discovered.len());
        while let Some(id) = queue.pop_front() {
            order.push(id);

            for &dependent in graph[id].dependents() {
                if let Some(degree) = in_degree.get_mut(&dependent) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(dependent);
                    }
                }
            }
        }

        if order.len() != discovered.len() {
            let stuck: Vec<NodeId> = in_degree
                .into_iter()
                .filter(|&(_, degree)| degree > 0)
                .map(|(id, _)| id)
                .collect();
            debug!(nodes = stuck.len(), "kahn sort found a cycle");
            return Err(Error::CycleDetected { nodes: stuck });
        }

        Ok(order)
    }
}
