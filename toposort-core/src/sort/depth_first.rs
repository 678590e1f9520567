//! Depth-First Ordering
//!
//! Post-order traversal over dependency edges. A node is emitted once all of
//! its dependencies have been emitted.
//!
//! The traversal keeps an explicit stack instead of recursing, so long
//! dependency chains cost heap memory rather than native stack. Each node
//! carries one of three marks:
//!
//! - `Unvisited`: not reached yet
//! - `Visiting`: on the current path
//! - `Done`: emitted
//!
//! Reaching a `Visiting` node means the path has looped back on itself.
//! Reaching a `Done` node is the normal case for shared dependencies
//! (diamonds) and is skipped.

use tracing::debug;

use super::{discover, TopologicalSort};
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Traversal mark for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Visiting,
    Done,
}

/// A node on the traversal stack and the next dependency to look at.
#[derive(Debug)]
struct Frame {
    id: NodeId,
    next: usize,
}

/// Depth-first topological sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthFirst;

impl TopologicalSort for DepthFirst {
    fn sort<T, I>(&self, graph: &Graph<T>, nodes: I) -> Result<Vec<NodeId>>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let roots = discover(graph, nodes)?;
        debug!(nodes = roots.len(), "depth-first sort");

        let mut marks = vec![Mark::Unvisited; graph.len()];
        let mut order = Vec::with_capacity(roots.len());
        let mut stack: Vec<Frame> = Vec::new();

        for &root in &roots {
            if marks[root.index()] != Mark::Unvisited {
                continue;
            }
            marks[root.index()] = Mark::Visiting;
            stack.push(Frame { id: root, next: 0 });

            while let Some(frame) = stack.last_mut() {
                let dependencies = graph[frame.id].dependencies();

                let Some(&dep) = dependencies.get(frame.next) else {
                    // All dependencies emitted
                    marks[frame.id.index()] = Mark::Done;
                    order.push(frame.id);
                    stack.pop();
                    continue;
                };
                frame.next += 1;

                match marks[dep.index()] {
                    Mark::Unvisited => {
                        marks[dep.index()] = Mark::Visiting;
                        stack.push(Frame { id: dep, next: 0 });
                    }
                    Mark::Visiting => {
                        let cycle = cycle_from(&stack, dep);
                        debug!(nodes = cycle.len(), "depth-first sort found a cycle");
                        return Err(Error::CycleDetected { nodes: cycle });
                    }
                    Mark::Done => {}
                }
            }
        }

        Ok(order)
    }
}

/// The path from `entry` to the top of the stack.
///
/// `entry` is always on the stack when this is called.
fn cycle_from(stack: &[Frame], entry: NodeId) -> Vec<NodeId> {
    let start = stack.iter().position(|f| f.id == entry).unwrap_or(0);
    stack[start..].iter().map(|f| f.id).collect()
}
