//! Errors returned by graph construction and sorting.

use thiserror::Error;

use crate::graph::NodeId;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building or ordering a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The dependency relation over the discovered nodes is not acyclic.
    ///
    /// For the depth-first strategy `nodes` is the cycle itself, in path
    /// order. For the Kahn strategy it is every node that could not be
    /// scheduled: the cycle members plus anything waiting behind them.
    #[error("dependency cycle detected among {} node(s): [{}]", .nodes.len(), join(.nodes))]
    CycleDetected { nodes: Vec<NodeId> },

    /// A strategy name that does not map to any known sort mode.
    #[error("unsupported sort mode: {0:?}")]
    UnsupportedMode(String),

    /// The handle does not belong to the graph it was used with.
    #[error("node {0} does not belong to this graph")]
    UnknownNode(NodeId),
}

/// Format handles the same way as [`NodeId`]'s `Display`.
fn join(ids: &[NodeId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Whether this error reports a dependency cycle.
    pub fn is_cycle(&self) -> bool {
        matches!(self, Error::CycleDetected { .. })
    }
}
