//! Strategy Selection
//!
//! Maps a [`SortMode`] to the strategy that implements it. Modes can come
//! from code, from a string, or from a deserialized configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{DepthFirst, Kahn, TopologicalSort};
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Which ordering strategy to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Post-order depth-first traversal.
    #[default]
    #[serde(alias = "depth_first", alias = "dfs")]
    DepthFirst,

    /// In-degree reduction with a ready queue.
    Kahn,
}

impl SortMode {
    /// Every supported mode.
    pub const ALL: [SortMode; 2] = [SortMode::DepthFirst, SortMode::Kahn];

    /// The canonical name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::DepthFirst => "depth-first",
            SortMode::Kahn => "kahn",
        }
    }

    /// Get the strategy for this mode.
    pub fn sorter(self) -> Sorter {
        Sorter::new(self)
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "depth-first" | "depth_first" | "dfs" => Ok(SortMode::DepthFirst),
            "kahn" => Ok(SortMode::Kahn),
            _ => Err(Error::UnsupportedMode(s.to_string())),
        }
    }
}

/// A strategy chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sorter {
    /// Selected by [`SortMode::DepthFirst`].
    DepthFirst(DepthFirst),

    /// Selected by [`SortMode::Kahn`].
    Kahn(Kahn),
}

impl Sorter {
    /// Create the strategy for `mode`.
    pub fn new(mode: SortMode) -> Self {
        match mode {
            SortMode::DepthFirst => Sorter::DepthFirst(DepthFirst),
            SortMode::Kahn => Sorter::Kahn(Kahn),
        }
    }

    /// Create the strategy named by `name`.
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse().map(Sorter::new)
    }

    /// The mode this strategy implements.
    pub fn mode(&self) -> SortMode {
        match self {
            Sorter::DepthFirst(_) => SortMode::DepthFirst,
            Sorter::Kahn(_) => SortMode::Kahn,
        }
    }
}

impl From<SortMode> for Sorter {
    fn from(mode: SortMode) -> Self {
        Sorter::new(mode)
    }
}

impl TopologicalSort for Sorter {
    fn sort<T, I>(&self, graph: &Graph<T>, nodes: I) -> Result<Vec<NodeId>>
    where
        I: IntoIterator<Item = NodeId>,
    {
        match self {
            Sorter::DepthFirst(s) => s.sort(graph, nodes),
            Sorter::Kahn(s) => s.sort(graph, nodes),
        }
    }
}
