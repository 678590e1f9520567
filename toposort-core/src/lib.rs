//! Toposort Core
//!
//! This crate orders the nodes of a dependency graph so that every node
//! appears after all of the nodes it depends on. It provides:
//!
//! - An arena-backed dependency graph with bidirectional edges
//! - A depth-first ordering strategy with explicit cycle tracking
//! - A Kahn (in-degree) ordering strategy
//! - A selector that maps a [`SortMode`] to a strategy
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: Nodes, node handles and the graph that owns them
//! - `sort`: The ordering contract and both strategies
//! - `error`: The crate-wide error type
//!
//! # Example
//!
//! ```rust
//! use toposort_core::{Graph, SortMode};
//!
//! let mut graph = Graph::new();
//! let a = graph.insert("a");
//! let b = graph.insert("b");
//! let c = graph.insert("c");
//!
//! // c needs b, b needs a
//! graph.add_dependency(c, b)?;
//! graph.add_dependency(b, a)?;
//!
//! let order = graph.sort(SortMode::Kahn, [c])?;
//! assert_eq!(order, vec![a, b, c]);
//! # Ok::<(), toposort_core::Error>(())
//! ```
//!
//! # Threading
//!
//! Sorting borrows the graph immutably, so the borrow checker already
//! rules out edge mutation during a sort within one thread. Sharing a
//! graph across threads while mutating it requires external
//! synchronization by the caller.

pub mod error;
pub mod graph;
pub mod sort;

pub use error::{Error, Result};
pub use graph::{Graph, Node, NodeId};
pub use sort::{DepthFirst, Kahn, SortMode, Sorter, TopologicalSort};
