//! Dependency Graph
//!
//! This module implements the graph that the ordering strategies consume.
//!
//! # Overview
//!
//! The dependency graph is a directed graph where:
//!
//! - Nodes wrap an arbitrary payload value
//! - Edges represent dependencies: if A depends on B, B must be ordered
//!   before A
//!
//! Nothing stops a caller from wiring a cycle. The storage tolerates cycles
//! and the sorters are responsible for rejecting them.
//!
//! # Design Decisions
//!
//! 1. Nodes live in an arena owned by [`Graph`] and are addressed by
//!    [`NodeId`] handles, so cyclic data needs no reference counting.
//!
//! 2. Node identity is handle identity. Two nodes with equal payloads are
//!    distinct graph entities.
//!
//! 3. We maintain both forward (dependencies) and reverse (dependents) edges
//!    so that traversal works in both directions. Adding an edge updates both
//!    lists in one call.

mod arena;
mod node;

pub use arena::Graph;
pub use node::{Node, NodeId};
