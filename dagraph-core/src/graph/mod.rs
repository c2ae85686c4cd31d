//! Dependency Graph
//!
//! This module implements the directed acyclic graph that stores payloads
//! and the dependencies between them.
//!
//! # Overview
//!
//! - Nodes wrap a caller payload, looked up by its identity string
//! - An edge `from -> to` means `to` depends on `from`
//!
//! Edges that would close a cycle are rejected. On top of the stored
//! dependency sets the graph offers a topological ordering, reversal, and
//! a depth-first tree expansion that the formatters build on.
//!
//! # Design Decisions
//!
//! 1. Only dependencies are stored. The forward view used by traversal is
//!    derived on demand, so there is a single source of truth per edge.
//!
//! 2. Nodes are kept in an insertion-ordered map, so every sequence the
//!    graph produces is deterministic.
//!
//! 3. Both walks use explicit stacks rather than recursion.

mod dag;
mod node;
mod topo;
mod traverse;

pub use dag::{create_graph, DAGraph, GraphSnapshot};
pub use node::Node;
pub use topo::TopologicalSort;
pub use traverse::{TraversalState, Visitor};
