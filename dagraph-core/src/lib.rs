//! DAGraph Core
//!
//! This crate provides a generic directed acyclic graph of identifiable
//! payloads. It implements:
//!
//! - Node and dependency storage keyed by identity strings
//! - Cycle rejection on every edge insertion
//! - Topological ordering and graph reversal
//! - A depth-first tree-expansion traversal with positional state
//! - Text formatters built on that traversal
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `identity`: The `Identifiable` contract payloads implement
//! - `graph`: The DAG container, topological sort and traversal engine
//! - `format`: Indent and box-drawing tree visitors
//! - `error`: Errors raised by graph mutation
//!
//! # Example
//!
//! ```rust
//! use dagraph_core::create_graph;
//!
//! let mut graph = create_graph();
//! graph
//!     .add_edge("A", "B")?
//!     .add_edge("B", "C")?
//!     .add_edge("A", "D")?;
//!
//! let order: Vec<_> = graph.topological_sort().copied().collect();
//! assert_eq!(order, vec!["A", "B", "C", "D"]);
//!
//! assert_eq!(graph.print(), "A\n├── B\n│   └── C\n└── D");
//!
//! // Closing a cycle is rejected and leaves the graph untouched.
//! assert!(graph.add_edge("C", "A").is_err());
//! assert_eq!(graph.edges().count(), 3);
//! # Ok::<(), dagraph_core::DagError>(())
//! ```

pub mod error;
pub mod format;
pub mod graph;
pub mod identity;

pub use error::{DagError, Result};
pub use format::{indent_formatter, tree_ascii_formatter, IndentFormatter, TreeAsciiFormatter};
pub use graph::{create_graph, DAGraph, GraphSnapshot, Node, TopologicalSort, TraversalState, Visitor};
pub use identity::Identifiable;
