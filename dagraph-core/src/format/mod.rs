//! Text Formatters
//!
//! Visitors that render a traversal as lines of text. Each one appends a
//! line per visited node to a `Vec<String>` passed as the traversal context.
//!
//! ```rust
//! use dagraph_core::{create_graph, format::indent_formatter};
//!
//! let mut graph = create_graph();
//! graph.add_edge("A", "B")?.add_edge("B", "C")?;
//!
//! let mut lines = Vec::new();
//! graph.traverse_with(&mut indent_formatter::<&str>(), &mut lines);
//! assert_eq!(lines, vec!["A", "  B", "    C"]);
//! # Ok::<(), dagraph_core::DagError>(())
//! ```

mod indent;
mod tree;

pub use indent::{indent_formatter, IndentFormatter, DEFAULT_INDENT};
pub use tree::{tree_ascii_formatter, TreeAsciiFormatter};

use crate::identity::Identifiable;

/// Label function used when none is given: the node's identity.
pub type IdLabel<T> = fn(&T) -> String;

/// Label a node by its identity.
pub fn id_label<T: Identifiable>(node: &T) -> String {
    node.id().to_string()
}
