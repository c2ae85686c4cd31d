//! Indented label formatter.

use super::{id_label, IdLabel};
use crate::graph::{TraversalState, Visitor};
use crate::identity::Identifiable;

/// Indent unit used by [`indent_formatter`].
pub const DEFAULT_INDENT: &str = "  ";

/// Renders each node as its label, indented once per level of depth.
#[derive(Debug, Clone)]
pub struct IndentFormatter<L> {
    label: L,
    indent: String,
}

/// Indent formatter labelling nodes by identity with a two-space indent.
pub fn indent_formatter<T: Identifiable>() -> IndentFormatter<IdLabel<T>> {
    IndentFormatter::new(id_label::<T> as IdLabel<T>)
}

impl<L> IndentFormatter<L> {
    /// Create a formatter with a custom label and the default indent.
    pub fn new(label: L) -> Self {
        Self {
            label,
            indent: DEFAULT_INDENT.to_string(),
        }
    }

    /// Replace the indent unit.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}

impl<T, L> Visitor<T, Vec<String>> for IndentFormatter<L>
where
    L: Fn(&T) -> String,
{
    fn visit(&mut self, node: &T, state: &TraversalState<'_, T>, lines: &mut Vec<String>) {
        lines.push(format!("{}{}", self.indent.repeat(state.depth), (self.label)(node)));
    }
}
