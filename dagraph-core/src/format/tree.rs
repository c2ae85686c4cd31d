//! Box-drawing tree formatter.

use smallvec::SmallVec;

use super::{id_label, IdLabel};
use crate::graph::{TraversalState, Visitor};
use crate::identity::Identifiable;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";

/// Renders the traversal as a tree drawn with `├──`, `└──` and `│`.
///
/// The formatter remembers, per depth, whether the last node seen at that
/// depth was the last of its siblings. That state belongs to one walk:
/// call [`TreeAsciiFormatter::reset`] before reusing it for another.
#[derive(Debug, Clone)]
pub struct TreeAsciiFormatter<L> {
    label: L,
    /// `is_last[d]`: the most recent node at depth `d` was a last child.
    is_last: SmallVec<[bool; 16]>,
}

/// Tree formatter labelling nodes by identity.
pub fn tree_ascii_formatter<T: Identifiable>() -> TreeAsciiFormatter<IdLabel<T>> {
    TreeAsciiFormatter::new(id_label::<T> as IdLabel<T>)
}

impl<L> TreeAsciiFormatter<L> {
    /// Create a formatter with a custom label.
    pub fn new(label: L) -> Self {
        Self {
            label,
            is_last: SmallVec::new(),
        }
    }

    /// Forget the state of the previous walk.
    pub fn reset(&mut self) {
        self.is_last.clear();
    }

    fn record(&mut self, depth: usize, is_last: bool) {
        if self.is_last.len() <= depth {
            self.is_last.resize(depth + 1, false);
        }
        self.is_last[depth] = is_last;
    }

    fn prefix(&self, depth: usize) -> String {
        (1..depth)
            .map(|level| match self.is_last.get(level) {
                Some(true) => BLANK,
                _ => PIPE,
            })
            .collect()
    }
}

impl<T, L> Visitor<T, Vec<String>> for TreeAsciiFormatter<L>
where
    L: Fn(&T) -> String,
{
    fn visit(&mut self, node: &T, state: &TraversalState<'_, T>, lines: &mut Vec<String>) {
        let is_last = state.is_last();
        self.record(state.depth, is_last);

        let label = (self.label)(node);
        if state.depth == 0 {
            lines.push(label);
            return;
        }

        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        lines.push(format!("{}{connector}{label}", self.prefix(state.depth)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DAGraph;

    fn render(graph: &DAGraph<&'static str>) -> Vec<String> {
        let mut lines = Vec::new();
        graph.traverse_with(&mut tree_ascii_formatter::<&str>(), &mut lines);
        lines
    }

    #[test]
    fn draws_branches_and_pipes() {
        let mut graph = DAGraph::new();
        graph
            .add_edge("A", "B")
            .unwrap()
            .add_edge("B", "C")
            .unwrap()
            .add_edge("A", "D")
            .unwrap()
            .add_edge("D", "E")
            .unwrap();

        assert_eq!(
            render(&graph),
            vec!["A", "├── B", "│   └── C", "└── D", "    └── E"]
        );
    }

    #[test]
    fn multiple_roots_have_no_connector() {
        let mut graph = DAGraph::new();
        graph.add_node("A").add_node("B");
        graph.add_edge("B", "C").unwrap();

        assert_eq!(render(&graph), vec!["A", "B", "└── C"]);
    }

    #[test]
    fn reset_allows_reuse() {
        let mut graph = DAGraph::new();
        graph.add_edge("A", "B").unwrap().add_edge("A", "C").unwrap();
        graph.add_edge("C", "D").unwrap();

        let mut formatter = tree_ascii_formatter::<&str>();
        let mut first = Vec::new();
        graph.traverse_with(&mut formatter, &mut first);

        formatter.reset();
        let mut second = Vec::new();
        graph.traverse_with(&mut formatter, &mut second);

        assert_eq!(first, second);
        assert_eq!(first, vec!["A", "├── B", "└── C", "    └── D"]);
    }
}
