//! Depth-First Traversal
//!
//! [`DAGraph::traverse`] walks the graph from every root, following edges
//! from a node to its dependents, and hands each visited node to a visitor
//! together with its position in the walk.
//!
//! # Tree expansion
//!
//! The walk does not remember visited nodes. A node reachable along several
//! paths, as in a diamond `A -> B -> D`, `A -> C -> D`, is visited once per
//! path, each time with the parent, depth and sibling position of that
//! path. Formatters rely on this to draw the same node under every parent.
//!
//! Children are visited in the order their nodes were inserted into the
//! graph. The walk uses an explicit stack.

use indexmap::IndexMap;
use smallvec::SmallVec;

use super::dag::DAGraph;
use super::node::Node;
use crate::identity::Identifiable;

/// Position of a node in the current walk.
#[derive(Debug)]
pub struct TraversalState<'a, T> {
    /// The node this one was reached from. `None` for roots.
    pub parent: Option<&'a T>,
    /// Distance from the root, roots are at depth 0.
    pub depth: usize,
    /// Index among the children of the same parent, or among the roots.
    pub index: usize,
    /// Number of children of the same parent, or number of roots.
    pub total: usize,
}

impl<T> TraversalState<'_, T> {
    /// Check if this node was reached without a parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Check if this node is the last of its siblings.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }
}

impl<T> Clone for TraversalState<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TraversalState<'_, T> {}

/// Receives every node visited by [`DAGraph::traverse_with`].
///
/// The context is the only channel back to the caller.
pub trait Visitor<T, C> {
    /// Visit one node.
    fn visit(&mut self, node: &T, state: &TraversalState<'_, T>, context: &mut C);
}

impl<T, C, F> Visitor<T, C> for F
where
    F: FnMut(&T, &TraversalState<'_, T>, &mut C),
{
    fn visit(&mut self, node: &T, state: &TraversalState<'_, T>, context: &mut C) {
        self(node, state, context)
    }
}

/// Dependents of each identity, in node insertion order.
pub(crate) type Dependents<'a> = IndexMap<&'a str, SmallVec<[&'a str; 4]>>;

/// One pending visit on the walk stack.
struct Frame<'a, T> {
    node: &'a Node<T>,
    parent: Option<&'a T>,
    depth: usize,
    index: usize,
    total: usize,
}

impl<T: Identifiable> DAGraph<T> {
    /// Walk the graph depth-first from every root, calling `visitor` for
    /// each node.
    ///
    /// See the [module docs](self) for the visiting order.
    pub fn traverse<C, F>(&self, mut visitor: F, context: &mut C)
    where
        F: FnMut(&T, &TraversalState<'_, T>, &mut C),
    {
        let dependents = self.dependents();

        let roots: Vec<&Node<T>> = self.root_nodes().collect();
        let total = roots.len();
        let mut stack: Vec<Frame<'_, T>> = roots
            .into_iter()
            .enumerate()
            .rev()
            .map(|(index, node)| Frame {
                node,
                parent: None,
                depth: 0,
                index,
                total,
            })
            .collect();

        while let Some(frame) = stack.pop() {
            let state = TraversalState {
                parent: frame.parent,
                depth: frame.depth,
                index: frame.index,
                total: frame.total,
            };
            visitor(frame.node.data(), &state, context);

            let Some(children) = dependents.get(frame.node.id()) else {
                continue;
            };
            let total = children.len();
            // Reversed so the first child is popped first.
            for (index, child_id) in children.iter().enumerate().rev() {
                if let Some(child) = self.node_map().get(*child_id) {
                    stack.push(Frame {
                        node: child,
                        parent: Some(frame.node.data()),
                        depth: frame.depth + 1,
                        index,
                        total,
                    });
                }
            }
        }
    }

    /// Walk the graph with a [`Visitor`], such as one of the formatters.
    pub fn traverse_with<C, V>(&self, visitor: &mut V, context: &mut C)
    where
        V: Visitor<T, C> + ?Sized,
    {
        self.traverse(|node, state, context| visitor.visit(node, state, context), context);
    }

    /// Forward adjacency: for each identity, the nodes that depend on it.
    pub(crate) fn dependents(&self) -> Dependents<'_> {
        let mut dependents = Dependents::new();
        for node in self.node_map().values() {
            for dep_id in node.dependencies() {
                dependents
                    .entry(dep_id.as_str())
                    .or_default()
                    .push(node.id());
            }
        }
        dependents
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{DAGraph, TraversalState};

    /// Records `id(parent,depth,index/total)` for every visit.
    fn visits(graph: &DAGraph<&'static str>) -> Vec<String> {
        let mut out = Vec::new();
        graph.traverse(
            |node, state, out: &mut Vec<String>| {
                out.push(format!(
                    "{}({},{},{}/{})",
                    node,
                    state.parent.copied().unwrap_or("-"),
                    state.depth,
                    state.index,
                    state.total
                ));
            },
            &mut out,
        );
        out
    }

    #[test]
    fn visits_depth_first_in_insertion_order() {
        let mut graph = DAGraph::new();
        graph
            .add_edge("A", "B")
            .unwrap()
            .add_edge("B", "C")
            .unwrap()
            .add_edge("A", "D")
            .unwrap();

        assert_eq!(
            visits(&graph),
            vec!["A(-,0,0/1)", "B(A,1,0/2)", "C(B,2,0/1)", "D(A,1,1/2)"]
        );
    }

    #[test]
    fn diamond_is_expanded_per_path() {
        let mut graph = DAGraph::new();
        graph
            .add_edge("A", "B")
            .unwrap()
            .add_edge("A", "C")
            .unwrap()
            .add_edge("B", "D")
            .unwrap()
            .add_edge("C", "D")
            .unwrap();

        assert_eq!(
            visits(&graph),
            vec![
                "A(-,0,0/1)",
                "B(A,1,0/2)",
                "D(B,2,0/1)",
                "C(A,1,1/2)",
                "D(C,2,0/1)"
            ]
        );
    }

    #[test]
    fn roots_carry_their_own_sibling_position() {
        let mut graph = DAGraph::new();
        graph.add_node("A").add_node("B").add_node("C");

        assert_eq!(
            visits(&graph),
            vec!["A(-,0,0/3)", "B(-,0,1/3)", "C(-,0,2/3)"]
        );
    }

    #[test]
    fn context_is_shared_across_visits() {
        let mut graph = DAGraph::new();
        graph.add_edge("A", "B").unwrap().add_edge("A", "C").unwrap();

        let mut count = 0usize;
        graph.traverse(|_, _, count: &mut usize| *count += 1, &mut count);
        assert_eq!(count, 3);
    }

    #[test]
    fn state_helpers() {
        let state: TraversalState<'_, &str> = TraversalState {
            parent: None,
            depth: 0,
            index: 1,
            total: 2,
        };
        assert!(state.is_root());
        assert!(state.is_last());
    }

    #[test]
    fn deep_chain_does_not_recurse() {
        let ids: Vec<String> = (0..100_000).map(|i| format!("n{i}")).collect();
        let mut graph = DAGraph::new();
        for id in &ids {
            graph.add_node(id.as_str());
        }
        for pair in ids.windows(2) {
            graph.insert_edge_unchecked(pair[0].as_str(), pair[1].as_str());
        }

        let mut max_depth = 0usize;
        graph.traverse(
            |_, state, max_depth: &mut usize| *max_depth = (*max_depth).max(state.depth),
            &mut max_depth,
        );
        assert_eq!(max_depth, ids.len() - 1);
    }
}
