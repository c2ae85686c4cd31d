//! Topological Ordering
//!
//! A lazy depth-first topological sort over a graph's node map.
//!
//! # Algorithm
//!
//! Nodes are taken in insertion order. For each node not yet emitted we
//! walk its dependencies in the order they were recorded, descending into
//! every dependency that has not been emitted, and emit a node only once
//! all of its dependencies have been. The walk keeps an explicit stack of
//! `(node, next dependency)` frames, so long dependency chains do not grow
//! the call stack.
//!
//! Ties are broken by this pre-order walk over declared dependencies, not
//! by picking zero in-degree nodes as Kahn's algorithm would.

use std::collections::HashSet;
use std::iter::FusedIterator;

use indexmap::IndexMap;

use super::node::Node;

/// Iterator returned by [`DAGraph::topological_sort`](super::DAGraph::topological_sort).
pub struct TopologicalSort<'a, T> {
    nodes: &'a IndexMap<String, Node<T>>,

    /// Index of the next top-level node to start a walk from.
    next_start: usize,

    /// Nodes being expanded, with the index of their next dependency.
    stack: Vec<(&'a Node<T>, usize)>,

    /// Identities already emitted.
    emitted: HashSet<&'a str>,
}

impl<'a, T> TopologicalSort<'a, T> {
    pub(crate) fn new(nodes: &'a IndexMap<String, Node<T>>) -> Self {
        Self {
            nodes,
            next_start: 0,
            stack: Vec::new(),
            emitted: HashSet::with_capacity(nodes.len()),
        }
    }
}

impl<'a, T: crate::identity::Identifiable> Iterator for TopologicalSort<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(frame) = self.stack.last_mut() else {
                let (_, start) = self.nodes.get_index(self.next_start)?;
                self.next_start += 1;
                if !self.emitted.contains(start.id()) {
                    self.stack.push((start, 0));
                }
                continue;
            };

            let node = frame.0;
            match node.dependencies().get_index(frame.1) {
                Some(dep_id) => {
                    frame.1 += 1;
                    if !self.emitted.contains(dep_id.as_str()) {
                        if let Some(dependency) = self.nodes.get(dep_id) {
                            self.stack.push((dependency, 0));
                        }
                    }
                }
                None => {
                    self.stack.pop();
                    if self.emitted.insert(node.id()) {
                        return Some(node.data());
                    }
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.nodes.len().saturating_sub(self.emitted.len());
        (0, Some(remaining))
    }
}

impl<'a, T: crate::identity::Identifiable> FusedIterator for TopologicalSort<'a, T> {}
