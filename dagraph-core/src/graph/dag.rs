//! Directed Acyclic Graph
//!
//! [`DAGraph`] owns one [`Node`] per identity and records, on each node, the
//! identities of the nodes it depends on. For an edge `from -> to`, `to`
//! gains `from` as a dependency: "to depends on from".
//!
//! # Acyclicity
//!
//! Every successful [`DAGraph::add_edge`] leaves the graph acyclic. After the
//! dependency is recorded the whole graph is checked again with Kahn's
//! algorithm, walked from the sinks toward the sources:
//!
//! 1. Count, for every node, how many nodes list it as a dependency
//! 2. Seed a queue with the nodes nobody depends on
//! 3. Pop a node, count it as visited, and decrement each of its
//!    dependencies, queueing those that reach zero
//! 4. The graph is acyclic iff every node was visited
//!
//! A rejected edge is rolled back before the error is returned, so the
//! graph can keep being used after a [`DagError::Cycle`].
//!
//! # Ordering
//!
//! Nodes keep their insertion order. `nodes`, `roots`, `edges` and the
//! tie-breaking of `topological_sort` and `traverse` all follow it.

use std::collections::VecDeque;

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use super::node::Node;
use super::topo::TopologicalSort;
use crate::error::{DagError, Result};
use crate::format::TreeAsciiFormatter;
use crate::identity::Identifiable;

/// A directed acyclic graph of identifiable payloads.
///
/// Sequences returned by `nodes`, `roots`, `edges` and `topological_sort`
/// borrow the graph, so it cannot be mutated while one of them is alive.
/// Each call starts a fresh sequence over the current state.
#[derive(Debug, Clone)]
pub struct DAGraph<T> {
    /// All nodes, indexed by identity, in insertion order.
    nodes: IndexMap<String, Node<T>>,
}

/// Create an empty graph.
pub fn create_graph<T: Identifiable>() -> DAGraph<T> {
    DAGraph::new()
}

impl<T: Identifiable> DAGraph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
        }
    }

    /// Add a node to the graph.
    ///
    /// If a node with the same identity already exists this is a no-op and
    /// the original payload is kept.
    pub fn add_node(&mut self, data: T) -> &mut Self {
        self.ensure_node(data);
        self
    }

    /// Get the payload identified by `id`.
    pub fn get_node(&self, id: &str) -> Option<&T> {
        self.nodes.get(id).map(Node::data)
    }

    /// Get the node identified by `id`, including its dependency set.
    pub fn node(&self, id: &str) -> Option<&Node<T>> {
        self.nodes.get(id)
    }

    /// Check if a node with this identity exists.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get the total number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add an edge pointing from `from` to `to`.
    ///
    /// Both endpoints are added first if missing, `from` before `to`.
    /// Fails with [`DagError::Cycle`] if the edge would close a cycle, in
    /// which case the graph is restored to its state before the call.
    pub fn add_edge(&mut self, from: T, to: T) -> Result<&mut Self> {
        let from_id = from.id().to_string();
        let to_id = to.id().to_string();

        let created_from = self.ensure_node(from);
        let created_to = self.ensure_node(to);

        let inserted = match self.nodes.get_mut(&to_id) {
            Some(node) => node.add_dependency(from_id.as_str()),
            None => false,
        };

        // A duplicate edge leaves the graph unchanged, and it was acyclic.
        if !inserted {
            return Ok(self);
        }

        if !self.is_acyclic() {
            self.rollback_edge(&from_id, &to_id, created_from, created_to);
            warn!(from = %from_id, to = %to_id, "rejected edge: it would form a cycle");
            return Err(DagError::Cycle {
                from: from_id,
                to: to_id,
            });
        }

        debug!(from = %from_id, to = %to_id, "added edge");
        Ok(self)
    }

    /// All payloads, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes.values().map(Node::data)
    }

    /// Payloads of the nodes with no dependencies, in insertion order.
    ///
    /// These are the starting points of [`DAGraph::traverse`].
    pub fn roots(&self) -> impl Iterator<Item = &T> + '_ {
        self.root_nodes().map(Node::data)
    }

    /// Every edge as a `(from, to)` pair.
    ///
    /// Edges are grouped by their target in node insertion order, then by
    /// the order the dependency was recorded.
    pub fn edges(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        self.nodes.values().flat_map(move |node| {
            node.dependencies()
                .iter()
                .filter_map(move |dep_id| self.nodes.get(dep_id))
                .map(move |dep| (dep.data(), node.data()))
        })
    }

    /// Payloads of the nodes `id` directly depends on.
    ///
    /// Empty if `id` is unknown.
    pub fn dependencies_of<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a T> + 'a {
        self.nodes
            .get(id)
            .into_iter()
            .flat_map(move |node| node.dependencies().iter())
            .filter_map(move |dep_id| self.get_node(dep_id))
    }

    /// All payloads such that, for every edge `from -> to`, `from` comes
    /// strictly before `to`.
    ///
    /// Nodes are taken in insertion order; before a node is emitted its
    /// not-yet-emitted dependencies are emitted depth-first, in the order
    /// they were recorded.
    pub fn topological_sort(&self) -> TopologicalSort<'_, T> {
        TopologicalSort::new(&self.nodes)
    }

    /// Returns a graph with the same nodes and every edge pointing the
    /// opposite way.
    ///
    /// Payloads are cloned; use `Rc`/`Arc` or references as `T` to share
    /// them instead.
    pub fn reverse(&self) -> DAGraph<T>
    where
        T: Clone,
    {
        let mut reversed = DAGraph::new();

        for node in self.nodes.values() {
            reversed
                .nodes
                .insert(node.id().to_string(), Node::new(node.data().clone()));
        }

        // Reversing an acyclic graph keeps it acyclic, so no check here.
        for node in self.nodes.values() {
            for dep_id in node.dependencies() {
                if let Some(dependency) = reversed.nodes.get_mut(dep_id) {
                    dependency.add_dependency(node.id());
                }
            }
        }

        debug!(nodes = reversed.len(), "reversed graph");
        reversed
    }

    /// Render the graph as a box-drawing tree, labelling nodes by identity.
    pub fn print(&self) -> String {
        self.print_with(|node: &T| node.id().to_string())
    }

    /// Render the graph as a box-drawing tree with a custom label.
    pub fn print_with<L>(&self, label: L) -> String
    where
        L: Fn(&T) -> String,
    {
        let mut formatter = TreeAsciiFormatter::new(label);
        let mut lines = Vec::new();
        self.traverse_with(&mut formatter, &mut lines);
        lines.join("\n")
    }

    /// A serializable description of the graph structure.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.keys().cloned().collect(),
            edges: self
                .edges()
                .map(|(from, to)| (from.id().to_string(), to.id().to_string()))
                .collect(),
        }
    }

    pub(crate) fn node_map(&self) -> &IndexMap<String, Node<T>> {
        &self.nodes
    }

    pub(crate) fn root_nodes(&self) -> impl Iterator<Item = &Node<T>> + '_ {
        self.nodes.values().filter(|node| node.is_root())
    }

    /// Insert a node for `data` unless one exists. Returns `true` if created.
    fn ensure_node(&mut self, data: T) -> bool {
        if self.nodes.contains_key(data.id()) {
            return false;
        }

        let id = data.id().to_string();
        trace!(id = %id, "created node");
        self.nodes.insert(id, Node::new(data));
        true
    }

    /// Record an edge without the acyclicity check, for building large
    /// fixtures in tests.
    #[cfg(test)]
    pub(crate) fn insert_edge_unchecked(&mut self, from: T, to: T) {
        let from_id = from.id().to_string();
        let to_id = to.id().to_string();
        self.ensure_node(from);
        self.ensure_node(to);
        if let Some(node) = self.nodes.get_mut(&to_id) {
            node.add_dependency(from_id);
        }
    }

    /// Undo the mutations of a rejected `add_edge`.
    fn rollback_edge(&mut self, from_id: &str, to_id: &str, created_from: bool, created_to: bool) {
        if let Some(node) = self.nodes.get_mut(to_id) {
            node.remove_dependency(from_id);
        }
        if created_to {
            self.nodes.shift_remove(to_id);
        }
        if created_from {
            self.nodes.shift_remove(from_id);
        }
    }

    /// Kahn's algorithm over the dependency relation, from sinks to sources.
    fn is_acyclic(&self) -> bool {
        let mut dependents: IndexMap<&str, usize> =
            self.nodes.keys().map(|id| (id.as_str(), 0)).collect();

        for node in self.nodes.values() {
            for dep_id in node.dependencies() {
                if let Some(count) = dependents.get_mut(dep_id.as_str()) {
                    *count += 1;
                }
            }
        }

        let mut queue: VecDeque<&str> = dependents
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(id, _)| *id)
            .collect();

        let mut visited = 0;
        while let Some(id) = queue.pop_front() {
            visited += 1;

            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            for dep_id in node.dependencies() {
                if let Some(count) = dependents.get_mut(dep_id.as_str()) {
                    *count = count.saturating_sub(1);
                    if *count == 0 {
                        queue.push_back(dep_id.as_str());
                    }
                }
            }
        }

        visited == self.nodes.len()
    }
}

impl<T: Identifiable> Default for DAGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Node identities and `(from, to)` edge pairs of a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphSnapshot {
    /// Node identities in insertion order.
    pub nodes: Vec<String>,
    /// Edges in the order produced by [`DAGraph::edges`].
    pub edges: Vec<(String, String)>,
}
