//! Graph Nodes
//!
//! This module defines the node type that lives in the dependency graph.

use indexmap::IndexSet;

use crate::identity::Identifiable;

/// A node in the dependency graph.
///
/// Wraps one payload together with the identities of the nodes it depends
/// on. Dependencies iterate in the order they were first recorded.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// The caller's payload.
    data: T,

    /// Identities of the nodes that must come before this one.
    dependencies: IndexSet<String>,
}

impl<T: Identifiable> Node<T> {
    /// Create a node with no dependencies.
    pub fn new(data: T) -> Self {
        Self {
            data,
            dependencies: IndexSet::new(),
        }
    }

    /// Get the node's identity.
    pub fn id(&self) -> &str {
        self.data.id()
    }

    /// Get the payload.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Add a dependency. Returns `false` if it was already recorded.
    pub fn add_dependency(&mut self, id: impl Into<String>) -> bool {
        self.dependencies.insert(id.into())
    }

    /// Remove a dependency, keeping the order of the remaining ones.
    pub fn remove_dependency(&mut self, id: &str) -> bool {
        self.dependencies.shift_remove(id)
    }

    /// Get all dependencies in insertion order.
    pub fn dependencies(&self) -> &IndexSet<String> {
        &self.dependencies
    }

    /// Check if this node depends on `id`.
    pub fn depends_on(&self, id: &str) -> bool {
        self.dependencies.contains(id)
    }

    /// A root has no dependencies.
    pub fn is_root(&self) -> bool {
        self.dependencies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_root() {
        let node = Node::new("A");
        assert_eq!(node.id(), "A");
        assert!(node.is_root());
    }

    #[test]
    fn dependency_management() {
        let mut node = Node::new("C");

        assert!(node.add_dependency("A"));
        assert!(node.add_dependency("B"));
        assert!(!node.add_dependency("A"));

        assert!(node.depends_on("A"));
        assert!(node.depends_on("B"));
        assert_eq!(node.dependencies().len(), 2);

        assert!(node.remove_dependency("A"));
        assert!(!node.depends_on("A"));
        assert_eq!(node.dependencies().len(), 1);
    }

    #[test]
    fn dependencies_keep_insertion_order() {
        let mut node = Node::new("D");
        node.add_dependency("C");
        node.add_dependency("A");
        node.add_dependency("B");
        node.remove_dependency("A");

        let order: Vec<&str> = node.dependencies().iter().map(String::as_str).collect();
        assert_eq!(order, vec!["C", "B"]);
    }
}
