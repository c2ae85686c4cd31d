//! Error types for graph operations.

use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, DagError>;

/// Errors raised while mutating a [`DAGraph`](crate::graph::DAGraph).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DagError {
    /// Inserting the edge `from -> to` would have closed a cycle.
    ///
    /// The graph is left exactly as it was before the call.
    #[error("[{from}] -> [{to}] form a cycle")]
    Cycle {
        /// Identity of the edge source.
        from: String,
        /// Identity of the edge target.
        to: String,
    },
}

impl DagError {
    /// Returns `true` if this error reports a rejected cyclic edge.
    pub fn is_cycle(&self) -> bool {
        matches!(self, DagError::Cycle { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_error_names_both_endpoints() {
        let err = DagError::Cycle {
            from: "B".to_string(),
            to: "A".to_string(),
        };
        assert!(err.is_cycle());
        assert_eq!(err.to_string(), "[B] -> [A] form a cycle");
    }
}
