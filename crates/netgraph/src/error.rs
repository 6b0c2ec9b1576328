//! Error types for netgraph operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use thiserror::Error;

/// Result type alias for netgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Comprehensive error type for all graph operations.
///
/// Errors are designed to fail fast and provide clear context about what went wrong.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Feature cannot be converted into graph components
    #[error("Invalid feature: {reason}")]
    InvalidFeature {
        /// Why the feature was rejected
        reason: String,
    },

    /// Node not found in the graph
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// ID of the missing node
        node_id: u64,
    },

    /// Edge not found in the graph
    #[error("Edge not found: {edge_id}")]
    EdgeNotFound {
        /// ID of the missing edge
        edge_id: u64,
    },

    /// Traversal advanced past its end
    #[error("Traversal exhausted: no more components to visit")]
    Exhausted,

    /// Edge weighter produced a negative weight during shortest-path iteration
    #[error("Negative weight {weight} on edge {edge_id}: Dijkstra requires non-negative weights")]
    NegativeWeight {
        /// Edge whose weight was negative
        edge_id: u64,
        /// The offending weight
        weight: f64,
    },

    /// Invalid operation (precondition violation)
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of what went wrong
        message: String,
    },
}

impl GraphError {
    /// Create an invalid-feature error from a reason string.
    pub fn invalid_feature(reason: impl Into<String>) -> Self {
        Self::InvalidFeature {
            reason: reason.into(),
        }
    }

    /// Create an invalid-operation error from a message.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }
}
