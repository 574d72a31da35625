//! Error types for the graph store and its integrity checks.

use crate::key::NodeKey;
use thiserror::Error;

/// Errors produced by [`DirectedGraphStore`](crate::DirectedGraphStore) and
/// the endpoint validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A key was rejected before insertion.
    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: NodeKey, reason: String },

    /// An edge names an endpoint that was never inserted as a node.
    #[error("edge {from} -> {to} references missing node '{missing}'")]
    DanglingEdgeReference {
        from: NodeKey,
        to: NodeKey,
        missing: NodeKey,
    },
}
