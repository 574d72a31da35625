//! Taxonomy Graph Core Library
//!
//! This library provides an in-memory directed graph store with keyed,
//! attributed nodes and edges, plus a loader for the compiled-in
//! clinical-finding taxonomy fixture.

pub mod attributes;
pub mod error;
pub mod fixture;
pub mod graph;
pub mod integrity;
pub mod key;

// Re-export commonly used types
pub use attributes::{EdgeAttributes, NodeAttributes};
pub use error::GraphError;
pub use fixture::initialize_data;
pub use graph::DirectedGraphStore;
pub use integrity::{ensure_endpoints, validate_endpoints};
pub use key::NodeKey;
