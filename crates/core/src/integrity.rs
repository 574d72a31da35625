//! Load-time integrity checks
//!
//! The store accepts edges whose endpoints have not been inserted. A consumer
//! that needs a well-formed graph runs these checks after loading.

use tracing::warn;

use crate::error::GraphError;
use crate::graph::DirectedGraphStore;

/// Report every edge endpoint that was never inserted as a node
///
/// Returns one [`GraphError::DanglingEdgeReference`] per missing endpoint,
/// in edge insertion order. An edge missing both endpoints yields two
/// errors, source first. An empty vector means the graph is consistent.
pub fn validate_endpoints<N, E>(store: &DirectedGraphStore<N, E>) -> Vec<GraphError> {
    let mut errors = Vec::new();

    for (source, target, _) in store.edges() {
        for endpoint in [source, target] {
            if !store.has_node(endpoint) {
                warn!(
                    source = %source,
                    target = %target,
                    missing = %endpoint,
                    "dangling edge reference"
                );
                errors.push(GraphError::DanglingEdgeReference {
                    from: source.clone(),
                    to: target.clone(),
                    missing: endpoint.clone(),
                });
            }
        }
    }

    errors
}

/// Fail on the first dangling edge reference
///
/// Convenience wrapper over [`validate_endpoints`] for callers that treat
/// any inconsistency as a load failure.
pub fn ensure_endpoints<N, E>(store: &DirectedGraphStore<N, E>) -> Result<(), GraphError> {
    match validate_endpoints(store).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{EdgeAttributes, NodeAttributes};
    use crate::key::NodeKey;

    fn basis() -> EdgeAttributes {
        EdgeAttributes::with_line_interpolate("basis")
    }

    #[test]
    fn test_consistent_graph_has_no_errors() {
        let mut store: DirectedGraphStore = DirectedGraphStore::new();
        store.set_node(0, NodeAttributes::new("a")).unwrap();
        store.set_node(1, NodeAttributes::new("b")).unwrap();
        store.set_edge(0, 1, basis()).unwrap();

        assert!(validate_endpoints(&store).is_empty());
        assert!(ensure_endpoints(&store).is_ok());
    }

    #[test]
    fn test_empty_graph_is_consistent() {
        let store: DirectedGraphStore = DirectedGraphStore::new();
        assert!(validate_endpoints(&store).is_empty());
    }

    #[test]
    fn test_missing_target_is_reported() {
        let mut store: DirectedGraphStore = DirectedGraphStore::new();
        store.set_node(0, NodeAttributes::new("a")).unwrap();
        store.set_edge(0, 7, basis()).unwrap();

        let errors = validate_endpoints(&store);
        assert_eq!(
            errors,
            vec![GraphError::DanglingEdgeReference {
                from: NodeKey::from(0),
                to: NodeKey::from(7),
                missing: NodeKey::from(7),
            }]
        );
    }

    #[test]
    fn test_both_endpoints_missing_reports_source_first() {
        let mut store: DirectedGraphStore = DirectedGraphStore::new();
        store.set_edge("a", "b", basis()).unwrap();

        let missing: Vec<NodeKey> = validate_endpoints(&store)
            .into_iter()
            .map(|err| match err {
                GraphError::DanglingEdgeReference { missing, .. } => missing,
                other => panic!("Expected DanglingEdgeReference, got {:?}", other),
            })
            .collect();

        assert_eq!(missing, vec![NodeKey::from("a"), NodeKey::from("b")]);
    }

    #[test]
    fn test_placeholder_filled_later_is_consistent() {
        let mut store: DirectedGraphStore = DirectedGraphStore::new();
        store.set_edge(0, 1, basis()).unwrap();
        assert_eq!(validate_endpoints(&store).len(), 2);

        store.set_node(0, NodeAttributes::new("a")).unwrap();
        store.set_node(1, NodeAttributes::new("b")).unwrap();
        assert!(ensure_endpoints(&store).is_ok());
    }

    #[test]
    fn test_ensure_endpoints_returns_first_error() {
        let mut store: DirectedGraphStore = DirectedGraphStore::new();
        store.set_node(0, NodeAttributes::new("a")).unwrap();
        store.set_edge(0, 3, basis()).unwrap();
        store.set_edge(4, 0, basis()).unwrap();

        let err = ensure_endpoints(&store).unwrap_err();
        assert_eq!(err.to_string(), "edge 0 -> 3 references missing node '3'");
    }
}
