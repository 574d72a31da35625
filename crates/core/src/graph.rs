//! Directed graph store with keyed nodes and attributed edges
//!
//! Uses `petgraph::StableGraph` for storage, with side tables mapping
//! caller keys to graph indices. Nodes are never removed, so the side tables
//! also record insertion order, which `nodes()` and `edges()` follow.
//!
//! Edges follow simple-graph semantics: one edge per ordered
//! `(source, target)` pair. Inserting the same pair twice replaces the
//! attributes in place.

use indexmap::{IndexMap, IndexSet};
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use tracing::{debug, trace};

use crate::attributes::{EdgeAttributes, NodeAttributes};
use crate::error::GraphError;
use crate::key::NodeKey;

/// In-memory directed graph keyed by [`NodeKey`]
///
/// The store performs no internal locking. Callers sharing one across
/// threads must serialize access themselves.
#[derive(Debug, Clone)]
pub struct DirectedGraphStore<N = NodeAttributes, E = EdgeAttributes> {
    /// The underlying stable graph. A `None` weight is a placeholder: a key
    /// that so far has only been named as an edge endpoint.
    inner: StableGraph<Option<N>, E>,
    /// Every key that owns a vertex, placeholders included
    slots: HashMap<NodeKey, NodeIndex>,
    /// Keys inserted through `set_node`, in insertion order
    nodes: IndexSet<NodeKey>,
    /// Edges in insertion order
    edges: IndexMap<(NodeKey, NodeKey), EdgeIndex>,
}

impl<N, E> DirectedGraphStore<N, E> {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            inner: StableGraph::new(),
            slots: HashMap::new(),
            nodes: IndexSet::new(),
            edges: IndexMap::new(),
        }
    }

    /// Insert a node, or replace the attributes of an existing one
    ///
    /// Replacement discards the old attributes entirely; the node keeps its
    /// position in insertion order. A key previously seen only as an edge
    /// endpoint becomes a regular node here.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidKey`] for a malformed key. The store is
    /// left unchanged in that case.
    pub fn set_node(&mut self, key: impl Into<NodeKey>, attributes: N) -> Result<(), GraphError> {
        let key = key.into();
        key.validate()?;

        let index = self.slot_for(&key);
        if let Some(slot) = self.inner.node_weight_mut(index) {
            if slot.replace(attributes).is_some() {
                debug!(key = %key, "replaced node attributes");
            }
        }
        trace!(key = %key, "set node");
        self.nodes.insert(key);
        Ok(())
    }

    /// Insert a directed edge, or replace the attributes of an existing one
    ///
    /// Endpoints do not have to be inserted first. An endpoint with no node
    /// is tracked as a placeholder: it is absent from [`nodes()`](Self::nodes)
    /// and reported by [`validate_endpoints`](crate::validate_endpoints)
    /// until `set_node` names it.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidKey`] if either endpoint is malformed.
    /// Nothing is inserted in that case.
    pub fn set_edge(
        &mut self,
        source: impl Into<NodeKey>,
        target: impl Into<NodeKey>,
        attributes: E,
    ) -> Result<(), GraphError> {
        let source = source.into();
        let target = target.into();
        source.validate()?;
        target.validate()?;

        if let Some(&index) = self.edges.get(&(source.clone(), target.clone())) {
            if let Some(weight) = self.inner.edge_weight_mut(index) {
                *weight = attributes;
            }
            debug!(source = %source, target = %target, "replaced edge attributes");
            return Ok(());
        }

        let from = self.slot_for(&source);
        let to = self.slot_for(&target);
        let index = self.inner.add_edge(from, to, attributes);
        trace!(source = %source, target = %target, "set edge");
        self.edges.insert((source, target), index);
        Ok(())
    }

    /// Get the attributes of a node
    ///
    /// Returns `None` if the key was never inserted with `set_node`.
    pub fn get_node(&self, key: impl Into<NodeKey>) -> Option<&N> {
        let index = self.slots.get(&key.into())?;
        self.inner.node_weight(*index)?.as_ref()
    }

    /// Get the attributes of the edge `source -> target`
    ///
    /// Direction matters: the reverse pair is a different edge.
    pub fn get_edge(&self, source: impl Into<NodeKey>, target: impl Into<NodeKey>) -> Option<&E> {
        let index = self.edges.get(&(source.into(), target.into()))?;
        self.inner.edge_weight(*index)
    }

    /// Check whether a node was inserted under this key
    pub fn has_node(&self, key: impl Into<NodeKey>) -> bool {
        self.nodes.contains(&key.into())
    }

    /// Check whether the edge `source -> target` exists
    pub fn has_edge(&self, source: impl Into<NodeKey>, target: impl Into<NodeKey>) -> bool {
        self.edges.contains_key(&(source.into(), target.into()))
    }

    /// Iterate over node keys in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeKey> + '_ {
        self.nodes.iter()
    }

    /// Iterate over `(key, attributes)` pairs in insertion order
    pub fn node_entries(&self) -> impl Iterator<Item = (&NodeKey, &N)> + '_ {
        self.nodes.iter().filter_map(move |key| {
            let attributes = self.inner.node_weight(*self.slots.get(key)?)?.as_ref()?;
            Some((key, attributes))
        })
    }

    /// Iterate over `(source, target, attributes)` triples in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&NodeKey, &NodeKey, &E)> + '_ {
        self.edges
            .iter()
            .filter_map(move |((source, target), index)| {
                self.inner.edge_weight(*index).map(|weight| (source, target, weight))
            })
    }

    /// Get the number of inserted nodes (placeholders excluded)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check whether the store holds no nodes and no edges
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Find or create the vertex for `key`
    fn slot_for(&mut self, key: &NodeKey) -> NodeIndex {
        if let Some(&index) = self.slots.get(key) {
            return index;
        }
        let index = self.inner.add_node(None);
        debug!(key = %key, "created node slot");
        self.slots.insert(key.clone(), index);
        index
    }
}

impl<N, E> Default for DirectedGraphStore<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct NodeEntry<'a, N> {
    key: &'a NodeKey,
    attributes: &'a N,
}

#[derive(Serialize)]
struct EdgeEntry<'a, E> {
    source: &'a NodeKey,
    target: &'a NodeKey,
    attributes: &'a E,
}

/// Serializes as `{ "nodes": [...], "edges": [...] }` in insertion order
impl<N: Serialize, E: Serialize> Serialize for DirectedGraphStore<N, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let nodes: Vec<NodeEntry<'_, N>> = self
            .node_entries()
            .map(|(key, attributes)| NodeEntry { key, attributes })
            .collect();
        let edges: Vec<EdgeEntry<'_, E>> = self
            .edges()
            .map(|(source, target, attributes)| EdgeEntry {
                source,
                target,
                attributes,
            })
            .collect();

        let mut state = serializer.serialize_struct("DirectedGraphStore", 2)?;
        state.serialize_field("nodes", &nodes)?;
        state.serialize_field("edges", &edges)?;
        state.end()
    }
}
