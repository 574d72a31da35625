//! Clinical-finding taxonomy fixture
//!
//! A small is-a subgraph rooted at "Skin lesion" and climbing to "Thing".
//! The data is compiled in; [`initialize_data`] inserts it into a
//! caller-owned store.
//!
//! # Example
//!
//! ```
//! use taxonomy_graph_core::{fixture, DirectedGraphStore};
//!
//! # fn main() -> Result<(), anyhow::Error> {
//! let mut store = DirectedGraphStore::new();
//! fixture::initialize_data(&mut store)?;
//!
//! assert_eq!(store.node_count(), 20);
//! assert_eq!(store.edge_count(), fixture::TAXONOMY_EDGES.len());
//! # Ok(())
//! # }
//! ```

use anyhow::Context;
use tracing::info;

use crate::attributes::{EdgeAttributes, NodeAttributes, LINE_INTERPOLATE_BASIS};
use crate::graph::DirectedGraphStore;
use crate::key::NodeKey;

/// Key of the node under investigation
pub const FOCUS_NODE: i64 = 0;

/// Description carried by [`FOCUS_NODE`], the only node with one
pub const FOCUS_DESCRIPTION: &str = "This is the node that we are investigating";

/// `(key, label)` for every taxonomy node, in insertion order
pub static TAXONOMY_NODES: [(i64, &str); 20] = [
    (0, "Skin lesion"),
    (1, "Lesion of skin and/or skin-associated mucous membrane"),
    (2, "Skin or mucosa lesion"),
    (3, "Skin AND/OR mucosa finding"),
    (4, "Finding by site"),
    (5, "Clinical finding"),
    (6, "SNOMED CT Concept"),
    (7, "Thing"),
    (8, "Soft tissue lesion"),
    (9, "Disorder of soft tissue"),
    (10, "General finding of soft tissue"),
    (11, "Disorder by body site"),
    (12, "Disease"),
    (13, "Disorder of skin"),
    (14, "Skin finding"),
    (15, "Finding of body region"),
    (16, "Integumentary system finding"),
    (17, "Disorder of skin AND/OR subcutaneous tissue"),
    (18, "Disorder of integument"),
    (19, "Disorder of body system"),
];

/// `(child, parent)` is-a edges, in insertion order
pub static TAXONOMY_EDGES: [(i64, i64); 30] = [
    (18, 16),
    (19, 11),
    (18, 19),
    (17, 18),
    (17, 9),
    (17, 15),
    (13, 17),
    (16, 4),
    (14, 16),
    (14, 10),
    (14, 3),
    (15, 4),
    (14, 15),
    (13, 14),
    (0, 13),
    (12, 5),
    (11, 12),
    (11, 4),
    (9, 11),
    (10, 4),
    (9, 10),
    (8, 9),
    (0, 8),
    (6, 7),
    (5, 6),
    (4, 5),
    (3, 4),
    (2, 3),
    (1, 2),
    (0, 1),
];

/// Populate `store` with the taxonomy
///
/// Inserts all nodes, then all edges, each edge tagged with
/// `lineInterpolate: "basis"`. Existing unrelated content is kept; keys
/// that collide with the fixture are overwritten.
///
/// The load is atomic (see [`load_rows`]), so on error `store` is
/// untouched.
///
/// # Errors
/// Returns an error naming the fixture row whose insertion failed.
pub fn initialize_data(store: &mut DirectedGraphStore) -> anyhow::Result<()> {
    let nodes = TAXONOMY_NODES.iter().map(|&(key, label)| {
        let mut attributes = NodeAttributes::new(label);
        if key == FOCUS_NODE {
            attributes = attributes.with_description(FOCUS_DESCRIPTION);
        }
        (NodeKey::from(key), attributes)
    });
    let edges = TAXONOMY_EDGES
        .iter()
        .map(|&(child, parent)| (NodeKey::from(child), NodeKey::from(parent)));

    load_rows(store, nodes, edges)
}

/// Insert node rows, then edge rows tagged `lineInterpolate: "basis"`
///
/// Rows are staged on a copy of `store` and committed only once every row
/// succeeded. The integer taxonomy keys always validate; string-keyed tables
/// can fail part way, and then `store` keeps its prior state.
///
/// # Errors
/// Returns an error naming the first row whose insertion failed.
pub fn load_rows(
    store: &mut DirectedGraphStore,
    nodes: impl IntoIterator<Item = (NodeKey, NodeAttributes)>,
    edges: impl IntoIterator<Item = (NodeKey, NodeKey)>,
) -> anyhow::Result<()> {
    let mut staged = store.clone();
    let mut node_rows = 0usize;
    let mut edge_rows = 0usize;

    for (key, attributes) in nodes {
        let context = format!("Failed to insert node {} ({})", key, attributes.label);
        staged.set_node(key, attributes).context(context)?;
        node_rows += 1;
    }

    for (child, parent) in edges {
        let context = format!("Failed to insert edge {} -> {}", child, parent);
        staged
            .set_edge(
                child,
                parent,
                EdgeAttributes::with_line_interpolate(LINE_INTERPOLATE_BASIS),
            )
            .context(context)?;
        edge_rows += 1;
    }

    *store = staged;
    info!(nodes = node_rows, edges = edge_rows, "loaded fixture rows");
    Ok(())
}

/// Create a fresh store holding only the taxonomy (convenience wrapper)
pub fn fixture_store() -> anyhow::Result<DirectedGraphStore> {
    let mut store = DirectedGraphStore::new();
    initialize_data(&mut store)?;
    Ok(store)
}
