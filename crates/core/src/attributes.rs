//! Metadata carried by nodes and edges
//!
//! Node metadata is a fixed record. Edge metadata stays an open map because
//! edges carry rendering hints the store never interprets.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Attribute name for the curve style a renderer uses to draw an edge
pub const LINE_INTERPOLATE: &str = "lineInterpolate";

/// B-spline interpolation, the style used by every taxonomy edge
pub const LINE_INTERPOLATE_BASIS: &str = "basis";

/// Attributes of a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAttributes {
    /// Display text
    pub label: String,
    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NodeAttributes {
    /// Create attributes with a label and no description
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Attributes of an edge
///
/// An ordered name → JSON value map. Insertion order of attribute names is
/// preserved so serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeAttributes(IndexMap<String, Value>);

impl EdgeAttributes {
    /// Create an empty attribute map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create attributes holding only a `lineInterpolate` hint
    pub fn with_line_interpolate(style: impl Into<String>) -> Self {
        let mut attrs = Self::new();
        attrs.insert(LINE_INTERPOLATE, Value::String(style.into()));
        attrs
    }

    /// Set an attribute, returning the previous value if any
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Get an attribute by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// The `lineInterpolate` hint, if present and a string
    pub fn line_interpolate(&self) -> Option<&str> {
        self.get(LINE_INTERPOLATE).and_then(Value::as_str)
    }

    /// Get the number of attributes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether no attributes are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for EdgeAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
