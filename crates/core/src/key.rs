//! Node identity
//!
//! Fixtures key nodes by integers (`0..19` in the taxonomy) but real data
//! sets often use string codes, so both are accepted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GraphError;

/// Identity of a node within a [`DirectedGraphStore`](crate::DirectedGraphStore)
///
/// Comparison is structural: `Int(1)` and `Str("1")` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeKey {
    Int(i64),
    Str(String),
}

impl NodeKey {
    /// Check that the key is usable as a node identity
    ///
    /// Integer keys are always valid. String keys must contain at least one
    /// non-whitespace character.
    pub fn validate(&self) -> Result<(), GraphError> {
        match self {
            NodeKey::Int(_) => Ok(()),
            NodeKey::Str(s) if s.trim().is_empty() => Err(GraphError::InvalidKey {
                key: self.clone(),
                reason: "string key is empty or whitespace".to_string(),
            }),
            NodeKey::Str(_) => Ok(()),
        }
    }

    /// Get integer value if this is an integer key
    pub fn as_int(&self) -> Option<i64> {
        match self {
            NodeKey::Int(i) => Some(*i),
            NodeKey::Str(_) => None,
        }
    }

    /// Get string value if this is a string key
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NodeKey::Int(_) => None,
            NodeKey::Str(s) => Some(s),
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Int(i) => write!(f, "{}", i),
            NodeKey::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for NodeKey {
    fn from(value: i64) -> Self {
        NodeKey::Int(value)
    }
}

impl From<i32> for NodeKey {
    fn from(value: i32) -> Self {
        NodeKey::Int(i64::from(value))
    }
}

impl From<u32> for NodeKey {
    fn from(value: u32) -> Self {
        NodeKey::Int(i64::from(value))
    }
}

impl From<&str> for NodeKey {
    fn from(value: &str) -> Self {
        NodeKey::Str(value.to_string())
    }
}

impl From<String> for NodeKey {
    fn from(value: String) -> Self {
        NodeKey::Str(value)
    }
}

impl From<&NodeKey> for NodeKey {
    fn from(value: &NodeKey) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_and_str_keys_are_distinct() {
        assert_ne!(NodeKey::from(1), NodeKey::from("1"));
        assert_eq!(NodeKey::from(1), NodeKey::Int(1));
        assert_eq!(NodeKey::from("a".to_string()), NodeKey::from("a"));
    }

    #[test]
    fn test_validate_rejects_blank_strings() {
        assert!(NodeKey::from(0).validate().is_ok());
        assert!(NodeKey::from(-7).validate().is_ok());
        assert!(NodeKey::from("C12").validate().is_ok());

        for blank in ["", "   ", "\t\n"] {
            match NodeKey::from(blank).validate() {
                Err(GraphError::InvalidKey { key, .. }) => assert_eq!(key, NodeKey::from(blank)),
                other => panic!("Expected InvalidKey, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_display_is_bare_value() {
        assert_eq!(NodeKey::from(19).to_string(), "19");
        assert_eq!(NodeKey::from("skin").to_string(), "skin");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(NodeKey::from(4).as_int(), Some(4));
        assert_eq!(NodeKey::from(4).as_str(), None);
        assert_eq!(NodeKey::from("x").as_str(), Some("x"));
        assert_eq!(NodeKey::from("x").as_int(), None);
    }

    #[test]
    fn test_untagged_serialization() {
        assert_eq!(serde_json::to_string(&NodeKey::from(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&NodeKey::from("a")).unwrap(), "\"a\"");

        let key: NodeKey = serde_json::from_str("12").unwrap();
        assert_eq!(key, NodeKey::Int(12));
    }
}
