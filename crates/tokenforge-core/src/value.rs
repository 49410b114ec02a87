//! Tagged token tree.
//!
//! A token document is either a scalar leaf or an ordered mapping of child
//! nodes. Key order is the document's own insertion order and every
//! traversal in the workspace goes through [`TokenValue::leaves`].

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Number, Value};
use smallvec::SmallVec;

/// A scalar leaf of a token document.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// Arrays are opaque leaves and are never descended into.
    Array(Vec<Value>),
}

impl Scalar {
    /// Check if this is a null leaf.
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Try to get as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    /// Text written into generated artifacts for this value.
    pub fn to_literal(&self) -> String {
        match self {
            Scalar::Null => "null".to_string(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Number(n) => number_literal(n),
            Scalar::String(s) => s.clone(),
            Scalar::Array(items) => join_array(items),
        }
    }
}

/// Floats print the shortest text that round-trips, so `16.0` becomes `16`.
fn number_literal(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

fn join_array(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Array(nested) => join_array(nested),
            Value::Number(n) => number_literal(n),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_literal())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(Number::from(value))
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

/// A node of a token document.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Leaf(Scalar),
    Node(IndexMap<String, TokenValue>),
}

impl Default for TokenValue {
    fn default() -> Self {
        TokenValue::Node(IndexMap::new())
    }
}

impl TokenValue {
    /// Parse a JSON document, keeping key order.
    pub fn from_json_str(source: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(source)?;
        Ok(value.into())
    }

    /// Try to get the children of a mapping node.
    pub fn as_node(&self) -> Option<&IndexMap<String, TokenValue>> {
        match self {
            TokenValue::Node(children) => Some(children),
            TokenValue::Leaf(_) => None,
        }
    }

    /// Try to get the scalar of a leaf.
    pub fn as_leaf(&self) -> Option<&Scalar> {
        match self {
            TokenValue::Leaf(scalar) => Some(scalar),
            TokenValue::Node(_) => None,
        }
    }

    /// Get a direct child by key.
    pub fn get(&self, key: &str) -> Option<&TokenValue> {
        self.as_node().and_then(|children| children.get(key))
    }

    /// Child keys in document order. Leaves have none.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.as_node()
            .into_iter()
            .flat_map(|children| children.keys().map(String::as_str))
    }

    /// Depth-first, document-order iterator over every leaf and its key path.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            stack: vec![(PathSegments::new(), self)],
        }
    }
}

impl From<Value> for TokenValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                TokenValue::Node(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            Value::Null => TokenValue::Leaf(Scalar::Null),
            Value::Bool(b) => TokenValue::Leaf(Scalar::Bool(b)),
            Value::Number(n) => TokenValue::Leaf(Scalar::Number(n)),
            Value::String(s) => TokenValue::Leaf(Scalar::String(s)),
            Value::Array(items) => TokenValue::Leaf(Scalar::Array(items)),
        }
    }
}

impl From<Scalar> for TokenValue {
    fn from(value: Scalar) -> Self {
        TokenValue::Leaf(value)
    }
}

impl FromIterator<(String, TokenValue)> for TokenValue {
    fn from_iter<I: IntoIterator<Item = (String, TokenValue)>>(iter: I) -> Self {
        TokenValue::Node(iter.into_iter().collect())
    }
}

/// Key path from the traversal root down to a leaf.
pub type PathSegments<'a> = SmallVec<[&'a str; 8]>;

/// Iterator returned by [`TokenValue::leaves`].
///
/// Uses an explicit stack, so nesting depth is bounded by memory rather than
/// the call stack. Children are pushed in reverse so they pop in document
/// order.
pub struct Leaves<'a> {
    stack: Vec<(PathSegments<'a>, &'a TokenValue)>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = (PathSegments<'a>, &'a Scalar);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.stack.pop() {
            match node {
                TokenValue::Leaf(scalar) => return Some((path, scalar)),
                TokenValue::Node(children) => {
                    for (key, child) in children.iter().rev() {
                        let mut child_path = path.clone();
                        child_path.push(key.as_str());
                        self.stack.push((child_path, child));
                    }
                }
            }
        }
        None
    }
}
