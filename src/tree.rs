use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered string-keyed map used for every tree map node.
pub type TreeMap = IndexMap<String, TreeValue>;

/// Generic decoded document: the shape every decoder produces and the walker
/// consumes. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TreeValue {
    Map(TreeMap),
    List(Vec<TreeValue>),
    Scalar(Scalar),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    String(String),
    Number(Number),
    Bool(bool),
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Integer view; integral floats within `i64` range qualify.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(i),
            Number::Float(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                Some(f as i64)
            }
            Number::Float(_) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            // Debug keeps the trailing ".0" on integral floats
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl TreeValue {
    pub fn as_map(&self) -> Option<&TreeMap> {
        if let TreeValue::Map(map) = self {
            Some(map)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&Vec<TreeValue>> {
        if let TreeValue::List(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        if let TreeValue::Scalar(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TreeValue::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, TreeValue::Scalar(Scalar::Null))
    }

    /// An empty map or list; scalars (even `""`) are never empty collections.
    pub fn is_empty_collection(&self) -> bool {
        match self {
            TreeValue::Map(map) => map.is_empty(),
            TreeValue::List(items) => items.is_empty(),
            TreeValue::Scalar(_) => false,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TreeValue::Map(_) => "map",
            TreeValue::List(_) => "list",
            TreeValue::Scalar(Scalar::String(_)) => "string",
            TreeValue::Scalar(Scalar::Number(_)) => "number",
            TreeValue::Scalar(Scalar::Bool(_)) => "boolean",
            TreeValue::Scalar(Scalar::Null) => "null",
        }
    }
}

/// Strings render raw, other scalars in their literal form, and collections as
/// compact JSON.
impl fmt::Display for TreeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeValue::Scalar(Scalar::String(s)) => f.write_str(s),
            TreeValue::Scalar(Scalar::Number(n)) => write!(f, "{}", n),
            TreeValue::Scalar(Scalar::Bool(b)) => write!(f, "{}", b),
            TreeValue::Scalar(Scalar::Null) => f.write_str("null"),
            TreeValue::Map(_) | TreeValue::List(_) => {
                f.write_str(&crate::export::tree_to_json(self).to_string())
            }
        }
    }
}

impl From<&str> for TreeValue {
    fn from(s: &str) -> Self {
        TreeValue::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for TreeValue {
    fn from(s: String) -> Self {
        TreeValue::Scalar(Scalar::String(s))
    }
}

impl From<i64> for TreeValue {
    fn from(i: i64) -> Self {
        TreeValue::Scalar(Scalar::Number(Number::Int(i)))
    }
}

impl From<f64> for TreeValue {
    fn from(f: f64) -> Self {
        TreeValue::Scalar(Scalar::Number(Number::Float(f)))
    }
}

impl From<bool> for TreeValue {
    fn from(b: bool) -> Self {
        TreeValue::Scalar(Scalar::Bool(b))
    }
}

impl From<Vec<TreeValue>> for TreeValue {
    fn from(items: Vec<TreeValue>) -> Self {
        TreeValue::List(items)
    }
}

impl From<TreeMap> for TreeValue {
    fn from(map: TreeMap) -> Self {
        TreeValue::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_display() {
        assert_eq!(TreeValue::from("hello").to_string(), "hello");
        assert_eq!(TreeValue::from(42i64).to_string(), "42");
        assert_eq!(TreeValue::from(3.14).to_string(), "3.14");
        assert_eq!(TreeValue::from(2.0).to_string(), "2.0");
        assert_eq!(TreeValue::from(true).to_string(), "true");
        assert_eq!(TreeValue::Scalar(Scalar::Null).to_string(), "null");
    }

    #[test]
    fn test_collection_display_is_compact_json() {
        let mut map = TreeMap::new();
        map.insert("b".into(), TreeValue::from(1i64));
        map.insert("a".into(), TreeValue::List(vec!["x".into(), TreeValue::from(false)]));
        assert_eq!(TreeValue::Map(map).to_string(), r#"{"b":1,"a":["x",false]}"#);
    }

    #[test]
    fn test_empty_collection() {
        assert!(TreeValue::Map(TreeMap::new()).is_empty_collection());
        assert!(TreeValue::List(vec![]).is_empty_collection());
        assert!(!TreeValue::from("").is_empty_collection());
        assert!(!TreeValue::List(vec![TreeValue::Scalar(Scalar::Null)]).is_empty_collection());
    }

    #[test]
    fn test_number_as_i64() {
        assert_eq!(Number::Float(4.0).as_i64(), Some(4));
        assert_eq!(Number::Float(4.5).as_i64(), None);
        assert_eq!(Number::Int(-3).as_i64(), Some(-3));
    }
}
