// Author: Dustin Pilgrim
// License: MIT

use crate::tree::{Number, Scalar, TreeMap, TreeValue};

/// Types a looked-up value can be read as.
///
/// `from_tree` returns `None` when the value has the wrong shape; lookups
/// then hand back the caller's default instead of failing.
pub trait FromTree: Sized {
    fn from_tree(value: &TreeValue) -> Option<Self>;

    /// Whether this value counts as a map default. XML lookups only hand maps
    /// to callers whose default is map-like.
    fn is_map_like(&self) -> bool {
        false
    }
}

/// Every value has a string form, so string lookups never fall back on shape.
impl FromTree for String {
    fn from_tree(value: &TreeValue) -> Option<Self> {
        Some(value.to_string())
    }
}

/// Booleans, or the text `true`/`false` in any case.
impl FromTree for bool {
    fn from_tree(value: &TreeValue) -> Option<Self> {
        match value {
            TreeValue::Scalar(Scalar::Bool(b)) => Some(*b),
            TreeValue::Scalar(Scalar::String(s)) => {
                let s = s.trim();
                if s.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if s.eq_ignore_ascii_case("false") {
                    Some(false)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

/// Numbers, or text that reads as one (properties values stay text).
fn number(value: &TreeValue) -> Option<Number> {
    match value {
        TreeValue::Scalar(Scalar::Number(n)) => Some(*n),
        TreeValue::Scalar(Scalar::String(s)) => {
            let s = s.trim();
            match s.parse::<i64>() {
                Ok(i) => Some(Number::Int(i)),
                Err(_) => s.parse::<f64>().ok().filter(|f| f.is_finite()).map(Number::Float),
            }
        }
        _ => None,
    }
}

impl FromTree for f64 {
    fn from_tree(value: &TreeValue) -> Option<Self> {
        number(value).map(Number::as_f64)
    }
}

impl FromTree for f32 {
    fn from_tree(value: &TreeValue) -> Option<Self> {
        number(value).map(|n| n.as_f64() as f32)
    }
}

macro_rules! integer_from_tree {
    ($($t:ty),*) => {
        $(
            impl FromTree for $t {
                fn from_tree(value: &TreeValue) -> Option<Self> {
                    number(value)
                        .and_then(Number::as_i64)
                        .and_then(|i| <$t>::try_from(i).ok())
                }
            }
        )*
    };
}

integer_from_tree!(i64, i32, u64, u32, u16, u8, usize);

impl FromTree for TreeValue {
    fn from_tree(value: &TreeValue) -> Option<Self> {
        Some(value.clone())
    }

    fn is_map_like(&self) -> bool {
        matches!(self, TreeValue::Map(_))
    }
}

impl FromTree for TreeMap {
    fn from_tree(value: &TreeValue) -> Option<Self> {
        value.as_map().cloned()
    }

    fn is_map_like(&self) -> bool {
        true
    }
}

/// All elements must convert; one mismatch rejects the whole list.
impl<T: FromTree> FromTree for Vec<T> {
    fn from_tree(value: &TreeValue) -> Option<Self> {
        value.as_list()?.iter().map(T::from_tree).collect()
    }
}

/// `None` as a default behaves like a missing value, never like a map.
impl<T: FromTree> FromTree for Option<T> {
    fn from_tree(value: &TreeValue) -> Option<Self> {
        T::from_tree(value).map(Some)
    }

    fn is_map_like(&self) -> bool {
        self.as_ref().is_some_and(|v| v.is_map_like())
    }
}
