use crate::config::FromTree;
use crate::format::SourceFormat;
use crate::tree::TreeValue;
use crate::walker::Lookup;

/// Apply the default rules to a walk result, without converting it.
///
/// Returns `None` whenever the caller should get their default: nothing
/// found, a null, a map under a format whose maps are never leaves (unless
/// `wants_map`), or an empty map or list.
pub fn usable<'a>(lookup: Lookup<'a>, format: SourceFormat, wants_map: bool) -> Option<&'a TreeValue> {
    let value = lookup.value().filter(|v| !v.is_null())?;

    // XML decodes <value/> to an empty map; scalar callers want their default.
    if format.policy().maps_are_not_leaves && !wants_map && value.as_map().is_some() {
        return None;
    }

    if value.is_empty_collection() {
        return None;
    }

    Some(value)
}

/// Resolve a walk result against the caller's default.
///
/// String targets receive the value's string form; any other target that
/// cannot be built from the found value falls back to `default`.
pub fn resolve<T: FromTree>(lookup: Lookup<'_>, format: SourceFormat, default: T) -> T {
    match usable(lookup, format, default.is_map_like()) {
        Some(value) => T::from_tree(value).unwrap_or(default),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{TreeMap, Scalar};

    fn map_with(key: &str, value: TreeValue) -> TreeValue {
        let mut map = TreeMap::new();
        map.insert(key.to_string(), value);
        TreeValue::Map(map)
    }

    #[test]
    fn test_not_found_yields_default() {
        assert_eq!(resolve(Lookup::NotFound, SourceFormat::Json, "dflt".to_string()), "dflt");
        assert_eq!(resolve(Lookup::NotFound, SourceFormat::Yaml, 8i64), 8);
    }

    #[test]
    fn test_null_yields_default() {
        let null = TreeValue::Scalar(Scalar::Null);
        assert_eq!(resolve(Lookup::Found(&null), SourceFormat::Json, "x".to_string()), "x");
        assert_eq!(resolve(Lookup::Found(&null), SourceFormat::Json, None::<String>), None);
    }

    #[test]
    fn test_empty_collections_yield_default_for_every_format() {
        let empty_map = TreeValue::Map(TreeMap::new());
        let empty_list = TreeValue::List(vec![]);
        for format in [
            SourceFormat::Json,
            SourceFormat::Yaml,
            SourceFormat::Xml,
            SourceFormat::Properties,
        ] {
            assert_eq!(resolve(Lookup::Found(&empty_map), format, "d".to_string()), "d");
            assert_eq!(resolve(Lookup::Found(&empty_list), format, "d".to_string()), "d");
            let fallback = TreeMap::new();
            assert!(resolve(Lookup::Found(&empty_map), format, fallback).is_empty());
        }
    }

    #[test]
    fn test_xml_map_yields_default_unless_map_requested() {
        let element = map_with("attr", TreeValue::from("world"));

        assert_eq!(resolve(Lookup::Found(&element), SourceFormat::Xml, "x".to_string()), "x");

        let as_map = resolve(Lookup::Found(&element), SourceFormat::Xml, TreeMap::new());
        assert_eq!(as_map.get("attr"), Some(&TreeValue::from("world")));
    }

    #[test]
    fn test_json_map_is_stringified_for_string_default() {
        let element = map_with("attr", TreeValue::from("world"));
        let rendered = resolve(Lookup::Found(&element), SourceFormat::Json, String::new());
        assert_eq!(rendered, r#"{"attr":"world"}"#);
    }

    #[test]
    fn test_string_default_stringifies_scalars() {
        let n = TreeValue::from(3.14);
        let b = TreeValue::from(true);
        assert_eq!(resolve(Lookup::Found(&n), SourceFormat::Json, String::new()), "3.14");
        assert_eq!(resolve(Lookup::Found(&b), SourceFormat::Yaml, String::new()), "true");
    }

    #[test]
    fn test_type_mismatch_falls_back() {
        let s = TreeValue::from("not a number");
        assert_eq!(resolve(Lookup::Found(&s), SourceFormat::Json, 42i64), 42);
        assert!(resolve(Lookup::Found(&s), SourceFormat::Json, true));
    }

    #[test]
    fn test_found_value_returned_unchanged() {
        let n = TreeValue::from(4i64);
        assert_eq!(resolve(Lookup::Found(&n), SourceFormat::Json, 0i64), 4);
        assert_eq!(resolve(Lookup::Found(&n), SourceFormat::Json, 0.0f64), 4.0);
    }
}
