use java_properties::PropertiesIter;

use crate::format::SourceFormat;
use crate::tree::{TreeMap, TreeValue};
use crate::DotError;

/// Properties are flat: dotted keys stay whole and are reached with `\.`.
/// Values are kept as written; numeric and boolean reads parse them on demand.
pub(super) fn decode(text: &str) -> Result<TreeValue, DotError> {
    let mut map = TreeMap::new();
    // `text` is already decoded, so the bytes handed back are UTF-8.
    PropertiesIter::new_with_encoding(text.as_bytes(), encoding_rs::UTF_8)
        .read_into(|key, value| {
            map.insert(key, TreeValue::from(value));
        })
        .map_err(|e| DotError::parse(SourceFormat::Properties, e.to_string()))?;
    Ok(TreeValue::Map(map))
}
