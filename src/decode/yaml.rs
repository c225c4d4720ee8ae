use serde_yaml::Value as Yaml;

use crate::format::SourceFormat;
use crate::tree::{Number, Scalar, TreeMap, TreeValue};
use crate::DotError;

pub(super) fn decode(text: &str) -> Result<TreeValue, DotError> {
    let value: Yaml = serde_yaml::from_str(text)
        .map_err(|e| DotError::parse(SourceFormat::Yaml, e.to_string()))?;
    convert(value)
}

fn convert(value: Yaml) -> Result<TreeValue, DotError> {
    Ok(match value {
        Yaml::Null => TreeValue::Scalar(Scalar::Null),
        Yaml::Bool(b) => TreeValue::Scalar(Scalar::Bool(b)),
        Yaml::Number(n) => {
            let number = n
                .as_i64()
                .map(Number::Int)
                .or_else(|| n.as_f64().map(Number::Float));
            number.map_or(TreeValue::Scalar(Scalar::Null), |n| TreeValue::Scalar(Scalar::Number(n)))
        }
        Yaml::String(s) => TreeValue::Scalar(Scalar::String(s)),
        Yaml::Sequence(items) => {
            TreeValue::List(items.into_iter().map(convert).collect::<Result<_, _>>()?)
        }
        Yaml::Mapping(mapping) => {
            let mut map = TreeMap::with_capacity(mapping.len());
            for (k, v) in mapping {
                map.insert(key_string(k)?, convert(v)?);
            }
            TreeValue::Map(map)
        }
        Yaml::Tagged(tagged) => convert(tagged.value)?,
    })
}

/// Scalar keys are stringified so `1: x` is reachable as `\1`.
fn key_string(key: Yaml) -> Result<String, DotError> {
    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        Yaml::Tagged(tagged) => key_string(tagged.value),
        Yaml::Sequence(_) | Yaml::Mapping(_) => Err(DotError::parse(
            SourceFormat::Yaml,
            "mapping keys must be scalars",
        )),
    }
}
