use crate::format::SourceFormat;
use crate::tree::{Number, Scalar, TreeValue};
use crate::DotError;

pub(super) fn decode(text: &str) -> Result<TreeValue, DotError> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| DotError::parse(SourceFormat::Json, e.to_string()))?;
    Ok(TreeValue::from(value))
}

impl From<serde_json::Value> for TreeValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => TreeValue::Scalar(Scalar::Null),
            serde_json::Value::Bool(b) => TreeValue::Scalar(Scalar::Bool(b)),
            serde_json::Value::Number(n) => {
                let number = n
                    .as_i64()
                    .map(Number::Int)
                    .or_else(|| n.as_f64().map(Number::Float));
                number.map_or(TreeValue::Scalar(Scalar::Null), |n| TreeValue::Scalar(Scalar::Number(n)))
            }
            serde_json::Value::String(s) => TreeValue::Scalar(Scalar::String(s)),
            serde_json::Value::Array(items) => {
                TreeValue::List(items.into_iter().map(TreeValue::from).collect())
            }
            serde_json::Value::Object(map) => {
                TreeValue::Map(map.into_iter().map(|(k, v)| (k, TreeValue::from(v))).collect())
            }
        }
    }
}
