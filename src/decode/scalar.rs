use once_cell::sync::Lazy;
use regex::Regex;

use crate::tree::{Number, Scalar, TreeValue};

static NUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?$").expect("numeric pattern")
});

/// Type a raw text value from XML text and attributes.
///
/// `true`/`false` in any case become booleans, `null` becomes null, and
/// numeric literals without leading zeros become numbers. Everything else
/// stays a string.
pub fn infer_scalar(raw: &str) -> TreeValue {
    if raw.eq_ignore_ascii_case("true") {
        return TreeValue::Scalar(Scalar::Bool(true));
    }
    if raw.eq_ignore_ascii_case("false") {
        return TreeValue::Scalar(Scalar::Bool(false));
    }
    if raw.eq_ignore_ascii_case("null") {
        return TreeValue::Scalar(Scalar::Null);
    }

    if NUMERIC.is_match(raw) {
        let integral = !raw.contains(['.', 'e', 'E']);
        if integral {
            if let Ok(i) = raw.parse::<i64>() {
                return TreeValue::Scalar(Scalar::Number(Number::Int(i)));
            }
        }
        if let Ok(f) = raw.parse::<f64>() {
            if f.is_finite() {
                return TreeValue::Scalar(Scalar::Number(Number::Float(f)));
            }
        }
    }

    TreeValue::Scalar(Scalar::String(raw.to_string()))
}
