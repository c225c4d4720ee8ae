// Author: Dustin Pilgrim
// License: MIT

use tracing::debug;

use crate::format::SourceFormat;
use crate::tree::TreeValue;
use crate::DotError;

mod json;
mod properties;
mod scalar;
mod xml;
mod yaml;

pub use scalar::infer_scalar;

/// Decode document text into a tree according to `format`.
///
/// Every decoder yields maps with unique, order-stable keys. XML elements
/// follow the `content` convention: attributes and children become map
/// entries, text goes under `content`, a text-only element collapses to its
/// text and an empty element is an empty map.
///
/// # Errors
/// [`DotError::ParseError`] when the text is malformed for its format.
pub fn decode(text: &str, format: SourceFormat) -> Result<TreeValue, DotError> {
    let tree = match format {
        SourceFormat::Json => json::decode(text),
        SourceFormat::Yaml => yaml::decode(text),
        SourceFormat::Xml => xml::decode(text),
        SourceFormat::Properties => properties::decode(text),
    }?;
    debug!(%format, bytes = text.len(), root = tree.kind(), "decoded document");
    Ok(tree)
}
