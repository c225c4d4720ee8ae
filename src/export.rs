// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use crate::config::DotConfig;
use crate::tree::TreeValue;
use crate::DotError;

/// Convert a tree to its JSON equivalent.
///
/// - Strings, numbers, booleans, null → direct mapping
/// - Maps → objects in tree order
/// - Lists → arrays
///
/// Non-finite floats have no JSON form and become `null`.
pub fn tree_to_json(value: &TreeValue) -> serde_json::Value {
    // Keys are always strings, so the untagged derive cannot fail here.
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}

/// Pretty-printed JSON for a whole tree.
pub fn to_json_pretty(value: &TreeValue) -> String {
    // Serializing a `serde_json::Value` to a String cannot fail.
    serde_json::to_string_pretty(&tree_to_json(value)).unwrap_or_default()
}

/// Load any supported config file and render it as pretty JSON.
///
/// # Examples
/// ```no_run
/// use dotcfg::export::export_file_to_json;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let json = export_file_to_json("config.xml")?;
/// println!("{}", json);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Returns error if the file is missing, has an unsupported extension, or
/// cannot be decoded.
pub fn export_file_to_json<P: AsRef<Path>>(path: P) -> Result<String, DotError> {
    let config = DotConfig::from_file_with(path, false)?;
    Ok(to_json_pretty(config.tree()?))
}
