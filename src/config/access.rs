use tracing::trace;

use super::*;
use crate::policy;
use crate::walker::{self, Lookup};

impl DotConfig {
    /// Get the value at `path`, or `default` when it is missing, null, an
    /// empty map or list, or not readable as `T`.
    ///
    /// A `String` default turns any found value into its string form.
    ///
    /// # Examples
    /// ```
    /// # use dotcfg::{DotConfig, SourceFormat};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = DotConfig::from_str(
    ///     r#"{"server": {"port": 8080}, "dot.key": "yes"}"#,
    ///     SourceFormat::Json,
    /// )?;
    /// let port: i64 = config.get_or("server.port", 80)?;
    /// let as_text: String = config.get_or("server.port", String::new())?;
    /// let dotted: String = config.get_or(r"dot\.key", String::new())?;
    /// assert_eq!((port, as_text.as_str(), dotted.as_str()), (8080, "8080", "yes"));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Only when the source cannot be loaded; missing keys never error.
    pub fn get_or<T: FromTree>(&self, path: &str, default: T) -> Result<T, DotError> {
        self.get_or_with_indices(path, default, &[])
    }

    /// Like [`get_or`](Self::get_or), with every `#` segment replaced by the
    /// next entry of `indices`. Use `\#` for a literal `#` key.
    ///
    /// # Examples
    /// ```
    /// # use dotcfg::{DotConfig, SourceFormat};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = DotConfig::from_str("servers:\n  - host: a\n  - host: b\n", SourceFormat::Yaml)?;
    /// for i in 0..2 {
    ///     let host: String = config.get_or_with_indices("servers.#.host", String::new(), &[i])?;
    ///     println!("{}", host);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// [`DotError::InvalidPath`] when the path has more `#` segments than
    /// `indices` entries, checked before the source is loaded.
    pub fn get_or_with_indices<T: FromTree>(
        &self,
        path: &str,
        default: T,
        indices: &[usize],
    ) -> Result<T, DotError> {
        let lookup = self.lookup(path, indices)?;
        Ok(policy::resolve(lookup, self.format, default))
    }

    /// Get an optional typed value: `None` wherever [`get_or`](Self::get_or)
    /// would fall back to its default.
    pub fn get<T: FromTree>(&self, path: &str) -> Result<Option<T>, DotError> {
        self.get_with_indices(path, &[])
    }

    pub fn get_with_indices<T: FromTree>(
        &self,
        path: &str,
        indices: &[usize],
    ) -> Result<Option<T>, DotError> {
        self.get_or_with_indices(path, None, indices)
    }

    /// The raw value at `path` after the default rules, without conversion.
    /// XML maps count as found here.
    pub fn value(&self, path: &str, indices: &[usize]) -> Result<Option<&TreeValue>, DotError> {
        let lookup = self.lookup(path, indices)?;
        Ok(policy::usable(lookup, self.format, true))
    }

    /// Check if a usable value exists at `path`.
    pub fn has(&self, path: &str) -> Result<bool, DotError> {
        Ok(self.value(path, &[])?.is_some())
    }

    /// Keys of the map at `path`, in document order. Anything that is not a
    /// map has no keys.
    ///
    /// `path` is read like any other lookup, so `""` names the key `""`. Use
    /// [`root_keys`](Self::root_keys) for the top level.
    pub fn keys(&self, path: &str) -> Result<Vec<String>, DotError> {
        Ok(map_keys(self.lookup(path, &[])?.value()))
    }

    /// Top-level keys, in document order.
    pub fn root_keys(&self) -> Result<Vec<String>, DotError> {
        Ok(map_keys(Some(self.tree()?)))
    }

    fn lookup(&self, path: &str, indices: &[usize]) -> Result<Lookup<'_>, DotError> {
        let tokens = crate::path::tokenize(path, indices)?;
        let tree = self.tree()?;
        let lookup = walker::walk(tree, &tokens, self.format);
        trace!(path, tokens = tokens.len(), found = lookup.is_found(), "config lookup");
        Ok(lookup)
    }
}

fn map_keys(node: Option<&TreeValue>) -> Vec<String> {
    node.and_then(TreeValue::as_map)
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}
