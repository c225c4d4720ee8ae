// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::decode;
use crate::format::SourceFormat;
use crate::tree::{Scalar, TreeValue};
use crate::DotError;

mod access;
mod conversion;

pub use conversion::FromTree;

enum Source {
    File(PathBuf),
    Text(String),
    /// Built by the caller; the cache is filled at construction.
    Tree,
}

/// A read-only config document and its lazily decoded tree.
///
/// The tree is decoded at most once. Concurrent first lookups block on a
/// single decode and every later read is lock-free. If loading fails the
/// cache stays empty and the next lookup tries again.
pub struct DotConfig {
    source: Source,
    format: SourceFormat,
    tree: OnceCell<TreeValue>,
}

impl DotConfig {
    /// Open a config file, picking the format from its extension. Reading and
    /// decoding are deferred to the first lookup.
    ///
    /// # Example
    /// ```no_run
    /// # use dotcfg::DotConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = DotConfig::from_file("~/.config/app/config.yaml")?;
    /// let host: String = config.get_or("server.host", "localhost".to_string())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DotError> {
        Self::from_file_with(path, true)
    }

    /// Open a config file. With `lazy = false` the file is read and decoded
    /// now, so I/O and parse errors surface here instead of at lookup.
    pub fn from_file_with<P: AsRef<Path>>(path: P, lazy: bool) -> Result<Self, DotError> {
        let path = expand_home(path.as_ref())?;
        let format = SourceFormat::from_path(&path)?;

        let config = Self {
            source: Source::File(path),
            format,
            tree: OnceCell::new(),
        };

        if !lazy {
            config.tree()?;
        }
        Ok(config)
    }

    /// Decode config text of a known format (no file I/O).
    pub fn from_str(content: &str, format: SourceFormat) -> Result<Self, DotError> {
        let config = Self {
            source: Source::Text(content.to_string()),
            format,
            tree: OnceCell::new(),
        };
        config.tree()?;
        Ok(config)
    }

    /// Wrap an already-built tree. `format` still decides the XML lookup rules.
    pub fn from_tree(tree: TreeValue, format: SourceFormat) -> Self {
        Self {
            source: Source::Tree,
            format,
            tree: OnceCell::with_value(tree),
        }
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Backing file, if the config was opened from one.
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            Source::File(path) => Some(path),
            Source::Text(_) | Source::Tree => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.tree.get().is_some()
    }

    /// The decoded tree, loading it on first use.
    pub fn tree(&self) -> Result<&TreeValue, DotError> {
        self.tree.get_or_try_init(|| self.load())
    }

    fn load(&self) -> Result<TreeValue, DotError> {
        match &self.source {
            Source::File(path) => {
                let content = fs::read_to_string(path).map_err(|e| DotError::FileError {
                    message: format!("Failed to read file: {}", e),
                    path: path.to_string_lossy().to_string(),
                    hint: Some("Check that the file exists and is readable".into()),
                    code: Some(301),
                })?;
                debug!(path = %path.display(), format = %self.format, "loaded config file");
                decode::decode(&content, self.format)
            }
            Source::Text(content) => decode::decode(content, self.format),
            Source::Tree => Ok(TreeValue::Scalar(Scalar::Null)),
        }
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(raw: &Path) -> Result<PathBuf, DotError> {
    let Some(rest) = raw.to_str().and_then(|s| s.strip_prefix("~/")) else {
        return Ok(raw.to_path_buf());
    };

    let home = dirs::home_dir().ok_or_else(|| DotError::FileError {
        message: "Could not determine home directory for ~ expansion".into(),
        path: raw.to_string_lossy().to_string(),
        hint: Some("Set HOME or use an absolute path".into()),
        code: Some(300),
    })?;
    Ok(home.join(rest))
}
