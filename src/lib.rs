//! Read-only access to JSON, YAML, XML and `.properties` configs through
//! dot-notation paths.
//!
//! Every document is decoded into a [`TreeValue`] of maps, lists and scalars
//! and queried with the same path syntax:
//!
//! | Syntax | Meaning |
//! |--------|---------|
//! | `a.b.c` | segments split on every `.` not preceded by `\` |
//! | `a\.b` | literal dot: one segment, key `a.b` |
//! | `list.0` | a digit-only segment indexes a list |
//! | `map.\1` | a leading `\` forces the segment to be a key (`1`) |
//! | `list.#` | `#` takes the next supplied index, left to right |
//! | `\#` | literal `#` key when indices are supplied |
//!
//! Missing keys, out-of-range indices, steps into the wrong kind of node,
//! nulls and empty maps or lists all produce the caller's default. Only a
//! path with more `#` placeholders than supplied indices is an error.
//!
//! XML follows the `content` convention: an element carrying attributes keeps
//! its text under `content`, and a lookup that lands on such an element
//! returns the text and ignores any remaining segments. Elements that decode
//! to maps yield the default unless a map was asked for.
//!
//! ```
//! use dotcfg::{DotConfig, SourceFormat};
//!
//! # fn main() -> Result<(), dotcfg::DotError> {
//! let config = DotConfig::from_str(
//!     r#"{"path":{"to":{"value":"hello"}},"array":["item0",{"key":"world"}]}"#,
//!     SourceFormat::Json,
//! )?;
//!
//! assert_eq!(config.get_or("path.to.value", String::new())?, "hello");
//! assert_eq!(config.get_or("array.0", String::new())?, "item0");
//! assert_eq!(config.get_or_with_indices("array.#.key", String::new(), &[1])?, "world");
//! assert_eq!(config.get_or("array.1.x", "nonexistent".to_string())?, "nonexistent");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod decode;
pub mod error;
pub mod export;
pub mod format;
pub mod path;
pub mod policy;
pub mod tree;
pub mod walker;

pub use config::{DotConfig, FromTree};
pub use error::DotError;
pub use format::SourceFormat;
pub use tree::{Number, Scalar, TreeMap, TreeValue};
