// Author: Dustin Pilgrim
// License: MIT

use std::borrow::Cow;
use std::str::Chars;

use crate::DotError;

mod scanner;
mod tokenizer;

pub(crate) const SEPARATOR: char = '.';
pub(crate) const ESCAPE: char = '\\';
pub(crate) const PLACEHOLDER: &str = "#";
pub(crate) const ESCAPED_PLACEHOLDER: &str = "\\#";

/// One resolved path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathToken {
    /// Segment text with every `\.` already turned into `.`.
    /// A leading `\` is still present; the walker strips it.
    Segment(String),
    /// Index substituted for a `#` placeholder.
    Index(usize),
}

impl PathToken {
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            PathToken::Segment(s) => Cow::Borrowed(s),
            PathToken::Index(i) => Cow::Owned(i.to_string()),
        }
    }
}

/// Character cursor over one path, remembering the previously consumed
/// character so escapes can be recognised without lookbehind.
pub(crate) struct PathScanner<'a> {
    input: Chars<'a>,
    peek: Option<char>,
    prev: Option<char>,
}

impl<'a> PathScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut scanner = PathScanner {
            input: input.chars(),
            peek: None,
            prev: None,
        };
        scanner.peek = scanner.input.next();
        scanner
    }
}

/// Split `path` into tokens, substituting `indices` into `#` placeholders.
///
/// Runs two independent passes: a split on every `.` not preceded by `\`,
/// then a per-segment unescape of `\.` into `.`. Placeholders are matched
/// against the raw segment and only when at least one index is supplied.
///
/// # Errors
/// [`DotError::InvalidPath`] when the path holds more `#` segments than
/// `indices` has entries.
///
/// # Examples
/// ```
/// use dotcfg::path::{tokenize, PathToken};
///
/// let tokens = tokenize(r"array.#.dot\.key", &[1]).unwrap();
/// assert_eq!(tokens, vec![
///     PathToken::Segment("array".into()),
///     PathToken::Index(1),
///     PathToken::Segment("dot.key".into()),
/// ]);
/// ```
pub fn tokenize(path: &str, indices: &[usize]) -> Result<Vec<PathToken>, DotError> {
    tokenizer::tokenize_path(path, indices)
}

#[cfg(test)]
mod tests;
