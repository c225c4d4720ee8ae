// Author: Dustin Pilgrim
// License: MIT

use crate::format::SourceFormat;
use crate::path::{PathToken, ESCAPE};
use crate::tree::TreeValue;

/// Outcome of a walk. `NotFound` is an ordinary result, never an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a TreeValue),
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn value(self) -> Option<&'a TreeValue> {
        match self {
            Lookup::Found(v) => Some(v),
            Lookup::NotFound => None,
        }
    }
}

enum Step<'t> {
    /// Positional step; `None` when the digits overflow `usize`.
    Index(Option<usize>),
    Key(&'t str),
}

fn step_for(token: &PathToken) -> Step<'_> {
    match token {
        PathToken::Index(i) => Step::Index(Some(*i)),
        PathToken::Segment(s) if is_pure_index(s) => Step::Index(s.parse().ok()),
        PathToken::Segment(s) => Step::Key(s.strip_prefix(ESCAPE).unwrap_or(s)),
    }
}

fn is_pure_index(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Walk `tokens` from `root`.
///
/// Digit-only tokens index lists, everything else keys maps (after dropping
/// one leading `\`). A step that does not fit the node under the cursor ends
/// the walk with `NotFound`, as does a key holding null.
///
/// With an unwrap key in the format's policy (XML's `content`), landing on a
/// map that holds it moves the cursor onto that value and stops the walk.
/// Tokens after that point are ignored, not matched.
pub fn walk<'a>(root: &'a TreeValue, tokens: &[PathToken], format: SourceFormat) -> Lookup<'a> {
    let unwrap_key = format.policy().unwrap_key;
    let mut current = root;

    for token in tokens {
        match step_for(token) {
            Step::Index(index) => match (current, index) {
                (TreeValue::List(items), Some(i)) if i < items.len() => {
                    current = &items[i];
                }
                _ => return Lookup::NotFound,
            },
            Step::Key(key) => {
                let next = match current {
                    TreeValue::Map(map) => match map.get(key) {
                        Some(v) if !v.is_null() => v,
                        _ => return Lookup::NotFound,
                    },
                    _ => return Lookup::NotFound,
                };
                current = next;

                if let (Some(unwrap), TreeValue::Map(inner)) = (unwrap_key, current) {
                    if let Some(content) = inner.get(unwrap).filter(|c| !c.is_null()) {
                        current = content;
                        break;
                    }
                }
            }
        }
    }

    Lookup::Found(current)
}
