use super::*;
use super::scanner::{split_segments, unescape_dots};

pub(super) fn tokenize_path(path: &str, indices: &[usize]) -> Result<Vec<PathToken>, DotError> {
    let path = path.trim();
    let mut next_index = 0;
    let mut tokens = Vec::new();

    for raw in split_segments(path) {
        let token = if !indices.is_empty() && raw == PLACEHOLDER {
            let index = indices
                .get(next_index)
                .copied()
                .ok_or_else(|| insufficient_indices(path, indices))?;
            next_index += 1;
            PathToken::Index(index)
        } else if !indices.is_empty() && raw == ESCAPED_PLACEHOLDER {
            PathToken::Segment(PLACEHOLDER.to_string())
        } else {
            PathToken::Segment(unescape_dots(&raw))
        };
        tokens.push(token);
    }

    Ok(tokens)
}

fn insufficient_indices(path: &str, indices: &[usize]) -> DotError {
    DotError::InvalidPath {
        path: path.to_string(),
        supplied: indices.len(),
        message: format!(
            "Insufficient indices supplied for '{}' placeholders: {:?}",
            PLACEHOLDER, indices
        ),
        hint: Some(format!(
            "Pass one index per '{}' segment, or escape it as '{}'",
            PLACEHOLDER, ESCAPED_PLACEHOLDER
        )),
        code: Some(310),
    }
}
