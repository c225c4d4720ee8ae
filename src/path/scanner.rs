use super::*;

/// Advance the cursor, remembering the character just consumed.
pub(super) fn bump(scanner: &mut PathScanner) -> Option<char> {
    let curr = scanner.peek;
    if curr.is_some() {
        scanner.prev = curr;
    }
    scanner.peek = scanner.input.next();
    curr
}

/// Split pass: cut on every separator whose preceding character is not the
/// escape. Escapes are left in place for the unescape pass.
pub(super) fn split_segments(path: &str) -> Vec<String> {
    let mut scanner = PathScanner::new(path);
    let mut segments = Vec::new();
    let mut current = String::new();

    while let Some(c) = scanner.peek {
        let escaped = scanner.prev == Some(ESCAPE);
        bump(&mut scanner);

        if c == SEPARATOR && !escaped {
            segments.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    segments.push(current);
    segments
}

/// Unescape pass: `\.` becomes `.` unless that backslash is itself preceded
/// by a backslash, in which case both characters are kept.
pub(super) fn unescape_dots(segment: &str) -> String {
    let mut scanner = PathScanner::new(segment);
    let mut out = String::with_capacity(segment.len());

    while let Some(c) = scanner.peek {
        let after_escape = scanner.prev == Some(ESCAPE);
        bump(&mut scanner);

        if c == ESCAPE && !after_escape && scanner.peek == Some(SEPARATOR) {
            bump(&mut scanner);
            out.push(SEPARATOR);
        } else {
            out.push(c);
        }
    }
    out
}
