#[cfg(test)]
use super::*;

fn seg(s: &str) -> PathToken {
    PathToken::Segment(s.to_string())
}

#[test]
fn test_plain_dotted_path() {
    let tokens = tokenize("path.to.value", &[]).unwrap();
    assert_eq!(tokens, vec![seg("path"), seg("to"), seg("value")]);
}

#[test]
fn test_input_is_trimmed() {
    let tokens = tokenize("  path.to \n", &[]).unwrap();
    assert_eq!(tokens, vec![seg("path"), seg("to")]);
}

#[test]
fn test_escaped_dot_stays_in_segment() {
    let tokens = tokenize(r"dot\.path", &[]).unwrap();
    assert_eq!(tokens, vec![seg("dot.path")]);

    let tokens = tokenize(r"path\.to\.value", &[]).unwrap();
    assert_eq!(tokens, vec![seg("path.to.value")]);
}

#[test]
fn test_consecutive_escaped_dots() {
    let tokens = tokenize(r"2\.#\.\.\.", &[]).unwrap();
    assert_eq!(tokens, vec![seg("2.#...")]);
}

#[test]
fn test_double_backslash_before_dot_is_kept() {
    // The dot is not a separator, and the escape itself is escaped.
    let tokens = tokenize(r"a\\.b", &[]).unwrap();
    assert_eq!(tokens, vec![seg(r"a\\.b")]);
}

#[test]
fn test_numeric_escape_survives_tokenizing() {
    let tokens = tokenize(r"\1.\3", &[]).unwrap();
    assert_eq!(tokens, vec![seg(r"\1"), seg(r"\3")]);
}

#[test]
fn test_placeholders_consume_indices_left_to_right() {
    let tokens = tokenize("path.#.to.#", &[4, 5]).unwrap();
    assert_eq!(
        tokens,
        vec![seg("path"), PathToken::Index(4), seg("to"), PathToken::Index(5)]
    );
}

#[test]
fn test_extra_indices_are_ignored() {
    let tokens = tokenize("array.#", &[1, 2, 3]).unwrap();
    assert_eq!(tokens, vec![seg("array"), PathToken::Index(1)]);
}

#[test]
fn test_insufficient_indices() {
    let err = tokenize("a.#.b.#", &[7]).unwrap_err();
    match err {
        DotError::InvalidPath { path, supplied, code, .. } => {
            assert_eq!(path, "a.#.b.#");
            assert_eq!(supplied, 1);
            assert_eq!(code, Some(310));
        }
        other => panic!("expected InvalidPath, got {:?}", other),
    }
}

#[test]
fn test_placeholder_without_indices_is_literal() {
    let tokens = tokenize("a.#", &[]).unwrap();
    assert_eq!(tokens, vec![seg("a"), seg("#")]);

    let tokens = tokenize(r"\#.value", &[]).unwrap();
    assert_eq!(tokens, vec![seg(r"\#"), seg("value")]);
}

#[test]
fn test_escaped_placeholder_with_indices() {
    let tokens = tokenize(r"\#.value", &[1]).unwrap();
    assert_eq!(tokens, vec![seg("#"), seg("value")]);
}

#[test]
fn test_placeholder_must_be_whole_segment() {
    let tokens = tokenize("a#.#b", &[1]).unwrap();
    assert_eq!(tokens, vec![seg("a#"), seg("#b")]);
}

#[test]
fn test_everything_escaped() {
    let tokens = tokenize(r"\23.\#.dot\.path.#", &[1]).unwrap();
    assert_eq!(
        tokens,
        vec![seg(r"\23"), seg("#"), seg("dot.path"), PathToken::Index(1)]
    );
}

#[test]
fn test_leading_and_trailing_separators_yield_empty_segments() {
    assert_eq!(tokenize(".a", &[]).unwrap(), vec![seg(""), seg("a")]);
    assert_eq!(tokenize("a.", &[]).unwrap(), vec![seg("a"), seg("")]);
    assert_eq!(tokenize("", &[]).unwrap(), vec![seg("")]);
}

#[test]
fn test_token_text() {
    assert_eq!(PathToken::Index(12).as_text(), "12");
    assert_eq!(seg("key").as_text(), "key");
}
