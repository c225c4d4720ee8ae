use thiserror::Error;

use crate::format::SourceFormat;

/// The main error type for loading and querying configs.
///
/// Lookups never fail because a key is missing; that case always degrades to
/// the caller's default. Errors are reserved for malformed paths and for
/// sources that cannot be read or decoded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DotError {
    /// Raised when a path has more `#` placeholders than supplied indices.
    #[error("[DOTCFG] Invalid path '{path}': {message} (received {supplied} indices){}{}", hint_suffix(.hint), code_suffix(.code))]
    InvalidPath {
        path: String,
        supplied: usize,
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[DOTCFG] File Error '{path}': {message}{}{}", hint_suffix(.hint), code_suffix(.code))]
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised by a decoder before the tree ever reaches traversal.
    #[error("[DOTCFG] {format} Parse Error: {message}{}{}", hint_suffix(.hint), code_suffix(.code))]
    ParseError {
        format: SourceFormat,
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[DOTCFG] Unsupported file type '{extension}'{}{}", hint_suffix(.hint), code_suffix(.code))]
    UnsupportedFormat {
        extension: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl DotError {
    pub(crate) fn parse(format: SourceFormat, message: impl Into<String>) -> Self {
        let code = match format {
            SourceFormat::Json => 320,
            SourceFormat::Yaml => 321,
            SourceFormat::Xml => 322,
            SourceFormat::Properties => 323,
        };
        DotError::ParseError {
            format,
            message: message.into(),
            hint: Some(format!("Check that the document is valid {}", format)),
            code: Some(code),
        }
    }

    /// Diagnostic code carried by every variant.
    pub fn code(&self) -> Option<u32> {
        match self {
            DotError::InvalidPath { code, .. }
            | DotError::FileError { code, .. }
            | DotError::ParseError { code, .. }
            | DotError::UnsupportedFormat { code, .. } => *code,
        }
    }
}

fn hint_suffix(hint: &Option<String>) -> String {
    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
}

fn code_suffix(code: &Option<u32>) -> String {
    code.map_or(String::new(), |c| format!(" Code: {}", c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_display() {
        let err = DotError::InvalidPath {
            path: "a.#.#".into(),
            supplied: 1,
            message: "Insufficient indices supplied".into(),
            hint: None,
            code: Some(310),
        };
        assert_eq!(
            err.to_string(),
            "[DOTCFG] Invalid path 'a.#.#': Insufficient indices supplied (received 1 indices) Code: 310"
        );
        assert_eq!(err.code(), Some(310));
    }

    #[test]
    fn test_parse_error_codes_per_format() {
        assert_eq!(DotError::parse(SourceFormat::Json, "x").code(), Some(320));
        assert_eq!(DotError::parse(SourceFormat::Properties, "x").code(), Some(323));

        let msg = DotError::parse(SourceFormat::Xml, "unexpected end").to_string();
        assert!(msg.starts_with("[DOTCFG] XML Parse Error: unexpected end"));
        assert!(msg.contains("Hint: Check that the document is valid XML"));
    }
}
