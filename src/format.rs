use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::DotError;

/// The syntax a document was decoded from.
///
/// Fixed when the document is loaded; it selects the [`FormatPolicy`] the
/// walker and the default policy consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Json,
    Yaml,
    Xml,
    Properties,
}

/// Per-format traversal rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatPolicy {
    /// Key holding an element's text when the element also carries
    /// attributes. After a map step lands on a map containing this key the
    /// walker moves onto it and stops.
    pub unwrap_key: Option<&'static str>,
    /// A found map is never a usable leaf unless the caller asked for a map.
    pub maps_are_not_leaves: bool,
}

const PLAIN: FormatPolicy = FormatPolicy {
    unwrap_key: None,
    maps_are_not_leaves: false,
};

const XML: FormatPolicy = FormatPolicy {
    unwrap_key: Some("content"),
    maps_are_not_leaves: true,
};

impl SourceFormat {
    pub fn policy(self) -> &'static FormatPolicy {
        match self {
            SourceFormat::Json | SourceFormat::Yaml | SourceFormat::Properties => &PLAIN,
            SourceFormat::Xml => &XML,
        }
    }

    /// Map a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Result<Self, DotError> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Ok(SourceFormat::Json),
            "yaml" | "yml" => Ok(SourceFormat::Yaml),
            "xml" => Ok(SourceFormat::Xml),
            "properties" => Ok(SourceFormat::Properties),
            _ => Err(DotError::UnsupportedFormat {
                extension: ext.to_string(),
                hint: Some("Supported extensions are .json, .yaml, .yml, .xml and .properties".into()),
                code: Some(330),
            }),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DotError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        Self::from_extension(ext)
    }
}

impl FromStr for SourceFormat {
    type Err = DotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s.trim().trim_start_matches('.'))
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceFormat::Json => "JSON",
            SourceFormat::Yaml => "YAML",
            SourceFormat::Xml => "XML",
            SourceFormat::Properties => "properties",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_detection() {
        assert_eq!(SourceFormat::from_path("a/config.json").unwrap(), SourceFormat::Json);
        assert_eq!(SourceFormat::from_path("config.YML").unwrap(), SourceFormat::Yaml);
        assert_eq!(SourceFormat::from_path("config.yaml").unwrap(), SourceFormat::Yaml);
        assert_eq!(SourceFormat::from_path("config.xml").unwrap(), SourceFormat::Xml);
        assert_eq!(
            SourceFormat::from_path("app.properties").unwrap(),
            SourceFormat::Properties
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let err = SourceFormat::from_path("config.toml").unwrap_err();
        assert!(matches!(err, DotError::UnsupportedFormat { ref extension, .. } if extension == "toml"));

        let err = SourceFormat::from_path("no_extension").unwrap_err();
        assert_eq!(err.code(), Some(330));
    }

    #[test]
    fn test_from_str_accepts_leading_dot() {
        assert_eq!(".xml".parse::<SourceFormat>().unwrap(), SourceFormat::Xml);
        assert_eq!("json".parse::<SourceFormat>().unwrap(), SourceFormat::Json);
    }

    #[test]
    fn test_only_xml_unwraps() {
        assert_eq!(SourceFormat::Xml.policy().unwrap_key, Some("content"));
        assert!(SourceFormat::Xml.policy().maps_are_not_leaves);
        for format in [SourceFormat::Json, SourceFormat::Yaml, SourceFormat::Properties] {
            assert_eq!(format.policy().unwrap_key, None);
            assert!(!format.policy().maps_are_not_leaves);
        }
    }
}
