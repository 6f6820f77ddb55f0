//! Common types used throughout pagescout
//!
//! The central type here is [`Path`]: an ordered sequence of object keys
//! and array indices locating a value inside a decoded response body.
//! Paths are the common currency returned by every detection component;
//! equality is structural (segment-by-segment), not identity.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A location inside a nested response tree
///
/// The empty path refers to the tree itself.
pub type Path = Vec<PathSegment>;

// ============================================================================
// Path Segments
// ============================================================================

/// One step of a [`Path`]: an object key or an array index
///
/// Serializes untagged, so a path renders as a plain JSON array like
/// `["_links", "next", "href"]` or `["data", 0, "id"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Lookup by object key
    Key(String),
    /// Lookup by array index
    Index(usize),
}

impl PathSegment {
    /// Create a key segment
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }

    /// Create an index segment
    pub fn index(index: usize) -> Self {
        Self::Index(index)
    }

    /// The key name, if this is a key segment
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(k) => Some(k),
            Self::Index(_) => None,
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => write!(f, "{k}"),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

// ============================================================================
// Path Parsing & Formatting
// ============================================================================

/// Parse a dotted path string into a [`Path`]
///
/// Segments are separated by `.`; a segment consisting entirely of digits
/// becomes an array index. An empty string is the empty path (the tree
/// itself).
///
/// ```
/// use pagescout::types::{parse_path, PathSegment};
///
/// let path = parse_path("_embedded.items.0").unwrap();
/// assert_eq!(
///     path,
///     vec![
///         PathSegment::key("_embedded"),
///         PathSegment::key("items"),
///         PathSegment::index(0),
///     ]
/// );
/// ```
pub fn parse_path(input: &str) -> Result<Path> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    input
        .split('.')
        .map(|segment| {
            if segment.is_empty() {
                return Err(Error::invalid_path(input, "empty segment"));
            }
            if segment.bytes().all(|b| b.is_ascii_digit()) {
                let index: usize = segment
                    .parse()
                    .map_err(|_| Error::invalid_path(input, "index out of range"))?;
                Ok(PathSegment::Index(index))
            } else {
                Ok(PathSegment::key(segment))
            }
        })
        .collect()
}

/// Format a path as a dotted string (empty path renders as `$`)
pub fn format_path(path: &[PathSegment]) -> String {
    if path.is_empty() {
        return "$".to_string();
    }
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

/// Check whether `prefix` is a prefix of `path` (every path prefixes itself)
pub fn path_starts_with(path: &[PathSegment], prefix: &[PathSegment]) -> bool {
    path.len() >= prefix.len() && path[..prefix.len()] == *prefix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_keys_and_indices() {
        let path = parse_path("data.0.id").unwrap();
        assert_eq!(
            path,
            vec![
                PathSegment::key("data"),
                PathSegment::index(0),
                PathSegment::key("id"),
            ]
        );
    }

    #[test]
    fn test_parse_path_empty_is_root() {
        assert_eq!(parse_path("").unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_path_rejects_empty_segment() {
        assert!(parse_path("a..b").is_err());
        assert!(parse_path(".a").is_err());
    }

    #[test]
    fn test_format_path() {
        let path = vec![PathSegment::key("_links"), PathSegment::key("next")];
        assert_eq!(format_path(&path), "_links.next");
        assert_eq!(format_path(&[]), "$");
    }

    #[test]
    fn test_path_serializes_untagged() {
        let path = vec![PathSegment::key("data"), PathSegment::index(2)];
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"["data",2]"#);

        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }

    #[test]
    fn test_path_starts_with() {
        let path = parse_path("a.b.c").unwrap();
        let prefix = parse_path("a.b").unwrap();
        assert!(path_starts_with(&path, &prefix));
        assert!(path_starts_with(&path, &path));
        assert!(path_starts_with(&path, &[]));
        assert!(!path_starts_with(&prefix, &path));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(parse_path("data").unwrap(), vec![PathSegment::key("data")]);
        assert_ne!(
            vec![PathSegment::key("0")],
            vec![PathSegment::index(0)],
        );
    }
}
