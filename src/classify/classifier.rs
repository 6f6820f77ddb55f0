//! Paradigm classification over response metadata
//!
//! The classifier never looks inside the records collection: the caller
//! passes the records path and the whole subtree is excluded from scanning,
//! so a record that happens to contain a field named `page` cannot
//! spuriously signal pagination.

use super::types::{Classification, Paradigm};
use super::vocabulary as vocab;
use crate::types::{Path, PathSegment};
use serde_json::Value;

/// Classify a response body into a pagination paradigm
///
/// `records_path` is the location of the records collection (as reported by
/// [`crate::records::find_records`]); it and everything beneath it are
/// skipped when scanning for signals. Pass `None` when no records were
/// located.
///
/// Returns `None` when no paradigm vocabulary matches anywhere in the
/// metadata — a normal outcome telling the caller to configure pagination
/// explicitly. A non-object root also yields `None` rather than an error.
pub fn classify(tree: &Value, records_path: Option<&[PathSegment]>) -> Option<Classification> {
    let root = tree.as_object()?;
    let scopes = build_scopes(root, records_path.unwrap_or(&[]));

    for paradigm in Paradigm::PRIORITY {
        let matched = match paradigm {
            Paradigm::JsonLink => {
                match_json_link(&scopes).map(|path| Classification::pointer(paradigm, path))
            }
            Paradigm::Cursor => {
                match_cursor(&scopes).map(|path| Classification::pointer(paradigm, path))
            }
            Paradigm::PageNumber => {
                match_page_number(&scopes).then(|| Classification::counters(paradigm))
            }
            Paradigm::OffsetLimit => {
                match_offset_limit(&scopes).then(|| Classification::counters(paradigm))
            }
        };
        if let Some(classification) = matched {
            tracing::debug!(
                paradigm = %classification.paradigm,
                next_key = ?classification.next_key,
                "classified pagination paradigm"
            );
            return Some(classification);
        }
    }

    tracing::debug!("no pagination vocabulary matched");
    None
}

// ============================================================================
// Metadata Scopes
// ============================================================================

/// A group of co-occurring metadata fields: the top level of the response,
/// or the inside of one container object such as `pagination` or `_links`.
/// Counter signals must co-occur within a single scope.
struct Scope<'a> {
    /// Path to the container; empty for the top level
    path: Path,
    /// Fields of the scope, in document order
    fields: Vec<(&'a str, &'a Value)>,
}

impl Scope<'_> {
    /// Normalized name of the container key, if any
    fn container_name(&self) -> Option<String> {
        self.path.last().and_then(PathSegment::as_key).map(vocab::normalize_key)
    }

    /// Whether any field's normalized name is in `table`, with a scalar
    /// (non-container) value
    fn has_scalar_named(&self, table: &[&str]) -> bool {
        self.fields.iter().any(|(key, value)| {
            vocab::in_table(vocab::normalize_key(key).as_str(), table)
                && !value.is_object()
                && !value.is_array()
        })
    }
}

/// Collect metadata scopes: the top level plus one level of nesting under
/// each container object, excluding the records subtree throughout.
fn build_scopes<'a>(
    root: &'a serde_json::Map<String, Value>,
    records_path: &[PathSegment],
) -> Vec<Scope<'a>> {
    let mut scopes = Vec::new();

    let top_fields: Vec<(&str, &Value)> = root
        .iter()
        .filter(|(key, _)| records_path != [PathSegment::key(key.as_str())].as_slice())
        .map(|(key, value)| (key.as_str(), value))
        .collect();
    scopes.push(Scope {
        path: Vec::new(),
        fields: top_fields,
    });

    for (key, value) in root {
        let Some(container) = value.as_object() else {
            continue;
        };
        let container_path = vec![PathSegment::key(key.as_str())];
        let fields = container
            .iter()
            .filter(|(child, _)| {
                let child_path = [
                    PathSegment::key(key.as_str()),
                    PathSegment::key(child.as_str()),
                ];
                records_path != child_path.as_slice()
            })
            .map(|(child, value)| (child.as_str(), value))
            .collect();
        scopes.push(Scope {
            path: container_path,
            fields,
        });
    }

    scopes
}

// ============================================================================
// Paradigm Matchers
// ============================================================================

/// Match an explicit next-page link: a next-named field at the top level,
/// or under a `links`/`_links` container, holding a URL or absolute-path
/// string. HAL-style link objects resolve through their `href` leaf.
fn match_json_link(scopes: &[Scope<'_>]) -> Option<Path> {
    for scope in scopes {
        let in_link_container = scope
            .container_name()
            .is_some_and(|name| vocab::in_table(&name, vocab::LINK_CONTAINER_NAMES));
        if !scope.path.is_empty() && !in_link_container {
            continue;
        }

        for (key, value) in &scope.fields {
            if !vocab::in_table(vocab::normalize_key(key).as_str(), vocab::NEXT_LINK_NAMES) {
                continue;
            }
            match value {
                Value::String(s) if is_url_like(s) => {
                    let mut path = scope.path.clone();
                    path.push(PathSegment::key(*key));
                    return Some(path);
                }
                Value::Object(link) if in_link_container => {
                    // HAL convention: {"_links": {"next": {"href": "..."}}}
                    if let Some((href_key, Value::String(s))) = link
                        .iter()
                        .find(|(k, _)| vocab::normalize_key(k) == vocab::HREF_NAME)
                    {
                        if is_url_like(s) {
                            let mut path = scope.path.clone();
                            path.push(PathSegment::key(*key));
                            path.push(PathSegment::key(href_key.as_str()));
                            return Some(path);
                        }
                    }
                }
                _ => {}
            }
        }
    }
    None
}

/// Match an opaque continuation token: a cursor-named field in any scope,
/// or a `next` field inside a `cursors` container. Token values must not be
/// URL-shaped, otherwise they are links, not cursors.
fn match_cursor(scopes: &[Scope<'_>]) -> Option<Path> {
    for scope in scopes {
        let in_cursor_container = scope
            .container_name()
            .is_some_and(|name| vocab::in_table(&name, vocab::CURSOR_CONTAINER_NAMES));

        for (key, value) in &scope.fields {
            let normalized = vocab::normalize_key(key);
            let named_cursor = vocab::in_table(normalized.as_str(), vocab::CURSOR_NAMES);
            let container_next = in_cursor_container && normalized == vocab::CURSOR_CONTAINER_NEXT;
            if (named_cursor || container_next) && is_token_like(value) {
                let mut path = scope.path.clone();
                path.push(PathSegment::key(*key));
                return Some(path);
            }
        }
    }
    None
}

/// Match page-number pagination: a current-page name co-occurring with a
/// total or page-size name within one scope.
fn match_page_number(scopes: &[Scope<'_>]) -> bool {
    scopes.iter().any(|scope| {
        scope.has_scalar_named(vocab::PAGE_CURRENT_NAMES)
            && (scope.has_scalar_named(vocab::PAGE_TOTAL_NAMES)
                || scope.has_scalar_named(vocab::PAGE_SIZE_NAMES))
    })
}

/// Match offset/limit pagination: both counters within one scope.
fn match_offset_limit(scopes: &[Scope<'_>]) -> bool {
    scopes.iter().any(|scope| {
        scope.has_scalar_named(vocab::OFFSET_NAMES) && scope.has_scalar_named(vocab::LIMIT_NAMES)
    })
}

// ============================================================================
// Value Shape Checks
// ============================================================================

/// Whether a string reads as a next-page link: an absolute URL or an
/// absolute-path reference like `/items?page=2`.
fn is_url_like(s: &str) -> bool {
    url::Url::parse(s).is_ok() || s.starts_with('/')
}

/// Whether a value reads as an opaque continuation token: a non-empty,
/// non-URL string, or a number (some APIs continue from a numeric id).
fn is_token_like(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.is_empty() && !is_url_like(s),
        Value::Number(_) => true,
        _ => false,
    }
}
