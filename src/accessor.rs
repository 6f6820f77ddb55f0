//! Nested value access
//!
//! Walks a decoded response body along a [`Path`], one segment at a time:
//! object lookup by key, array lookup by index. The result distinguishes
//! "absent" from "present but null" — `None` means some segment failed to
//! resolve (missing key, out-of-range index, or indexing into a scalar),
//! while `Some(&Value::Null)` means the field exists and holds an explicit
//! null. APIs routinely use null to mean "no next page", so the two must
//! never be conflated.

use crate::types::{Path, PathSegment};
use serde_json::Value;

/// Resolve a path against a tree, returning the value it points at
///
/// The empty path resolves to the tree itself. Resolution stops at the
/// first failing segment and yields `None`; it never panics.
pub fn resolve<'a>(tree: &'a Value, path: &[PathSegment]) -> Option<&'a Value> {
    let mut current = tree;
    for segment in path {
        current = match (segment, current) {
            (PathSegment::Key(key), Value::Object(map)) => map.get(key)?,
            (PathSegment::Index(index), Value::Array(items)) => items.get(*index)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Build a reusable accessor for a fixed path
///
/// The returned closure is pure and can be applied to any number of trees.
/// Callers use this to independently re-derive a value at a path reported
/// by the locator or classifier.
pub fn build_accessor(path: Path) -> impl for<'a> Fn(&'a Value) -> Option<&'a Value> {
    move |tree| resolve(tree, &path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::parse_path;
    use serde_json::json;

    #[test]
    fn test_resolve_object_keys() {
        let tree = json!({"pagination": {"offset": 0, "limit": 2}});
        let path = parse_path("pagination.limit").unwrap();
        assert_eq!(resolve(&tree, &path), Some(&json!(2)));
    }

    #[test]
    fn test_resolve_array_index() {
        let tree = json!({"data": [{"id": 1}, {"id": 2}]});
        let path = parse_path("data.1.id").unwrap();
        assert_eq!(resolve(&tree, &path), Some(&json!(2)));
    }

    #[test]
    fn test_empty_path_is_the_tree() {
        let tree = json!({"a": 1});
        assert_eq!(resolve(&tree, &[]), Some(&tree));
    }

    #[test]
    fn test_missing_key_is_absent() {
        let tree = json!({"a": 1});
        assert_eq!(resolve(&tree, &parse_path("b").unwrap()), None);
    }

    #[test]
    fn test_out_of_range_index_is_absent() {
        let tree = json!([1, 2, 3]);
        assert_eq!(resolve(&tree, &[PathSegment::index(3)]), None);
    }

    #[test]
    fn test_type_mismatch_is_absent() {
        // Indexing into a scalar fails fast rather than panicking
        let tree = json!({"a": "scalar"});
        assert_eq!(resolve(&tree, &parse_path("a.0").unwrap()), None);
        assert_eq!(resolve(&tree, &parse_path("a.b").unwrap()), None);
        // Key lookup on an array also mismatches
        let tree = json!({"a": [1]});
        assert_eq!(resolve(&tree, &parse_path("a.b").unwrap()), None);
    }

    #[test]
    fn test_explicit_null_is_not_absent() {
        let tree = json!({"links": {"next": null}});
        let path = parse_path("links.next").unwrap();
        assert_eq!(resolve(&tree, &path), Some(&Value::Null));
        assert_ne!(resolve(&tree, &path), None);
    }

    #[test]
    fn test_accessor_reusable_across_trees() {
        let accessor = build_accessor(parse_path("meta.page").unwrap());
        assert_eq!(accessor(&json!({"meta": {"page": 1}})), Some(&json!(1)));
        assert_eq!(accessor(&json!({"meta": {"page": 7}})), Some(&json!(7)));
        assert_eq!(accessor(&json!({"meta": {}})), None);
    }

    #[test]
    fn test_resolve_returns_same_object_not_a_copy() {
        let tree = json!({"data": [{"id": 1}]});
        let resolved = resolve(&tree, &parse_path("data").unwrap()).unwrap();
        assert!(std::ptr::eq(resolved, &tree["data"]));
    }
}
