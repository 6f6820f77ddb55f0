//! Composed detection pipeline
//!
//! Runs the records locator and the paradigm classifier over one example
//! response body, in that order, excluding the located records subtree from
//! the classifier's metadata scan. The result is everything a caller needs
//! to pick and configure a pagination driver: the records array and path,
//! the paradigm, and the next-page pointer path when one exists.
//!
//! Detection is best-effort and stateless: both halves may come back empty,
//! and a second call over the same tree returns identical results.

use crate::classify::{classify, Classification};
use crate::records::{find_records, RecordsLocation};
use serde_json::Value;

/// Result of running full detection over one response body
#[derive(Debug, Clone)]
pub struct Detection<'a> {
    /// The located records collection, if any
    pub records: Option<RecordsLocation<'a>>,
    /// The detected pagination paradigm and next-page pointer, if any
    pub pagination: Option<Classification>,
}

impl Detection<'_> {
    /// Whether anything at all was detected
    pub fn is_empty(&self) -> bool {
        self.records.is_none() && self.pagination.is_none()
    }
}

/// Detect records location and pagination paradigm from one example response
pub fn detect(tree: &Value) -> Detection<'_> {
    let records = find_records(tree);
    let records_path = records.as_ref().map(|r| r.path.as_slice());
    let pagination = classify(tree, records_path);

    if records.is_none() {
        tracing::debug!("no records collection detected");
    }

    Detection {
        records,
        pagination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Paradigm;
    use crate::types::{parse_path, path_starts_with};
    use serde_json::json;

    #[test]
    fn test_detect_composes_both_halves() {
        let tree = json!({
            "data": [{"id": 1, "name": "Item 1"}, {"id": 2, "name": "Item 2"}],
            "pagination": {"offset": 0, "limit": 2, "total": 100}
        });

        let detection = detect(&tree);
        let records = detection.records.unwrap();
        assert_eq!(records.path, parse_path("data").unwrap());

        let pagination = detection.pagination.unwrap();
        assert_eq!(pagination.paradigm, Paradigm::OffsetLimit);
        assert_eq!(pagination.next_key, None);
    }

    #[test]
    fn test_records_and_next_key_paths_are_disjoint() {
        let tree = json!({
            "results": [{"id": 201}, {"id": 202}],
            "cursors": {"next": "NjM=", "previous": "MTk="}
        });

        let detection = detect(&tree);
        let records_path = detection.records.unwrap().path;
        let next_key = detection.pagination.unwrap().next_key.unwrap();

        assert!(!path_starts_with(&next_key, &records_path));
        assert!(!path_starts_with(&records_path, &next_key));
    }

    #[test]
    fn test_records_subtree_is_excluded_from_classification() {
        // Pagination-looking fields inside the records must not classify
        let tree = json!({
            "data": [
                {"id": 1, "page": 3, "total_pages": 10},
                {"id": 2, "page": 3, "total_pages": 10}
            ]
        });

        let detection = detect(&tree);
        assert!(detection.records.is_some());
        assert!(detection.pagination.is_none());
    }

    #[test]
    fn test_empty_detection() {
        let tree = json!({"status": "ok"});
        let detection = detect(&tree);
        assert!(detection.is_empty());
    }

    #[test]
    fn test_detect_is_idempotent() {
        let tree = json!({
            "items": [{"id": 1}],
            "links": {"next": "/items?page=2"}
        });

        let first = detect(&tree);
        let second = detect(&tree);
        assert_eq!(
            first.records.as_ref().unwrap().path,
            second.records.as_ref().unwrap().path
        );
        assert_eq!(first.pagination, second.pagination);
    }
}
