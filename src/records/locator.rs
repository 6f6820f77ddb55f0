//! Candidate collection and the public locator entry point

use super::ranking::select_best;
use super::types::{Candidate, RecordsLocation};
use crate::types::{format_path, Path, PathSegment};
use serde_json::Value;
use std::collections::VecDeque;

/// Find the records collection in a response body
///
/// Traverses the tree breadth-first collecting every array whose elements
/// are all objects, then ranks the candidates (see
/// [`super::ranking::select_best`]). Returns `None` when no array of
/// objects exists anywhere — a normal outcome meaning the caller must
/// configure a records path explicitly.
pub fn find_records(tree: &Value) -> Option<RecordsLocation<'_>> {
    let candidates = collect_candidates(tree);
    let best = select_best(candidates)?;

    tracing::debug!(
        path = %format_path(&best.path),
        count = best.len,
        "located records collection"
    );

    Some(RecordsLocation {
        value: best.value,
        path: best.path,
    })
}

/// Collect every candidate records array, breadth-first
///
/// A candidate is a non-empty array whose elements are all objects; an
/// array of scalars is metadata, not a record set. Candidates' own
/// elements are not descended into (record contents are the caller's
/// business), but mixed arrays are traversed in case a records array hides
/// deeper inside.
pub(crate) fn collect_candidates(tree: &Value) -> Vec<Candidate<'_>> {
    let mut candidates = Vec::new();
    let mut queue: VecDeque<(Path, &Value)> = VecDeque::new();
    queue.push_back((Vec::new(), tree));

    while let Some((path, value)) = queue.pop_front() {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let mut child_path = path.clone();
                    child_path.push(PathSegment::key(key.as_str()));
                    queue.push_back((child_path, child));
                }
            }
            Value::Array(items) => {
                if is_record_array(items) {
                    candidates.push(Candidate {
                        value,
                        path,
                        len: items.len(),
                        order: candidates.len(),
                    });
                } else {
                    for (index, child) in items.iter().enumerate() {
                        if child.is_object() || child.is_array() {
                            let mut child_path = path.clone();
                            child_path.push(PathSegment::index(index));
                            queue.push_back((child_path, child));
                        }
                    }
                }
            }
            _ => {}
        }
    }

    candidates
}

/// Whether an array qualifies as a records collection
fn is_record_array(items: &[Value]) -> bool {
    !items.is_empty() && items.iter().all(Value::is_object)
}
