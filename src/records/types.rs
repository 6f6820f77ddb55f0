//! Records locator types

use crate::types::Path;
use serde_json::Value;

/// A located records collection
///
/// Borrows the array straight out of the response tree: callers can verify
/// they were handed the same collection, not a reconstructed copy.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordsLocation<'a> {
    /// The array value holding the records
    pub value: &'a Value,
    /// Where the array sits in the tree (empty when the root is the array)
    pub path: Path,
}

impl<'a> RecordsLocation<'a> {
    /// The record objects themselves
    pub fn records(&self) -> &'a [Value] {
        self.value.as_array().map_or(&[], Vec::as_slice)
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.records().len()
    }

    /// Whether the page is empty
    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

/// A candidate records array found during traversal
#[derive(Debug, Clone)]
pub(crate) struct Candidate<'a> {
    /// The array value
    pub value: &'a Value,
    /// Path to the array
    pub path: Path,
    /// Number of elements
    pub len: usize,
    /// Position in breadth-first document order, for stable tie-breaking
    pub order: usize,
}

impl Candidate<'_> {
    /// Nesting depth (path length)
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}
