//! Candidate ranking
//!
//! When a response holds more than one array of objects, tie-breaks apply
//! in order: conventional collection key, then shallower path, then larger
//! array, then document order. Document order as the final tie-break makes
//! selection deterministic even for equally generic, equally shallow,
//! equally sized candidates.

use super::types::Candidate;
use crate::classify::vocabulary::is_pagination_name;
use crate::types::PathSegment;
use std::cmp::Reverse;

/// Conventional names APIs give their records collection
const COLLECTION_NAMES: &[&str] = &[
    "data", "items", "results", "records", "entries", "rows", "entities", "payload", "content",
    "objects", "values",
];

/// How strongly a candidate's key signals "this is the collection"
///
/// Lower is better. Conventional collection names win outright; a domain
/// noun (`products`, `comments` — any key that does not itself read as
/// pagination metadata) beats a pagination-flavored key or an array
/// reached through an index.
fn key_tier(candidate: &Candidate<'_>) -> u8 {
    match candidate.path.last() {
        Some(PathSegment::Key(key)) => {
            let lowered = key.to_ascii_lowercase();
            if COLLECTION_NAMES.contains(&lowered.as_str()) {
                0
            } else if is_pagination_name(key) {
                2
            } else {
                1
            }
        }
        // Root array, or an array reached through an index
        _ => 2,
    }
}

/// Select the best candidate under the tie-break policy
pub(crate) fn select_best(candidates: Vec<Candidate<'_>>) -> Option<Candidate<'_>> {
    candidates
        .into_iter()
        .min_by_key(|c| (key_tier(c), c.depth(), Reverse(c.len), c.order))
}
