//! Field-name vocabularies for classification
//!
//! Classification is signal-driven, not structural: many synonym field
//! names map to one paradigm. The synonyms live in data tables so new ones
//! are additive and independently testable. All entries are stored in
//! normalized form (see [`normalize_key`]).

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Names signaling the offset counter of offset/limit pagination
pub(crate) const OFFSET_NAMES: &[&str] = &["offset"];

/// Names signaling the limit counter of offset/limit pagination
pub(crate) const LIMIT_NAMES: &[&str] = &["limit"];

/// Names signaling a current-page counter
pub(crate) const PAGE_CURRENT_NAMES: &[&str] = &[
    "page",
    "currentpage",
    "pagenumber",
    "number",
    "index",
    "current",
];

/// Names signaling a page/record total
pub(crate) const PAGE_TOTAL_NAMES: &[&str] = &[
    "totalpages",
    "pages",
    "total",
    "totalrecords",
    "totalitems",
    "totalelements",
    "totalcount",
];

/// Names signaling a page size
pub(crate) const PAGE_SIZE_NAMES: &[&str] = &[
    "pagesize",
    "perpage",
    "size",
    "itemsperpage",
    "postsperpage",
];

/// Names signaling an opaque continuation token
pub(crate) const CURSOR_NAMES: &[&str] = &["cursor", "nextcursor", "nextid", "nexttoken"];

/// Container names holding cursor fields (e.g. `{"cursors": {"next": ...}}`)
pub(crate) const CURSOR_CONTAINER_NAMES: &[&str] = &["cursors"];

/// The field a cursor container points to the next page with
pub(crate) const CURSOR_CONTAINER_NEXT: &str = "next";

/// Names signaling a literal next-page link
pub(crate) const NEXT_LINK_NAMES: &[&str] = &["next", "nextpage", "nexturl"];

/// Container names holding link fields (`_links` normalizes to the same)
pub(crate) const LINK_CONTAINER_NAMES: &[&str] = &["links"];

/// The leaf key of HAL-style link objects (`_links.next.href`)
pub(crate) const HREF_NAME: &str = "href";

/// Every name that reads as pagination metadata, across all paradigms
static PAGINATION_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    OFFSET_NAMES
        .iter()
        .chain(LIMIT_NAMES)
        .chain(PAGE_CURRENT_NAMES)
        .chain(PAGE_TOTAL_NAMES)
        .chain(PAGE_SIZE_NAMES)
        .chain(CURSOR_NAMES)
        .chain(CURSOR_CONTAINER_NAMES)
        .chain(NEXT_LINK_NAMES)
        .chain(LINK_CONTAINER_NAMES)
        .copied()
        .collect()
});

/// Normalize a field name for vocabulary comparison
///
/// Case- and separator-insensitive: `currentPage`, `current_page`,
/// `current-page`, and `currentpage` all normalize to `currentpage`.
pub(crate) fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Check whether a normalized name is in a vocabulary table
pub(crate) fn in_table(normalized: &str, table: &[&str]) -> bool {
    table.contains(&normalized)
}

/// Check whether a raw key looks like pagination metadata of any paradigm
pub(crate) fn is_pagination_name(key: &str) -> bool {
    PAGINATION_NAMES.contains(normalize_key(key).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key_separators() {
        assert_eq!(normalize_key("currentPage"), "currentpage");
        assert_eq!(normalize_key("current_page"), "currentpage");
        assert_eq!(normalize_key("current-page"), "currentpage");
        assert_eq!(normalize_key("currentpage"), "currentpage");
        assert_eq!(normalize_key("_links"), "links");
        assert_eq!(normalize_key("TOTAL_PAGES"), "totalpages");
    }

    #[test]
    fn test_in_table() {
        assert!(in_table(
            normalize_key("posts_per_page").as_str(),
            PAGE_SIZE_NAMES
        ));
        assert!(in_table(normalize_key("next_id").as_str(), CURSOR_NAMES));
        assert!(!in_table(normalize_key("products").as_str(), CURSOR_NAMES));
    }

    #[test]
    fn test_is_pagination_name() {
        assert!(is_pagination_name("offset"));
        assert!(is_pagination_name("totalPages"));
        assert!(is_pagination_name("_links"));
        assert!(is_pagination_name("next_cursor"));
        assert!(!is_pagination_name("products"));
        assert!(!is_pagination_name("query_results"));
    }
}
