//! Classification result types

use crate::types::Path;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The pagination convention a response follows
///
/// A closed set: downstream driver selection matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paradigm {
    /// `offset`/`limit` counters; caller computes `offset += limit`
    OffsetLimit,
    /// Page counter plus a total or page size; caller increments the page
    PageNumber,
    /// Opaque continuation token the caller swaps into the next request
    Cursor,
    /// Literal next-page URL or relative link embedded in the body
    JsonLink,
}

impl Paradigm {
    /// Evaluation order when several paradigms signal at once
    ///
    /// A literal next pointer beats any counters present, so `json_link`
    /// outranks `cursor`, which outranks the counter paradigms.
    pub const PRIORITY: [Paradigm; 4] = [
        Paradigm::JsonLink,
        Paradigm::Cursor,
        Paradigm::PageNumber,
        Paradigm::OffsetLimit,
    ];

    /// Whether this paradigm carries a next-page pointer path
    pub fn carries_pointer(self) -> bool {
        matches!(self, Paradigm::Cursor | Paradigm::JsonLink)
    }

    /// The paradigm's wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Paradigm::OffsetLimit => "offset_limit",
            Paradigm::PageNumber => "page_number",
            Paradigm::Cursor => "cursor",
            Paradigm::JsonLink => "json_link",
        }
    }
}

impl fmt::Display for Paradigm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// The detected paradigm
    pub paradigm: Paradigm,
    /// Path to the next-page pointer; `Some` exactly when the paradigm
    /// carries one
    pub next_key: Option<Path>,
}

impl Classification {
    /// Classification for a paradigm with no pointer field
    pub(crate) fn counters(paradigm: Paradigm) -> Self {
        Self {
            paradigm,
            next_key: None,
        }
    }

    /// Classification for a paradigm pointing at a next-page field
    pub(crate) fn pointer(paradigm: Paradigm, next_key: Path) -> Self {
        Self {
            paradigm,
            next_key: Some(next_key),
        }
    }
}
