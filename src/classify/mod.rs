//! Pagination paradigm classification
//!
//! Supports: offset/limit, page number, cursor, JSON link
//!
//! # Overview
//!
//! Given a decoded response body, the classifier determines which pagination
//! paradigm the response follows by matching field names in its non-record
//! metadata against per-paradigm vocabularies, and resolves the path to the
//! next-page pointer for the paradigms that carry one (`cursor` and
//! `json_link`). Counter paradigms (`offset_limit`, `page_number`) never
//! carry a pointer: the caller derives the next request from counters it
//! already knows.
//!
//! When a response satisfies signals for more than one paradigm at once, a
//! fixed priority applies: `json_link` over `cursor` over `page_number` over
//! `offset_limit`. A literal next-page pointer is the most unambiguous
//! signal the server can give, so it wins over any counters also present.

mod classifier;
mod types;
pub(crate) mod vocabulary;

pub use classifier::classify;
pub use types::{Classification, Paradigm};
