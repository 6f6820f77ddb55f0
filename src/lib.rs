//! # pagescout
//!
//! Pagination auto-detection for REST API responses. Given one example
//! response body, already decoded into JSON, pagescout infers where the
//! data records live, which pagination paradigm the API follows, and where
//! the pointer to the next page sits.
//!
//! ## Features
//!
//! - **Records location**: find the array of record objects at any nesting
//!   depth, with a deterministic tie-break policy when several arrays look
//!   plausible
//! - **Paradigm classification**: offset/limit, page number, cursor, and
//!   JSON link, selected by field-name vocabularies with a fixed priority
//!   when signals overlap
//! - **Next-key resolution**: concrete leaf paths for cursor tokens and
//!   next links, including HAL-style `_links.next.href`
//! - **Path accessor**: re-derive any reported value independently, with
//!   "absent" kept distinct from an explicit null
//!
//! Detection is pure and best-effort: no I/O, no state, no failure modes —
//! a response the engine cannot read simply yields "not found" and the
//! caller falls back to explicit configuration.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagescout::{detect, Paradigm};
//! use serde_json::json;
//!
//! let response = json!({
//!     "data": [{"id": 1, "name": "Item 1"}, {"id": 2, "name": "Item 2"}],
//!     "pagination": {"offset": 0, "limit": 2, "total": 100}
//! });
//!
//! let detection = detect(&response);
//! let records = detection.records.unwrap();
//! assert_eq!(records.len(), 2);
//!
//! let pagination = detection.pagination.unwrap();
//! assert_eq!(pagination.paradigm, Paradigm::OffsetLimit);
//! assert_eq!(pagination.next_key, None);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      detect(response)                       │
//! │  records + path        paradigm        next-key path        │
//! └─────────────────────────────────────────────────────────────┘
//!                │                                │
//! ┌──────────────┴───────────┐   ┌────────────────┴────────────┐
//! │      Records Locator     │   │   Pagination Classifier     │
//! ├──────────────────────────┤   ├─────────────────────────────┤
//! │ BFS candidate collection │   │ Vocabulary tables           │
//! │ Tie-break ranking        │   │ json_link > cursor >        │
//! │                          │   │ page_number > offset_limit  │
//! └──────────────────────────┘   └─────────────────────────────┘
//!                │                                │
//!                └──────── Nested Accessor ───────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types: paths and path segments
pub mod types;

/// Nested value access along a path
pub mod accessor;

/// Records collection location
pub mod records;

/// Pagination paradigm classification
pub mod classify;

/// Composed detection pipeline
pub mod detector;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use accessor::{build_accessor, resolve};
pub use classify::{classify, Classification, Paradigm};
pub use detector::{detect, Detection};
pub use error::{Error, Result};
pub use records::{find_records, RecordsLocation};
pub use types::{parse_path, Path, PathSegment};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
