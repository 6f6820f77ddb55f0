//! Records collection location
//!
//! # Overview
//!
//! A paginated response buries its actual data records somewhere in the
//! body: at the top level, under a conventional key like `data` or
//! `results`, or inside a wrapper container like `_embedded.items`. The
//! locator finds the array of record objects and reports both the array
//! itself (borrowed, identity-preserving) and its path.
//!
//! Search and selection are separate steps: `locator` collects every
//! plausible candidate breadth-first, then `ranking` applies the
//! tie-break policy. The ranking is the part most likely to need tuning as
//! new response shapes turn up, so it stays independently testable.

mod locator;
mod ranking;
mod types;

pub use locator::find_records;
pub use types::RecordsLocation;
