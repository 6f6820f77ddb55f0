//! CLI module
//!
//! Command-line interface for running detection over saved response bodies.
//!
//! # Commands
//!
//! - `detect` - Locate records and classify pagination in one pass
//! - `records` - Locate the records collection only
//! - `classify` - Classify the pagination paradigm only

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
