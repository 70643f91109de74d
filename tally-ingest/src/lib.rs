//! tally-ingest: amount token parsing and the quick-entry line parser.

pub mod amount;
pub mod parsers;
pub mod types;

pub use amount::{AmountError, parse_amount};
pub use parsers::quick_entry::parse_quick_entries;
pub use types::ParsedBatch;
