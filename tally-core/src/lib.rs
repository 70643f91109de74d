//! tally-core: Core types and keyword categorizer for quick-entry finance text

pub mod categorizer;
pub mod finance;

pub use categorizer::{categorize, matching_rule};
pub use finance::{Category, CategoryParseError, CategorySummary, Transaction, TrendPoint};
