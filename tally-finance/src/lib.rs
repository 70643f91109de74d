//! tally-finance: aggregation of parsed transactions and the ledger session

pub mod aggregator;
pub mod ledger;

pub use aggregator::{Summary, aggregate};
pub use ledger::{Ledger, LedgerSnapshot};
