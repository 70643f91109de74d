//! Ledger: the in-memory session that owns the current transaction list
//! and keeps every derived value in step with it.
//!
//! Each mutating call re-runs the aggregator before returning, so
//! `summary()` and `snapshot()` never observe stale totals.

use serde::{Deserialize, Serialize};
use tally_core::{Category, Transaction};
use tally_ingest::parse_quick_entries;
use tracing::{debug, info};

use crate::aggregator::{Summary, aggregate};

#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    needs_review: Vec<String>,
    summary: Summary,
}

/// Read-only view of a ledger handed to renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub transactions: Vec<Transaction>,
    pub needs_review: Vec<Transaction>,
    #[serde(flatten)]
    pub summary: Summary,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            needs_review: Vec::new(),
            summary: aggregate(&[]),
        }
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from raw quick-entry text in one step
    pub fn from_raw(raw: &str) -> Self {
        let mut ledger = Self::new();
        ledger.submit(raw);
        ledger
    }

    /// Replace the whole transaction list with whatever `raw` parses to.
    pub fn submit(&mut self, raw: &str) {
        let batch = parse_quick_entries(raw);
        self.transactions = batch.transactions;
        self.needs_review = batch.needs_review;
        self.refresh();
        info!(
            transactions = self.transactions.len(),
            needs_review = self.needs_review.len(),
            "submitted raw text"
        );
    }

    /// Override one expense's category and drop it from the review list.
    ///
    /// `Income` belongs to positive amounts only, so it is neither assigned
    /// nor taken away here. Returns false, leaving the ledger untouched,
    /// when no transaction has `id`, the transaction is income, or
    /// `category` is `Income`.
    pub fn recategorize(&mut self, id: &str, category: Category) -> bool {
        if category == Category::Income {
            debug!(id, "recategorize: Income is reserved for positive amounts");
            return false;
        }
        let Some(txn) = self.transactions.iter_mut().find(|t| t.id == id) else {
            debug!(id, "recategorize: no such transaction");
            return false;
        };
        if txn.is_income() {
            debug!(id, "recategorize: income keeps its category");
            return false;
        }
        let previous = txn.category;
        txn.category = category;
        self.needs_review.retain(|r| r != id);
        self.refresh();
        info!(id, from = %previous, to = %category, "recategorized");
        true
    }

    fn refresh(&mut self) {
        self.summary = aggregate(&self.transactions);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Transactions still waiting on a manual category, in input order
    pub fn needs_review(&self) -> Vec<&Transaction> {
        self.needs_review
            .iter()
            .filter_map(|id| self.transaction(id))
            .collect()
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            transactions: self.transactions.clone(),
            needs_review: self.needs_review().into_iter().cloned().collect(),
            summary: self.summary.clone(),
        }
    }
}
