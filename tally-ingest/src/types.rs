use tally_core::Transaction;

/// Normalized output of the quick-entry parser
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedBatch {
    pub transactions: Vec<Transaction>,
    /// Ids of transactions that fell through to the catch-all category,
    /// in input order.
    pub needs_review: Vec<String>,
}

impl ParsedBatch {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
