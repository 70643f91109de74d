//! Quick-entry text parser
//!
//! One transaction per line, amount token first:
//!   10k dinner
//!   +20k freelance
//!   5k movie night
//!
//! Lines with fewer than two tokens, or whose amount token has no number,
//! are dropped without surfacing an error.

use tally_core::{Category, Transaction, categorize};
use tracing::debug;

use crate::amount::parse_amount;
use crate::types::ParsedBatch;

/// Parse raw multi-line text into transactions.
///
/// Ids are `transaction-<n>` with `n` the zero-based line index in `raw`,
/// so skipped lines still consume an index.
pub fn parse_quick_entries(raw: &str) -> ParsedBatch {
    let mut out = ParsedBatch::default();

    for (index, line) in raw.split('\n').enumerate() {
        let mut tokens = line.split_whitespace();
        let Some(amount_token) = tokens.next() else {
            continue;
        };
        let description = tokens.collect::<Vec<_>>().join(" ");
        if description.is_empty() {
            debug!(line = index, "skipping line without description");
            continue;
        }

        let amount = match parse_amount(amount_token) {
            Ok(a) => a,
            Err(err) => {
                debug!(line = index, %err, "skipping line");
                continue;
            }
        };

        let category = if amount > 0.0 {
            Category::Income
        } else {
            categorize(&description)
        };

        let txn = Transaction::new(format!("transaction-{index}"), description, amount, category);
        if category.is_catch_all() {
            out.needs_review.push(txn.id.clone());
        }
        out.transactions.push(txn);
    }

    debug!(
        parsed = out.transactions.len(),
        needs_review = out.needs_review.len(),
        "parsed quick entries"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let batch = parse_quick_entries("10k dinner\n+20k freelance\n5k movie night");
        assert_eq!(batch.transactions.len(), 3);

        assert_eq!(batch.transactions[0].amount, -10_000.0);
        assert_eq!(batch.transactions[0].category, Category::Food);
        assert_eq!(batch.transactions[1].amount, 20_000.0);
        assert_eq!(batch.transactions[1].category, Category::Income);
        assert_eq!(batch.transactions[2].description, "movie night");
        assert_eq!(batch.transactions[2].category, Category::Recreation);
        assert!(batch.needs_review.is_empty());
    }

    #[test]
    fn test_income_overrides_keywords() {
        let batch = parse_quick_entries("+5k sold old game");
        assert_eq!(batch.transactions[0].category, Category::Income);
    }

    #[test]
    fn test_ids_follow_line_index() {
        let batch = parse_quick_entries("10k dinner\n\nlonely\n3k lunch");
        let ids: Vec<_> = batch.transactions.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["transaction-0", "transaction-3"]);
    }

    #[test]
    fn test_whitespace_collapsed_and_crlf() {
        let batch = parse_quick_entries("  250   coffee\t at   the  bar \r\n");
        assert_eq!(batch.transactions.len(), 1);
        assert_eq!(batch.transactions[0].description, "coffee at the bar");
        assert_eq!(batch.transactions[0].category, Category::Drinks);
    }

    #[test]
    fn test_needs_review_preserves_order() {
        let batch = parse_quick_entries("1k rent\n2k lunch\n3k electricity\n+1k refund");
        assert_eq!(batch.needs_review, vec!["transaction-0", "transaction-2"]);
    }

    #[test]
    fn test_non_numeric_amount_skipped() {
        let batch = parse_quick_entries("abc dinner\n100 lunch");
        assert_eq!(batch.transactions.len(), 1);
        assert_eq!(batch.transactions[0].id, "transaction-1");
    }

    #[test]
    fn test_empty_input() {
        let batch = parse_quick_entries("");
        assert!(batch.is_empty());
        assert!(batch.needs_review.is_empty());
    }
}
