//! Aggregator: folds a transaction list into category totals, the
//! income/expense split, a templated insight sentence and a synthetic
//! four-month trend.

use chrono::Month;
use serde::{Deserialize, Serialize};
use tally_core::{Category, CategorySummary, Transaction, TrendPoint};

const NO_EXPENSES: &str = "You don't have any expenses recorded. ";
const SAVING: &str = "Good job! You're saving money this period.";
const REDUCE: &str = "You might want to consider reducing your expenses to save more.";

/// (month, income multiplier, expense multiplier)
const TREND_SCALE: [(Month, f64, f64); 4] = [
    (Month::January, 0.9, 0.8),
    (Month::February, 0.95, 0.9),
    (Month::March, 1.0, 1.0),
    (Month::April, 1.05, 1.1),
];

/// Everything derived from the current transaction list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Expense categories in first-seen order
    pub categories: Vec<CategorySummary>,
    pub total_income: f64,
    /// Sum of absolute values of non-positive amounts
    pub total_expenses: f64,
    pub net: f64,
    /// Percent of income kept; 0 when there is no income
    pub savings_rate: f64,
    pub insight: String,
    pub trend: Vec<TrendPoint>,
}

impl Summary {
    /// Category with the strictly largest total; the earliest one wins ties.
    pub fn top_category(&self) -> Option<&CategorySummary> {
        self.categories.iter().fold(None, |best, c| match best {
            Some(b) if b.total >= c.total => Some(b),
            _ => Some(c),
        })
    }
}

/// Single pass over `txns`. Income vs expense is decided by the amount
/// sign, not the category label.
pub fn aggregate(txns: &[Transaction]) -> Summary {
    let mut total_income = 0.0;
    let mut total_expenses = 0.0;
    let mut totals: Vec<(Category, f64)> = Vec::new();

    for t in txns {
        if t.is_income() {
            total_income += t.amount;
            continue;
        }
        let abs = t.abs_amount();
        total_expenses += abs;
        match totals.iter_mut().find(|(c, _)| *c == t.category) {
            Some((_, total)) => *total += abs,
            None => totals.push((t.category, abs)),
        }
    }

    let categories = totals
        .into_iter()
        .map(|(name, total)| CategorySummary {
            name,
            total,
            percentage: if total_expenses > 0.0 {
                total / total_expenses * 100.0
            } else {
                0.0
            },
        })
        .collect();

    let net = total_income - total_expenses;
    let savings_rate = if total_income > 0.0 {
        net / total_income * 100.0
    } else {
        0.0
    };

    let mut summary = Summary {
        categories,
        total_income,
        total_expenses,
        net,
        savings_rate,
        insight: String::new(),
        trend: trend(total_income, total_expenses),
    };
    summary.insight = insight(&summary);
    summary
}

fn insight(summary: &Summary) -> String {
    let mut text = match summary.top_category() {
        Some(top) => format!(
            "Your highest spending category is {}, accounting for {:.2}% of your total expenses. ",
            top.name, top.percentage
        ),
        None => NO_EXPENSES.to_string(),
    };
    text.push_str(if summary.total_income > summary.total_expenses {
        SAVING
    } else {
        REDUCE
    });
    text
}

/// Placeholder series scaled from the current totals, not history.
fn trend(income: f64, expenses: f64) -> Vec<TrendPoint> {
    TREND_SCALE
        .iter()
        .map(|(month, income_scale, expense_scale)| TrendPoint {
            month: month.name()[..3].to_string(),
            income: income * income_scale,
            expenses: expenses * expense_scale,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(id: &str, amount: f64, category: Category) -> Transaction {
        Transaction::new(id, "x", amount, category)
    }

    #[test]
    fn test_totals_and_percentages() {
        let txns = vec![
            txn("a", -10_000.0, Category::Food),
            txn("b", 20_000.0, Category::Income),
            txn("c", -5_000.0, Category::Recreation),
        ];
        let s = aggregate(&txns);
        assert_eq!(s.total_income, 20_000.0);
        assert_eq!(s.total_expenses, 15_000.0);
        assert_eq!(s.net, 5_000.0);
        assert_eq!(s.categories.len(), 2);
        assert_eq!(s.categories[0].name, Category::Food);
        assert!((s.categories[0].percentage - 66.666_666).abs() < 1e-3);
        assert_eq!(s.savings_rate, 25.0);
    }

    #[test]
    fn test_categories_keep_first_seen_order() {
        let txns = vec![
            txn("a", -1.0, Category::Travel),
            txn("b", -5.0, Category::Food),
            txn("c", -2.0, Category::Travel),
        ];
        let names: Vec<_> = aggregate(&txns).categories.iter().map(|c| c.name).collect();
        assert_eq!(names, vec![Category::Travel, Category::Food]);
    }

    #[test]
    fn test_insight_top_category_and_saving() {
        let txns = vec![
            txn("a", -10_000.0, Category::Food),
            txn("b", 20_000.0, Category::Income),
            txn("c", -5_000.0, Category::Recreation),
        ];
        assert_eq!(
            aggregate(&txns).insight,
            "Your highest spending category is Food, accounting for 66.67% of your total expenses. \
             Good job! You're saving money this period."
        );
    }

    #[test]
    fn test_insight_tie_goes_to_first_seen() {
        let txns = vec![
            txn("a", -300.0, Category::Drinks),
            txn("b", -300.0, Category::Shopping),
        ];
        let s = aggregate(&txns);
        assert_eq!(s.top_category().map(|c| c.name), Some(Category::Drinks));
        assert!(s.insight.starts_with("Your highest spending category is Drinks, accounting for 50.00%"));
        assert!(s.insight.ends_with(REDUCE));
    }

    #[test]
    fn test_empty_is_no_expenses_branch() {
        let s = aggregate(&[]);
        assert!(s.categories.is_empty());
        assert_eq!(s.total_income, 0.0);
        assert_eq!(s.total_expenses, 0.0);
        assert_eq!(s.savings_rate, 0.0);
        assert_eq!(
            s.insight,
            "You don't have any expenses recorded. You might want to consider reducing your expenses to save more."
        );
        assert_eq!(s.trend.len(), 4);
        assert!(s.trend.iter().all(|p| p.income == 0.0 && p.expenses == 0.0));
    }

    #[test]
    fn test_income_only_saves() {
        let s = aggregate(&[txn("a", 1_000.0, Category::Income)]);
        assert_eq!(
            s.insight,
            "You don't have any expenses recorded. Good job! You're saving money this period."
        );
        assert_eq!(s.savings_rate, 100.0);
    }

    #[test]
    fn test_sign_decides_income_not_label() {
        // An income line relabelled by the user still counts as income
        let s = aggregate(&[txn("a", 500.0, Category::Shopping)]);
        assert_eq!(s.total_income, 500.0);
        assert!(s.categories.is_empty());
    }

    #[test]
    fn test_trend_multipliers() {
        let s = aggregate(&[
            txn("a", 1_000.0, Category::Income),
            txn("b", -100.0, Category::Food),
        ]);
        let months: Vec<_> = s.trend.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, vec!["Jan", "Feb", "Mar", "Apr"]);
        assert!((s.trend[0].income - 900.0).abs() < 1e-9);
        assert!((s.trend[0].expenses - 80.0).abs() < 1e-9);
        assert!((s.trend[3].income - 1_050.0).abs() < 1e-9);
        assert!((s.trend[3].expenses - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_amount_counts_as_expense_category() {
        let s = aggregate(&[txn("a", 0.0, Category::Food)]);
        assert_eq!(s.categories.len(), 1);
        assert_eq!(s.categories[0].percentage, 0.0);
    }
}
