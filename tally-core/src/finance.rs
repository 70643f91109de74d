//! Finance record types for parsed quick-entry transactions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One parsed line of quick-entry text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Stable per input line ordinal (`transaction-<line>`)
    pub id: String,
    /// Everything after the amount token, single-spaced
    pub description: String,
    /// Positive = income, negative = expense
    pub amount: f64,
    /// Exactly one label at any time
    pub category: Category,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            amount,
            category,
        }
    }

    /// Returns true if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Zero counts as an expense, matching how totals are split.
    pub fn is_expense(&self) -> bool {
        !self.is_income()
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }
}

/// Spending categories assigned by keyword rules, plus `Income` for
/// positive amounts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Drinks,
    Investments,
    Crypto,
    Gambling,
    Shopping,
    Recreation,
    Travel,
    Other,
    Income,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Food,
        Category::Drinks,
        Category::Investments,
        Category::Crypto,
        Category::Gambling,
        Category::Shopping,
        Category::Recreation,
        Category::Travel,
        Category::Other,
        Category::Income,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Drinks => "Drinks",
            Category::Investments => "Investments",
            Category::Crypto => "Crypto",
            Category::Gambling => "Gambling",
            Category::Shopping => "Shopping",
            Category::Recreation => "Recreation",
            Category::Travel => "Travel",
            Category::Other => "Other",
            Category::Income => "Income",
        }
    }

    /// The fallback label; transactions carrying it need manual review.
    pub fn is_catch_all(&self) -> bool {
        matches!(self, Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryParseError {
    #[error("unknown category '{0}'")]
    Unknown(String),
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

/// Per-category expense total and its share of all expenses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySummary {
    pub name: Category,
    /// Sum of absolute expense amounts
    pub total: f64,
    /// 0-100
    pub percentage: f64,
}

/// One synthetic monthly point scaled from current totals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
}
