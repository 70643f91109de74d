//! Deterministic keyword rules mapping free-text descriptions to a
//! spending [`Category`].
//!
//! Rules are evaluated top to bottom against the lower-cased description;
//! the first rule with a keyword contained in the text wins.

use crate::finance::Category;

/// Ordered (category, keywords) table. Order matters: "dinner and drinks"
/// is Food because Food comes before Drinks.
pub const RULES: &[(Category, &[&str])] = &[
    (Category::Food, &["dinner", "lunch", "breakfast"]),
    (Category::Drinks, &["drinks", "bar"]),
    (Category::Investments, &["dime", "stock"]),
    (Category::Crypto, &["binance", "crypto"]),
    (Category::Gambling, &["gambl", "bet", "casino"]),
    (Category::Shopping, &["shop", "store", "mall", "pants"]),
    (
        Category::Recreation,
        &["movie", "game", "entertainment", "concert", "weedzilla"],
    ),
    (Category::Travel, &["travel", "hotel", "flight"]),
];

/// Returns the category and the keyword that matched, or `None` when the
/// description falls through every rule.
pub fn matching_rule(description: &str) -> Option<(Category, &'static str)> {
    let desc = description.to_lowercase();
    RULES.iter().find_map(|(category, keywords)| {
        keywords
            .iter()
            .find(|kw| desc.contains(*kw))
            .map(|kw| (*category, *kw))
    })
}

/// Categorize a description. Never returns `Income`; that label is
/// reserved for positive amounts and assigned by the caller.
pub fn categorize(description: &str) -> Category {
    matching_rule(description)
        .map(|(category, _)| category)
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_food() {
        assert_eq!(categorize("Team lunch"), Category::Food);
        assert_eq!(categorize("breakfast"), Category::Food);
    }

    #[test]
    fn test_first_rule_wins() {
        // Food precedes Drinks in rule order
        assert_eq!(categorize("Dinner and drinks"), Category::Food);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(categorize("BINANCE deposit"), Category::Crypto);
        assert_eq!(categorize("Hotel Booking"), Category::Travel);
    }

    #[test]
    fn test_substring_keywords() {
        // "gambl" covers gambling/gambled, "bar" hits inside longer words
        assert_eq!(categorize("gambling night"), Category::Gambling);
        assert_eq!(categorize("barber"), Category::Drinks);
        assert_eq!(categorize("new pants"), Category::Shopping);
    }

    #[test]
    fn test_branded_keyword_is_recreation() {
        assert_eq!(categorize("weedzilla"), Category::Recreation);
        assert_eq!(categorize("movie night"), Category::Recreation);
    }

    #[test]
    fn test_investments() {
        assert_eq!(categorize("dime top up"), Category::Investments);
        assert_eq!(categorize("stock purchase"), Category::Investments);
    }

    #[test]
    fn test_fallback_is_other() {
        assert_eq!(categorize("electric bill"), Category::Other);
        assert_eq!(categorize(""), Category::Other);
    }

    #[test]
    fn test_matching_rule_reports_keyword() {
        assert_eq!(matching_rule("Concert tickets"), Some((Category::Recreation, "concert")));
        assert_eq!(matching_rule("rent"), None);
    }

    #[test]
    fn test_never_returns_income() {
        assert_ne!(categorize("freelance income"), Category::Income);
    }
}
