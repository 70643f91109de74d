//! Amount token parsing: `+20k`, `10k`, `500`, `12.50`.
//!
//! A leading `+` marks income; everything else is an expense and comes back
//! negative. A trailing `k`/`K` multiplies by 1000.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount token '{0}' has no leading number")]
    NotNumeric(String),
}

fn numeric_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:\d+\.?\d*|\.\d+)").expect("invalid numeric prefix regex"))
}

/// Parse a signed amount from a single token.
///
/// Characters other than digits, `.` and `k`/`K` are stripped first, so
/// `$1,200` reads as `1200`. Only the longest leading decimal number
/// counts: `1.5.2` is `1.5` and `10k5` is `10`.
pub fn parse_amount(token: &str) -> Result<f64, AmountError> {
    let is_income = token.starts_with('+');

    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | 'k' | 'K'))
        .collect::<String>()
        .to_lowercase();

    let (number, multiplier) = match cleaned.strip_suffix('k') {
        Some(rest) => (rest, 1000.0),
        None => (cleaned.as_str(), 1.0),
    };

    let magnitude: f64 = numeric_prefix_re()
        .find(number)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| AmountError::NotNumeric(token.to_string()))?;

    let amount = magnitude * multiplier;
    Ok(if is_income { amount } else { -amount })
}
