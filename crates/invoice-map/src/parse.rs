//! Value coercion for matched OCR fields.
//!
//! Dates are tried against an ordered list of accepted formats; the first
//! format that parses wins and is remembered, so a parsed date can be
//! rendered back in its source format. Amounts are cleaned of currency
//! decoration and parsed as exact base-10 decimals — never binary floats,
//! which would drift on financial totals.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

/// Currency decoration stripped before amount parsing.
const CURRENCY_SYMBOLS: [char; 4] = ['$', '€', '£', '¥'];

/// An accepted date format, in match order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `2024-01-15`
    Iso,
    /// `01/15/2024`
    UsSlash,
    /// `15-01-2024`
    EuDash,
    /// `January 15, 2024` (abbreviated month names also parse)
    MonthName,
}

impl DateFormat {
    /// All formats in the order they are attempted.
    pub const ALL: [DateFormat; 4] = [
        DateFormat::Iso,
        DateFormat::UsSlash,
        DateFormat::EuDash,
        DateFormat::MonthName,
    ];

    /// The strftime pattern used for rendering.
    #[must_use]
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::Iso => "%Y-%m-%d",
            Self::UsSlash => "%m/%d/%Y",
            Self::EuDash => "%d-%m-%Y",
            Self::MonthName => "%B %d, %Y",
        }
    }

    /// Render a date in this format.
    #[must_use]
    pub fn render(&self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

/// Parse a date against the accepted formats, first match wins.
///
/// Returns the parsed date and the format that matched, or `None` when no
/// format applies.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use invoice_map::{DateFormat, parse_date};
///
/// let (date, format) = parse_date("2024-01-15").expect("iso date");
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid"));
/// assert_eq!(format, DateFormat::Iso);
///
/// assert!(parse_date("not a date").is_none());
/// ```
#[must_use]
pub fn parse_date(raw: &str) -> Option<(NaiveDate, DateFormat)> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DateFormat::ALL {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format.pattern()) {
            return Some((date, format));
        }
    }
    // Abbreviated month names ("Jan 15, 2024") fold into MonthName.
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%b %d, %Y") {
        return Some((date, DateFormat::MonthName));
    }
    None
}

/// Parse a monetary amount as an exact decimal.
///
/// Strips currency symbols, thousands separators, and surrounding
/// whitespace first. Sign is preserved; the validator owns sign policy.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use bigdecimal::BigDecimal;
/// use invoice_map::parse_amount;
///
/// let expected = BigDecimal::from_str("1234.50").expect("literal");
/// assert_eq!(parse_amount("$1,234.50"), Some(expected));
/// assert_eq!(parse_amount("ten dollars"), None);
/// ```
#[must_use]
pub fn parse_amount(raw: &str) -> Option<BigDecimal> {
    let cleaned: String = raw
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != ',' && !CURRENCY_SYMBOLS.contains(ch))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    BigDecimal::from_str(&cleaned).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_formats_match_in_order() {
        let iso = parse_date("2024-01-15").expect("iso");
        assert_eq!(iso.1, DateFormat::Iso);
        let us = parse_date("01/15/2024").expect("us");
        assert_eq!(us.1, DateFormat::UsSlash);
        let eu = parse_date("15-01-2024").expect("eu");
        assert_eq!(eu.1, DateFormat::EuDash);
        let month = parse_date("January 15, 2024").expect("month name");
        assert_eq!(month.1, DateFormat::MonthName);
        assert_eq!(iso.0, us.0);
        assert_eq!(us.0, eu.0);
        assert_eq!(eu.0, month.0);
    }

    #[test]
    fn abbreviated_month_folds_into_month_name() {
        let (date, format) = parse_date("Jan 15, 2024").expect("abbreviated month");
        assert_eq!(format, DateFormat::MonthName);
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid"));
    }

    #[test]
    fn impossible_dates_are_rejected() {
        assert!(parse_date("2024-02-30").is_none());
        assert!(parse_date("13/45/2024").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn amount_cleaning_strips_decoration() {
        let expected = BigDecimal::from_str("1234567.89").expect("literal");
        assert_eq!(parse_amount(" $1,234,567.89 "), Some(expected));
        let pounds = BigDecimal::from_str("99.99").expect("literal");
        assert_eq!(parse_amount("£99.99"), Some(pounds));
    }

    #[test]
    fn amount_sign_is_preserved() {
        let negative = BigDecimal::from_str("-5.00").expect("literal");
        assert_eq!(parse_amount("-5.00"), Some(negative));
        let zero = BigDecimal::from_str("0").expect("literal");
        assert_eq!(parse_amount("0"), Some(zero));
    }

    #[test]
    fn unparseable_amounts_are_rejected() {
        assert!(parse_amount("ten dollars").is_none());
        assert!(parse_amount("$").is_none());
        assert!(parse_amount("").is_none());
    }
}
