//! Business-policy constants for validation.
//!
//! The defaults encode house policy; deployments override individual values
//! through the builder methods. The policy is read-only once the engine is
//! constructed.

use std::collections::BTreeSet;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

/// Configuration for the rule validator.
#[derive(Debug, Clone)]
pub struct ValidationPolicy {
    /// Upper bound for `total_amount` (inclusive).
    pub max_total_amount: BigDecimal,
    /// Allowed drift between `subtotal + tax_amount` and `total_amount`.
    pub consistency_tolerance: BigDecimal,
    /// Accepted ISO 4217 currency codes.
    pub supported_currencies: BTreeSet<String>,
    /// OCR confidence below this value draws a review warning.
    pub min_confidence: f64,
    /// Invoices older than this many days draw a warning.
    pub max_invoice_age_days: i64,
    /// Invoice dates further in the future than this draw a warning.
    pub max_future_days: i64,
    /// Due dates more than this many days after the invoice date draw a warning.
    pub max_due_after_days: i64,
    /// The date the age/future rules measure against. When unset those rules
    /// are skipped, keeping validation a pure function of its inputs; the
    /// caller injects the current date when wall-clock checks are wanted.
    pub reference_date: Option<NaiveDate>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            max_total_amount: BigDecimal::from(999_000_000i64),
            consistency_tolerance: BigDecimal::from_str("0.01").expect("decimal literal"),
            supported_currencies: ["USD", "EUR", "GBP", "JPY", "CAD", "AUD", "CHF"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            min_confidence: 70.0,
            max_invoice_age_days: 5 * 365,
            max_future_days: 7,
            max_due_after_days: 365,
            reference_date: None,
        }
    }
}

impl ValidationPolicy {
    /// Set the reference date for the age/future rules.
    #[must_use]
    pub fn with_reference_date(mut self, reference_date: Option<NaiveDate>) -> Self {
        self.reference_date = reference_date;
        self
    }

    /// Replace the currency whitelist.
    #[must_use]
    pub fn with_supported_currencies<I, S>(mut self, currencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_currencies = currencies
            .into_iter()
            .map(|code| code.into().to_ascii_uppercase())
            .collect();
        self
    }

    /// Replace the maximum total amount.
    #[must_use]
    pub fn with_max_total_amount(mut self, max_total_amount: BigDecimal) -> Self {
        self.max_total_amount = max_total_amount;
        self
    }

    /// Replace the amount-consistency tolerance.
    #[must_use]
    pub fn with_consistency_tolerance(mut self, tolerance: BigDecimal) -> Self {
        self.consistency_tolerance = tolerance;
        self
    }

    /// A comma-separated rendering of the whitelist for messages.
    #[must_use]
    pub fn supported_currency_list(&self) -> String {
        self.supported_currencies
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}
