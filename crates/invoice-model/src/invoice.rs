//! The normalized, typed invoice record.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::field::CanonicalField;

/// The mapper's output and the validator's input.
///
/// Every populated field has already passed type coercion for its declared
/// type; nothing downstream parses text again. Absence (`None`) is distinct
/// from an empty string: the mapper never stores a value that trims to
/// empty. Created fresh per request and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedInvoice {
    pub invoice_number: Option<String>,
    pub invoice_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub vendor_name: Option<String>,
    pub vendor_address: Option<String>,
    pub vendor_tax_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_address: Option<String>,
    pub subtotal: Option<BigDecimal>,
    pub tax_amount: Option<BigDecimal>,
    pub total_amount: Option<BigDecimal>,
    /// Three-letter code, uppercased by the mapper. Whitelist membership is
    /// the validator's concern.
    pub currency: Option<String>,
    /// Copied through from the extraction unchanged.
    pub confidence_score: Option<f64>,
}

impl NormalizedInvoice {
    /// Whether the given canonical field carries a value.
    #[must_use]
    pub fn has_field(&self, field: CanonicalField) -> bool {
        match field {
            CanonicalField::InvoiceNumber => self.invoice_number.is_some(),
            CanonicalField::InvoiceDate => self.invoice_date.is_some(),
            CanonicalField::DueDate => self.due_date.is_some(),
            CanonicalField::VendorName => self.vendor_name.is_some(),
            CanonicalField::VendorAddress => self.vendor_address.is_some(),
            CanonicalField::VendorTaxId => self.vendor_tax_id.is_some(),
            CanonicalField::CustomerName => self.customer_name.is_some(),
            CanonicalField::CustomerAddress => self.customer_address.is_some(),
            CanonicalField::Subtotal => self.subtotal.is_some(),
            CanonicalField::TaxAmount => self.tax_amount.is_some(),
            CanonicalField::TotalAmount => self.total_amount.is_some(),
            CanonicalField::Currency => self.currency.is_some(),
        }
    }

    /// Count of populated canonical fields.
    #[must_use]
    pub fn populated_field_count(&self) -> usize {
        CanonicalField::ALL
            .into_iter()
            .filter(|field| self.has_field(*field))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn empty_record_has_no_fields() {
        let invoice = NormalizedInvoice::default();
        assert_eq!(invoice.populated_field_count(), 0);
    }

    #[test]
    fn has_field_tracks_population() {
        let invoice = NormalizedInvoice {
            invoice_number: Some("INV-1".to_string()),
            total_amount: Some(BigDecimal::from_str("100.00").expect("literal")),
            ..NormalizedInvoice::default()
        };
        assert!(invoice.has_field(CanonicalField::InvoiceNumber));
        assert!(invoice.has_field(CanonicalField::TotalAmount));
        assert!(!invoice.has_field(CanonicalField::Currency));
        assert_eq!(invoice.populated_field_count(), 2);
    }
}
