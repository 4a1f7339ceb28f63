//! Canonical invoice fields.
//!
//! A canonical field is the normalized, typed name an invoice attribute is
//! stored under, independent of how the OCR producer labeled it. The
//! declaration order of [`CanonicalField::ALL`] is normative: the mapper
//! visits fields in this order and diagnostic output is sorted by it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The coercion applied to a matched raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, stored trimmed.
    Text,
    /// Calendar date, parsed from an ordered list of accepted formats.
    Date,
    /// Exact base-10 decimal amount.
    Amount,
    /// Three-letter currency code, stored uppercased.
    Currency,
}

/// A canonical invoice field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    InvoiceNumber,
    InvoiceDate,
    DueDate,
    VendorName,
    VendorAddress,
    VendorTaxId,
    CustomerName,
    CustomerAddress,
    Subtotal,
    TaxAmount,
    TotalAmount,
    Currency,
}

impl CanonicalField {
    /// All canonical fields in declaration order.
    pub const ALL: [CanonicalField; 12] = [
        CanonicalField::InvoiceNumber,
        CanonicalField::InvoiceDate,
        CanonicalField::DueDate,
        CanonicalField::VendorName,
        CanonicalField::VendorAddress,
        CanonicalField::VendorTaxId,
        CanonicalField::CustomerName,
        CanonicalField::CustomerAddress,
        CanonicalField::Subtotal,
        CanonicalField::TaxAmount,
        CanonicalField::TotalAmount,
        CanonicalField::Currency,
    ];

    /// The canonical (snake_case) name used in configuration and diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvoiceNumber => "invoice_number",
            Self::InvoiceDate => "invoice_date",
            Self::DueDate => "due_date",
            Self::VendorName => "vendor_name",
            Self::VendorAddress => "vendor_address",
            Self::VendorTaxId => "vendor_tax_id",
            Self::CustomerName => "customer_name",
            Self::CustomerAddress => "customer_address",
            Self::Subtotal => "subtotal",
            Self::TaxAmount => "tax_amount",
            Self::TotalAmount => "total_amount",
            Self::Currency => "currency",
        }
    }

    /// The coercion kind for this field.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::InvoiceNumber
            | Self::VendorName
            | Self::VendorAddress
            | Self::VendorTaxId
            | Self::CustomerName
            | Self::CustomerAddress => FieldKind::Text,
            Self::InvoiceDate | Self::DueDate => FieldKind::Date,
            Self::Subtotal | Self::TaxAmount | Self::TotalAmount => FieldKind::Amount,
            Self::Currency => FieldKind::Currency,
        }
    }

    /// Whether a missing value is an error rather than a silent absence.
    #[must_use]
    pub fn is_required(&self) -> bool {
        matches!(self, Self::InvoiceNumber | Self::TotalAmount)
    }

    /// Resolve a canonical name back to its field.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }

    /// Position of this field in the declaration order.
    #[must_use]
    pub fn rank(&self) -> usize {
        Self::ALL
            .iter()
            .position(|field| field == self)
            .unwrap_or(Self::ALL.len())
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for field in CanonicalField::ALL {
            assert_eq!(CanonicalField::from_name(field.name()), Some(field));
        }
    }

    #[test]
    fn required_set_is_exactly_number_and_total() {
        let required: Vec<CanonicalField> = CanonicalField::ALL
            .into_iter()
            .filter(CanonicalField::is_required)
            .collect();
        assert_eq!(
            required,
            vec![CanonicalField::InvoiceNumber, CanonicalField::TotalAmount]
        );
    }

    #[test]
    fn rank_follows_declaration_order() {
        assert_eq!(CanonicalField::InvoiceNumber.rank(), 0);
        assert_eq!(CanonicalField::Currency.rank(), CanonicalField::ALL.len() - 1);
    }
}
