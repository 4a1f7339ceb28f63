//! Vendor information advisories.
//!
//! Vendor details are optional, so nothing here blocks acceptance; the
//! warnings flag records an operator will likely want to complete by hand.

use invoice_model::{Diagnostic, NormalizedInvoice};

use super::has_alphanumeric;

/// Minimum plausible vendor name length.
const MIN_NAME_LENGTH: usize = 2;

pub fn check(invoice: &NormalizedInvoice) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if let Some(name) = invoice.vendor_name.as_deref()
        && (name.chars().count() < MIN_NAME_LENGTH || !has_alphanumeric(name))
    {
        diagnostics.push(Diagnostic::warning(
            "vendor_name",
            format!("vendor_name '{name}' is too short or contains no alphanumeric characters"),
        ));
    }

    if invoice.vendor_address.is_none() {
        diagnostics.push(Diagnostic::warning(
            "vendor_address",
            "vendor_address not found; vendor record is incomplete",
        ));
    }

    diagnostics
}
