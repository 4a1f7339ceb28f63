//! Invoice number format.

use invoice_model::{Diagnostic, NormalizedInvoice};

use super::has_alphanumeric;

/// Minimum meaningful invoice number length.
const MIN_LENGTH: usize = 3;

pub fn check(invoice: &NormalizedInvoice) -> Vec<Diagnostic> {
    let Some(number) = invoice.invoice_number.as_deref() else {
        return Vec::new();
    };
    if number.chars().count() >= MIN_LENGTH && has_alphanumeric(number) {
        return Vec::new();
    }
    vec![Diagnostic::error(
        "invoice_number",
        format!("invoice_number '{number}' is too short or contains no alphanumeric characters"),
    )]
}
