//! Required-field presence.
//!
//! A required field the mapper already reported as missing is not reported
//! again; the suppression keeps `process` output free of duplicate errors
//! while still protecting callers that invoke `validate` with a record
//! built elsewhere.

use invoice_model::{CanonicalField, Diagnostic, NormalizedInvoice};

pub fn check(invoice: &NormalizedInvoice, mapper_diagnostics: &[Diagnostic]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for field in CanonicalField::ALL {
        if !field.is_required() || invoice.has_field(field) {
            continue;
        }
        let already_reported = mapper_diagnostics
            .iter()
            .any(|d| d.is_error() && d.field == field.name());
        if already_reported {
            continue;
        }
        diagnostics.push(Diagnostic::error(
            field.name(),
            format!("{field} is missing from the normalized record"),
        ));
    }

    diagnostics
}
