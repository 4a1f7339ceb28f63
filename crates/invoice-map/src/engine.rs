//! Field mapping engine.
//!
//! Best-effort translation of an arbitrary OCR key/value mapping into a
//! [`NormalizedInvoice`]. The mapper never fails: every problem becomes a
//! field-attributed diagnostic and the record is returned with the affected
//! field absent.

use std::collections::BTreeMap;

use invoice_model::{
    AliasTable, CanonicalField, Diagnostic, FieldKind, NormalizedInvoice, RawExtraction,
    normalize_key,
};

use crate::parse::{parse_amount, parse_date};

/// The mapper's result: a (possibly partial) record plus its diagnostics.
#[derive(Debug, Clone)]
pub struct MappingOutcome {
    pub invoice: NormalizedInvoice,
    /// Ordered by canonical field declaration order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Alias-resolving, type-coercing field mapper.
///
/// Holds the process-wide read-only [`AliasTable`]; each call allocates its
/// own record and diagnostic list, so a single mapper is safe to share
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct FieldMapper {
    table: AliasTable,
}

impl FieldMapper {
    pub fn new(table: AliasTable) -> Self {
        Self { table }
    }

    /// The alias table this mapper resolves against.
    #[must_use]
    pub fn alias_table(&self) -> &AliasTable {
        &self.table
    }

    /// Map a raw extraction to a normalized invoice.
    ///
    /// Visits canonical fields in declaration order. For each field the
    /// first alias (in table order) with a normalized match wins; later
    /// matches are ignored. A matched value that trims to empty counts as
    /// not found. Required fields that stay absent produce error
    /// diagnostics; coercion failures produce an error for required fields
    /// and a warning for optional ones.
    #[must_use]
    pub fn map(&self, extraction: &RawExtraction) -> MappingOutcome {
        // One normalized-key lookup per extraction, O(n) in raw fields.
        let lookup: BTreeMap<String, &str> = extraction
            .fields
            .iter()
            .map(|(key, value)| (normalize_key(key), value.as_str()))
            .collect();

        let mut invoice = NormalizedInvoice {
            confidence_score: extraction.confidence,
            ..NormalizedInvoice::default()
        };
        let mut diagnostics = Vec::new();

        for field in CanonicalField::ALL {
            let matched = self
                .table
                .normalized_aliases_for(field)
                .iter()
                .find_map(|alias| lookup.get(alias));

            let value = matched.map(|raw| raw.trim()).filter(|v| !v.is_empty());
            let Some(value) = value else {
                if field.is_required() {
                    diagnostics.push(Diagnostic::error(
                        field.name(),
                        format!("{field} is required but not found in OCR data"),
                    ));
                }
                continue;
            };

            match field.kind() {
                FieldKind::Text => set_text(&mut invoice, field, value),
                FieldKind::Date => match parse_date(value) {
                    Some((date, _format)) => set_date(&mut invoice, field, date),
                    None => diagnostics.push(coercion_diagnostic(
                        field,
                        format!("{field} could not be parsed as a date: '{value}'"),
                    )),
                },
                FieldKind::Amount => match parse_amount(value) {
                    Some(amount) => set_amount(&mut invoice, field, amount),
                    None => diagnostics.push(coercion_diagnostic(
                        field,
                        format!("{field} could not be parsed as an amount: '{value}'"),
                    )),
                },
                FieldKind::Currency => {
                    invoice.currency = Some(value.to_ascii_uppercase());
                }
            }
        }

        MappingOutcome {
            invoice,
            diagnostics,
        }
    }
}

fn coercion_diagnostic(field: CanonicalField, message: String) -> Diagnostic {
    if field.is_required() {
        Diagnostic::error(field.name(), message)
    } else {
        Diagnostic::warning(field.name(), message)
    }
}

fn set_text(invoice: &mut NormalizedInvoice, field: CanonicalField, value: &str) {
    let value = Some(value.to_string());
    match field {
        CanonicalField::InvoiceNumber => invoice.invoice_number = value,
        CanonicalField::VendorName => invoice.vendor_name = value,
        CanonicalField::VendorAddress => invoice.vendor_address = value,
        CanonicalField::VendorTaxId => invoice.vendor_tax_id = value,
        CanonicalField::CustomerName => invoice.customer_name = value,
        CanonicalField::CustomerAddress => invoice.customer_address = value,
        _ => {}
    }
}

fn set_date(
    invoice: &mut NormalizedInvoice,
    field: CanonicalField,
    date: chrono::NaiveDate,
) {
    match field {
        CanonicalField::InvoiceDate => invoice.invoice_date = Some(date),
        CanonicalField::DueDate => invoice.due_date = Some(date),
        _ => {}
    }
}

fn set_amount(
    invoice: &mut NormalizedInvoice,
    field: CanonicalField,
    amount: bigdecimal::BigDecimal,
) {
    match field {
        CanonicalField::Subtotal => invoice.subtotal = Some(amount),
        CanonicalField::TaxAmount => invoice.tax_amount = Some(amount),
        CanonicalField::TotalAmount => invoice.total_amount = Some(amount),
        _ => {}
    }
}
