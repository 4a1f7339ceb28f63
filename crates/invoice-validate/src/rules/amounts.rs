//! Financial amount rules: range, sign, and cross-field consistency.

use bigdecimal::BigDecimal;
use invoice_model::{Diagnostic, NormalizedInvoice};

use super::AMOUNT_CONSISTENCY_FIELD;
use crate::policy::ValidationPolicy;

pub fn check(invoice: &NormalizedInvoice, policy: &ValidationPolicy) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let zero = BigDecimal::from(0i64);

    if let Some(total) = &invoice.total_amount {
        if *total <= zero {
            diagnostics.push(Diagnostic::error(
                "total_amount",
                format!("total_amount {total} is out of range: must be greater than 0"),
            ));
        } else if *total > policy.max_total_amount {
            diagnostics.push(Diagnostic::error(
                "total_amount",
                format!(
                    "total_amount {total} is out of range: must not exceed {}",
                    policy.max_total_amount
                ),
            ));
        }
    }

    if let Some(subtotal) = &invoice.subtotal
        && *subtotal < zero
    {
        diagnostics.push(Diagnostic::error(
            "subtotal",
            format!("subtotal {subtotal} is negative"),
        ));
    }

    if let Some(tax) = &invoice.tax_amount
        && *tax < zero
    {
        diagnostics.push(Diagnostic::error(
            "tax_amount",
            format!("tax_amount {tax} is negative"),
        ));
    }

    if let (Some(subtotal), Some(tax)) = (&invoice.subtotal, &invoice.tax_amount)
        && *subtotal > zero
        && tax + tax > *subtotal
    {
        diagnostics.push(Diagnostic::warning(
            "tax_amount",
            format!("tax_amount {tax} exceeds half of subtotal {subtotal}"),
        ));
    }

    if let (Some(subtotal), Some(tax), Some(total)) = (
        &invoice.subtotal,
        &invoice.tax_amount,
        &invoice.total_amount,
    ) {
        let computed = subtotal + tax;
        let difference = (computed.clone() - total).abs();
        if difference > policy.consistency_tolerance {
            diagnostics.push(Diagnostic::error(
                AMOUNT_CONSISTENCY_FIELD,
                format!(
                    "subtotal {subtotal} + tax_amount {tax} = {computed} differs from \
                     total_amount {total} by {difference}"
                ),
            ));
        }
    }

    diagnostics
}
