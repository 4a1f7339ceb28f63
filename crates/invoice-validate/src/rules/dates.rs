//! Date ordering and plausibility.
//!
//! The ordering rule is unconditional. The age/future rules need a "today"
//! to measure against and only run when the policy carries a reference
//! date, so validation stays deterministic for a fixed input.

use invoice_model::{Diagnostic, NormalizedInvoice};

use crate::policy::ValidationPolicy;

pub fn check(invoice: &NormalizedInvoice, policy: &ValidationPolicy) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if let (Some(invoice_date), Some(due_date)) = (invoice.invoice_date, invoice.due_date)
        && due_date < invoice_date
    {
        diagnostics.push(Diagnostic::error(
            "due_date",
            format!("due_date {due_date} is earlier than invoice_date {invoice_date}"),
        ));
    }

    if let Some(reference) = policy.reference_date {
        if let Some(invoice_date) = invoice.invoice_date {
            if (reference - invoice_date).num_days() > policy.max_invoice_age_days {
                diagnostics.push(Diagnostic::warning(
                    "invoice_date",
                    format!(
                        "invoice_date {invoice_date} is more than {} days old",
                        policy.max_invoice_age_days
                    ),
                ));
            }
            if (invoice_date - reference).num_days() > policy.max_future_days {
                diagnostics.push(Diagnostic::warning(
                    "invoice_date",
                    format!("invoice_date {invoice_date} is in the future"),
                ));
            }
        }
        if let (Some(invoice_date), Some(due_date)) = (invoice.invoice_date, invoice.due_date)
            && (due_date - invoice_date).num_days() > policy.max_due_after_days
        {
            diagnostics.push(Diagnostic::warning(
                "due_date",
                format!(
                    "due_date {due_date} is more than {} days after invoice_date {invoice_date}",
                    policy.max_due_after_days
                ),
            ));
        }
    }

    diagnostics
}
