//! OCR confidence advisories.

use invoice_model::{Diagnostic, NormalizedInvoice};

use super::CONFIDENCE_FIELD;
use crate::policy::ValidationPolicy;

pub fn check(invoice: &NormalizedInvoice, policy: &ValidationPolicy) -> Vec<Diagnostic> {
    let Some(score) = invoice.confidence_score else {
        return Vec::new();
    };
    if !(0.0..=100.0).contains(&score) {
        return vec![Diagnostic::warning(
            CONFIDENCE_FIELD,
            format!("confidence score {score} is outside the expected range 0-100"),
        )];
    }
    if score < policy.min_confidence {
        return vec![Diagnostic::warning(
            CONFIDENCE_FIELD,
            format!(
                "low OCR confidence score: {score} (review threshold {})",
                policy.min_confidence
            ),
        )];
    }
    Vec::new()
}
