//! Currency whitelist.
//!
//! An absent currency is valid: there is deliberately no default here, any
//! fallback-currency policy belongs to the configuration layer around the
//! engine.

use invoice_model::{Diagnostic, NormalizedInvoice};

use crate::policy::ValidationPolicy;

pub fn check(invoice: &NormalizedInvoice, policy: &ValidationPolicy) -> Vec<Diagnostic> {
    let Some(currency) = invoice.currency.as_deref() else {
        return Vec::new();
    };
    if policy.supported_currencies.contains(currency) {
        return Vec::new();
    }
    vec![Diagnostic::error(
        "currency",
        format!(
            "currency '{currency}' is not supported; supported codes: {}",
            policy.supported_currency_list()
        ),
    )]
}
