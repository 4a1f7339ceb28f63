//! Business-rule check modules.
//!
//! Each module covers one family of rules and returns plain diagnostics.
//! All rules evaluate independently; nothing short-circuits, so a record
//! collects every applicable finding in one pass.

mod amounts;
mod confidence;
mod currency;
mod dates;
mod identity;
mod presence;
mod vendor;

use invoice_model::{CanonicalField, Diagnostic, NormalizedInvoice};

use crate::policy::ValidationPolicy;

/// Synthetic field name for the cross-field amount check.
pub const AMOUNT_CONSISTENCY_FIELD: &str = "amount_consistency";
/// Synthetic field name for confidence advisories.
pub const CONFIDENCE_FIELD: &str = "confidence_score";

/// Run every rule and return diagnostics sorted by canonical field
/// declaration order (synthetic cross-field names sort last).
pub fn run_all(
    invoice: &NormalizedInvoice,
    mapper_diagnostics: &[Diagnostic],
    policy: &ValidationPolicy,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    diagnostics.extend(presence::check(invoice, mapper_diagnostics));
    diagnostics.extend(identity::check(invoice));
    diagnostics.extend(amounts::check(invoice, policy));
    diagnostics.extend(currency::check(invoice, policy));
    diagnostics.extend(dates::check(invoice, policy));
    diagnostics.extend(vendor::check(invoice));
    diagnostics.extend(confidence::check(invoice, policy));

    diagnostics.sort_by_key(|diagnostic| field_rank(&diagnostic.field));
    diagnostics
}

/// Stable ordering key: canonical fields by declaration order, then the
/// synthetic names in a fixed order.
fn field_rank(field: &str) -> usize {
    let synthetic_base = CanonicalField::ALL.len();
    match CanonicalField::from_name(field) {
        Some(canonical) => canonical.rank(),
        None if field == AMOUNT_CONSISTENCY_FIELD => synthetic_base,
        None if field == CONFIDENCE_FIELD => synthetic_base + 1,
        None => synthetic_base + 2,
    }
}

/// True when the value contains at least one alphanumeric character.
pub(crate) fn has_alphanumeric(value: &str) -> bool {
    value.chars().any(char::is_alphanumeric)
}
