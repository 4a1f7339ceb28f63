//! Alias table configuration for OCR key resolution.
//!
//! OCR producers label the same attribute in many ways (`invoice_no`,
//! `Invoice Number`, `INV_NO`, ...). The alias table records, per canonical
//! field, the ordered list of key names known to refer to it. Lookup is
//! first-match over that order after key normalization, so more specific
//! aliases must be listed first.
//!
//! The table is static configuration: built once at startup, read-only
//! afterwards. Construction validates the invariants (no empty alias lists,
//! no alias shared by two fields after normalization).

use std::collections::BTreeMap;

use crate::error::AliasTableError;
use crate::field::CanonicalField;

/// Normalizes an OCR key or alias for comparison.
///
/// Lowercases ASCII letters and drops all whitespace and underscores, so
/// `Invoice Number`, `invoice_number`, and ` INVOICE_NUMBER ` compare equal.
///
/// # Examples
///
/// ```
/// use invoice_model::normalize_key;
///
/// assert_eq!(normalize_key(" Invoice Number "), "invoicenumber");
/// assert_eq!(normalize_key("INV_NO"), "invno");
/// ```
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '_')
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Ordered alias lists per canonical field.
#[derive(Debug, Clone)]
pub struct AliasTable {
    aliases: BTreeMap<CanonicalField, Vec<String>>,
    normalized: BTreeMap<CanonicalField, Vec<String>>,
}

impl AliasTable {
    /// Build a table from per-field alias lists.
    ///
    /// # Errors
    ///
    /// Returns [`AliasTableError`] if a field has no aliases or two fields
    /// claim the same alias after normalization.
    pub fn new(
        aliases: BTreeMap<CanonicalField, Vec<String>>,
    ) -> Result<Self, AliasTableError> {
        let mut normalized: BTreeMap<CanonicalField, Vec<String>> = BTreeMap::new();
        let mut owners: BTreeMap<String, CanonicalField> = BTreeMap::new();

        for field in CanonicalField::ALL {
            let list = aliases
                .get(&field)
                .ok_or(AliasTableError::EmptyAliasList { field })?;
            if list.is_empty() {
                return Err(AliasTableError::EmptyAliasList { field });
            }
            let mut normalized_list = Vec::with_capacity(list.len());
            for alias in list {
                let key = normalize_key(alias);
                if key.is_empty() {
                    return Err(AliasTableError::EmptyAliasList { field });
                }
                if let Some(owner) = owners.get(&key)
                    && *owner != field
                {
                    return Err(AliasTableError::OverlappingAlias {
                        alias: alias.clone(),
                        first: *owner,
                        second: field,
                    });
                }
                owners.insert(key.clone(), field);
                normalized_list.push(key);
            }
            normalized.insert(field, normalized_list);
        }

        Ok(Self {
            aliases,
            normalized,
        })
    }

    /// Replace the default alias lists for the named fields.
    ///
    /// `overrides` maps canonical field names to replacement alias lists;
    /// fields not named keep their built-in aliases. This is the entry point
    /// for deployment-specific configuration loaded by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AliasTableError::UnknownField`] for an unrecognized
    /// canonical name, plus the construction errors of [`AliasTable::new`].
    pub fn with_overrides(
        overrides: BTreeMap<String, Vec<String>>,
    ) -> Result<Self, AliasTableError> {
        let mut aliases = default_aliases();
        for (name, list) in overrides {
            let field = CanonicalField::from_name(&name)
                .ok_or(AliasTableError::UnknownField { name })?;
            aliases.insert(field, list);
        }
        Self::new(aliases)
    }

    /// Aliases for a field, in the declared match order.
    #[must_use]
    pub fn aliases_for(&self, field: CanonicalField) -> &[String] {
        self.aliases.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Normalized aliases for a field, in the declared match order.
    #[must_use]
    pub fn normalized_aliases_for(&self, field: CanonicalField) -> &[String] {
        self.normalized
            .get(&field)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new(default_aliases()).expect("built-in alias table is valid")
    }
}

/// The built-in alias lists.
///
/// Preferred, most specific aliases come first; the mapper's first-match
/// tie-break depends on this order.
fn default_aliases() -> BTreeMap<CanonicalField, Vec<String>> {
    let mut aliases = BTreeMap::new();
    let mut insert = |field: CanonicalField, list: &[&str]| {
        aliases.insert(field, list.iter().map(|s| (*s).to_string()).collect());
    };

    insert(
        CanonicalField::InvoiceNumber,
        &["invoice_number", "invoice_no", "inv_no", "number", "invoice#"],
    );
    insert(
        CanonicalField::InvoiceDate,
        &["invoice_date", "date", "inv_date", "bill_date", "issue_date"],
    );
    insert(
        CanonicalField::DueDate,
        &["due_date", "payment_due", "due", "payment_date"],
    );
    insert(
        CanonicalField::VendorName,
        &["vendor_name", "vendor", "supplier", "from", "seller", "company"],
    );
    insert(
        CanonicalField::VendorAddress,
        &["vendor_address", "vendor_addr", "from_address", "supplier_address"],
    );
    insert(
        CanonicalField::VendorTaxId,
        &["vendor_tax_id", "tax_id", "vat_number", "ein", "tin"],
    );
    insert(
        CanonicalField::CustomerName,
        &["customer_name", "customer", "bill_to", "client", "buyer"],
    );
    insert(
        CanonicalField::CustomerAddress,
        &[
            "customer_address",
            "customer_addr",
            "billing_address",
            "bill_to_address",
        ],
    );
    insert(
        CanonicalField::Subtotal,
        &["subtotal", "sub_total", "amount", "net_amount"],
    );
    insert(
        CanonicalField::TaxAmount,
        &["tax_amount", "tax", "vat", "sales_tax"],
    );
    insert(
        CanonicalField::TotalAmount,
        &["total_amount", "total", "grand_total", "amount_due", "balance_due"],
    );
    insert(CanonicalField::Currency, &["currency", "curr", "currency_code"]);

    aliases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_key_drops_case_whitespace_and_underscores() {
        assert_eq!(normalize_key("Invoice Number"), "invoicenumber");
        assert_eq!(normalize_key("  invoice_number  "), "invoicenumber");
        assert_eq!(normalize_key("INVOICE#"), "invoice#");
    }

    #[test]
    fn default_table_covers_every_field() {
        let table = AliasTable::default();
        for field in CanonicalField::ALL {
            assert!(!table.aliases_for(field).is_empty(), "{field} has no aliases");
        }
    }

    #[test]
    fn overlapping_alias_is_rejected() {
        let mut overrides = BTreeMap::new();
        // "total" already belongs to total_amount in the defaults.
        overrides.insert("subtotal".to_string(), vec!["total".to_string()]);
        let error = AliasTable::with_overrides(overrides).unwrap_err();
        assert!(matches!(error, AliasTableError::OverlappingAlias { .. }));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut overrides = BTreeMap::new();
        overrides.insert("grand_sum".to_string(), vec!["gs".to_string()]);
        let error = AliasTable::with_overrides(overrides).unwrap_err();
        assert!(matches!(error, AliasTableError::UnknownField { .. }));
    }
}
