//! Alias table loading from deployment configuration.
//!
//! The on-disk format is a JSON object mapping canonical field names to
//! replacement alias lists:
//!
//! ```json
//! {
//!   "invoice_number": ["invoice_number", "rechnung_nr"],
//!   "total_amount": ["total_amount", "gesamtbetrag"]
//! }
//! ```
//!
//! Fields not named keep their built-in aliases.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use invoice_model::AliasTable;

/// Load alias overrides from a JSON file and build the table.
pub fn load_alias_table(path: &Path) -> Result<AliasTable> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read alias table from {}", path.display()))?;
    let overrides: BTreeMap<String, Vec<String>> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse alias table from {}", path.display()))?;
    AliasTable::with_overrides(overrides)
        .with_context(|| format!("invalid alias table in {}", path.display()))
}
