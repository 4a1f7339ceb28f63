//! Business-rule validation for normalized invoices.
//!
//! The validator decides acceptance on an already-typed record. Malformed
//! business data never raises: it is exactly what produces error
//! diagnostics. The final report keeps mapper diagnostics ahead of
//! validator diagnostics, each group in canonical field declaration order,
//! so identical input yields byte-identical output.

mod policy;
mod rules;

pub use policy::ValidationPolicy;
pub use rules::{AMOUNT_CONSISTENCY_FIELD, CONFIDENCE_FIELD};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use invoice_model::{Diagnostic, NormalizedInvoice, ValidationReport};

/// Validate a normalized invoice against the policy.
///
/// `mapper_diagnostics` are the diagnostics the field mapper produced for
/// this record. They lead the report's diagnostic list, and required-field
/// errors among them suppress the validator's own presence rule so a
/// missing field is reported once.
#[must_use]
pub fn validate(
    invoice: &NormalizedInvoice,
    mapper_diagnostics: &[Diagnostic],
    policy: &ValidationPolicy,
) -> ValidationReport {
    let mut diagnostics = mapper_diagnostics.to_vec();
    diagnostics.extend(rules::run_all(invoice, mapper_diagnostics, policy));
    ValidationReport::from_diagnostics(diagnostics)
}

const REPORT_SCHEMA: &str = "invoice-intake.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Per-document entry of the JSON report payload.
#[derive(Debug, Serialize)]
pub struct DocumentReport {
    /// Where the extraction came from (file path, request id, ...).
    pub source: String,
    pub invoice: NormalizedInvoice,
    pub accepted: bool,
    pub error_count: usize,
    pub warning_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl DocumentReport {
    pub fn new(source: impl Into<String>, invoice: NormalizedInvoice, report: &ValidationReport) -> Self {
        Self {
            source: source.into(),
            invoice,
            accepted: report.accepted,
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            diagnostics: report.diagnostics.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ReportPayload {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    documents: Vec<DocumentReport>,
}

/// Write the validation report payload as pretty-printed JSON.
pub fn write_report_json(output_path: &Path, documents: Vec<DocumentReport>) -> Result<PathBuf> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let payload = ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        documents,
    };
    let json = serde_json::to_string_pretty(&payload).context("failed to serialize report")?;
    std::fs::write(output_path, format!("{json}\n"))
        .with_context(|| format!("failed to write report to {}", output_path.display()))?;
    Ok(output_path.to_path_buf())
}
