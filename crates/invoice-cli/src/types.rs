use std::path::PathBuf;

use invoice_model::{NormalizedInvoice, ValidationReport};

/// Aggregated result of one `process` run.
#[derive(Debug)]
pub struct ProcessRunResult {
    /// Per-document outcomes, in processing order.
    pub documents: Vec<DocumentOutcome>,
    /// Files that failed to load or violated the extraction contract.
    pub failures: Vec<String>,
    /// Where the JSON report was written, if requested.
    pub report_path: Option<PathBuf>,
}

impl ProcessRunResult {
    /// True when any document was rejected.
    pub fn has_rejections(&self) -> bool {
        self.documents.iter().any(|doc| !doc.report.accepted)
    }
}

/// One processed extraction file.
#[derive(Debug)]
pub struct DocumentOutcome {
    pub source: String,
    pub invoice: NormalizedInvoice,
    pub report: ValidationReport,
}
