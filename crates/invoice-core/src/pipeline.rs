//! Extraction processing pipeline with explicit stages.
//!
//! Control flow is linear: raw extraction → mapper → normalized record →
//! validator → final report. The engine owns the process-wide read-only
//! configuration (alias table, validation policy); every call allocates its
//! own record and diagnostics, so one engine serves any number of threads
//! without locking.

use tracing::{debug, info};

use invoice_map::{FieldMapper, MappingOutcome};
use invoice_model::{
    AliasTable, Diagnostic, ExtractionError, NormalizedInvoice, RawExtraction, ValidationReport,
};
use invoice_validate::{ValidationPolicy, validate};

/// Result of processing one extraction end to end.
///
/// The normalized invoice is returned alongside the report so the caller
/// can hand it to storage when `report.accepted`.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub invoice: NormalizedInvoice,
    pub report: ValidationReport,
}

/// The two-stage field mapping and validation engine.
#[derive(Debug, Clone, Default)]
pub struct InvoiceEngine {
    mapper: FieldMapper,
    policy: ValidationPolicy,
}

impl InvoiceEngine {
    pub fn new(table: AliasTable, policy: ValidationPolicy) -> Self {
        Self {
            mapper: FieldMapper::new(table),
            policy,
        }
    }

    /// The validation policy in force.
    #[must_use]
    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Stage 1: map a raw extraction to a normalized record.
    ///
    /// Never fails; problems surface as diagnostics in the outcome.
    #[must_use]
    pub fn map(&self, extraction: &RawExtraction) -> MappingOutcome {
        let outcome = self.mapper.map(extraction);
        debug!(
            populated = outcome.invoice.populated_field_count(),
            diagnostics = outcome.diagnostics.len(),
            "mapped extraction"
        );
        outcome
    }

    /// Stage 2: validate a normalized record.
    #[must_use]
    pub fn validate(
        &self,
        invoice: &NormalizedInvoice,
        mapper_diagnostics: &[Diagnostic],
    ) -> ValidationReport {
        validate(invoice, mapper_diagnostics, &self.policy)
    }

    /// Run both stages.
    ///
    /// # Errors
    ///
    /// Only a structurally invalid extraction is a hard failure; every
    /// data-quality problem comes back as a diagnostic in the report.
    pub fn process(&self, extraction: &RawExtraction) -> Result<ProcessOutcome, ExtractionError> {
        extraction.ensure_well_formed()?;

        let MappingOutcome {
            invoice,
            diagnostics,
        } = self.map(extraction);
        let report = self.validate(&invoice, &diagnostics);

        info!(
            invoice_number = invoice.invoice_number.as_deref().unwrap_or("<missing>"),
            accepted = report.accepted,
            errors = report.error_count(),
            warnings = report.warning_count(),
            "processed extraction"
        );

        Ok(ProcessOutcome { invoice, report })
    }
}
