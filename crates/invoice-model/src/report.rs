//! Diagnostics and the final validation report.

use serde::{Deserialize, Serialize};

/// How a diagnostic affects acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks acceptance.
    Error,
    /// Informational; never blocks acceptance.
    Warning,
}

/// One field-attributed problem report.
///
/// `field` is a canonical field name, or a synthetic cross-field name such
/// as `amount_consistency` when no single field owns the problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub field: String,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    /// Build an error-severity diagnostic.
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Build a warning-severity diagnostic.
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Whether this diagnostic blocks acceptance.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// The engine's verdict on one extraction.
///
/// `accepted` is true iff no error-severity diagnostic exists. The
/// diagnostics keep a deterministic order: mapper diagnostics first, then
/// validator diagnostics, each group sorted by canonical field declaration
/// order, so identical input always produces byte-identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub accepted: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Assemble a report from an already-ordered diagnostic list.
    #[must_use]
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        let accepted = !diagnostics.iter().any(Diagnostic::is_error);
        Self {
            accepted,
            diagnostics,
        }
    }

    /// Append a diagnostic produced by an external collaborator.
    ///
    /// The storage layer uses this to report an `invoice_number` uniqueness
    /// violation after the engine has accepted a record. `accepted` is
    /// recomputed.
    pub fn append(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.accepted = false;
        }
        self.diagnostics.push(diagnostic);
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_iff_no_errors() {
        let clean = ValidationReport::from_diagnostics(vec![Diagnostic::warning(
            "vendor_address",
            "vendor_address not found",
        )]);
        assert!(clean.accepted);
        assert_eq!(clean.warning_count(), 1);

        let dirty = ValidationReport::from_diagnostics(vec![Diagnostic::error(
            "total_amount",
            "total_amount is required but not found in OCR data",
        )]);
        assert!(!dirty.accepted);
        assert_eq!(dirty.error_count(), 1);
    }

    #[test]
    fn appended_error_flips_acceptance() {
        let mut report = ValidationReport::from_diagnostics(Vec::new());
        assert!(report.accepted);
        report.append(Diagnostic::error(
            "invoice_number",
            "invoice INV-1 already exists",
        ));
        assert!(!report.accepted);
        assert_eq!(report.error_count(), 1);
    }
}
