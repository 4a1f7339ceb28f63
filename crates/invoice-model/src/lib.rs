pub mod alias;
pub mod error;
pub mod extraction;
pub mod field;
pub mod invoice;
pub mod report;

pub use alias::{AliasTable, normalize_key};
pub use error::{AliasTableError, ExtractionError};
pub use extraction::RawExtraction;
pub use field::{CanonicalField, FieldKind};
pub use invoice::NormalizedInvoice;
pub use report::{Diagnostic, Severity, ValidationReport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_with_lowercase_severity() {
        let report = ValidationReport::from_diagnostics(vec![
            Diagnostic::error("invoice_number", "invoice_number is required but not found in OCR data"),
            Diagnostic::warning("vendor_address", "vendor_address not found"),
        ]);
        let json = serde_json::to_string(&report).expect("serialize report");
        assert!(json.contains("\"severity\":\"error\""));
        assert!(json.contains("\"severity\":\"warning\""));
        assert!(json.contains("\"accepted\":false"));

        let round: ValidationReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round, report);
    }

    #[test]
    fn extraction_deserializes_from_ocr_payload() {
        let json = r#"{
            "fields": {"Invoice Number": "INV-9", "total": "42.50"},
            "raw_text": "INVOICE INV-9 ...",
            "confidence": 88.0
        }"#;
        let extraction: RawExtraction = serde_json::from_str(json).expect("deserialize extraction");
        assert_eq!(extraction.fields.len(), 2);
        assert_eq!(extraction.confidence, Some(88.0));
        assert!(extraction.ensure_well_formed().is_ok());
    }
}
