use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use invoice_core::InvoiceEngine;
use invoice_model::{Diagnostic, ExtractionError, RawExtraction, Severity};

fn extraction(pairs: &[(&str, &str)]) -> RawExtraction {
    RawExtraction::from_fields(pairs.iter().copied())
}

#[test]
fn minimal_valid_invoice_is_accepted() {
    let engine = InvoiceEngine::default();
    let outcome = engine
        .process(&extraction(&[
            ("invoice_number", "INV-1"),
            ("total", "100.00"),
            ("date", "2024-01-15"),
        ]))
        .expect("well-formed extraction");

    assert!(outcome.report.accepted);
    assert_eq!(outcome.report.error_count(), 0);
    assert_eq!(
        outcome.invoice.total_amount,
        Some(BigDecimal::from_str("100.00").expect("literal"))
    );
    assert_eq!(
        outcome.invoice.invoice_date,
        NaiveDate::from_ymd_opt(2024, 1, 15)
    );
}

#[test]
fn missing_required_fields_yield_exactly_two_errors() {
    let engine = InvoiceEngine::default();
    let outcome = engine
        .process(&extraction(&[("date", "2024-01-15"), ("vendor", "Acme")]))
        .expect("well-formed extraction");

    assert!(!outcome.report.accepted);
    let errors: Vec<&Diagnostic> = outcome
        .report
        .diagnostics
        .iter()
        .filter(|d| d.is_error())
        .collect();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field, "invoice_number");
    assert_eq!(errors[1].field, "total_amount");
}

#[test]
fn negative_total_maps_but_fails_the_range_rule() {
    let engine = InvoiceEngine::default();
    let outcome = engine
        .process(&extraction(&[
            ("invoice_number", "INV-2"),
            ("total", "-5.00"),
        ]))
        .expect("well-formed extraction");

    // The numeric parse succeeded; rejection comes from validation.
    assert_eq!(
        outcome.invoice.total_amount,
        Some(BigDecimal::from_str("-5.00").expect("literal"))
    );
    assert!(!outcome.report.accepted);
    let range_error = outcome
        .report
        .diagnostics
        .iter()
        .find(|d| d.is_error() && d.field == "total_amount")
        .expect("amount range error");
    assert!(range_error.message.contains("out of range"));
}

#[test]
fn unsupported_currency_rejects_independently_of_other_fields() {
    let engine = InvoiceEngine::default();
    let outcome = engine
        .process(&extraction(&[
            ("invoice_number", "INV-3"),
            ("total", "50"),
            ("currency", "ZZZ"),
        ]))
        .expect("well-formed extraction");

    assert!(!outcome.report.accepted);
    let errors: Vec<&Diagnostic> = outcome
        .report
        .diagnostics
        .iter()
        .filter(|d| d.is_error())
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "currency");
}

#[test]
fn inverted_dates_reject_an_otherwise_valid_invoice() {
    let engine = InvoiceEngine::default();
    let outcome = engine
        .process(&extraction(&[
            ("invoice_number", "INV-4"),
            ("total", "250.00"),
            ("invoice_date", "2024-03-01"),
            ("due_date", "2024-02-01"),
            ("vendor_name", "Acme Corp"),
            ("vendor_address", "1 Main St"),
            ("currency", "USD"),
        ]))
        .expect("well-formed extraction");

    assert!(!outcome.report.accepted);
    let errors: Vec<&Diagnostic> = outcome
        .report
        .diagnostics
        .iter()
        .filter(|d| d.is_error())
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "due_date");
}

#[test]
fn mapper_diagnostics_precede_validator_diagnostics() {
    let engine = InvoiceEngine::default();
    let outcome = engine
        .process(&extraction(&[
            ("invoice_number", "INV-5"),
            ("total", "50"),
            ("invoice_date", "yesterday-ish"),
            ("currency", "ZZZ"),
        ]))
        .expect("well-formed extraction");

    // Mapper's date warning leads; validator's currency error and
    // vendor_address warning follow.
    let fields: Vec<&str> = outcome
        .report
        .diagnostics
        .iter()
        .map(|d| d.field.as_str())
        .collect();
    assert_eq!(fields, vec!["invoice_date", "vendor_address", "currency"]);
    assert_eq!(outcome.report.diagnostics[0].severity, Severity::Warning);
}

#[test]
fn processing_is_idempotent() {
    let engine = InvoiceEngine::default();
    let raw = extraction(&[
        ("invoice_number", "INV-6"),
        ("total", "99.95"),
        ("date", "2024-05-01"),
        ("due", "2024-06-01"),
        ("vendor", "Initech"),
        ("currency", "EUR"),
    ])
    .with_confidence(64.0);

    let first = engine.process(&raw).expect("well-formed extraction");
    let second = engine.process(&raw).expect("well-formed extraction");

    let first_json = serde_json::to_string(&first.report).expect("serialize");
    let second_json = serde_json::to_string(&second.report).expect("serialize");
    assert_eq!(first_json, second_json);
    assert_eq!(first.invoice, second.invoice);
}

#[test]
fn ambiguous_keys_are_a_hard_failure_not_a_diagnostic() {
    let engine = InvoiceEngine::default();
    let error = engine
        .process(&extraction(&[
            ("invoice_number", "INV-7"),
            ("Invoice Number", "INV-8"),
            ("total", "10"),
        ]))
        .unwrap_err();
    assert!(matches!(error, ExtractionError::AmbiguousKey { .. }));
}

#[test]
fn storage_layer_can_append_a_uniqueness_error() {
    let engine = InvoiceEngine::default();
    let mut outcome = engine
        .process(&extraction(&[
            ("invoice_number", "INV-9"),
            ("total", "10"),
            ("vendor_address", "1 Main St"),
        ]))
        .expect("well-formed extraction");
    assert!(outcome.report.accepted);

    outcome.report.append(Diagnostic::error(
        "invoice_number",
        "invoice with number 'INV-9' already exists",
    ));
    assert!(!outcome.report.accepted);
}

#[test]
fn split_stages_compose_like_process() {
    let engine = InvoiceEngine::default();
    let raw = extraction(&[("invoice_number", "INV-10"), ("total", "75.00")]);

    let mapped = engine.map(&raw);
    let report = engine.validate(&mapped.invoice, &mapped.diagnostics);
    let composed = engine.process(&raw).expect("well-formed extraction");

    assert_eq!(report, composed.report);
    assert_eq!(mapped.invoice, composed.invoice);
}
