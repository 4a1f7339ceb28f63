use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use invoice_model::Severity;

use crate::types::ProcessRunResult;

pub fn print_summary(result: &ProcessRunResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Invoice #"),
        header_cell("Total"),
        header_cell("Currency"),
        header_cell("Verdict"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);

    let mut total_errors = 0usize;
    let mut total_warnings = 0usize;
    for doc in &result.documents {
        total_errors += doc.report.error_count();
        total_warnings += doc.report.warning_count();
        table.add_row(vec![
            Cell::new(&doc.source),
            Cell::new(doc.invoice.invoice_number.as_deref().unwrap_or("-")),
            Cell::new(
                doc.invoice
                    .total_amount
                    .as_ref()
                    .map(|amount| amount.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(doc.invoice.currency.as_deref().unwrap_or("-")),
            verdict_cell(doc.report.accepted),
            count_cell(doc.report.error_count(), Color::Red),
            count_cell(doc.report.warning_count(), Color::Yellow),
        ]);
    }
    if result.documents.len() > 1 {
        let accepted = result
            .documents
            .iter()
            .filter(|doc| doc.report.accepted)
            .count();
        table.add_row(vec![
            Cell::new("TOTAL")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new("-"),
            Cell::new("-"),
            Cell::new("-"),
            Cell::new(format!("{accepted}/{} accepted", result.documents.len())),
            count_cell(total_errors, Color::Red).add_attribute(Attribute::Bold),
            count_cell(total_warnings, Color::Yellow).add_attribute(Attribute::Bold),
        ]);
    }
    println!("{table}");

    print_diagnostics(result);

    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
    if !result.failures.is_empty() {
        eprintln!("Failures:");
        for failure in &result.failures {
            eprintln!("- {failure}");
        }
    }
}

fn print_diagnostics(result: &ProcessRunResult) {
    let has_diagnostics = result
        .documents
        .iter()
        .any(|doc| !doc.report.diagnostics.is_empty());
    if !has_diagnostics {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Severity"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for doc in &result.documents {
        for diagnostic in &doc.report.diagnostics {
            let severity_cell = match diagnostic.severity {
                Severity::Error => Cell::new("error").fg(Color::Red),
                Severity::Warning => Cell::new("warning").fg(Color::Yellow),
            };
            table.add_row(vec![
                Cell::new(&doc.source),
                severity_cell,
                Cell::new(&diagnostic.field),
                Cell::new(&diagnostic.message),
            ]);
        }
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn verdict_cell(accepted: bool) -> Cell {
    if accepted {
        Cell::new("accepted").fg(Color::Green)
    } else {
        Cell::new("rejected").fg(Color::Red)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        Cell::new("0")
    } else {
        Cell::new(count).fg(color)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
