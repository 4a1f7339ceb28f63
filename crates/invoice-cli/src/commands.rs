use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::{Cell, Table};
use tracing::{debug, info, warn};

use invoice_core::InvoiceEngine;
use invoice_map::load_alias_table;
use invoice_model::{AliasTable, CanonicalField, RawExtraction};
use invoice_validate::{DocumentReport, ValidationPolicy, write_report_json};

use crate::cli::ProcessArgs;
use crate::summary::apply_table_style;
use crate::types::{DocumentOutcome, ProcessRunResult};

pub fn run_process(args: &ProcessArgs) -> Result<ProcessRunResult> {
    let table = match &args.alias_table {
        Some(path) => load_alias_table(path)?,
        None => AliasTable::default(),
    };
    let reference_date = if args.no_reference_date {
        None
    } else {
        Some(Utc::now().date_naive())
    };
    let policy = ValidationPolicy::default().with_reference_date(reference_date);
    let engine = InvoiceEngine::new(table, policy);

    let inputs = collect_inputs(&args.input)?;
    info!(count = inputs.len(), "processing extractions");

    let mut documents = Vec::new();
    let mut failures = Vec::new();
    for path in inputs {
        let source = path.display().to_string();
        match process_file(&engine, &path) {
            Ok(outcome) => {
                debug!(source = %source, accepted = outcome.report.accepted, "processed");
                documents.push(outcome);
            }
            Err(error) => {
                warn!(source = %source, "failed to process: {error:#}");
                failures.push(format!("{source}: {error:#}"));
                if args.fail_fast {
                    break;
                }
            }
        }
    }

    let report_path = match &args.report_json {
        Some(path) => {
            let entries = documents
                .iter()
                .map(|doc| {
                    DocumentReport::new(doc.source.clone(), doc.invoice.clone(), &doc.report)
                })
                .collect();
            Some(write_report_json(path, entries)?)
        }
        None => None,
    };

    Ok(ProcessRunResult {
        documents,
        failures,
        report_path,
    })
}

fn process_file(engine: &InvoiceEngine, path: &Path) -> Result<DocumentOutcome> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let extraction: RawExtraction = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a valid extraction document", path.display()))?;
    let outcome = engine
        .process(&extraction)
        .with_context(|| format!("{} violates the extraction contract", path.display()))?;
    Ok(DocumentOutcome {
        source: path.display().to_string(),
        invoice: outcome.invoice,
        report: outcome.report,
    })
}

/// Resolve the input path to an ordered list of extraction files.
fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        anyhow::bail!("{} is neither a file nor a directory", input.display());
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(input)
        .with_context(|| format!("failed to read directory {}", input.display()))?
    {
        let path = entry?.path();
        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            files.push(path);
        }
    }
    files.sort();
    if files.is_empty() {
        anyhow::bail!("no .json extraction files found in {}", input.display());
    }
    Ok(files)
}

pub fn run_fields() -> Result<()> {
    let table = AliasTable::default();
    let mut output = Table::new();
    output.set_header(vec!["Field", "Kind", "Required", "Aliases"]);
    apply_table_style(&mut output);
    for field in CanonicalField::ALL {
        output.add_row(vec![
            Cell::new(field.name()),
            Cell::new(format!("{:?}", field.kind())),
            Cell::new(if field.is_required() { "yes" } else { "no" }),
            Cell::new(table.aliases_for(field).join(", ")),
        ]);
    }
    println!("{output}");
    Ok(())
}
