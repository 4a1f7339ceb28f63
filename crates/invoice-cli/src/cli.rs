//! CLI argument definitions for the invoice intake tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "invoice-triage",
    version,
    about = "Invoice intake - map OCR extractions to validated invoice records",
    long_about = "Map loosely-structured OCR output onto a canonical invoice record\n\
                  and check it against business rules.\n\n\
                  Extractions are JSON documents with an OCR key/value `fields` map,\n\
                  an optional `raw_text`, and an optional `confidence` score."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process one extraction file or a directory of them.
    Process(ProcessArgs),

    /// List the canonical fields and their recognized aliases.
    Fields,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to a JSON extraction file, or a directory of .json files.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,

    /// JSON file with alias overrides per canonical field.
    #[arg(long = "alias-table", value_name = "FILE")]
    pub alias_table: Option<PathBuf>,

    /// Write the full validation report to this JSON file.
    #[arg(long = "report-json", value_name = "FILE")]
    pub report_json: Option<PathBuf>,

    /// Skip the wall-clock date plausibility warnings.
    ///
    /// By default the current date is injected as the reference for the
    /// invoice-age and future-date advisories. With this flag validation is
    /// a pure function of the extraction alone.
    #[arg(long = "no-reference-date")]
    pub no_reference_date: bool,

    /// Stop at the first extraction that fails to load or process.
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
