//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use labeldoc_model::DEFAULT_CONTROL_NUMBER;

#[derive(Parser)]
#[command(
    name = "labeldoc",
    version,
    about = "Convert tab-delimited label master data to IDoc documents",
    long_about = "Convert a tab-delimited spreadsheet of product-label attributes into the\n\
                  fixed-column hierarchical IDoc document consumed by the label-printing\n\
                  system. Validates barcodes, revisions and release dates along the way."
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
    /// Convert a label sheet into an IDoc document.
    Convert(ConvertArgs),

    /// List every recognized spreadsheet column.
    Columns,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the tab-delimited label sheet.
    #[arg(value_name = "SHEET")]
    pub input: PathBuf,

    /// Output document path (default: <SHEET stem>_idoc.txt).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Alternate graphics directory stamped into graphic references.
    #[arg(long = "graphics-dir", value_name = "DIR")]
    pub graphics_dir: Option<String>,

    /// Include the non-standard columns (GTIN, IPN, DESCRIPTION, OLDLABEL,
    /// OLDTEMPLATE, PREVLABEL, PREVTEMPLATE) in the document.
    #[arg(long = "non-standard-fields")]
    pub non_standard_fields: bool,

    /// Also write a <SHEET stem>_labeldata.txt extract of the sorted records.
    #[arg(long = "label-data")]
    pub label_data: bool,

    /// Document control number stamped on every line.
    #[arg(long = "control-number", value_name = "NUM", default_value = DEFAULT_CONTROL_NUMBER)]
    pub control_number: String,

    /// Replace the built-in lookup table from a two-column tab-delimited file.
    #[arg(long = "lookup", value_name = "PATH")]
    pub lookup: Option<PathBuf>,
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
