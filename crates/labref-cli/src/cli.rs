//! CLI argument definitions for the laboratory report tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use labref_model::Sex;

#[derive(Parser)]
#[command(
    name = "labref",
    version,
    about = "Laboratory results - reference ranges and report export",
    long_about = "Evaluate laboratory results against reference ranges.\n\n\
                  Resolves each analyte's normal range from the patient's age and sex,\n\
                  flags out-of-range values and exports JSON/CSV reports."
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

    /// Allow patient names and document numbers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Reference table file (default: $LABREF_STANDARDS_FILE or the bundled table).
    #[arg(long = "standards", value_name = "FILE", global = true)]
    pub standards: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the panels and their analytes.
    Panels,

    /// Show the reference ranges that apply to a patient.
    Ranges(RangesArgs),

    /// Evaluate submission files and export reports.
    Report(ReportArgs),
}

#[derive(Parser)]
pub struct RangesArgs {
    /// Panel name (e.g. Hemograma, Glucosa).
    #[arg(long = "panel")]
    pub panel: String,

    /// Patient age in years; fractions for infants (1.5 = 18 months).
    #[arg(long = "age", allow_negative_numbers = true)]
    pub age: f64,

    /// Patient sex (Masculino or Femenino).
    #[arg(long = "sex")]
    pub sex: Sex,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Submission files (TOML) with patient data and entered results.
    #[arg(value_name = "SUBMISSION", required = true)]
    pub submissions: Vec<PathBuf>,

    /// Output directory for exported reports (default: ./reports).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Export format to generate.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: ExportFormatArg,

    /// Evaluate and print without writing export files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Json,
    Csv,
    Both,
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
