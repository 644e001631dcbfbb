//! JSON and CSV report exports.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use labref_model::ResultStatus;

use crate::document::ReportDocument;

/// Export file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    analyte: &'a str,
    result: &'a str,
    unit: &'a str,
    reference_range: &'a str,
    status: &'a str,
}

/// Write the document as pretty-printed JSON.
pub fn write_json<W: Write>(document: &ReportDocument, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, document).context("serialize report json")
}

/// Write the result rows as CSV, one line per analyte.
pub fn write_csv<W: Write>(document: &ReportDocument, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for entry in &document.entries {
        csv_writer
            .serialize(CsvRow {
                analyte: &entry.analyte,
                result: &entry.entered_value,
                unit: &entry.unit,
                reference_range: &entry.range_display,
                status: status_code(entry.status),
            })
            .with_context(|| format!("write csv row for {}", entry.analyte))?;
    }
    csv_writer.flush().context("flush csv")?;
    Ok(())
}

fn status_code(status: ResultStatus) -> &'static str {
    match status {
        ResultStatus::InRange => "in_range",
        ResultStatus::OutOfRange => "out_of_range",
        ResultStatus::Unparseable => "unparseable",
    }
}

/// File name for a report: `resultado_<name>_<panel>.<ext>`.
///
/// Whitespace becomes `_`; characters other than letters, digits, `-`
/// and `_` are dropped. Empty parts are skipped, down to `resultado.<ext>`.
pub fn report_file_name(document: &ReportDocument, format: ExportFormat) -> String {
    let mut stem = String::from("resultado");
    for part in [&document.patient.name, &document.panel] {
        let part = file_stem_part(part);
        if !part.is_empty() {
            stem.push('_');
            stem.push_str(&part);
        }
    }
    format!("{stem}.{}", format.extension())
}

fn file_stem_part(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Write `document` into `output_dir` in each requested format.
///
/// Returns the written paths in the order of `formats`.
pub fn export_report(
    document: &ReportDocument,
    output_dir: &Path,
    formats: &[ExportFormat],
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;
    let mut written = Vec::with_capacity(formats.len());
    for format in formats {
        let path = output_dir.join(report_file_name(document, *format));
        let file = fs::File::create(&path)
            .with_context(|| format!("create {}", path.display()))?;
        match format {
            ExportFormat::Json => write_json(document, file)?,
            ExportFormat::Csv => write_csv(document, file)?,
        }
        info!(path = %path.display(), format = format.extension(), "report written");
        written.push(path);
    }
    Ok(written)
}
