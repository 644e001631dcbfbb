use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use comfy_table::{Cell, Table};
use tracing::{error, info, info_span};

use labref_core::resolve_reference;
use labref_report::{ExportFormat, HistoryStore, export_report, report_file_name};
use labref_standards::ReferenceTable;
use labref_cli::session::evaluate_submission;
use labref_cli::submission::load_submission;

use crate::cli::{ExportFormatArg, RangesArgs, ReportArgs};
use crate::summary::{apply_table_style, header_cell};
use crate::types::{SessionResult, SubmissionReport};

pub fn run_panels(table: &ReferenceTable) -> Result<()> {
    let mut output = Table::new();
    output.set_header(vec![header_cell("Panel"), header_cell("Analytes")]);
    apply_table_style(&mut output);
    for panel in table.panels() {
        output.add_row(vec![
            Cell::new(&panel.name),
            Cell::new(panel.analytes.join(", ")),
        ]);
    }
    if let Some(summary) = table.summary() {
        println!("{summary}");
    }
    println!("{output}");
    Ok(())
}

pub fn run_ranges(table: &ReferenceTable, args: &RangesArgs) -> Result<()> {
    let panel = table
        .panel(&args.panel)
        .ok_or_else(|| anyhow!("unknown panel: {}", args.panel))?;
    let mut output = Table::new();
    output.set_header(vec![
        header_cell("Analyte"),
        header_cell("Unit"),
        header_cell("Reference range"),
        header_cell("Bucket"),
    ]);
    apply_table_style(&mut output);
    for analyte in &panel.analytes {
        let resolved = resolve_reference(table, analyte, args.age, args.sex)
            .with_context(|| format!("resolve {analyte}"))?;
        output.add_row(vec![
            Cell::new(&resolved.analyte),
            Cell::new(&resolved.unit),
            Cell::new(resolved.range_display()),
            Cell::new(resolved.bucket.map_or("-", |bucket| bucket.as_str())),
        ]);
    }
    println!("Panel: {} (age {}, {})", panel.name, args.age, args.sex);
    println!("{output}");
    Ok(())
}

pub fn run_report(table: &ReferenceTable, args: &ReportArgs) -> Result<SessionResult> {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("reports"));
    let formats = export_formats(args.format);
    let mut history = HistoryStore::new();
    let mut reports = Vec::new();
    let mut errors = Vec::new();
    let mut claimed: BTreeSet<PathBuf> = BTreeSet::new();

    let start = Instant::now();
    for path in &args.submissions {
        let span = info_span!("submission", file = %path.display());
        let _guard = span.enter();

        let outcome = load_submission(path)
            .and_then(|submission| evaluate_submission(table, &submission, Utc::now()));
        let document = match outcome {
            Ok(document) => document,
            Err(err) => {
                error!(error = %format!("{err:#}"), "submission failed");
                errors.push(format!("{}: {err:#}", path.display()));
                continue;
            }
        };

        let targets: Vec<PathBuf> = formats
            .iter()
            .map(|format| output_dir.join(report_file_name(&document, *format)))
            .collect();
        let written = if args.dry_run {
            Vec::new()
        } else if let Some(taken) = targets.iter().find(|target| claimed.contains(*target)) {
            error!(path = %taken.display(), "report file already written in this run");
            errors.push(format!(
                "{}: {} was already written by an earlier submission in this run",
                path.display(),
                taken.display()
            ));
            Vec::new()
        } else {
            claimed.extend(targets.iter().cloned());
            match export_report(&document, &output_dir, &formats) {
                Ok(written) => written,
                Err(err) => {
                    error!(error = %format!("{err:#}"), "export failed");
                    errors.push(format!("{}: {err:#}", path.display()));
                    Vec::new()
                }
            }
        };

        history.save(document.clone(), Utc::now());
        reports.push(SubmissionReport {
            source: path.clone(),
            document,
            written,
        });
    }
    info!(
        submissions = args.submissions.len(),
        saved = history.len(),
        failed = errors.len(),
        duration_ms = start.elapsed().as_millis(),
        "session complete"
    );

    let has_errors = !errors.is_empty();
    Ok(SessionResult {
        reports,
        history,
        errors,
        has_errors,
    })
}

fn export_formats(format: ExportFormatArg) -> Vec<ExportFormat> {
    match format {
        ExportFormatArg::Json => vec![ExportFormat::Json],
        ExportFormatArg::Csv => vec![ExportFormat::Csv],
        ExportFormatArg::Both => vec![ExportFormat::Json, ExportFormat::Csv],
    }
}
