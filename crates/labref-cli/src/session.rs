//! Per-submission evaluation shared by the `report` command and tests.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use labref_core::evaluate_panel;
use labref_report::ReportDocument;
use labref_standards::ReferenceTable;
use tracing::info;

use crate::logging::redact_value;
use crate::submission::Submission;

/// Validate the patient, evaluate the panel, and wrap the rows in a document.
pub fn evaluate_submission(
    table: &ReferenceTable,
    submission: &Submission,
    generated_at: DateTime<Utc>,
) -> Result<ReportDocument> {
    let patient = &submission.patient;
    patient.validate().context("invalid patient data")?;
    let values = submission.entered_values();
    let results = evaluate_panel(table, &submission.panel, patient, &values)
        .with_context(|| format!("evaluate panel {}", submission.panel))?;
    let document = ReportDocument::new(patient.clone(), results, generated_at);
    info!(
        patient = %redact_value(&patient.name),
        dni = %redact_value(&patient.dni),
        panel = %document.panel,
        in_range = document.counts.in_range,
        out_of_range = document.counts.out_of_range,
        unparseable = document.counts.unparseable,
        "submission evaluated"
    );
    Ok(document)
}
