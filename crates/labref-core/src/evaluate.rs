//! Panel evaluation: one resolved and classified row per analyte.

use std::collections::BTreeMap;

use labref_model::{PatientInfo, ResultEntry, ResultStatus, StatusCounts};
use labref_standards::ReferenceTable;
use serde::Serialize;
use tracing::{debug, info_span, warn};

use crate::classify::classify;
use crate::error::{ResolveError, Result};
use crate::resolve::resolve_reference;

/// Rows for one panel, in panel order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelResults {
    pub panel: String,
    pub entries: Vec<ResultEntry>,
}

impl PanelResults {
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::from_entries(&self.entries)
    }

    /// Rows with a value outside the reference range.
    pub fn out_of_range(&self) -> impl Iterator<Item = &ResultEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.status == ResultStatus::OutOfRange)
    }
}

/// Resolve and classify every analyte of `panel` for `patient`.
///
/// `values` maps analyte names or aliases (case-insensitive) to the text
/// entered for them. Analytes without a value produce an
/// [`ResultStatus::Unparseable`] row.
///
/// # Errors
///
/// - [`ResolveError::UnknownPanel`] when the table has no such panel.
/// - [`ResolveError::UnknownAnalyte`] when `values` names an analyte the
///   table does not know.
/// - [`ResolveError::ConflictingValue`] when two spellings of one analyte
///   carry different values.
/// - [`ResolveError::InvalidAge`] when the patient's age is negative.
pub fn evaluate_panel(
    table: &ReferenceTable,
    panel: &str,
    patient: &PatientInfo,
    values: &BTreeMap<String, String>,
) -> Result<PanelResults> {
    let definition = table
        .panel(panel)
        .ok_or_else(|| ResolveError::UnknownPanel {
            name: panel.to_string(),
        })?;
    let span = info_span!("panel", panel = %definition.name);
    let _guard = span.enter();

    let mut entered: BTreeMap<&str, &str> = BTreeMap::new();
    for (name, value) in values {
        let canonical = table
            .canonical_name(name)
            .ok_or_else(|| ResolveError::UnknownAnalyte { name: name.clone() })?;
        if !definition.analytes.iter().any(|member| member == canonical) {
            warn!(analyte = %canonical, "value entered for analyte outside the panel; ignored");
            continue;
        }
        if let Some(previous) = entered.insert(canonical, value.as_str())
            && previous.trim() != value.trim()
        {
            warn!(analyte = %canonical, "analyte entered twice with different values");
            return Err(ResolveError::ConflictingValue {
                analyte: canonical.to_string(),
                first: previous.to_string(),
                second: value.clone(),
            });
        }
    }

    let mut entries = Vec::with_capacity(definition.analytes.len());
    for analyte in &definition.analytes {
        let reference = resolve_reference(table, analyte, patient.age, patient.sex)?;
        let value = entered.get(analyte.as_str()).copied().unwrap_or("");
        let status = classify(value, &reference.range);
        debug!(
            analyte = %reference.analyte,
            range = %reference.range,
            status = ?status,
            "classified result"
        );
        entries.push(ResultEntry::new(&reference, value, status));
    }

    let results = PanelResults {
        panel: definition.name.clone(),
        entries,
    };
    let counts = results.counts();
    if counts.out_of_range > 0 {
        warn!(
            out_of_range = counts.out_of_range,
            "panel has results outside the reference range"
        );
    }
    Ok(results)
}
