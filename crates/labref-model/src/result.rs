use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::DemographicBucket;
use crate::range::ReferenceRange;

/// Unit and range selected for one analyte and one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedReference {
    /// Canonical analyte name.
    pub analyte: String,
    pub unit: String,
    pub range: ReferenceRange,
    /// Bucket used for demographic-dependent analytes.
    pub bucket: Option<DemographicBucket>,
}

impl ResolvedReference {
    pub fn range_display(&self) -> String {
        self.range.to_string()
    }
}

/// Verdict for a single entered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    InRange,
    OutOfRange,
    /// Empty or non-numeric entry; no comparison was made.
    Unparseable,
}

impl ResultStatus {
    /// Visual marker shown next to the value.
    pub fn indicator(&self) -> &'static str {
        match self {
            ResultStatus::InRange => "✅",
            ResultStatus::OutOfRange => "🔶",
            ResultStatus::Unparseable => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResultStatus::InRange => "normal",
            ResultStatus::OutOfRange => "fuera de rango",
            ResultStatus::Unparseable => "sin resultado",
        }
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One report row: an analyte, what was entered, and the verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub analyte: String,
    /// Text exactly as entered.
    pub entered_value: String,
    pub unit: String,
    pub range: ReferenceRange,
    pub range_display: String,
    pub status: ResultStatus,
}

impl ResultEntry {
    pub fn new(reference: &ResolvedReference, entered_value: &str, status: ResultStatus) -> Self {
        Self {
            analyte: reference.analyte.clone(),
            entered_value: entered_value.to_string(),
            unit: reference.unit.clone(),
            range: reference.range,
            range_display: reference.range_display(),
            status,
        }
    }
}

/// Status tallies for a set of rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub in_range: usize,
    pub out_of_range: usize,
    pub unparseable: usize,
}

impl StatusCounts {
    pub fn from_entries(entries: &[ResultEntry]) -> Self {
        let mut counts = Self::default();
        for entry in entries {
            match entry.status {
                ResultStatus::InRange => counts.in_range += 1,
                ResultStatus::OutOfRange => counts.out_of_range += 1,
                ResultStatus::Unparseable => counts.unparseable += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.in_range + self.out_of_range + self.unparseable
    }
}
