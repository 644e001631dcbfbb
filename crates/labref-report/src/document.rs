use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use labref_core::PanelResults;
use labref_model::{PatientInfo, ResultEntry, StatusCounts};

/// Everything a renderer needs to print or export one panel report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub patient: PatientInfo,
    pub panel: String,
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<ResultEntry>,
    pub counts: StatusCounts,
}

impl ReportDocument {
    pub fn new(patient: PatientInfo, results: PanelResults, generated_at: DateTime<Utc>) -> Self {
        let counts = results.counts();
        Self {
            patient,
            panel: results.panel,
            generated_at,
            entries: results.entries,
            counts,
        }
    }

    pub fn has_out_of_range(&self) -> bool {
        self.counts.out_of_range > 0
    }
}
