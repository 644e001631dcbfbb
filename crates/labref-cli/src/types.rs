use std::path::PathBuf;

use labref_report::{HistoryStore, ReportDocument};

#[derive(Debug)]
pub struct SessionResult {
    pub reports: Vec<SubmissionReport>,
    pub history: HistoryStore,
    pub errors: Vec<String>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct SubmissionReport {
    pub source: PathBuf,
    pub document: ReportDocument,
    pub written: Vec<PathBuf>,
}
